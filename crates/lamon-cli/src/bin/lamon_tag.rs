// lamon-tag: tag Latin text with lemmas and morphological features.
//
// Each input text is tagged independently on a worker pool; results are
// printed in input order. Every ranked sequence is printed with its score,
// one token per line.
//
// Usage:
//   lamon-tag [-d DATA_PATH] [--dict FILE] [--model FILE] [--beam-size N]
//             [--style STYLE] [--no-bidirectional] [--workers N] [--json] [TEXT...]
//
// Without TEXT arguments, reads texts from stdin (one per line).

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use lamon_core::TagStyle;
use lamon_la::{BatchOptions, TagOptions, TaggedSequence, Tagger};
use lamon_nn::{ModelOptions, TensorStore};

#[derive(Parser, Debug)]
#[command(name = "lamon-tag", about = "Tag Latin text")]
struct Args {
    /// Directory containing dict.bin and tagger.bin.
    #[arg(short = 'd', long)]
    data_path: Option<PathBuf>,

    /// Dictionary file; overrides the data path search.
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Model file; overrides the data path search.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Number of sequences kept per step and printed per text.
    #[arg(short = 'b', long, default_value_t = 1)]
    beam_size: usize,

    /// Tag style: raw, vivens or perseus.
    #[arg(long, default_value = "perseus")]
    style: TagStyle,

    /// Skip rescoring with the backward model.
    #[arg(long)]
    no_bidirectional: bool,

    /// Worker threads; 0 uses one per core.
    #[arg(short = 'j', long, default_value_t = 0)]
    workers: usize,

    /// Vocabulary entries scored exactly per step.
    #[arg(long, default_value_t = ModelOptions::default().approx_size)]
    approx_size: usize,

    /// Print one JSON array of sequences per text.
    #[arg(long)]
    json: bool,

    /// Texts to tag.
    texts: Vec<String>,
}

fn write_plain(out: &mut impl Write, text: &str, sequences: &[TaggedSequence]) -> io::Result<()> {
    for (rank, seq) in sequences.iter().enumerate() {
        writeln!(out, "# {} score={:.4}", rank + 1, seq.score)?;
        for tok in &seq.tokens {
            let surface = lamon_cli::char_slice(text, tok.start, tok.end);
            writeln!(out, "{surface}\t{}\t{}", tok.lemma, tok.tag)?;
        }
    }
    writeln!(out)
}

fn main() {
    let args = Args::parse();
    lamon_cli::init_tracing();

    let dict_path = lamon_cli::resolve(args.dict.as_deref(), args.data_path.as_deref(), lamon_cli::DICT_FILE)
        .unwrap_or_else(|e| lamon_cli::fatal(&e));
    let model_path = lamon_cli::resolve(args.model.as_deref(), args.data_path.as_deref(), lamon_cli::MODEL_FILE)
        .unwrap_or_else(|e| lamon_cli::fatal(&e));

    let dict = lamon_cli::load_dictionary(&dict_path).unwrap_or_else(|e| lamon_cli::fatal(&e));
    let store = TensorStore::open(&model_path)
        .unwrap_or_else(|e| lamon_cli::fatal(&format!("failed to load model {}: {e}", model_path.display())));
    let options = ModelOptions {
        approx_size: args.approx_size,
        ..ModelOptions::default()
    };
    let tagger = Tagger::new(dict, &store, options)
        .unwrap_or_else(|e| lamon_cli::fatal(&format!("failed to create tagger: {e}")));

    let opts = TagOptions {
        style: args.style,
        beam_size: args.beam_size,
        bidirectional: !args.no_bidirectional,
    };
    let texts = lamon_cli::input_texts(args.texts);
    let results = tagger.tag_batch(&texts, &opts, &BatchOptions { num_workers: args.workers });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0usize;
    for (text, result) in texts.iter().zip(results) {
        let sequences = match result {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {text:?}: {e}");
                failed += 1;
                continue;
            }
        };
        let written = if args.json {
            serde_json::to_writer(&mut out, &sequences)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out))
        } else {
            write_plain(&mut out, text, &sequences)
        };
        if let Err(e) = written {
            lamon_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        lamon_cli::fatal(&format!("failed to write output: {e}"));
    }
    if failed > 0 {
        lamon_cli::fatal(&format!("{failed} of {} texts failed", texts.len()));
    }
}
