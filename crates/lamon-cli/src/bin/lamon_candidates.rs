// lamon-candidates: list dictionary analyses for every token.
//
// Tokenizes each input text and prints each token with all of its
// candidate lemmas and tags, without running the tagging model.
//
// Usage:
//   lamon-candidates [-d DATA_PATH] [--dict FILE] [--style STYLE] [--json] [TEXT...]
//
// Without TEXT arguments, reads texts from stdin (one per line).

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use lamon_core::TagStyle;

#[derive(Parser, Debug)]
#[command(name = "lamon-candidates", about = "List dictionary candidates per token")]
struct Args {
    /// Directory containing dict.bin.
    #[arg(short = 'd', long)]
    data_path: Option<PathBuf>,

    /// Dictionary file; overrides the data path search.
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Tag style: raw, vivens or perseus.
    #[arg(long, default_value = "perseus")]
    style: TagStyle,

    /// Print one JSON array per text.
    #[arg(long)]
    json: bool,

    /// Texts to analyze.
    texts: Vec<String>,
}

fn main() {
    let args = Args::parse();
    lamon_cli::init_tracing();

    let path = lamon_cli::resolve(args.dict.as_deref(), args.data_path.as_deref(), lamon_cli::DICT_FILE)
        .unwrap_or_else(|e| lamon_cli::fatal(&e));
    let dict = lamon_cli::load_dictionary(&path).unwrap_or_else(|e| lamon_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for text in lamon_cli::input_texts(args.texts) {
        let tokens = lamon_la::list_candidates(&dict, &text, args.style);
        let written = if args.json {
            serde_json::to_writer(&mut out, &tokens)
                .map_err(io::Error::from)
                .and_then(|()| writeln!(out))
        } else {
            tokens.iter().try_for_each(|tok| {
                let surface = lamon_cli::char_slice(&text, tok.start, tok.end);
                if tok.candidates.is_empty() {
                    return writeln!(out, "{surface}\t(unknown)");
                }
                let cands: Vec<String> = tok
                    .candidates
                    .iter()
                    .map(|c| format!("{} {}", c.lemma, c.tag))
                    .collect();
                writeln!(out, "{surface}\t{}", cands.join(" | "))
            })
            .and_then(|()| writeln!(out))
        };
        if let Err(e) = written {
            lamon_cli::fatal(&format!("failed to write output: {e}"));
        }
    }
    if let Err(e) = out.flush() {
        lamon_cli::fatal(&format!("failed to write output: {e}"));
    }
}
