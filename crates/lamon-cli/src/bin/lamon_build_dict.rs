// lamon-build-dict: compile dictionary text tables into a binary dictionary.
//
// Reads a vocabulary file (one lemma per line) and an inflection table
// (form, lemma, feature tag and optional part of speech, tab separated)
// and writes the persisted dictionary loaded by the other tools.
//
// Usage:
//   lamon-build-dict --vocab lemmas.txt --inflections infl.txt [-o dict.bin]

use std::path::PathBuf;

use clap::Parser;
use lamon_la::Dictionary;

#[derive(Parser, Debug)]
#[command(name = "lamon-build-dict", about = "Compile a Latin lemma dictionary")]
struct Args {
    /// Vocabulary file, one lemma per line.
    #[arg(long)]
    vocab: PathBuf,

    /// Inflection table: form, lemma, tag [, part of speech], tab separated.
    #[arg(long)]
    inflections: PathBuf,

    /// Output file.
    #[arg(short, long, default_value = lamon_cli::DICT_FILE)]
    output: PathBuf,
}

fn main() {
    let args = Args::parse();
    lamon_cli::init_tracing();

    let dict = Dictionary::load_text(&args.vocab, &args.inflections)
        .unwrap_or_else(|e| lamon_cli::fatal(&format!("failed to build dictionary: {e}")));
    dict.save(&args.output)
        .unwrap_or_else(|e| lamon_cli::fatal(&format!("failed to write {}: {e}", args.output.display())));

    eprintln!(
        "wrote {} lemmas, {} forms to {}",
        dict.len(),
        dict.form_count(),
        args.output.display()
    );
}
