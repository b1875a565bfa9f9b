// lamon-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use lamon_la::Dictionary;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a data directory.
pub const DATA_PATH_ENV: &str = "LAMON_DATA_PATH";

/// Persisted dictionary file name.
pub const DICT_FILE: &str = "dict.bin";

/// Tensor store file name.
pub const MODEL_FILE: &str = "tagger.bin";

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `lamon=info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lamon=info"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Directories searched for data files, in order:
///
/// 1. `data_path` argument (if provided)
/// 2. `LAMON_DATA_PATH` environment variable
/// 3. `~/.lamon`
/// 4. Current working directory
pub fn search_paths(data_path: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = data_path {
        paths.push(p.to_path_buf());
    }
    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Some(home) = home_dir() {
        paths.push(home.join(".lamon"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }
    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// First `name` found in `paths`.
pub fn find_in(paths: &[PathBuf], name: &str) -> Result<PathBuf, String> {
    paths
        .iter()
        .map(|dir| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| {
            format!(
                "could not find {} in any of the search paths:\n{}",
                name,
                paths
                    .iter()
                    .map(|p| format!("  - {}", p.display()))
                    .collect::<Vec<_>>()
                    .join("\n")
            )
        })
}

/// Resolves a data file: an explicit file wins, otherwise `name` is
/// searched for in [`search_paths`].
pub fn resolve(explicit: Option<&Path>, data_path: Option<&Path>, name: &str) -> Result<PathBuf, String> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => find_in(&search_paths(data_path), name),
    }
}

pub fn load_dictionary(path: &Path) -> Result<Dictionary, String> {
    Dictionary::open(path).map_err(|e| format!("failed to load dictionary {}: {e}", path.display()))
}

/// Texts from the command line, or else non-empty stdin lines.
pub fn input_texts(args: Vec<String>) -> Vec<String> {
    if !args.is_empty() {
        return args;
    }
    let mut texts = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) if l.trim().is_empty() => {}
            Ok(l) => texts.push(l),
            Err(e) => {
                tracing::warn!(error = %e, "stopped reading stdin");
                break;
            }
        }
    }
    texts
}

/// The code points `start..end` of `text`.
pub fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
