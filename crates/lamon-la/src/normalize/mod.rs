// Folding of accented letters and ligatures into plain ASCII
//
// `Normalizer::transform` walks the input bytes through a trie of UTF-8
// source sequences, replacing each longest match with its target. Unmatched
// bytes are copied. Every output byte passes through a caller-supplied
// function, which `normalize` uses to lowercase and merge j/i and v/u.

mod table;
mod trie;

use std::sync::LazyLock;

use hashbrown::HashMap;

pub use trie::ByteTrie;

/// Trie-backed folding normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    trie: ByteTrie,
    targets: Vec<String>,
}

static LATIN: LazyLock<Normalizer> = LazyLock::new(|| {
    let normalizer = Normalizer::from_pairs(table::FOLDING.iter().copied());
    tracing::debug!(
        nodes = normalizer.trie.node_count(),
        targets = normalizer.targets.len(),
        "built folding trie"
    );
    normalizer
});

/// The normalizer built from the built-in folding table.
pub fn latin() -> &'static Normalizer {
    &LATIN
}

/// Lowercases ASCII and folds `j` to `i` and `v` to `u`.
#[inline]
pub fn fold_byte(b: u8) -> u8 {
    match b.to_ascii_lowercase() {
        b'j' => b'i',
        b'v' => b'u',
        other => other,
    }
}

/// Canonical lookup key for `text` under the built-in table.
pub fn normalize(text: &str) -> String {
    latin().transform_str(text, fold_byte)
}

impl Normalizer {
    /// Builds a normalizer from `(source, target)` pairs. Identical targets
    /// share one entry.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (char, &'a str)>) -> Self {
        let mut trie = ByteTrie::new();
        let mut targets = Vec::new();
        let mut target_ids: HashMap<&'a str, u32> = HashMap::new();
        let mut utf8 = [0u8; 4];
        for (source, target) in pairs {
            let id = *target_ids.entry(target).or_insert_with(|| {
                targets.push(target.to_string());
                targets.len() as u32
            });
            trie.insert(source.encode_utf8(&mut utf8).as_bytes(), id);
        }
        Self { trie, targets }
    }

    /// Number of distinct targets.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Transforms raw bytes, applying `tx` to every emitted byte.
    pub fn transform(&self, input: &[u8], tx: impl Fn(u8) -> u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len());
        let mut node = ByteTrie::ROOT;
        // bytes consumed along the current match
        let mut pending: &[u8] = &[];
        let mut pending_start = 0;

        for (i, &byte) in input.iter().enumerate() {
            if let Some(next) = self.trie.next(node, byte) {
                if pending.is_empty() {
                    pending_start = i;
                }
                node = next;
                pending = &input[pending_start..=i];
                continue;
            }
            self.flush(node, pending, &mut out, &tx);
            match self.trie.next(ByteTrie::ROOT, byte) {
                Some(next) => {
                    node = next;
                    pending_start = i;
                    pending = &input[i..=i];
                }
                None => {
                    node = ByteTrie::ROOT;
                    pending = &[];
                    out.push(tx(byte));
                }
            }
        }
        self.flush(node, pending, &mut out, &tx);
        out
    }

    /// [`Normalizer::transform`] over a string. Invalid UTF-8 in the output
    /// (only possible with a table whose targets are not ASCII) is replaced.
    pub fn transform_str(&self, input: &str, tx: impl Fn(u8) -> u8) -> String {
        match String::from_utf8(self.transform(input.as_bytes(), tx)) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    fn flush(&self, node: u32, pending: &[u8], out: &mut Vec<u8>, tx: &impl Fn(u8) -> u8) {
        match self.trie.value(node) {
            Some(id) => {
                let target = &self.targets[id as usize - 1];
                out.extend(target.bytes().map(tx));
            }
            None => out.extend(pending.iter().copied().map(tx)),
        }
    }
}
