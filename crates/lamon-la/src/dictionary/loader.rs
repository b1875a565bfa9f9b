// Dictionary construction from text tables
//
// vocabulary: one lemma per line
// inflections: form \t lemma \t feature-tag [\t part-of-speech]

use std::io::BufRead;

use hashbrown::HashMap;
use lamon_core::{Feature, LemmaInfo};

use super::{Dictionary, DictionaryError};
use crate::normalize;

impl Dictionary {
    /// Builds a dictionary from a vocabulary list and an inflection table.
    ///
    /// Vocabulary lines are trimmed at the end and blank lines are skipped;
    /// a repeated lemma is an error. Lemmas that appear only in the
    /// inflection table are appended to the lemma table. A lemma's part of
    /// speech is taken from the last inflection line naming it.
    pub fn from_text(vocab: impl BufRead, inflections: impl BufRead) -> Result<Self, DictionaryError> {
        let mut dict = Dictionary::default();

        for (i, line) in vocab.lines().enumerate() {
            let line = line?;
            let lemma = line.trim_end();
            if lemma.is_empty() {
                continue;
            }
            if dict.lemma_ids.contains_key(lemma) {
                return Err(DictionaryError::DuplicateVocabEntry {
                    line: i + 1,
                    lemma: lemma.to_string(),
                });
            }
            dict.push_lemma(lemma);
        }

        let mut pos_by_lemma: HashMap<u32, u8> = HashMap::new();
        for (i, line) in inflections.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let form = fields.next().unwrap_or_default();
            let lemma = fields.next().unwrap_or_default();
            let tag = fields.next().unwrap_or_default();
            let pos = fields.next().unwrap_or_default();

            let feature = Feature::parse(tag).map_err(|source| DictionaryError::Feature {
                line: i + 1,
                source,
            })?;
            let lemma_id = match dict.lemma_ids.get(lemma) {
                Some(&id) => id,
                None => dict.push_lemma(lemma),
            };
            pos_by_lemma.insert(lemma_id, pos.bytes().next().unwrap_or(0));

            let info = LemmaInfo::new(lemma_id, feature);
            let entry = dict.forms.entry(normalize::normalize(form)).or_default();
            if !entry.contains(&info) {
                entry.push(info);
            }
        }

        dict.lemma_pos = vec![0; dict.lemmas.len()];
        for (id, pos) in pos_by_lemma {
            dict.lemma_pos[id as usize] = pos;
        }
        dict.reindex();

        tracing::info!(
            lemmas = dict.lemmas.len(),
            forms = dict.forms.len(),
            numerals = dict.numeral_lemma.is_some(),
            "built dictionary from text tables"
        );
        Ok(dict)
    }

    fn push_lemma(&mut self, lemma: &str) -> u32 {
        let id = self.lemmas.len() as u32;
        self.lemmas.push(lemma.to_string());
        self.lemma_ids.insert(lemma.to_string(), id);
        id
    }
}
