// Lemma dictionary and per-token candidate generation
//
// The dictionary maps normalized surface forms to the (lemma, feature)
// analyses attested for them, and keeps the lemma table with an optional
// part-of-speech letter per lemma. It is built once (from text tables or
// a persisted binary) and is read-only afterwards.

mod loader;
pub mod numeral;
mod persist;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use hashbrown::HashMap;
use lamon_core::{Feature, FeatureError, LemmaInfo, TokenInfo};

use crate::latin::constants::{ENCLITICS, ENCLITIC_MIN_LEN, NUMERAL_LEMMA};
use crate::normalize;
use crate::tokenizer;

pub use numeral::is_numeral;

/// Error type for dictionary loading and persistence.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("duplicate vocabulary entry '{lemma}' on line {line}")]
    DuplicateVocabEntry { line: usize, lemma: String },
    #[error("invalid feature tag on inflection line {line}: {source}")]
    Feature {
        line: usize,
        #[source]
        source: FeatureError,
    },
    #[error("dictionary data ends unexpectedly")]
    Truncated,
    #[error("invalid dictionary data: {0}")]
    InvalidFormat(String),
}

/// Lemma table plus the form-to-candidates index.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    lemmas: Vec<String>,
    lemma_ids: HashMap<String, u32>,
    /// Part-of-speech byte per lemma id, 0 when unknown.
    lemma_pos: Vec<u8>,
    forms: HashMap<String, Vec<LemmaInfo>>,
    numeral_lemma: Option<u32>,
}

impl Dictionary {
    /// Reads a vocabulary file and an inflection table.
    pub fn load_text(
        vocab: impl AsRef<Path>,
        inflections: impl AsRef<Path>,
    ) -> Result<Self, DictionaryError> {
        let vocab = BufReader::new(File::open(vocab)?);
        let inflections = BufReader::new(File::open(inflections)?);
        Self::from_text(vocab, inflections)
    }

    /// Opens a dictionary persisted with [`Dictionary::save`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let dict = Self::read_from(BufReader::new(File::open(path)?))?;
        tracing::info!(
            path = %path.display(),
            lemmas = dict.len(),
            forms = dict.form_count(),
            "loaded dictionary"
        );
        Ok(dict)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Rebuilds the reverse lemma index and the numeral lemma after the
    /// lemma table changed wholesale.
    fn reindex(&mut self) {
        self.lemma_ids.clear();
        for (i, lemma) in self.lemmas.iter().enumerate() {
            self.lemma_ids.entry(lemma.clone()).or_insert(i as u32);
        }
        self.numeral_lemma = self.lemma_ids.get(NUMERAL_LEMMA).copied();
    }

    /// Number of lemmas.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    /// Number of distinct normalized forms.
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    pub fn lemma(&self, id: u32) -> Option<&str> {
        self.lemmas.get(id as usize).map(String::as_str)
    }

    pub fn lemma_id(&self, lemma: &str) -> Option<u32> {
        self.lemma_ids.get(lemma).copied()
    }

    /// Part-of-speech letter of a lemma, if recorded.
    pub fn pos(&self, id: u32) -> Option<char> {
        match self.lemma_pos.get(id as usize) {
            Some(0) | None => None,
            Some(&b) => Some(b as char),
        }
    }

    /// Id of the `[NUM]` lemma, when the dictionary has one.
    pub fn numeral_lemma(&self) -> Option<u32> {
        self.numeral_lemma
    }

    /// Analyses attested for an already normalized form.
    pub fn lookup(&self, form: &str) -> Option<&[LemmaInfo]> {
        self.forms.get(form).map(Vec::as_slice)
    }

    /// Candidate analyses for one raw token.
    ///
    /// Lookup order: the normalized form, plus the numeral lemma when the
    /// form is a numeral. Failing both, a form longer than three bytes is
    /// retried once with its first matching enclitic removed; if an
    /// enclitic matched, the search stops there. Otherwise a form that is
    /// itself a lemma yields that lemma with an empty feature.
    pub fn candidates(&self, token: &str) -> Vec<LemmaInfo> {
        let form = normalize::normalize(token);
        let mut found = self.lookup(&form).map(<[_]>::to_vec).unwrap_or_default();

        if let Some(num) = self.numeral_lemma {
            if is_numeral(&form) {
                found.push(LemmaInfo::new(num, Feature::EMPTY));
            }
        }
        if !found.is_empty() {
            return found;
        }

        if form.len() > ENCLITIC_MIN_LEN {
            if let Some(stem) = ENCLITICS.iter().find_map(|e| form.strip_suffix(*e)) {
                return self.lookup(stem).map(<[_]>::to_vec).unwrap_or_default();
            }
        }

        match self.lemma_id(&form) {
            Some(id) => vec![LemmaInfo::new(id, Feature::EMPTY)],
            None => Vec::new(),
        }
    }

    /// Tokenizes `text` and attaches candidates to every token.
    pub fn analyze(&self, text: &str) -> Vec<TokenInfo> {
        tokenizer::tokens(text)
            .map(|r| TokenInfo {
                candidates: self.candidates(&text[r.clone()]),
                start: r.start,
                end: r.end,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(vocab: &str, infl: &str) -> Dictionary {
        Dictionary::from_text(vocab.as_bytes(), infl.as_bytes()).unwrap()
    }

    fn sample() -> Dictionary {
        dict(
            "rosa\namo\n[NUM]\nsum\n",
            "rosae\trosa\tfsg\tn\n\
             rosae\trosa\tfsd\tn\n\
             rosae\trosa\tfpo\tn\n\
             amat\tamo\tIRMA3s\tv\n\
             est\tsum\tIRMA3s\tv\n\
             rosa\trosa\tfso\tn\n",
        )
    }

    #[test]
    fn exact_form_lookup() {
        let d = sample();
        let cands = d.candidates("rosae");
        assert_eq!(cands.len(), 3);
        assert_eq!(cands[0].lemma_id, d.lemma_id("rosa").unwrap());
        assert_eq!(cands[0].feature, Feature::parse("fsg").unwrap());
    }

    #[test]
    fn lookup_is_normalized() {
        let d = sample();
        assert_eq!(d.candidates("Rŏsæ").len(), 3);
        assert_eq!(d.candidates("AMAT").len(), 1);
    }

    #[test]
    fn enclitic_is_stripped() {
        let d = sample();
        let cands = d.candidates("rosaeque");
        assert_eq!(cands, d.candidates("rosae"));
        assert_eq!(d.candidates("amatne"), d.candidates("amat"));
        // "estue" -> "est"
        assert_eq!(d.candidates("estue"), d.candidates("est"));
    }

    #[test]
    fn short_forms_keep_enclitic_letters() {
        let d = dict("que\n", "");
        // too short to strip; falls back to the lemma itself
        let cands = d.candidates("que");
        assert_eq!(cands, vec![LemmaInfo::new(0, Feature::EMPTY)]);
    }

    #[test]
    fn matched_enclitic_skips_lemma_fallback() {
        // "amone" is a lemma, but its "ne" ending is taken as an enclitic first
        let d = dict("amone\n", "");
        assert!(d.candidates("amone").is_empty());
    }

    #[test]
    fn lemma_used_as_its_own_form() {
        let d = sample();
        let cands = d.candidates("amo");
        assert_eq!(cands, vec![LemmaInfo::new(d.lemma_id("amo").unwrap(), Feature::EMPTY)]);
    }

    #[test]
    fn numerals_get_the_numeral_lemma() {
        let d = sample();
        let num = d.numeral_lemma().unwrap();
        assert_eq!(d.candidates("1984"), vec![LemmaInfo::new(num, Feature::EMPTY)]);
        assert_eq!(d.candidates("MCMXCIV"), vec![LemmaInfo::new(num, Feature::EMPTY)]);
    }

    #[test]
    fn numeral_adds_to_dictionary_hits() {
        let d = dict("[NUM]\nmille\n", "mille\tmille\tnsa\tu\n");
        // "mille" is not a roman numeral, "m" is not in the index
        assert_eq!(d.candidates("mille").len(), 1);
        let d = dict("[NUM]\nego\n", "i\tego\tsn\tp\n");
        let cands = d.candidates("i");
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[1].lemma_id, d.numeral_lemma().unwrap());
    }

    #[test]
    fn no_numeral_lemma_no_numeral_candidates() {
        let d = dict("rosa\n", "");
        assert!(d.candidates("42").is_empty());
    }

    #[test]
    fn unknown_token_has_no_candidates() {
        let d = sample();
        assert!(d.candidates("puella").is_empty());
        assert!(d.candidates(".").is_empty());
    }

    #[test]
    fn analyze_sentence() {
        let d = dict("rosa\namo\n", "rosae\trosa\tsg\t\n");
        let toks = d.analyze("rosae amat.");
        assert_eq!(toks.len(), 3);
        assert_eq!((toks[0].start, toks[0].end), (0, 5));
        assert_eq!(
            toks[0].candidates,
            vec![LemmaInfo::new(0, Feature::parse("sg").unwrap())]
        );
        assert!(toks[1].candidates.is_empty());
        assert_eq!(toks[1].text("rosae amat."), Some("amat"));
        assert!(toks[2].candidates.is_empty());
        assert_eq!(toks[2].text("rosae amat."), Some("."));
    }

    #[test]
    fn part_of_speech() {
        let d = sample();
        assert_eq!(d.pos(d.lemma_id("rosa").unwrap()), Some('n'));
        assert_eq!(d.pos(d.lemma_id("[NUM]").unwrap()), None);
        assert_eq!(d.pos(999), None);
    }
}
