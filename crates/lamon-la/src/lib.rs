//! Latin language module for the Lamon tagger.
//!
//! - [`normalize`] -- diacritic and ligature folding through a byte trie
//! - [`tokenizer`] -- whitespace and punctuation segmentation
//! - [`dictionary`] -- lemma dictionary, numeral grammar and candidate lookup
//! - [`latin`] -- enclitics, sentinel lemmas and unknown-token guesses
//! - [`tagger`] -- dictionary plus model: tagging, candidate listing, batches

pub mod dictionary;
pub mod latin;
pub mod normalize;
pub mod tagger;
pub mod tokenizer;

pub use dictionary::{Dictionary, DictionaryError, is_numeral};
pub use tagger::{
    BatchOptions, LemmaCandidate, TagOptions, TaggedSequence, Tagger, TaggerError, TokenCandidates,
    list_candidates,
};
