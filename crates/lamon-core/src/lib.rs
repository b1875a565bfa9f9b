//! Shared types and utilities for the Lamon Latin tagger.
//!
//! - [`feature`] -- packed morphological feature bundle and its tag dialects
//! - [`lemma`] -- lemma candidates, token spans and tagged tokens
//! - [`character`] -- whitespace/punctuation classification and UTF-8 stepping
//! - [`enums`] -- tag output styles

pub mod character;
pub mod enums;
pub mod feature;
pub mod lemma;

pub use enums::{TagStyle, UnknownTagStyle};
pub use feature::{Feature, FeatureError};
pub use lemma::{LemmaInfo, Tag, TaggedToken, TokenInfo};
