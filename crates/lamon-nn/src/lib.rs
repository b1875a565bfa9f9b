//! Tensor store and recurrent scoring network for the Lamon tagger.
//!
//! # Architecture
//!
//! - [`format`] -- RFMF record header parsing and writing
//! - [`store`] -- Memory-mapped collection of named float tensors
//! - [`tensor`] -- Borrowed column-major matrix views
//! - [`layers`] -- Embedding, layer normalization, dense and LSTM layers
//! - [`cell`] -- One recurrent cell with its token and feature scorers
//! - [`model`] -- Forward/backward cell pair with shared embeddings
//! - [`decoder`] -- Beam search over a model and a caller-supplied selector

pub mod cell;
pub mod decoder;
pub mod format;
pub mod layers;
pub mod model;
pub mod store;
pub mod tensor;

pub use cell::{CellOutput, CellState, DecOutput, RnnCell};
pub use decoder::{Candidate, ScoredSequence};
pub use model::{ModelOptions, TaggerModel};
pub use store::{TensorStore, TensorView};
pub use tensor::Matrix;

/// Error type for tensor store loading and model construction.
#[derive(Debug, thiserror::Error)]
pub enum NnError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid record magic at offset {offset}")]
    InvalidMagic { offset: usize },
    #[error("truncated record at offset {offset}")]
    TruncatedRecord { offset: usize },
    #[error("invalid record at offset {offset}: {reason}")]
    InvalidRecord { offset: usize, reason: String },
    #[error("tensor '{0}' not found")]
    KeyNotFound(String),
    #[error("shape mismatch for '{name}': expected {expected}, got {actual}")]
    ShapeMismatch {
        name: String,
        expected: String,
        actual: String,
    },
}

impl NnError {
    pub(crate) fn shape(name: &str, expected: impl Into<String>, actual: &[u32]) -> Self {
        NnError::ShapeMismatch {
            name: name.to_string(),
            expected: expected.into(),
            actual: format!("{actual:?}"),
        }
    }
}
