// Tagging model: shared embeddings plus a forward and a backward cell

use lamon_core::feature::FEATURE_SLOTS;
use serde::{Deserialize, Serialize};

use crate::NnError;
use crate::cell::{CellState, DecOutput, RnnCell};
use crate::layers::{Embedding, LayerNorm};
use crate::store::TensorStore;

/// Construction options for a [`TaggerModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    /// Number of leading vocabulary entries scored exactly each step.
    pub approx_size: usize,
    pub unk_token: usize,
    pub bos_token: usize,
    pub eos_token: usize,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            approx_size: 2048,
            unk_token: 1,
            bos_token: 2,
            eos_token: 3,
        }
    }
}

/// Weights of a bidirectional tagging model, borrowed from a [`TensorStore`].
#[derive(Debug)]
pub struct TaggerModel<'m> {
    pub(crate) token_emb: Embedding<'m>,
    feature_emb: Vec<Embedding<'m>>,
    emb_norm: LayerNorm<'m>,
    pub(crate) forward: RnnCell<'m>,
    pub(crate) backward: RnnCell<'m>,
    pub(crate) options: ModelOptions,
}

impl<'m> TaggerModel<'m> {
    pub fn load(store: &'m TensorStore, options: ModelOptions) -> Result<Self, NnError> {
        let token_emb = Embedding::load(store, "emb/token_embedding:0")?;
        let feature_table = store.get("emb/feat_embedding:0")?;
        let feature_emb = (0..FEATURE_SLOTS)
            .map(|i| feature_table.matrix_at(i).map(Embedding::from_matrix))
            .collect::<Result<Vec<_>, _>>()?;
        let emb_norm = LayerNorm::load(store, "emb/LayerNorm")?;
        let forward = RnnCell::load(store, "lm", options.approx_size, options.unk_token)?;
        let backward = RnnCell::load(store, "lm_bw", options.approx_size, options.unk_token)?;

        let dim = token_emb.dim();
        if feature_emb[0].dim() != dim {
            return Err(NnError::shape(
                "emb/feat_embedding:0",
                format!("{dim} rows"),
                feature_table.shape(),
            ));
        }
        if emb_norm.dim() != dim {
            return Err(NnError::shape(
                "emb/LayerNorm/beta:0",
                format!("[{dim}]"),
                &[emb_norm.dim() as u32],
            ));
        }
        for (prefix, cell) in [("lm", &forward), ("lm_bw", &backward)] {
            if cell.input_size() != dim {
                return Err(NnError::shape(
                    &format!("{prefix}/layer_0/rnn/lstm_cell/kernel:0"),
                    format!("{} input rows", dim),
                    &[cell.input_size() as u32, cell.hidden_size() as u32],
                ));
            }
            if let Some(joint) = cell.joint_embedding_size().filter(|&n| n != dim) {
                return Err(NnError::shape(
                    &format!("{prefix}/intermediate_feature_proj/kernel:0"),
                    format!("{} + {dim} rows", cell.hidden_size()),
                    &[(cell.hidden_size() + joint) as u32],
                ));
            }
        }
        let vocab = token_emb.vocab_size();
        for token in [options.unk_token, options.bos_token, options.eos_token] {
            if token >= vocab {
                return Err(NnError::shape(
                    "emb/token_embedding:0",
                    format!("vocabulary containing special token {token}"),
                    &[dim as u32, vocab as u32],
                ));
            }
        }

        tracing::info!(
            vocab,
            embedding = dim,
            hidden = forward.hidden_size(),
            joint = forward.has_joint_layer(),
            "loaded tagger model"
        );
        Ok(Self {
            token_emb,
            feature_emb,
            emb_norm,
            forward,
            backward,
            options,
        })
    }

    pub fn options(&self) -> &ModelOptions {
        &self.options
    }

    pub fn vocab_size(&self) -> usize {
        self.token_emb.vocab_size()
    }

    pub fn unk_token(&self) -> usize {
        self.options.unk_token
    }

    pub fn forward_cell(&self) -> &RnnCell<'m> {
        &self.forward
    }

    pub fn backward_cell(&self) -> &RnnCell<'m> {
        &self.backward
    }

    /// Writes the normalized step input for the given special token.
    pub(crate) fn embed_token(&self, state: &mut CellState, token: usize) {
        let input = state.input_mut();
        input.copy_from_slice(self.token_column(token));
        self.emb_norm.apply(input);
    }

    /// Writes the normalized step input for a decoded step: the token
    /// embedding plus one embedding per non-zero feature slot.
    pub(crate) fn embed_output(&self, state: &mut CellState, output: &DecOutput) {
        let input = state.input_mut();
        input.copy_from_slice(self.token_column(output.token));
        for (table, &value) in self.feature_emb.iter().zip(output.feature.slots()) {
            if value == 0 {
                continue;
            }
            if let Some(col) = table.get(value as usize - 1) {
                for (x, e) in input.iter_mut().zip(col) {
                    *x += e;
                }
            }
        }
        self.emb_norm.apply(input);
    }

    fn token_column(&self, token: usize) -> &'m [f32] {
        self.token_emb
            .get(token)
            .or_else(|| self.token_emb.get(self.options.unk_token))
            .unwrap_or_default()
    }
}
