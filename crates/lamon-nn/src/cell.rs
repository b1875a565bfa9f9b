// Recurrent cell with token and per-feature-slot scorers

use hashbrown::HashMap;
use lamon_core::Feature;
use lamon_core::feature::FEATURE_SLOTS;

use crate::NnError;
use crate::layers::{Dense, Embedding, LayerNorm, LstmCell, log_softmax_in_place, log_sum_exp};
use crate::store::TensorStore;

/// One decoded step: a token id and the feature chosen for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DecOutput {
    pub token: usize,
    pub feature: Feature,
}

impl DecOutput {
    pub fn new(token: usize, feature: Feature) -> Self {
        Self { token, feature }
    }
}

/// Recurrent state of one beam path.
#[derive(Debug, Clone, PartialEq)]
pub struct CellState {
    /// Step input followed by the hidden state.
    input_h: Vec<f32>,
    c: Vec<f32>,
}

impl CellState {
    fn zeros(input_size: usize, hidden_size: usize) -> Self {
        Self {
            input_h: vec![0.0; input_size + hidden_size],
            c: vec![0.0; hidden_size],
        }
    }

    /// The slot the next step input is written into.
    pub fn input_mut(&mut self) -> &mut [f32] {
        let n = self.input_h.len() - self.c.len();
        &mut self.input_h[..n]
    }

    pub fn hidden(&self) -> &[f32] {
        &self.input_h[self.input_h.len() - self.c.len()..]
    }
}

/// An LSTM layer followed by layer normalization, a token projection scored
/// with a truncated softmax, and eight feature-slot projections.
#[derive(Debug)]
pub struct RnnCell<'m> {
    lstm: LstmCell<'m>,
    layer_norm: LayerNorm<'m>,
    token_proj: Dense<'m>,
    feature_proj: Vec<Dense<'m>>,
    /// Conditions feature scores on the candidate token when present.
    joint: Option<Dense<'m>>,
    approx_size: usize,
    unk_token: usize,
}

impl<'m> RnnCell<'m> {
    /// Loads the cell stored under `prefix` (`lm` or `lm_bw`).
    pub fn load(
        store: &'m TensorStore,
        prefix: &str,
        approx_size: usize,
        unk_token: usize,
    ) -> Result<Self, NnError> {
        let lstm = LstmCell::load(store, &format!("{prefix}/layer_0/rnn/lstm_cell"))?;
        let layer_norm = LayerNorm::load(store, &format!("{prefix}/LayerNorm"))?;
        let token_proj = Dense::load(store, &format!("{prefix}/output_token_proj"))?;
        let feature_proj = (0..FEATURE_SLOTS)
            .map(|i| Dense::load(store, &format!("{prefix}/output_feature_{i}_proj")))
            .collect::<Result<Vec<_>, _>>()?;
        let joint = match Dense::load(store, &format!("{prefix}/intermediate_feature_proj")) {
            Ok(dense) => Some(dense),
            Err(NnError::KeyNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let hidden = lstm.hidden_size();
        if layer_norm.dim() != hidden {
            return Err(NnError::shape(
                &format!("{prefix}/LayerNorm/beta:0"),
                format!("[{hidden}]"),
                &[layer_norm.dim() as u32],
            ));
        }
        if token_proj.input_size() != hidden {
            return Err(NnError::shape(
                &format!("{prefix}/output_token_proj/kernel:0"),
                format!("{hidden} rows"),
                &[token_proj.input_size() as u32, token_proj.output_size() as u32],
            ));
        }
        let head_input = joint.map_or(hidden, |j| j.output_size());
        for (i, proj) in feature_proj.iter().enumerate() {
            if proj.input_size() != head_input {
                return Err(NnError::shape(
                    &format!("{prefix}/output_feature_{i}_proj/kernel:0"),
                    format!("{head_input} rows"),
                    &[proj.input_size() as u32, proj.output_size() as u32],
                ));
            }
        }

        let vocab = token_proj.output_size();
        tracing::debug!(
            prefix,
            hidden,
            vocab,
            joint = joint.is_some(),
            "loaded recurrent cell"
        );
        Ok(Self {
            lstm,
            layer_norm,
            token_proj,
            feature_proj,
            joint,
            approx_size: approx_size.min(vocab),
            unk_token,
        })
    }

    pub fn input_size(&self) -> usize {
        self.lstm.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.lstm.hidden_size()
    }

    pub fn vocab_size(&self) -> usize {
        self.token_proj.output_size()
    }

    pub fn has_joint_layer(&self) -> bool {
        self.joint.is_some()
    }

    /// Width of the token embedding the joint layer expects, if present.
    pub fn joint_embedding_size(&self) -> Option<usize> {
        self.joint
            .map(|j| j.input_size().saturating_sub(self.hidden_size()))
    }

    pub fn initial_state(&self) -> CellState {
        CellState::zeros(self.input_size(), self.hidden_size())
    }

    /// Runs one step on `state`, whose input slot must already hold the
    /// step input, and returns the scorer for this step.
    ///
    /// `token_emb` supplies candidate token embeddings to the joint layer.
    pub fn apply<'a>(&'a self, state: &mut CellState, token_emb: &'a Embedding<'m>) -> CellOutput<'a> {
        let mut scratch = Vec::with_capacity(self.hidden_size() * 4);
        self.lstm.step(&mut state.input_h, &mut state.c, &mut scratch);

        let mut hidden = state.hidden().to_vec();
        self.layer_norm.apply(&mut hidden);

        self.token_proj
            .apply_range(&hidden, 0..self.approx_size, &mut scratch);
        let normalizer = log_sum_exp(&scratch);

        CellOutput {
            cell: self,
            token_emb,
            hidden,
            normalizer,
            feature_logits: HashMap::new(),
        }
    }
}

/// Scores for one step of one path.
///
/// Feature-slot log-probabilities are computed lazily and cached: once per
/// step without a joint layer, once per candidate token with one.
#[derive(Debug)]
pub struct CellOutput<'a> {
    cell: &'a RnnCell<'a>,
    token_emb: &'a Embedding<'a>,
    hidden: Vec<f32>,
    normalizer: f32,
    feature_logits: HashMap<Option<usize>, Vec<Vec<f32>>>,
}

impl CellOutput<'_> {
    pub fn hidden(&self) -> &[f32] {
        &self.hidden
    }

    /// Log-partition estimate over the first `approx_size` tokens.
    pub fn normalizer(&self) -> f32 {
        self.normalizer
    }

    /// Log-probability of `token`. Ids outside the vocabulary score as the
    /// unknown token; ids past the approximation window use a one-vs-rest
    /// estimate against the normalizer.
    pub fn token_logit(&self, token: usize) -> f32 {
        let cell = self.cell;
        let token = if token >= cell.vocab_size() {
            cell.unk_token
        } else {
            token
        };
        let logit = cell.token_proj.unit(&self.hidden, token);
        if token < cell.approx_size {
            logit - self.normalizer
        } else {
            -((self.normalizer - logit).exp() + 1.0).ln()
        }
    }

    /// Per-slot log-softmax vectors for `token`.
    pub fn feature_logits(&mut self, token: usize) -> &[Vec<f32>] {
        let cell = self.cell;
        let key = cell.joint.is_some().then_some(token);
        let hidden = &self.hidden;
        let token_emb = self.token_emb;
        self.feature_logits.entry(key).or_insert_with(|| {
            let mut joint_out = Vec::new();
            let head_input: &[f32] = match &cell.joint {
                Some(joint) => {
                    let emb = token_emb
                        .get(token)
                        .or_else(|| token_emb.get(cell.unk_token))
                        .unwrap_or_default();
                    joint.apply_concat(hidden, emb, &mut joint_out);
                    for v in &mut joint_out {
                        *v = v.tanh();
                    }
                    &joint_out
                }
                None => hidden,
            };
            cell.feature_proj
                .iter()
                .map(|proj| {
                    let mut logits = Vec::new();
                    proj.apply(head_input, &mut logits);
                    log_softmax_in_place(&mut logits);
                    logits
                })
                .collect()
        })
    }

    /// Total log-probability of one decoded step: the token score plus the
    /// score of each feature slot's value. A slot value outside the
    /// projection's range scores `-inf`.
    pub fn score(&mut self, output: &DecOutput) -> f32 {
        let token = self.token_logit(output.token);
        let slots = output.feature.slots();
        let features: f32 = self
            .feature_logits(output.token)
            .iter()
            .zip(slots)
            .map(|(logits, &v)| logits.get(v as usize).copied().unwrap_or(f32::NEG_INFINITY))
            .sum();
        token + features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::StoreBuilder;
    use crate::store::TensorStore;

    const HIDDEN: usize = 3;
    const EMB: usize = 2;
    const VOCAB: usize = 5;
    const VALUES: usize = 4;

    fn ramp(n: usize, seed: f32) -> Vec<f32> {
        (0..n)
            .map(|i| ((i as f32 + 1.0) * 0.37 + seed).sin() * 0.5)
            .collect()
    }

    fn cell_store(joint: bool) -> TensorStore {
        let mut b = StoreBuilder::new();
        let p = "lm";
        b.add(
            &format!("{p}/layer_0/rnn/lstm_cell/kernel:0"),
            &[(EMB + HIDDEN) as u32, (4 * HIDDEN) as u32],
            &ramp((EMB + HIDDEN) * 4 * HIDDEN, 0.1),
        )
        .add(
            &format!("{p}/layer_0/rnn/lstm_cell/bias:0"),
            &[(4 * HIDDEN) as u32],
            &ramp(4 * HIDDEN, 0.2),
        )
        .add(&format!("{p}/LayerNorm/beta:0"), &[HIDDEN as u32], &[0.0; HIDDEN])
        .add(&format!("{p}/LayerNorm/gamma:0"), &[HIDDEN as u32], &[1.0; HIDDEN])
        .add(
            &format!("{p}/output_token_proj/kernel:0"),
            &[HIDDEN as u32, VOCAB as u32],
            &ramp(HIDDEN * VOCAB, 0.3),
        )
        .add(
            &format!("{p}/output_token_proj/bias:0"),
            &[VOCAB as u32],
            &ramp(VOCAB, 0.4),
        );
        let head_input = if joint { 4 } else { HIDDEN };
        for i in 0..FEATURE_SLOTS {
            b.add(
                &format!("{p}/output_feature_{i}_proj/kernel:0"),
                &[head_input as u32, VALUES as u32],
                &ramp(head_input * VALUES, i as f32),
            )
            .add(
                &format!("{p}/output_feature_{i}_proj/bias:0"),
                &[VALUES as u32],
                &ramp(VALUES, i as f32 + 0.5),
            );
        }
        if joint {
            b.add(
                &format!("{p}/intermediate_feature_proj/kernel:0"),
                &[(HIDDEN + EMB) as u32, 4],
                &ramp((HIDDEN + EMB) * 4, 0.9),
            )
            .add(&format!("{p}/intermediate_feature_proj/bias:0"), &[4], &[0.0; 4]);
        }
        b.add("emb/token_embedding:0", &[EMB as u32, VOCAB as u32], &ramp(EMB * VOCAB, 1.1));
        TensorStore::from_bytes(b.finish()).unwrap()
    }

    fn run_step<'a>(cell: &'a RnnCell<'a>, emb: &'a Embedding<'a>) -> CellOutput<'a> {
        let mut state = cell.initial_state();
        state.input_mut().copy_from_slice(&[0.3, -0.2]);
        cell.apply(&mut state, emb)
    }

    #[test]
    fn load_without_joint_layer() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        assert!(!cell.has_joint_layer());
        assert_eq!(cell.input_size(), EMB);
        assert_eq!(cell.hidden_size(), HIDDEN);
        assert_eq!(cell.vocab_size(), VOCAB);
    }

    #[test]
    fn load_with_joint_layer() {
        let store = cell_store(true);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        assert!(cell.has_joint_layer());
    }

    #[test]
    fn missing_cell_is_key_error() {
        let store = cell_store(false);
        assert!(matches!(
            RnnCell::load(&store, "lm_bw", 2048, 1),
            Err(NnError::KeyNotFound(_))
        ));
    }

    #[test]
    fn full_window_token_scores_are_normalized() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let out = run_step(&cell, &emb);
        let total: f32 = (0..VOCAB).map(|t| out.token_logit(t).exp()).sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn tokens_past_window_use_one_vs_rest() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let out = run_step(&cell, &emb);

        let logit = cell.token_proj.unit(out.hidden(), 4);
        let expected = -((out.normalizer() - logit).exp() + 1.0).ln();
        assert!((out.token_logit(4) - expected).abs() < 1e-6);
        assert!(out.token_logit(4) < 0.0);
    }

    #[test]
    fn out_of_vocabulary_scores_as_unknown() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let out = run_step(&cell, &emb);
        assert_eq!(out.token_logit(VOCAB + 10), out.token_logit(1));
    }

    #[test]
    fn score_adds_feature_slots() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let mut out = run_step(&cell, &emb);

        let feature = Feature::from_slots([1, 0, 2, 0, 3, 0, 0, 1]);
        let logits = out.feature_logits(0).to_vec();
        let expected = out.token_logit(0)
            + logits
                .iter()
                .zip(feature.slots())
                .map(|(l, &v)| l[v as usize])
                .sum::<f32>();
        let got = out.score(&DecOutput::new(0, feature));
        assert!((got - expected).abs() < 1e-6);

        for slot in &logits {
            let total: f32 = slot.iter().map(|x| x.exp()).sum();
            assert!((total - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn out_of_range_feature_value_scores_negative_infinity() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let mut out = run_step(&cell, &emb);
        let feature = Feature::cases(VALUES as u8);
        assert_eq!(out.score(&DecOutput::new(0, feature)), f32::NEG_INFINITY);
    }

    #[test]
    fn joint_layer_conditions_features_on_token() {
        let store = cell_store(true);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let mut out = run_step(&cell, &emb);
        let a = out.feature_logits(0).to_vec();
        let b = out.feature_logits(3).to_vec();
        assert_ne!(a, b);
        // cached per token
        assert_eq!(out.feature_logits(0), a.as_slice());
    }

    #[test]
    fn state_carries_hidden_between_steps() {
        let store = cell_store(false);
        let cell = RnnCell::load(&store, "lm", 2048, 1).unwrap();
        let emb = Embedding::load(&store, "emb/token_embedding:0").unwrap();
        let mut state = cell.initial_state();
        assert!(state.hidden().iter().all(|&v| v == 0.0));
        state.input_mut().copy_from_slice(&[0.3, -0.2]);
        let _ = cell.apply(&mut state, &emb);
        assert!(state.hidden().iter().any(|&v| v != 0.0));
    }
}
