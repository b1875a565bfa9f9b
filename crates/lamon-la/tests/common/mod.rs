// Shared fixtures: a small Latin dictionary and a deterministic model
// whose vocabulary is that dictionary's lemma table.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lamon_la::Dictionary;
use lamon_nn::TensorStore;
use lamon_nn::format::StoreBuilder;

pub const EMB: usize = 6;
pub const HIDDEN: usize = 5;
pub const VALUES: usize = 8;
pub const SLOTS: usize = 8;
pub const JOINT: usize = 4;

pub const VOCAB: &str = "\
[PAD]
[UNK]
[BOS]
[EOS]
rosa
amo
sum
[NUM]
puella
";

pub const INFLECTIONS: &str = "\
rosa\trosa\tfso\tn
rosa\trosa\tfsb\tn
rosa\trosa\tfsv\tn
rosae\trosa\tfsg\tn
rosae\trosa\tfsd\tn
rosae\trosa\tfpo\tn
rosae\trosa\tfpv\tn
rosam\trosa\tfsa\tn
amat\tamo\tIRMA3s\tv
amant\tamo\tIRMA3p\tv
est\tsum\tIRMA3s\tv
sunt\tsum\tIRMA3p\tv
puella\tpuella\tfso\tn
puellae\tpuella\tfsg\tn
puellae\tpuella\tfpo\tn
";

/// Lemmas the model knows; `puella` is outside its vocabulary.
pub const MODEL_VOCAB: usize = 8;

pub fn dictionary() -> Dictionary {
    Dictionary::from_text(VOCAB.as_bytes(), INFLECTIONS.as_bytes()).unwrap()
}

fn weights(n: usize, seed: f32) -> Vec<f32> {
    (0..n)
        .map(|i| ((i as f32 * 2.3 + seed) * 0.53).sin() * 0.9)
        .collect()
}

fn add_cell(b: &mut StoreBuilder, p: &str, seed: f32, joint: bool) {
    b.add(
        &format!("{p}/layer_0/rnn/lstm_cell/kernel:0"),
        &[(EMB + HIDDEN) as u32, (4 * HIDDEN) as u32],
        &weights((EMB + HIDDEN) * 4 * HIDDEN, seed),
    )
    .add(
        &format!("{p}/layer_0/rnn/lstm_cell/bias:0"),
        &[(4 * HIDDEN) as u32],
        &weights(4 * HIDDEN, seed + 1.0),
    )
    .add(&format!("{p}/LayerNorm/beta:0"), &[HIDDEN as u32], &weights(HIDDEN, seed + 2.0))
    .add(&format!("{p}/LayerNorm/gamma:0"), &[HIDDEN as u32], &[1.0; HIDDEN])
    .add(
        &format!("{p}/output_token_proj/kernel:0"),
        &[HIDDEN as u32, MODEL_VOCAB as u32],
        &weights(HIDDEN * MODEL_VOCAB, seed + 3.0),
    )
    .add(
        &format!("{p}/output_token_proj/bias:0"),
        &[MODEL_VOCAB as u32],
        &weights(MODEL_VOCAB, seed + 4.0),
    );
    let head_input = if joint {
        b.add(
            &format!("{p}/intermediate_feature_proj/kernel:0"),
            &[(HIDDEN + EMB) as u32, JOINT as u32],
            &weights((HIDDEN + EMB) * JOINT, seed + 5.0),
        )
        .add(
            &format!("{p}/intermediate_feature_proj/bias:0"),
            &[JOINT as u32],
            &weights(JOINT, seed + 6.0),
        );
        JOINT
    } else {
        HIDDEN
    };
    for i in 0..SLOTS {
        b.add(
            &format!("{p}/output_feature_{i}_proj/kernel:0"),
            &[head_input as u32, VALUES as u32],
            &weights(head_input * VALUES, seed + 7.0 + i as f32),
        )
        .add(
            &format!("{p}/output_feature_{i}_proj/bias:0"),
            &[VALUES as u32],
            &weights(VALUES, seed + 20.0 + i as f32),
        );
    }
}

/// RFMF bytes of the fixture model, optionally with the joint feature layer.
pub fn model_bytes(joint: bool) -> Vec<u8> {
    let mut b = StoreBuilder::new();
    b.add(
        "emb/token_embedding:0",
        &[EMB as u32, MODEL_VOCAB as u32],
        &weights(EMB * MODEL_VOCAB, 0.25),
    )
    .add(
        "emb/feat_embedding:0",
        &[EMB as u32, (VALUES - 1) as u32, SLOTS as u32],
        &weights(EMB * (VALUES - 1) * SLOTS, 0.75),
    )
    .add("emb/LayerNorm/beta:0", &[EMB as u32], &[0.0; EMB])
    .add("emb/LayerNorm/gamma:0", &[EMB as u32], &[1.0; EMB]);
    add_cell(&mut b, "lm", 10.0, joint);
    add_cell(&mut b, "lm_bw", 40.0, joint);
    b.finish()
}

pub fn store(joint: bool) -> TensorStore {
    TensorStore::from_bytes(model_bytes(joint)).unwrap()
}

/// Writes the fixture model and persisted dictionary under `dir`.
pub fn write_data(dir: &Path) -> (PathBuf, PathBuf) {
    let model = dir.join("tagger.bin");
    std::fs::write(&model, model_bytes(false)).unwrap();
    let dict = dir.join("dict.bin");
    dictionary().save(&dict).unwrap();
    (dict, model)
}
