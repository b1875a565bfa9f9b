// Beam search over a tagging model
//
// The caller drives candidate generation through a selector that sees the
// step index and the step's scorer and returns the continuations to keep.

use crate::cell::{CellOutput, CellState, DecOutput};
use crate::model::TaggerModel;

/// A scored continuation returned by a selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub score: f32,
    pub output: DecOutput,
}

impl Candidate {
    pub fn new(score: f32, output: DecOutput) -> Self {
        Self { score, output }
    }
}

/// A completed path: total score and one decoded output per step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSequence {
    pub score: f32,
    pub decoded: Vec<DecOutput>,
}

#[derive(Clone)]
struct BeamPath {
    score: f32,
    decoded: Vec<DecOutput>,
    state: CellState,
}

/// Stable sort by score, best first.
fn sort_best_first<T>(items: &mut [T], score: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}

impl TaggerModel<'_> {
    /// Decodes `length` steps keeping at most `beam_size` paths.
    ///
    /// At step `t` the selector receives the forward cell's output for one
    /// live path and returns that path's continuations. It must return at
    /// least one candidate. Paths are ranked with a stable sort, so ties keep
    /// path-then-candidate order.
    ///
    /// With `bidirectional`, each surviving path is then rescored by the
    /// backward cell reading its own decoded sequence right to left, and the
    /// paths are re-ranked on the combined score.
    pub fn decode<F>(
        &self,
        length: usize,
        beam_size: usize,
        mut selector: F,
        bidirectional: bool,
    ) -> Vec<ScoredSequence>
    where
        F: FnMut(usize, &mut CellOutput<'_>) -> Vec<Candidate>,
    {
        let beam_size = beam_size.max(1);
        let mut paths = vec![BeamPath {
            score: 0.0,
            decoded: Vec::with_capacity(length),
            state: self.forward.initial_state(),
        }];

        for t in 0..length {
            let mut next = Vec::with_capacity(paths.len() * beam_size);
            for mut path in paths {
                match path.decoded.last() {
                    None => self.embed_token(&mut path.state, self.options.bos_token),
                    Some(prev) => {
                        let prev = *prev;
                        self.embed_output(&mut path.state, &prev)
                    }
                }
                let candidates = {
                    let mut out = self.forward.apply(&mut path.state, &self.token_emb);
                    selector(t, &mut out)
                };
                debug_assert!(!candidates.is_empty(), "selector returned no candidates at step {t}");

                let Some((last, rest)) = candidates.split_last() else {
                    continue;
                };
                for cand in rest {
                    let mut branch = path.clone();
                    branch.score += cand.score;
                    branch.decoded.push(cand.output);
                    next.push(branch);
                }
                path.score += last.score;
                path.decoded.push(last.output);
                next.push(path);
            }
            sort_best_first(&mut next, |p| p.score);
            next.truncate(beam_size);
            paths = next;
        }

        if bidirectional {
            for path in &mut paths {
                path.score += self.backward_score(&path.decoded);
            }
            sort_best_first(&mut paths, |p| p.score);
        }

        paths
            .into_iter()
            .map(|p| ScoredSequence {
                score: p.score,
                decoded: p.decoded,
            })
            .collect()
    }

    /// Log-probability the backward cell assigns to `decoded`, read right
    /// to left starting from the end-of-sequence token.
    pub fn backward_score(&self, decoded: &[DecOutput]) -> f32 {
        let mut state = self.backward.initial_state();
        let mut total = 0.0;
        for (t, target) in decoded.iter().rev().enumerate() {
            if t == 0 {
                self.embed_token(&mut state, self.options.eos_token);
            } else {
                self.embed_output(&mut state, &decoded[decoded.len() - t]);
            }
            let mut out = self.backward.apply(&mut state, &self.token_emb);
            total += out.score(target);
        }
        total
    }
}
