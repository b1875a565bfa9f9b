// Network layers over borrowed weights
//
// All layers borrow their parameters from a `TensorStore` and keep no
// mutable state. Scratch space is passed in by the caller.

use crate::NnError;
use crate::store::TensorStore;
use crate::tensor::Matrix;

const LAYER_NORM_EPSILON: f32 = 1e-12;

#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// `log(sum(exp(x)))`, computed around the maximum. `-inf` for an empty slice.
pub fn log_sum_exp(xs: &[f32]) -> f32 {
    let max = xs.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !max.is_finite() {
        return max;
    }
    max + xs.iter().map(|&x| (x - max).exp()).sum::<f32>().ln()
}

pub fn log_softmax_in_place(xs: &mut [f32]) {
    let z = log_sum_exp(xs);
    for x in xs {
        *x -= z;
    }
}

fn vector<'m>(store: &'m TensorStore, name: &str) -> Result<&'m [f32], NnError> {
    store.get(name)?.vector()
}

fn matrix<'m>(store: &'m TensorStore, name: &str) -> Result<Matrix<'m>, NnError> {
    store.get(name)?.matrix()
}

// ---------------------------------------------------------------------------
// Embedding
// ---------------------------------------------------------------------------

/// Embedding table with one column per id.
#[derive(Debug, Clone, Copy)]
pub struct Embedding<'m> {
    table: Matrix<'m>,
}

impl<'m> Embedding<'m> {
    pub fn load(store: &'m TensorStore, name: &str) -> Result<Self, NnError> {
        Ok(Self {
            table: matrix(store, name)?,
        })
    }

    pub fn from_matrix(table: Matrix<'m>) -> Self {
        Self { table }
    }

    pub fn dim(&self) -> usize {
        self.table.rows()
    }

    pub fn vocab_size(&self) -> usize {
        self.table.cols()
    }

    pub fn get(&self, id: usize) -> Option<&'m [f32]> {
        self.table.get_col(id)
    }
}

// ---------------------------------------------------------------------------
// LayerNorm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct LayerNorm<'m> {
    beta: &'m [f32],
    gamma: &'m [f32],
}

impl<'m> LayerNorm<'m> {
    /// Loads `{prefix}/beta:0` and `{prefix}/gamma:0`.
    pub fn load(store: &'m TensorStore, prefix: &str) -> Result<Self, NnError> {
        let beta = vector(store, &format!("{prefix}/beta:0"))?;
        let gamma_name = format!("{prefix}/gamma:0");
        let gamma = vector(store, &gamma_name)?;
        if gamma.len() != beta.len() {
            return Err(NnError::shape(
                &gamma_name,
                format!("[{}]", beta.len()),
                &[gamma.len() as u32],
            ));
        }
        Ok(Self { beta, gamma })
    }

    pub fn dim(&self) -> usize {
        self.beta.len()
    }

    /// Normalizes `x` to zero mean and unit variance, then scales and shifts.
    pub fn apply(&self, x: &mut [f32]) {
        debug_assert_eq!(x.len(), self.dim());
        let n = x.len() as f32;
        let mean = x.iter().sum::<f32>() / n;
        let var = x.iter().map(|v| (v - mean) * (v - mean)).sum::<f32>() / n;
        let std = (var + LAYER_NORM_EPSILON).sqrt();
        for ((v, g), b) in x.iter_mut().zip(self.gamma).zip(self.beta) {
            *v = (*v - mean) / std * g + b;
        }
    }
}

// ---------------------------------------------------------------------------
// Dense
// ---------------------------------------------------------------------------

/// Affine projection `y = Kᵀx + b`, with the kernel stored `input x output`.
#[derive(Debug, Clone, Copy)]
pub struct Dense<'m> {
    kernel: Matrix<'m>,
    bias: &'m [f32],
}

impl<'m> Dense<'m> {
    /// Loads `{prefix}/kernel:0` and `{prefix}/bias:0`.
    pub fn load(store: &'m TensorStore, prefix: &str) -> Result<Self, NnError> {
        let kernel_name = format!("{prefix}/kernel:0");
        let kernel = matrix(store, &kernel_name)?;
        let bias = vector(store, &format!("{prefix}/bias:0"))?;
        if kernel.cols() != bias.len() {
            return Err(NnError::shape(
                &kernel_name,
                format!("{} columns", bias.len()),
                &[kernel.rows() as u32, kernel.cols() as u32],
            ));
        }
        Ok(Self { kernel, bias })
    }

    pub fn input_size(&self) -> usize {
        self.kernel.rows()
    }

    pub fn output_size(&self) -> usize {
        self.kernel.cols()
    }

    /// Output unit `j` alone.
    #[inline]
    pub fn unit(&self, x: &[f32], j: usize) -> f32 {
        dot(self.kernel.col(j), x) + self.bias[j]
    }

    pub fn apply(&self, x: &[f32], out: &mut Vec<f32>) {
        self.apply_range(x, 0..self.output_size(), out);
    }

    /// Output units in `cols` only.
    pub fn apply_range(&self, x: &[f32], cols: std::ops::Range<usize>, out: &mut Vec<f32>) {
        out.clear();
        out.extend(cols.map(|j| self.unit(x, j)));
    }

    /// Applies the layer to the concatenation `a ⧺ b` without building it.
    pub fn apply_concat(&self, a: &[f32], b: &[f32], out: &mut Vec<f32>) {
        debug_assert_eq!(a.len() + b.len(), self.input_size());
        out.clear();
        out.extend((0..self.output_size()).map(|j| {
            let (ka, kb) = self.kernel.col(j).split_at(a.len());
            dot(ka, a) + dot(kb, b) + self.bias[j]
        }));
    }
}

// ---------------------------------------------------------------------------
// LSTM
// ---------------------------------------------------------------------------

/// LSTM cell with a single fused gate kernel over `input ⧺ h`.
///
/// Gate blocks are ordered input, candidate, forget, output. The forget
/// gate carries a fixed +1 bias.
#[derive(Debug, Clone, Copy)]
pub struct LstmCell<'m> {
    gates: Dense<'m>,
}

impl<'m> LstmCell<'m> {
    pub fn load(store: &'m TensorStore, prefix: &str) -> Result<Self, NnError> {
        let gates = Dense::load(store, prefix)?;
        let cols = gates.output_size();
        if cols % 4 != 0 || gates.input_size() <= cols / 4 {
            return Err(NnError::shape(
                &format!("{prefix}/kernel:0"),
                "(input + hidden) x (4 * hidden)",
                &[gates.input_size() as u32, cols as u32],
            ));
        }
        Ok(Self { gates })
    }

    pub fn hidden_size(&self) -> usize {
        self.gates.output_size() / 4
    }

    pub fn input_size(&self) -> usize {
        self.gates.input_size() - self.hidden_size()
    }

    /// Advances one step. `input_h` holds the step input followed by the
    /// previous hidden state; the new hidden state is written back into its
    /// tail and `c` is updated in place.
    pub fn step(&self, input_h: &mut [f32], c: &mut [f32], gates: &mut Vec<f32>) {
        let h = self.hidden_size();
        debug_assert_eq!(input_h.len(), self.gates.input_size());
        debug_assert_eq!(c.len(), h);

        self.gates.apply(input_h, gates);
        let (i_gate, rest) = gates.split_at(h);
        let (j_gate, rest) = rest.split_at(h);
        let (f_gate, o_gate) = rest.split_at(h);

        let hidden = &mut input_h[self.input_size()..];
        for k in 0..h {
            c[k] = c[k] * sigmoid(f_gate[k] + 1.0) + sigmoid(i_gate[k]) * j_gate[k].tanh();
            hidden[k] = c[k].tanh() * sigmoid(o_gate[k]);
        }
    }
}
