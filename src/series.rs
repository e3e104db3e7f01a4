//! Sample points and the derived memory series.

use crate::model::ModelShape;

/// Shortest context length sampled.
pub const MIN_SEQ_LEN: f64 = 1024.0;
/// Longest context length sampled (1M tokens).
pub const MAX_SEQ_LEN: f64 = 1024.0 * 1024.0;
/// Number of samples along the curve.
pub const SAMPLE_COUNT: usize = 500;

/// `count` values spaced evenly on a log scale from `start` to `stop`.
///
/// Both endpoints are returned exactly. `count == 1` yields `[start]`.
#[must_use]
pub fn geomspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let (log_start, log_stop) = (start.ln(), stop.ln());
            let step = (log_stop - log_start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count)
                .map(|i| (log_start + step * i as f64).exp())
                .collect();
            values[0] = start;
            values[count - 1] = stop;
            values
        }
    }
}

/// Memory footprint sampled over context length.
///
/// `kv_gb[i]` and `total_gb[i]` depend only on `seq_lens[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySeries {
    seq_lens: Vec<f64>,
    kv_gb: Vec<f64>,
    total_gb: Vec<f64>,
}

impl MemorySeries {
    /// Evaluate `model` over the given sequence lengths.
    #[must_use]
    pub fn compute(model: &ModelShape, seq_lens: Vec<f64>) -> Self {
        let kv_gb = model.kv_gb_series(&seq_lens);
        let total_gb = kv_gb.iter().map(|kv| kv + model.weights_gb_visual).collect();
        Self { seq_lens, kv_gb, total_gb }
    }

    /// The chart's default sampling: 500 points from 1k to 1M tokens.
    #[must_use]
    pub fn default_for(model: &ModelShape) -> Self {
        Self::compute(model, geomspace(MIN_SEQ_LEN, MAX_SEQ_LEN, SAMPLE_COUNT))
    }

    pub fn seq_lens(&self) -> &[f64] {
        &self.seq_lens
    }

    pub fn kv_gb(&self) -> &[f64] {
        &self.kv_gb
    }

    pub fn total_gb(&self) -> &[f64] {
        &self.total_gb
    }

    pub fn len(&self) -> usize {
        self.seq_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_lens.is_empty()
    }

    /// `(seq_len, total_gb)` pairs in sample order.
    pub fn total_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.seq_lens.iter().copied().zip(self.total_gb.iter().copied())
    }
}
