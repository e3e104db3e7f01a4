//! Memory estimation for a fixed transformer shape.
//!
//! Model weights are a constant footprint; the KV cache grows linearly with
//! sequence length:
//!
//! ```text
//! bytes_per_token = 2 (K and V) × layers × (hidden_size / gqa) × bytes_per_param
//! kv_bytes        = bytes_per_token × seq_len
//! ```

/// Bytes in one GiB. All "GB" figures in this crate are binary gigabytes.
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Context length the chart highlights as the target capacity (128k tokens).
pub const DESIGN_LIMIT_TOKENS: f64 = 128.0 * 1024.0;

/// Architecture constants of the charted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelShape {
    /// Display name
    pub name: &'static str,
    /// Number of transformer layers
    pub layers: u32,
    /// Hidden dimension
    pub hidden_size: u32,
    /// Grouped-query attention divisor (query heads / KV heads)
    pub gqa_divisor: u32,
    /// Bytes per stored value (2 for FP16/BF16)
    pub bytes_per_param: u32,
    /// Total parameter count
    pub param_count: u64,
    /// Weight footprint drawn on the chart, in GB
    pub weights_gb_visual: f64,
}

/// Qwen-4B in FP16.
///
/// The drawn weight footprint is rounded up to 8 GB; the exact figure from
/// the parameter count is ~7.45 GB (see [`ModelShape::weights_gb_exact`]).
pub const QWEN_4B_FP16: ModelShape = ModelShape {
    name: "Qwen-4B",
    layers: 36,
    hidden_size: 2560,
    gqa_divisor: 4,
    bytes_per_param: 2,
    param_count: 4_000_000_000,
    weights_gb_visual: 8.0,
};

impl ModelShape {
    /// KV cache bytes stored per token across all layers.
    #[must_use]
    pub fn kv_bytes_per_token(&self) -> f64 {
        2.0 * f64::from(self.layers)
            * (f64::from(self.hidden_size) / f64::from(self.gqa_divisor))
            * f64::from(self.bytes_per_param)
    }

    /// KV cache size in GB for `seq_len` tokens.
    ///
    /// Pure arithmetic: negative or fractional lengths are not rejected.
    #[must_use]
    pub fn kv_gb(&self, seq_len: f64) -> f64 {
        self.kv_bytes_per_token() * seq_len / BYTES_PER_GB
    }

    /// Element-wise [`ModelShape::kv_gb`].
    #[must_use]
    pub fn kv_gb_series(&self, seq_lens: &[f64]) -> Vec<f64> {
        seq_lens.iter().map(|&len| self.kv_gb(len)).collect()
    }

    /// Weights plus KV cache, using the drawn weight footprint.
    #[must_use]
    pub fn total_gb(&self, seq_len: f64) -> f64 {
        self.weights_gb_visual + self.kv_gb(seq_len)
    }

    /// Weight footprint computed from the parameter count.
    #[must_use]
    pub fn weights_gb_exact(&self) -> f64 {
        self.param_count as f64 * f64::from(self.bytes_per_param) / BYTES_PER_GB
    }

    /// Largest whole token count whose total footprint fits in `capacity_gb`.
    ///
    /// Returns 0 when the weights alone do not fit.
    #[must_use]
    pub fn max_context_within(&self, capacity_gb: f64) -> u64 {
        let headroom = capacity_gb - self.weights_gb_visual;
        if headroom <= 0.0 {
            return 0;
        }
        (headroom * BYTES_PER_GB / self.kv_bytes_per_token()).floor() as u64
    }
}
