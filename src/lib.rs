//! kvchart: model weights plus KV cache memory against context length.
//!
//! Charts the memory an FP16 Qwen-4B needs from 1k to 1M tokens of context,
//! next to the capacities of common edge and datacenter devices.
//!
//! # Example
//!
//! ```
//! use kvchart::model::QWEN_4B_FP16;
//!
//! // 128k tokens of context on top of the 8 GB of weights
//! let total = QWEN_4B_FP16.total_gb(128.0 * 1024.0);
//! assert!((total - 19.25).abs() < 1e-9);
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod hardware;
pub mod model;
pub mod report;
pub mod series;

pub use error::{KvChartError, Result};
