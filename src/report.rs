//! Tabular memory figures at the chart's tick positions.

use serde::{Deserialize, Serialize};

use crate::chart::{token_label, X_TICK_COUNT};
use crate::error::{KvChartError, Result};
use crate::hardware::{HardwareRef, HardwareTier};
use crate::model::{ModelShape, DESIGN_LIMIT_TOKENS};
use crate::series::MIN_SEQ_LEN;

/// Memory at one context length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub context: String,
    pub tokens: u64,
    pub kv_gb: f64,
    pub total_gb: f64,
}

/// How much context a device can hold next to the weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareFit {
    pub device: String,
    pub memory_gb: f64,
    pub tier: HardwareTier,
    pub max_context_tokens: u64,
    pub fits_design_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryTable {
    pub model: String,
    pub weights_gb_visual: f64,
    pub weights_gb_exact: f64,
    pub kv_bytes_per_token: f64,
    pub rows: Vec<TableRow>,
    pub hardware: Vec<HardwareFit>,
}

impl MemoryTable {
    #[must_use]
    pub fn build(model: &ModelShape, hardware: &[HardwareRef]) -> Self {
        let rows = (0..X_TICK_COUNT)
            .map(|i| {
                let tokens = MIN_SEQ_LEN * f64::from(1u32 << i);
                TableRow {
                    context: token_label(tokens),
                    tokens: tokens as u64,
                    kv_gb: model.kv_gb(tokens),
                    total_gb: model.total_gb(tokens),
                }
            })
            .collect();

        let hardware = hardware
            .iter()
            .map(|hw| {
                let max_context_tokens = model.max_context_within(hw.memory_gb);
                HardwareFit {
                    device: hw.label.to_string(),
                    memory_gb: hw.memory_gb,
                    tier: hw.tier(),
                    max_context_tokens,
                    fits_design_limit: max_context_tokens as f64 >= DESIGN_LIMIT_TOKENS,
                }
            })
            .collect();

        Self {
            model: model.name.to_string(),
            weights_gb_visual: model.weights_gb_visual,
            weights_gb_exact: model.weights_gb_exact(),
            kv_bytes_per_token: model.kv_bytes_per_token(),
            rows,
            hardware,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KvChartError::Serialization { message: format!("JSON: {e}") })
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| KvChartError::Serialization { message: format!("YAML: {e}") })
    }

    /// Plain-text rendering for the terminal.
    #[must_use]
    pub fn to_text(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = writeln!(out, "Model: {} (FP16)", self.model);
        let _ = writeln!(
            out,
            "Weights: {:.2} GB (charted as {:.1} GB)",
            self.weights_gb_exact, self.weights_gb_visual
        );
        let _ = writeln!(out, "KV cache: {:.0} bytes/token", self.kv_bytes_per_token);
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>8}  {:>10}  {:>10}  {:>10}", "Context", "Tokens", "KV (GB)", "Total (GB)");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:>8}  {:>10}  {:>10.2}  {:>10.2}",
                row.context, row.tokens, row.kv_gb, row.total_gb
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<36}  {:>6}  {:>12}  {:>9}", "Device", "GB", "Max context", "128k fits");
        for fit in &self.hardware {
            // weights alone fill the device
            let max_context = match fit.max_context_tokens {
                0 => "-".to_string(),
                tokens => token_label(tokens as f64),
            };
            let _ = writeln!(
                out,
                "{:<36}  {:>6.0}  {:>12}  {:>9}",
                fit.device,
                fit.memory_gb,
                max_context,
                if fit.fits_design_limit { "yes" } else { "no" }
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::EDGE_REFERENCES;
    use crate::model::QWEN_4B_FP16;
    use approx::assert_relative_eq;

    fn table() -> MemoryTable {
        MemoryTable::build(&QWEN_4B_FP16, &EDGE_REFERENCES)
    }

    #[test]
    fn test_rows_follow_ticks() {
        let table = table();
        assert_eq!(table.rows.len(), 11);
        assert_eq!(table.rows[0].tokens, 1024);
        assert_eq!(table.rows[10].context, "1M");
        assert_relative_eq!(table.rows[7].total_gb, 19.25);
    }

    #[test]
    fn test_hardware_fits() {
        let table = table();
        let fits: Vec<bool> = table.hardware.iter().map(|h| h.fits_design_limit).collect();
        // 19.25 GB needed at 128k
        assert_eq!(fits, vec![false, false, false, true, true]);
        assert_eq!(table.hardware[0].max_context_tokens, 0);
    }

    #[test]
    fn test_text_mentions_exact_weights() {
        let text = table().to_text();
        assert!(text.contains("Weights: 7.45 GB (charted as 8.0 GB)"));
        assert!(text.contains("A100 (40GB)"));
        assert!(text.contains("128k"));
    }

    #[test]
    fn test_text_marks_device_without_room() {
        let text = table().to_text();
        let row = text
            .lines()
            .find(|line| line.starts_with("MacBook Air / Entry Laptop (8GB)"))
            .unwrap();
        let cells: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(cells[cells.len() - 2..], ["-", "no"]);
        assert!(!text.contains(" 0k "));
    }

    #[test]
    fn test_serializes_to_json() {
        let json: serde_json::Value = serde_json::from_str(&table().to_json().unwrap()).unwrap();
        assert_eq!(json["model"], "Qwen-4B");
        assert_eq!(json["hardware"][4]["tier"], "datacenter");
        assert_eq!(json["rows"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_yaml_round_trips() {
        let table = table();
        let parsed: MemoryTable = serde_yaml::from_str(&table.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed.rows, table.rows);
    }
}
