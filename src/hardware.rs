//! Hardware memory capacities drawn as reference lines.

use serde::{Deserialize, Serialize};

/// Capacities below this many GB are styled as edge devices.
pub const EDGE_THRESHOLD_GB: f64 = 30.0;

/// RGB color, stored as raw channels so both drawing backends can use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const DARK_GREY: Rgb = Rgb(0x33, 0x33, 0x33);
    pub const MID_GREY: Rgb = Rgb(0x66, 0x66, 0x66);
    pub const LIGHT_GREY: Rgb = Rgb(0xcc, 0xcc, 0xcc);
    pub const ORANGE: Rgb = Rgb(0xE7, 0x75, 0x00);
    pub const TEAL: Rgb = Rgb(0, 128, 128);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

/// Device class, decides how the reference line is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareTier {
    /// Laptops, phones, consumer GPUs
    Edge,
    /// Server accelerators, drawn faded for comparison
    Datacenter,
}

impl HardwareTier {
    #[must_use]
    pub fn for_capacity(memory_gb: f64) -> Self {
        if memory_gb < EDGE_THRESHOLD_GB {
            Self::Edge
        } else {
            Self::Datacenter
        }
    }

    /// Stroke pattern of the reference line.
    #[must_use]
    pub fn stroke(self) -> StrokePattern {
        match self {
            Self::Edge => StrokePattern::Dashed,
            Self::Datacenter => StrokePattern::DashDot,
        }
    }

    /// Line width in points.
    #[must_use]
    pub fn line_width(self) -> f64 {
        match self {
            Self::Edge => 1.5,
            Self::Datacenter => 1.0,
        }
    }

    /// Line opacity.
    #[must_use]
    pub fn alpha(self) -> f64 {
        match self {
            Self::Edge => 0.8,
            Self::Datacenter => 0.4,
        }
    }
}

/// Stroke pattern of a straight reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokePattern {
    Dashed,
    DashDot,
    Dotted,
}

/// A named memory capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareRef {
    pub label: &'static str,
    pub memory_gb: f64,
    pub color: Rgb,
}

impl HardwareRef {
    #[must_use]
    pub fn tier(&self) -> HardwareTier {
        HardwareTier::for_capacity(self.memory_gb)
    }

    /// Vertical offset of the label from the line, in GB.
    ///
    /// The 8 GB label sits below its line so it clears the weights band edge.
    #[must_use]
    pub fn label_offset_gb(&self) -> f64 {
        if self.memory_gb == 8.0 {
            -1.2
        } else {
            0.5
        }
    }
}

/// Reference devices, smallest first.
pub const EDGE_REFERENCES: [HardwareRef; 5] = [
    HardwareRef {
        label: "MacBook Air / Entry Laptop (8GB)",
        memory_gb: 8.0,
        color: Rgb::DARK_GREY,
    },
    HardwareRef {
        label: "High-end Android / RTX 3060 (12GB)",
        memory_gb: 12.0,
        color: Rgb::TEAL,
    },
    HardwareRef {
        label: "MacBook Pro / RTX 4060 Ti (16GB)",
        memory_gb: 16.0,
        color: Rgb::PURPLE,
    },
    HardwareRef {
        label: "RTX 3090 / 4090 (24GB)",
        memory_gb: 24.0,
        color: Rgb::GREEN,
    },
    HardwareRef {
        label: "A100 (40GB)",
        memory_gb: 40.0,
        color: Rgb::BLUE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let values: Vec<f64> = EDGE_REFERENCES.iter().map(|h| h.memory_gb).collect();
        assert_eq!(values, vec![8.0, 12.0, 16.0, 24.0, 40.0]);
    }

    #[test]
    fn test_tiers() {
        let tiers: Vec<_> = EDGE_REFERENCES.iter().map(HardwareRef::tier).collect();
        assert_eq!(
            tiers,
            vec![
                HardwareTier::Edge,
                HardwareTier::Edge,
                HardwareTier::Edge,
                HardwareTier::Edge,
                HardwareTier::Datacenter,
            ]
        );
    }

    #[test]
    fn test_tier_boundary() {
        assert_eq!(HardwareTier::for_capacity(29.9), HardwareTier::Edge);
        assert_eq!(HardwareTier::for_capacity(30.0), HardwareTier::Datacenter);
    }

    #[test]
    fn test_tier_styles() {
        assert_eq!(HardwareTier::Edge.stroke(), StrokePattern::Dashed);
        assert_eq!(HardwareTier::Datacenter.stroke(), StrokePattern::DashDot);
        assert!(HardwareTier::Edge.alpha() > HardwareTier::Datacenter.alpha());
        assert!(HardwareTier::Edge.line_width() > HardwareTier::Datacenter.line_width());
    }

    #[test]
    fn test_label_offsets() {
        assert_eq!(EDGE_REFERENCES[0].label_offset_gb(), -1.2);
        assert!(EDGE_REFERENCES[1..].iter().all(|h| h.label_offset_gb() == 0.5));
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        let json = serde_json::to_string(&HardwareTier::Datacenter).unwrap();
        assert_eq!(json, "\"datacenter\"");
    }
}
