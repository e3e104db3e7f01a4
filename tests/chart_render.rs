//! End-to-end rendering of the chart file.

use kvchart::chart::{render_chart, ChartLayout};
use kvchart::config::RenderConfig;
use kvchart::hardware::EDGE_REFERENCES;
use kvchart::model::QWEN_4B_FP16;
use kvchart::series::MemorySeries;
use kvchart::KvChartError;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> RenderConfig {
    RenderConfig {
        output: dir.path().join("kv_cache_edge_device.svg"),
        preview: false,
        ..RenderConfig::default()
    }
}

#[test]
fn test_render_writes_non_empty_svg() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let report = render_chart(&config).unwrap();

    assert_eq!(report.output, config.output);
    assert_eq!(report.samples, 500);
    assert!(report.bytes_written > 0);
    let svg = std::fs::read_to_string(&config.output).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert_eq!(svg.len() as u64, report.bytes_written);
}

#[test]
fn test_svg_contains_annotations() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    render_chart(&config).unwrap();
    let svg = std::fs::read_to_string(&config.output).unwrap();

    assert!(svg.contains("Edge Device Memory Bottleneck: Qwen-4B (FP16)"));
    assert!(svg.contains("Context Length (Tokens)"));
    assert!(svg.contains("Total Memory Usage (GB)"));
    assert!(svg.contains("Design Limit (128k)"));
    assert!(svg.contains("Model Weights (~8GB)"));
    for hw in &EDGE_REFERENCES {
        assert!(svg.contains(hw.label), "missing label {}", hw.label);
    }
}

/// `(x, content)` of every `<text>` element, in document order.
fn svg_texts(svg: &str) -> Vec<(f64, String)> {
    svg.split("<text")
        .skip(1)
        .filter_map(|chunk| {
            let (tag, rest) = chunk.split_once('>')?;
            let (_, x) = tag.split_once(" x=\"")?;
            let x: f64 = x.split('"').next()?.parse().ok()?;
            let content = rest.split("</text>").next()?.trim().to_string();
            Some((x, content))
        })
        .collect()
}

#[test]
fn test_svg_tick_labels_in_order() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    render_chart(&config).unwrap();
    let svg = std::fs::read_to_string(&config.output).unwrap();

    let expected = ["1k", "2k", "4k", "8k", "16k", "32k", "64k", "128k", "256k", "512k", "1M"];
    let texts = svg_texts(&svg);
    let start = texts
        .iter()
        .position(|(_, text)| text == "1k")
        .expect("no 1k tick label");
    let ticks = &texts[start..start + expected.len()];

    let labels: Vec<&str> = ticks.iter().map(|(_, text)| text.as_str()).collect();
    assert_eq!(labels, expected);
    // one octave apart, so evenly spaced from left to right
    let gaps: Vec<f64> = ticks.windows(2).map(|w| w[1].0 - w[0].0).collect();
    assert!(gaps.iter().all(|&gap| gap > 0.0));
    let (min, max) = gaps
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &g| (lo.min(g), hi.max(g)));
    assert!(max - min <= 1.0, "uneven tick spacing: {gaps:?}");
}

#[test]
fn test_svg_annotation_matches_design_limit_total() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let report = render_chart(&config).unwrap();
    let svg = std::fs::read_to_string(&config.output).unwrap();

    let expected = QWEN_4B_FP16.weights_gb_visual + QWEN_4B_FP16.kv_gb(131_072.0);
    assert!((report.design_limit_gb - expected).abs() < 1e-12);
    assert!(svg.contains(&format!("Requires ~{expected:.1} GB")));
}

#[test]
fn test_render_respects_canvas_size() {
    let dir = TempDir::new().unwrap();
    let config = RenderConfig { width: 900, height: 600, ..config_in(&dir) };
    render_chart(&config).unwrap();
    let svg = std::fs::read_to_string(&config.output).unwrap();
    assert!(svg.contains("width=\"900\""));
    assert!(svg.contains("height=\"600\""));
}

#[test]
fn test_render_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let config = RenderConfig {
        output: dir.path().join("no/such/dir/chart.svg"),
        ..config_in(&dir)
    };
    let err = render_chart(&config).unwrap_err();
    assert!(matches!(err, KvChartError::Render { .. }));
    assert!(err.to_string().contains("chart.svg"));
}

#[test]
fn test_layout_and_series_agree() {
    let series = MemorySeries::default_for(&QWEN_4B_FP16);
    let layout = ChartLayout::build(&QWEN_4B_FP16, &series, &EDGE_REFERENCES);
    for (point, (len, total)) in layout.curve.points.iter().zip(series.total_points()) {
        if point.1 < layout.y_range.1 {
            assert_eq!(*point, (len, total));
        }
    }
}
