use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use crate::profiler::{ScalingReport, StrategyMetrics};

const NAIVE_COLOR: RGBColor = RED;
const WINDOWED_COLOR: RGBColor = BLUE;

/// Draw the runtime and memory scaling charts as PNGs in `out_dir`.
pub fn write_plots(report: &ScalingReport, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let runtime_path = out_dir.join("runtime_scaling.png");
    draw_scaling_chart(
        &runtime_path,
        "Runtime vs input size",
        "seconds",
        report,
        |m| m.elapsed_secs,
    )?;

    let memory_path = out_dir.join("memory_scaling.png");
    draw_scaling_chart(
        &memory_path,
        "Peak memory vs input size",
        "bytes",
        report,
        |m| m.peak_memory_bytes as f64,
    )?;

    Ok(vec![runtime_path, memory_path])
}

fn draw_scaling_chart(
    path: &Path,
    title: &str,
    y_desc: &str,
    report: &ScalingReport,
    value: impl Fn(&StrategyMetrics) -> f64,
) -> Result<()> {
    let xs: Vec<f64> = report
        .comparisons
        .iter()
        .map(|c| c.input_size as f64)
        .collect();
    let naive: Vec<f64> = report.comparisons.iter().map(|c| value(&c.naive)).collect();
    let windowed: Vec<f64> = report
        .comparisons
        .iter()
        .map(|c| value(&c.windowed))
        .collect();

    let x_max = xs.last().copied().unwrap_or(1.0).max(1.0);
    let y_max = naive
        .iter()
        .chain(windowed.iter())
        .fold(0.0_f64, |acc, &v| acc.max(v))
        .max(f64::MIN_POSITIVE);

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("failed to fill chart background: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(72)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.1)
        .map_err(|e| anyhow!("failed to build chart axes: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("input size (ticks)")
        .y_desc(y_desc)
        .draw()
        .map_err(|e| anyhow!("failed to draw chart mesh: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(naive.iter().copied()),
            &NAIVE_COLOR,
        ))
        .map_err(|e| anyhow!("failed to draw naive series: {e}"))?
        .label("naive")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], NAIVE_COLOR));

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(windowed.iter().copied()),
            &WINDOWED_COLOR,
        ))
        .map_err(|e| anyhow!("failed to draw windowed series: {e}"))?
        .label("windowed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], WINDOWED_COLOR));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(|e| anyhow!("failed to draw chart legend: {e}"))?;

    root.present()
        .map_err(|e| anyhow!("failed to write chart {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote chart");
    Ok(())
}
