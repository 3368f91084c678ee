use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::profiler::{ScalingReport, SizeComparison};

/// Render the full comparison as a markdown document.
pub fn render_markdown(report: &ScalingReport) -> String {
    let mut out = String::new();
    out.push_str("# Moving Average Strategy Benchmark\n\n");
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
    ));
    out.push_str(&format!(
        "Source: `{}` ({} ticks)\n\n",
        report.source, report.total_ticks
    ));
    out.push_str(&format!("Window size: {}\n\n", report.window_size));

    out.push_str("## Runtime\n\n");
    out.push_str("| Input size | Naive (s) | Windowed (s) | Speedup |\n");
    out.push_str("|---:|---:|---:|---:|\n");
    for c in &report.comparisons {
        out.push_str(&format!(
            "| {} | {:.6} | {:.6} | {} |\n",
            c.input_size,
            c.naive.elapsed_secs,
            c.windowed.elapsed_secs,
            speedup(c)
        ));
    }
    out.push('\n');

    out.push_str("## Peak memory\n\n");
    out.push_str("| Input size | Naive | Windowed |\n");
    out.push_str("|---:|---:|---:|\n");
    for c in &report.comparisons {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            c.input_size,
            format_bytes(c.naive.peak_memory_bytes),
            format_bytes(c.windowed.peak_memory_bytes)
        ));
    }
    out.push('\n');

    out.push_str("## Signals\n\n");
    out.push_str("| Input size | Buy | Sell | Hold | Warm-up | Agree |\n");
    out.push_str("|---:|---:|---:|---:|---:|:---|\n");
    for c in &report.comparisons {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            c.input_size,
            c.windowed.counts.buy,
            c.windowed.counts.sell,
            c.windowed.counts.hold,
            c.windowed.counts.none,
            if c.signals_agree { "yes" } else { "NO" }
        ));
    }
    out.push('\n');
    out.push_str(
        "Signal columns show the windowed strategy; whenever Agree is yes the naive\n\
         strategy emitted the identical sequence.\n",
    );
    out
}

/// Write the markdown and JSON renditions of the report into `out_dir`,
/// returning the two paths.
pub fn write_reports(report: &ScalingReport, out_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let md_path = out_dir.join("benchmark.md");
    std::fs::write(&md_path, render_markdown(report))
        .with_context(|| format!("failed to write {}", md_path.display()))?;

    let json_path = out_dir.join("benchmark.json");
    let json = serde_json::to_string_pretty(report)
        .context("failed to serialize benchmark report json")?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("failed to write {}", json_path.display()))?;

    Ok((md_path, json_path))
}

/// Print a condensed comparison table to stdout.
pub fn print_summary(report: &ScalingReport) {
    println!(
        "\nMoving Average Benchmark (window = {}, source = {})",
        report.window_size, report.source
    );
    println!("{:-<86}", "");
    println!(
        "{:>10} {:>13} {:>13} {:>9} {:>12} {:>12} {:>7}",
        "Input", "Naive (s)", "Windowed (s)", "Speedup", "Naive mem", "Win mem", "Agree"
    );
    println!("{:-<86}", "");
    for c in &report.comparisons {
        println!(
            "{:>10} {:>13.6} {:>13.6} {:>9} {:>12} {:>12} {:>7}",
            c.input_size,
            c.naive.elapsed_secs,
            c.windowed.elapsed_secs,
            speedup(c),
            format_bytes(c.naive.peak_memory_bytes),
            format_bytes(c.windowed.peak_memory_bytes),
            if c.signals_agree { "yes" } else { "NO" }
        );
    }
    println!("{:-<86}", "");
}

fn speedup(c: &SizeComparison) -> String {
    if c.windowed.elapsed_secs > 0.0 {
        format!("{:.1}x", c.naive.elapsed_secs / c.windowed.elapsed_secs)
    } else {
        "-".to_string()
    }
}

fn format_bytes(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{} B", bytes)
    }
}
