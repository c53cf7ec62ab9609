use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::pipeline::stage2_compare::{ComparisonReport, TableCell, chart_series, table_rows};
use crate::report::format_f64_6;
use crate::report::json::{ToolMeta, render_summary_json};
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    All,
    Chart,
    Table,
}

pub fn write_reports(
    report: &ComparisonReport,
    meta: &ToolMeta,
    out_dir: &Path,
    mode: ReportMode,
    clamp: bool,
) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    if matches!(mode, ReportMode::All | ReportMode::Chart) {
        let chart_path = out_dir.join("chart.tsv");
        write_chart_tsv(report, &chart_path, clamp)?;
        tracing::info!("wrote {}", chart_path.display());
    }
    if matches!(mode, ReportMode::All | ReportMode::Table) {
        let table_path = out_dir.join("table.tsv");
        write_table_tsv(report, &table_path)?;
        tracing::info!("wrote {}", table_path.display());
    }

    let summary_path = out_dir.join("summary.json");
    let json = render_summary_json(report, meta, clamp)?;
    write_text(&summary_path, &json)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(report, clamp))?;

    tracing::info!(
        "wrote {} and {}",
        summary_path.display(),
        report_path.display()
    );
    Ok(())
}

fn write_chart_tsv(report: &ComparisonReport, path: &Path, clamp: bool) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "variant",
        "model",
        "score",
        "lower",
        "upper",
        "lower_error",
        "upper_error",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for variant in &report.variants {
        for bar in chart_series(variant, clamp) {
            let row = [
                variant.name.clone(),
                bar.model,
                format_f64_6(bar.score),
                format_f64_6(bar.lower),
                format_f64_6(bar.upper),
                format_f64_6(bar.lower_error),
                format_f64_6(bar.upper_error),
            ]
            .join("\t");
            writeln!(w, "{}", row)?;
        }
    }
    w.flush()
}

fn write_table_tsv(report: &ComparisonReport, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let mut header = vec!["model".to_string()];
    header.extend(report.variants.iter().map(|v| v.name.clone()));
    writeln!(w, "{}", header.join("\t"))?;

    for row in table_rows(report) {
        let mut fields = Vec::with_capacity(row.cells.len() + 1);
        fields.push(row.model.clone());
        fields.extend(row.cells.iter().map(format_table_cell));
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

/// Best scores are bracketed, other scores carry their significance stars.
pub fn format_table_cell(cell: &TableCell) -> String {
    let score = if cell.is_best {
        format!("[{}]", cell.formatted_score)
    } else {
        cell.formatted_score.clone()
    };
    format!("{}{}", score, cell.marker.stars())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
