use serde::Serialize;

use crate::pipeline::stage2_compare::{ChartBar, ComparisonReport, chart_series};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Serialize)]
struct VariantChart<'a> {
    variant: &'a str,
    bars: Vec<ChartBar>,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    tool: &'static str,
    tool_meta: &'a ToolMeta,
    clamp_intervals: bool,
    report: &'a ComparisonReport,
    chart: Vec<VariantChart<'a>>,
}

pub fn render_summary_json(
    report: &ComparisonReport,
    meta: &ToolMeta,
    clamp: bool,
) -> serde_json::Result<String> {
    let chart = report
        .variants
        .iter()
        .map(|v| VariantChart {
            variant: &v.name,
            bars: chart_series(v, clamp),
        })
        .collect();
    let summary = Summary {
        tool: "mmlu-scorecmp",
        tool_meta: meta,
        clamp_intervals: clamp,
        report,
        chart,
    };
    serde_json::to_string_pretty(&summary)
}
