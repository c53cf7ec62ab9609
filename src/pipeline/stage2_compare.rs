use serde::Serialize;

use crate::model::config::ComparisonConfig;
use crate::model::interval::ConfidenceInterval;
use crate::model::significance::SignificanceMarker;
use crate::pipeline::stage1_rank::{rank_by_score, ranked_order};
use crate::report::{format_score, mean};
use crate::stats::StatsError;
use crate::stats::wilson::compute_interval;
use crate::stats::ztest::{TAIL_DESCRIPTION, p_value, significance_level};

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub model: String,
    pub score: f64,
    pub interval: ConfidenceInterval,
    /// Absent for scores equal to the variant's best.
    pub p_value: Option<f64>,
    pub significance: SignificanceMarker,
    pub is_best: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AverageRow {
    pub mean: f64,
    pub total_n: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub name: String,
    pub best_score: f64,
    pub entries: Vec<ScoreEntry>,
    /// `(model, score)` best first.
    pub ranking: Vec<(String, f64)>,
    pub average: AverageRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub n: u32,
    pub confidence_z: f64,
    pub test: &'static str,
    pub models: Vec<String>,
    pub variants: Vec<VariantReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub model: String,
    pub score: f64,
    pub lower: f64,
    pub upper: f64,
    pub lower_error: f64,
    pub upper_error: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub formatted_score: String,
    pub is_best: bool,
    pub marker: SignificanceMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub model: String,
    pub cells: Vec<TableCell>,
    pub is_average: bool,
}

pub fn build_comparison_report(config: &ComparisonConfig) -> Result<ComparisonReport, StatsError> {
    config.validate()?;
    let models = config.model_labels();

    let mut variants = Vec::with_capacity(config.variants.len());
    for variant in &config.variants {
        let report = compare_variant(
            &variant.name,
            &models,
            &variant.scores,
            config.n,
            config.confidence_z,
        )?;
        tracing::debug!(
            variant = %report.name,
            best = report.best_score,
            mean = report.average.mean,
            "compared variant"
        );
        variants.push(report);
    }

    Ok(ComparisonReport {
        n: config.n,
        confidence_z: config.confidence_z,
        test: TAIL_DESCRIPTION,
        models,
        variants,
    })
}

/// Intervals and markers of one variant against its best score.
pub fn compare_variant(
    name: &str,
    models: &[String],
    scores: &[f64],
    n: u32,
    z: f64,
) -> Result<VariantReport, StatsError> {
    if scores.is_empty() {
        return Err(StatsError::InvalidArgument(format!(
            "variant {name} has no scores"
        )));
    }
    if models.len() != scores.len() {
        return Err(StatsError::InvalidArgument(format!(
            "variant {name} has {} scores for {} models",
            scores.len(),
            models.len()
        )));
    }

    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut entries = Vec::with_capacity(scores.len());
    for (model, &score) in models.iter().zip(scores) {
        let interval = compute_interval(score, n, z)?;
        let is_best = score == best;
        let significance = significance_level(score, best, n)?;
        let p = if is_best {
            None
        } else {
            Some(p_value(score, best, n)?)
        };
        entries.push(ScoreEntry {
            model: model.clone(),
            score,
            interval,
            p_value: p,
            significance,
            is_best,
        });
    }

    Ok(VariantReport {
        name: name.to_string(),
        best_score: best,
        entries,
        ranking: rank_by_score(models, scores)?,
        average: AverageRow {
            mean: mean(scores),
            total_n: n as u64 * scores.len() as u64,
        },
    })
}

/// Bars for one variant, best first. `clamp` clips bounds to [0, 1] before
/// the error bars are taken.
pub fn chart_series(variant: &VariantReport, clamp: bool) -> Vec<ChartBar> {
    let scores = variant.entries.iter().map(|e| e.score).collect::<Vec<_>>();
    ranked_order(&scores)
        .into_iter()
        .map(|idx| {
            let entry = &variant.entries[idx];
            let interval = if clamp {
                entry.interval.clamped()
            } else {
                entry.interval
            };
            let (lower_error, upper_error) = interval.half_widths(entry.score);
            ChartBar {
                model: entry.model.clone(),
                score: entry.score,
                lower: interval.lower,
                upper: interval.upper,
                lower_error,
                upper_error,
            }
        })
        .collect()
}

/// One row per model in input order, one cell per variant, then the AVG row.
pub fn table_rows(report: &ComparisonReport) -> Vec<TableRow> {
    let mut rows = Vec::with_capacity(report.models.len() + 1);
    for (idx, model) in report.models.iter().enumerate() {
        let cells = report
            .variants
            .iter()
            .filter_map(|v| v.entries.get(idx))
            .map(|entry| TableCell {
                formatted_score: format_score(entry.score),
                is_best: entry.is_best,
                marker: entry.significance,
            })
            .collect();
        rows.push(TableRow {
            model: model.clone(),
            cells,
            is_average: false,
        });
    }

    rows.push(TableRow {
        model: "AVG".to_string(),
        cells: report
            .variants
            .iter()
            .map(|v| TableCell {
                formatted_score: format_score(v.average.mean),
                is_best: false,
                marker: SignificanceMarker::None,
            })
            .collect(),
        is_average: true,
    });
    rows
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_compare.rs"]
mod tests;
