use crate::model::significance::{SignificanceMarker, marker_order};
use crate::pipeline::stage1_rank::ranked_order;
use crate::pipeline::stage2_compare::{ComparisonReport, VariantReport};
use crate::report::{bool_fraction, format_f64_6, format_score};

pub fn render_report_text(report: &ComparisonReport, clamp: bool) -> String {
    let mut out = String::new();

    out.push_str("Model Score Comparison Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Setup\n");
    out.push_str(&format!("Items per score (n): {}\n", report.n));
    out.push_str(&format!(
        "Confidence z: {}\n",
        format_f64_6(report.confidence_z)
    ));
    out.push_str(&format!("Test: {}\n", report.test));
    out.push_str(&format!("Models: {}\n", report.models.len()));
    out.push_str(&format!(
        "Variants: {}\n",
        report
            .variants
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!(
        "Interval display: {}\n\n",
        if clamp { "clamped to [0, 1]" } else { "unclamped" }
    ));

    out.push_str("2. Ranked scores\n");
    for variant in &report.variants {
        out.push_str(&format!(
            "{} (best {}, AVG {} over n={})\n",
            variant.name,
            format_score(variant.best_score),
            format_score(variant.average.mean),
            variant.average.total_n
        ));
        let scores = variant.entries.iter().map(|e| e.score).collect::<Vec<_>>();
        for (rank, idx) in ranked_order(&scores).into_iter().enumerate() {
            let entry = &variant.entries[idx];
            let interval = if clamp {
                entry.interval.clamped()
            } else {
                entry.interval
            };
            out.push_str(&format!(
                "  {}. {} {} [{}, {}] width {}{}\n",
                rank + 1,
                entry.model,
                format_score(entry.score),
                format_score(interval.lower),
                format_score(interval.upper),
                format_score(interval.width()),
                marker_suffix(entry.significance)
            ));
        }
        out.push('\n');
    }

    out.push_str("3. Differences from the best score\n");
    for variant in &report.variants {
        out.push_str(&format!("{}: {}\n", variant.name, marker_counts(variant)));
        out.push_str(&format!(
            "  significantly below best: {}\n",
            format_f64_6(significant_fraction(variant))
        ));
    }
    out.push('\n');

    out.push_str("4. Caveats\n");
    out.push_str(
        "Scores of different models on the same items are tested as independent samples.\n",
    );
    let outside = report
        .variants
        .iter()
        .flat_map(|v| v.entries.iter())
        .filter(|e| !e.interval.is_within_unit())
        .count();
    if outside > 0 && !clamp {
        out.push_str(&format!(
            "{} interval(s) extend outside [0, 1]; bounds are reported unclamped.\n",
            outside
        ));
    }

    out
}

fn marker_suffix(marker: SignificanceMarker) -> String {
    match marker {
        SignificanceMarker::None => String::new(),
        other => format!(" {} ({})", other.stars(), other.as_str()),
    }
}

fn marker_counts(variant: &VariantReport) -> String {
    marker_order()
        .iter()
        .map(|&marker| {
            let count = variant
                .entries
                .iter()
                .filter(|e| !e.is_best && e.significance == marker)
                .count();
            format!("{}={}", marker.as_str(), count)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn significant_fraction(variant: &VariantReport) -> f64 {
    let flags = variant
        .entries
        .iter()
        .filter(|e| !e.is_best)
        .map(|e| e.significance != SignificanceMarker::None)
        .collect::<Vec<_>>();
    bool_fraction(&flags)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
