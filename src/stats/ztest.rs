use crate::model::significance::SignificanceMarker;
use crate::stats::StatsError;
use crate::stats::normal::normal_cdf;

pub const TAIL_DESCRIPTION: &str = "two-proportion z-test, two-tailed";

/// Two-tailed p-value of a two-proportion z-test, both proportions over `n` items.
///
/// The pooled proportion is built from the rounded item counts; the statistic
/// uses the raw proportions. Scores that were measured on the same items are
/// treated as independent samples.
pub fn p_value(score: f64, reference: f64, n: u32) -> Result<f64, StatsError> {
    if n == 0 {
        return Err(StatsError::InvalidArgument(
            "sample size must be positive".to_string(),
        ));
    }
    let nf = n as f64;
    let correct = (score * nf).round();
    let reference_correct = (reference * nf).round();
    let pooled = (correct + reference_correct) / (2.0 * nf);
    if !(0.0..=1.0).contains(&pooled) {
        return Err(StatsError::InvalidArgument(format!(
            "pooled proportion {pooled} of {score} vs {reference} is outside [0, 1]"
        )));
    }
    let variance = pooled * (1.0 - pooled) * (2.0 / nf);
    if variance <= 0.0 {
        return Err(StatsError::DivisionUndefined(format!(
            "pooled proportion {pooled} of {score} vs {reference} has zero standard error"
        )));
    }

    let se = variance.sqrt();
    let z_stat = (reference - score) / se;
    Ok(2.0 * (1.0 - normal_cdf(z_stat.abs())))
}

/// Marks how strongly `score` differs from `reference`. Equal scores are never marked.
pub fn significance_level(
    score: f64,
    reference: f64,
    n: u32,
) -> Result<SignificanceMarker, StatsError> {
    if n == 0 {
        return Err(StatsError::InvalidArgument(
            "sample size must be positive".to_string(),
        ));
    }
    if score == reference {
        return Ok(SignificanceMarker::None);
    }
    let p = p_value(score, reference, n)?;
    Ok(SignificanceMarker::from_p_value(p))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ztest.rs"]
mod tests;
