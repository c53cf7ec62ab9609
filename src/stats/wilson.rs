use crate::model::interval::ConfidenceInterval;
use crate::stats::StatsError;

/// Two-sided 95% normal quantile.
pub const DEFAULT_Z: f64 = 1.96;

/// Wilson score interval for an observed proportion over `n` items.
///
/// The score is not range-checked, but a score whose binomial variance term
/// goes negative has no interval and is rejected. Bounds are returned
/// unclipped.
pub fn compute_interval(score: f64, n: u32, z: f64) -> Result<ConfidenceInterval, StatsError> {
    if n == 0 {
        return Err(StatsError::InvalidArgument(
            "sample size must be positive".to_string(),
        ));
    }
    if !z.is_finite() || z <= 0.0 {
        return Err(StatsError::InvalidArgument(format!(
            "confidence z must be a positive number, got {z}"
        )));
    }

    let n = n as f64;
    let z2 = z * z;
    let denom = 1.0 + z2 / n;
    let center = (score + z2 / (2.0 * n)) / denom;
    let spread = z * (score * (1.0 - score) / n + z2 / (4.0 * n * n)).sqrt() / denom;
    if !spread.is_finite() {
        return Err(StatsError::InvalidArgument(format!(
            "no Wilson interval for score {score}"
        )));
    }

    // At 0 and 1 the touching bound is exact; rounding would leave it a ulp outside.
    let lower = if score == 0.0 { 0.0 } else { center - spread };
    let upper = if score == 1.0 { 1.0 } else { center + spread };
    Ok(ConfidenceInterval { lower, upper })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/wilson.rs"]
mod tests;
