use crate::stats::StatsError;

/// Observed accuracy `correct / n` of one model on one variant.
pub fn proportion(correct: u32, n: u32) -> Result<f64, StatsError> {
    if n == 0 {
        return Err(StatsError::InvalidArgument(
            "sample size must be positive".to_string(),
        ));
    }
    if correct > n {
        return Err(StatsError::InvalidArgument(format!(
            "correct count {correct} exceeds sample size {n}"
        )));
    }
    Ok(correct as f64 / n as f64)
}

pub fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub fn in_unit_range(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/score.rs"]
mod tests;
