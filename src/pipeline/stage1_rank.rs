use crate::stats::StatsError;

/// Indices of `scores` ordered by descending score; ties keep input order.
pub fn ranked_order(scores: &[f64]) -> Vec<usize> {
    let mut order = (0..scores.len()).collect::<Vec<_>>();
    // `sort_by` is stable, so equal scores stay in input order.
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

pub fn rank_by_score(models: &[String], scores: &[f64]) -> Result<Vec<(String, f64)>, StatsError> {
    if scores.is_empty() {
        return Err(StatsError::InvalidArgument(
            "cannot rank an empty score list".to_string(),
        ));
    }
    if models.len() != scores.len() {
        return Err(StatsError::InvalidArgument(format!(
            "{} model labels for {} scores",
            models.len(),
            scores.len()
        )));
    }

    Ok(ranked_order(scores)
        .into_iter()
        .map(|idx| (models[idx].clone(), scores[idx]))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_rank.rs"]
mod tests;
