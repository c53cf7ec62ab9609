use serde::Deserialize;

use crate::model::score::proportion;
use crate::stats::StatsError;
use crate::stats::wilson::DEFAULT_Z;

/// Scores of every model on one evaluation variant, in model order. Either
/// proportions in `scores` or item counts in `correct`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantScores {
    pub name: String,
    #[serde(default)]
    pub scores: Vec<f64>,
    #[serde(default)]
    pub correct: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonConfig {
    /// Items evaluated per score; shared by every score in the comparison.
    #[serde(default)]
    pub n: u32,
    #[serde(default = "default_confidence_z")]
    pub confidence_z: f64,
    #[serde(default)]
    pub models: Vec<String>,
    pub variants: Vec<VariantScores>,
}

fn default_confidence_z() -> f64 {
    DEFAULT_Z
}

impl ComparisonConfig {
    pub fn new(n: u32, models: Vec<String>, variants: Vec<VariantScores>) -> Self {
        Self {
            n,
            confidence_z: DEFAULT_Z,
            models,
            variants,
        }
    }

    /// Model labels in input order; `model_1..model_k` when none were given.
    pub fn model_labels(&self) -> Vec<String> {
        if !self.models.is_empty() {
            return self.models.clone();
        }
        let count = self
            .variants
            .first()
            .map(|v| v.scores.len().max(v.correct.len()))
            .unwrap_or(0);
        (1..=count).map(|i| format!("model_{i}")).collect()
    }

    /// Turns `correct` counts into proportions over `n`.
    pub fn resolve_counts(&mut self) -> Result<(), StatsError> {
        let n = self.n;
        for variant in &mut self.variants {
            if variant.correct.is_empty() {
                continue;
            }
            if !variant.scores.is_empty() {
                return Err(StatsError::InvalidArgument(format!(
                    "variant {} gives both scores and correct counts",
                    variant.name
                )));
            }
            variant.scores = variant
                .correct
                .iter()
                .map(|&c| proportion(c, n))
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.n == 0 {
            return Err(StatsError::InvalidArgument(
                "sample size must be positive".to_string(),
            ));
        }
        if !self.confidence_z.is_finite() || self.confidence_z <= 0.0 {
            return Err(StatsError::InvalidArgument(format!(
                "confidence z must be a positive number, got {}",
                self.confidence_z
            )));
        }
        if self.variants.is_empty() {
            return Err(StatsError::InvalidArgument(
                "no variants to compare".to_string(),
            ));
        }
        let n_models = self.model_labels().len();
        for variant in &self.variants {
            if variant.scores.is_empty() {
                return Err(StatsError::InvalidArgument(format!(
                    "variant {} has no scores",
                    variant.name
                )));
            }
            if variant.scores.len() != n_models {
                return Err(StatsError::InvalidArgument(format!(
                    "variant {} has {} scores for {} models",
                    variant.name,
                    variant.scores.len(),
                    n_models
                )));
            }
            if let Some(bad) = variant.scores.iter().find(|s| !s.is_finite()) {
                return Err(StatsError::InvalidArgument(format!(
                    "variant {} has non-finite score {bad}",
                    variant.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
