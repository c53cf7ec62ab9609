use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

pub mod table;

use crate::model::config::ComparisonConfig;
use crate::model::score::in_unit_range;
use table::parse_score_table;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Table,
}

/// Command-line values that take precedence over the input file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub n: Option<u32>,
    pub confidence_z: Option<f64>,
}

pub fn detect_format(path: &Path) -> Result<InputFormat, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => Ok(InputFormat::Json),
        "tsv" | "txt" => Ok(InputFormat::Table),
        _ => Err(InputError::InvalidInput(format!(
            "unsupported input extension for {} (use .json or .tsv)",
            path.display()
        ))),
    }
}

pub fn load_config(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<ComparisonConfig, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    let mut config = match format {
        InputFormat::Json => serde_json::from_reader::<_, ComparisonConfig>(reader)?,
        InputFormat::Table => parse_score_table(reader)?,
    };

    apply_overrides(&mut config, overrides);
    config
        .resolve_counts()
        .and_then(|_| config.validate())
        .map_err(|e| InputError::InvalidInput(e.to_string()))?;

    tracing::info!(
        "loaded {} variant(s) x {} model(s) from {} (n={}, z={})",
        config.variants.len(),
        config.model_labels().len(),
        path.display(),
        config.n,
        config.confidence_z
    );
    warn_out_of_range(&config);
    Ok(config)
}

pub fn apply_overrides(config: &mut ComparisonConfig, overrides: &ConfigOverrides) {
    if let Some(n) = overrides.n {
        config.n = n;
    }
    if let Some(z) = overrides.confidence_z {
        config.confidence_z = z;
    }
}

fn warn_out_of_range(config: &ComparisonConfig) {
    for variant in &config.variants {
        for (idx, &score) in variant.scores.iter().enumerate() {
            if !in_unit_range(score) {
                tracing::warn!(
                    "score {} of variant {} (position {}) is outside [0, 1]",
                    score,
                    variant.name,
                    idx + 1
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
