use std::io::BufRead;

use crate::input::InputError;
use crate::model::config::{ComparisonConfig, VariantScores};

/// Reads a `model<TAB>variant...` score table. The table carries no sample
/// size, so `n` is left at zero for the caller to supply.
pub fn parse_score_table<R: BufRead>(mut reader: R) -> Result<ComparisonConfig, InputError> {
    let mut buf = String::new();
    let mut header: Option<Vec<String>> = None;
    let mut models = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').map(|s| s.trim()).collect();

        if header.is_none() {
            if fields.len() < 2 {
                return Err(InputError::Parse(format!(
                    "score table header needs a model column and at least one variant (line {line_no})"
                )));
            }
            columns = vec![Vec::new(); fields.len() - 1];
            header = Some(fields[1..].iter().map(|s| s.to_string()).collect());
            continue;
        }

        if fields.len() != columns.len() + 1 {
            return Err(InputError::Parse(format!(
                "expected {} fields, found {} (line {line_no})",
                columns.len() + 1,
                fields.len()
            )));
        }
        if fields[0].is_empty() {
            return Err(InputError::Parse(format!(
                "empty model label (line {line_no})"
            )));
        }
        models.push(fields[0].to_string());
        for (col, raw) in fields[1..].iter().enumerate() {
            let value = raw.parse::<f64>().map_err(|_| {
                InputError::Parse(format!("invalid score {raw:?} (line {line_no})"))
            })?;
            columns[col].push(value);
        }
    }

    let Some(variant_names) = header else {
        return Err(InputError::Parse("score table is empty".to_string()));
    };
    if models.is_empty() {
        return Err(InputError::Parse("score table has no model rows".to_string()));
    }

    let variants = variant_names
        .into_iter()
        .zip(columns)
        .map(|(name, scores)| VariantScores {
            name,
            scores,
            correct: Vec::new(),
        })
        .collect();

    Ok(ComparisonConfig::new(0, models, variants))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
