use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp(ext: &str, contents: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    path.push(format!(
        "scorecmp_input_test_{}_{}.{}",
        std::process::id(),
        id,
        ext
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_config() {
    let path = write_temp(
        "json",
        r#"{"n": 112, "confidence_z": 2.576, "models": ["a", "b"],
            "variants": [{"name": "Latvian", "scores": [0.848, 0.580]}]}"#,
    );
    let config = load_config(&path, &ConfigOverrides::default()).unwrap();
    assert_eq!(config.n, 112);
    assert_eq!(config.confidence_z, 2.576);
    assert_eq!(config.variants[0].scores, vec![0.848, 0.580]);
}

#[test]
fn test_load_json_counts() {
    let path = write_temp(
        "json",
        r#"{"n": 112, "variants": [{"name": "Latvian", "correct": [95, 65]}]}"#,
    );
    let config = load_config(&path, &ConfigOverrides::default()).unwrap();
    assert_eq!(config.model_labels(), vec!["model_1", "model_2"]);
    assert!((config.variants[0].scores[1] - 65.0 / 112.0).abs() < 1e-12);
}

#[test]
fn test_load_tsv_requires_n() {
    let path = write_temp("tsv", "model\tEnglish\na\t0.9\nb\t0.8\n");
    assert!(matches!(
        load_config(&path, &ConfigOverrides::default()),
        Err(InputError::InvalidInput(_))
    ));

    let overrides = ConfigOverrides {
        n: Some(112),
        confidence_z: None,
    };
    let config = load_config(&path, &overrides).unwrap();
    assert_eq!(config.n, 112);
    assert_eq!(config.models, vec!["a", "b"]);
}

#[test]
fn test_overrides_win_over_file() {
    let path = write_temp(
        "json",
        r#"{"n": 50, "variants": [{"name": "v", "scores": [0.5]}]}"#,
    );
    let overrides = ConfigOverrides {
        n: Some(200),
        confidence_z: Some(1.0),
    };
    let config = load_config(&path, &overrides).unwrap();
    assert_eq!(config.n, 200);
    assert_eq!(config.confidence_z, 1.0);
}

#[test]
fn test_missing_and_unsupported_input() {
    let missing = std::env::temp_dir().join("scorecmp_does_not_exist.json");
    assert!(matches!(
        load_config(&missing, &ConfigOverrides::default()),
        Err(InputError::MissingInput(_))
    ));

    let path = write_temp("csv", "model,English\n");
    assert!(matches!(
        load_config(&path, &ConfigOverrides::default()),
        Err(InputError::InvalidInput(_))
    ));
}

#[test]
fn test_malformed_json() {
    let path = write_temp("json", "{\"n\": 112, \"variants\": [");
    assert!(matches!(
        load_config(&path, &ConfigOverrides::default()),
        Err(InputError::Json(_))
    ));
}

#[test]
fn test_detect_format() {
    assert_eq!(
        detect_format(Path::new("scores.JSON")).unwrap(),
        InputFormat::Json
    );
    assert_eq!(
        detect_format(Path::new("scores.tsv")).unwrap(),
        InputFormat::Table
    );
    assert!(detect_format(Path::new("scores")).is_err());
}

#[test]
fn test_demo_inputs_agree() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let json = load_config(&demos.join("mmlu_lv.json"), &ConfigOverrides::default()).unwrap();
    let overrides = ConfigOverrides {
        n: Some(112),
        confidence_z: None,
    };
    let tsv = load_config(&demos.join("mmlu_lv.tsv"), &overrides).unwrap();
    assert_eq!(json, tsv);
    assert_eq!(json.variants.len(), 4);
    assert_eq!(json.variants[2].name, "Latvian (AT)");
}
