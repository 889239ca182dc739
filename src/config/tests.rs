use super::*;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_screener_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("SCREENER_MODEL_DIR");
        env::remove_var("SCREENER_MAX_SEQ_LEN");
        env::remove_var("SCREENER_EXCERPT_CHARS");
        env::remove_var("SCREENER_JUSTIFICATION_KEYWORDS");
        env::remove_var("SCREENER_MAX_CONCURRENCY");
    }
}

fn model_dir_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"{}").unwrap();
    }
    dir
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.model_dir.is_none());
    assert_eq!(config.max_seq_len, 256);
    assert_eq!(config.excerpt_chars, 300);
    assert_eq!(config.justification_keywords, 5);
    assert!(config.max_concurrency >= 1);
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_screener_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_custom_values() {
    clear_screener_env();

    with_env_vars(
        &[
            ("SCREENER_MODEL_DIR", "/models/all-MiniLM-L6-v2"),
            ("SCREENER_MAX_SEQ_LEN", "128"),
            ("SCREENER_EXCERPT_CHARS", " 120 "),
            ("SCREENER_JUSTIFICATION_KEYWORDS", "3"),
            ("SCREENER_MAX_CONCURRENCY", "2"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(
                config.model_dir,
                Some(PathBuf::from("/models/all-MiniLM-L6-v2"))
            );
            assert_eq!(config.max_seq_len, 128);
            assert_eq!(config.excerpt_chars, 120);
            assert_eq!(config.justification_keywords, 3);
            assert_eq!(config.max_concurrency, 2);
        },
    );
}

#[test]
#[serial]
fn test_blank_model_dir_is_unset() {
    clear_screener_env();

    with_env_vars(&[("SCREENER_MODEL_DIR", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.model_dir.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_number() {
    clear_screener_env();

    with_env_vars(&[("SCREENER_MAX_SEQ_LEN", "lots")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "SCREENER_MAX_SEQ_LEN",
                ..
            }
        ));
        assert!(err.to_string().contains("SCREENER_MAX_SEQ_LEN='lots'"));
    });
}

#[test]
#[serial]
fn test_negative_number_rejected() {
    clear_screener_env();

    with_env_vars(&[("SCREENER_EXCERPT_CHARS", "-1")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    });
}

#[test]
#[serial]
fn test_zero_limits_rejected() {
    clear_screener_env();

    for name in [
        "SCREENER_MAX_SEQ_LEN",
        "SCREENER_JUSTIFICATION_KEYWORDS",
        "SCREENER_MAX_CONCURRENCY",
    ] {
        with_env_vars(&[(name, "0")], || {
            let err = Config::from_env().unwrap_err();
            assert!(
                matches!(err, ConfigError::ZeroValue { name: n } if n == name),
                "{name}: {err}"
            );
        });
    }
}

#[test]
#[serial]
fn test_zero_excerpt_allowed() {
    clear_screener_env();

    with_env_vars(&[("SCREENER_EXCERPT_CHARS", "0")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.excerpt_chars, 0);
    });
}

#[test]
fn test_validate_without_model_dir() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_nonexistent_model_dir() {
    let config = Config {
        model_dir: Some(PathBuf::from("/nonexistent/path/to/model")),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_model_dir_is_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("model.safetensors");
    fs::write(&file, b"").unwrap();

    let config = Config {
        model_dir: Some(file),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_missing_model_file() {
    let dir = model_dir_with(&["config.json", "model.safetensors"]);
    let config = Config {
        model_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    match config.validate().unwrap_err() {
        ConfigError::MissingModelFile { path } => {
            assert_eq!(path, dir.path().join("tokenizer.json"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_complete_model_dir() {
    let dir = model_dir_with(&["config.json", "model.safetensors", "tokenizer.json"]);
    let config = Config {
        model_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_embedder_config_stub_without_model_dir() {
    let config = Config {
        max_seq_len: 64,
        ..Default::default()
    };

    let embedder = config.embedder_config();
    assert!(embedder.testing_stub);
    assert_eq!(embedder.max_seq_len, 64);
}

#[test]
fn test_embedder_config_with_model_dir() {
    let config = Config {
        model_dir: Some(PathBuf::from("/models/minilm")),
        ..Default::default()
    };

    let embedder = config.embedder_config();
    assert!(!embedder.testing_stub);
    assert_eq!(embedder.model_dir, PathBuf::from("/models/minilm"));
}

#[test]
fn test_ranker_config() {
    let config = Config {
        excerpt_chars: 10,
        justification_keywords: 2,
        max_concurrency: 3,
        ..Default::default()
    };

    let ranker = config.ranker_config();
    assert_eq!(ranker.excerpt_chars, 10);
    assert_eq!(ranker.justification_keywords, 2);
    assert_eq!(ranker.max_concurrency, 3);
    assert!(ranker.validate().is_ok());
}
