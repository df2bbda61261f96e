//! Config file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::record::ConfigRecord;
use crate::error::LoadError;
use crate::utils::files::read_all;

/// Load a [`ConfigRecord`] from the JSON document at `path`.
///
/// Unknown keys are ignored and missing keys default. A value of the wrong
/// type, a non-object document, malformed JSON or trailing content after the
/// object is a [`LoadError::Parse`].
pub fn load_config(path: &Path) -> Result<ConfigRecord, LoadError> {
    let bytes = read_all(path)?;
    let record = ConfigRecord::from_json_slice(&bytes)
        .map_err(|e| LoadError::Parse { path: path.to_path_buf(), source: e.into() })?;
    tracing::debug!(path = %path.display(), "decoded config record");
    Ok(record)
}

/// Write `record` to `path` as pretty JSON using the same field names
/// [`load_config`] reads.
pub fn save_config(path: &Path, record: &ConfigRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize config")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating directory: {}", parent.display()))?;
    }
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed writing config file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join("config.json");
        fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_load_full_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(
            &tmp,
            r#"{"database_url":"postgres://x","api_key":"abc123","max_retries":5}"#,
        );

        let cfg = load_config(&path).expect("config");
        assert_eq!(
            cfg,
            ConfigRecord {
                database_url: "postgres://x".into(),
                api_key: "abc123".into(),
                max_retries: 5,
            }
        );
    }

    #[test]
    fn test_missing_fields_take_zero_values() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, r#"{"api_key": "only-key"}"#);

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.database_url, "");
        assert_eq!(cfg.api_key, "only-key");
        assert_eq!(cfg.max_retries, 0);
    }

    #[test]
    fn test_empty_object_is_default() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, "{}");
        assert_eq!(load_config(&path).expect("config"), ConfigRecord::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(
            &tmp,
            r#"{"max_retries": 3, "timeout_ms": 250, "nested": {"a": [1, 2]}}"#,
        );

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.max_retries, 3);
    }

    #[test]
    fn test_string_for_integer_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, r#"{"max_retries": "five"}"#);

        let err = load_config(&path).expect_err("type mismatch should fail");
        assert!(
            matches!(err, LoadError::Parse { source: ParseError::Json(_), .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_float_and_overflow_are_parse_errors() {
        let tmp = TempDir::new().expect("tmp");
        for content in [
            r#"{"max_retries": 2.5}"#,
            r#"{"max_retries": 99999999999999999999}"#,
            r#"{"api_key": 12}"#,
        ] {
            let path = write_config(&tmp, content);
            let err = load_config(&path).expect_err(content);
            assert!(matches!(err, LoadError::Parse { .. }), "{content}: got {err:?}");
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        for content in ["", "{", r#"{"api_key": "a",}"#, "[1, 2]", r#"{"api_key":"a"} extra"#] {
            let path = write_config(&tmp, content);
            let err = load_config(&path).expect_err(content);
            assert!(matches!(err, LoadError::Parse { .. }), "{content:?}: got {err:?}");
        }
    }

    #[test]
    fn test_array_document_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, r#"["postgres://x","abc123",5]"#);

        let err = load_config(&path).expect_err("array should not decode");
        assert!(
            matches!(err, LoadError::Parse { source: ParseError::Json(_), .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, r#"{"max_retries":1,"max_retries":2}"#);

        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.max_retries, 2);
    }

    #[test]
    fn test_case_insensitive_keys_and_null_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = write_config(&tmp, r#"{"Database_URL":"x","API_KEY":"k"}"#);
        let cfg = load_config(&path).expect("config");
        assert_eq!(cfg.database_url, "x");
        assert_eq!(cfg.api_key, "k");

        let path = write_config(&tmp, "null");
        assert_eq!(load_config(&path).expect("null config"), ConfigRecord::default());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_config(&tmp.path().join("config.json")).expect_err("missing");
        assert!(matches!(err, LoadError::FileOpen { .. }), "got {err:?}");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("out").join("config.json");
        let record = ConfigRecord {
            database_url: "mysql://user@host/db?x=\"y\"".into(),
            api_key: "k\u{e9}y".into(),
            max_retries: -4,
        };

        save_config(&path, &record).expect("save");
        assert_eq!(load_config(&path).expect("load"), record);
    }
}
