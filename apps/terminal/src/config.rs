//! Application configuration from environment variables.

use std::path::PathBuf;
use terminology_core::types::StudySettings;
use thiserror::Error;

const SOURCE_VAR: &str = "MEDTERMS_SOURCE";
const DB_VAR: &str = "MEDTERMS_DB";
const CARD_COUNT_VAR: &str = "MEDTERMS_CARD_COUNT";
const SECTIONS_VAR: &str = "MEDTERMS_SECTIONS";
const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_SOURCE: &str = "medical-terms.md";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Markdown terminology file.
    pub source_path: PathBuf,
    /// Quiz history database.
    pub db_path: PathBuf,
    pub study: StudySettings,
    /// Sections to study; empty means all.
    pub sections: Vec<String>,
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_path = lookup(SOURCE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));

        let db_path = lookup(DB_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let study = match lookup(CARD_COUNT_VAR) {
            Some(value) => {
                let count = value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                    var: CARD_COUNT_VAR,
                    value: value.clone(),
                })?;
                StudySettings::with_card_count(count)
            }
            None => StudySettings::default(),
        };

        let sections = lookup(SECTIONS_VAR)
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            source_path,
            db_path,
            study,
            sections,
            log_filter,
        })
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("medterms")
        .join("history.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.source_path, PathBuf::from("medical-terms.md"));
        assert!(config.db_path.ends_with("medterms/history.db"));
        assert_eq!(config.study, StudySettings::default());
        assert!(config.sections.is_empty());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn reads_all_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MEDTERMS_SOURCE", "/data/terms.md"),
            ("MEDTERMS_DB", "/tmp/h.db"),
            ("MEDTERMS_CARD_COUNT", " 25 "),
            ("MEDTERMS_SECTIONS", "Prefixes, Suffixes,,"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.source_path, PathBuf::from("/data/terms.md"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/h.db"));
        assert_eq!(config.study.card_count, 25);
        assert_eq!(config.sections, vec!["Prefixes", "Suffixes"]);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn card_count_is_clamped() {
        let config = AppConfig::from_lookup(lookup_from(&[("MEDTERMS_CARD_COUNT", "1")])).unwrap();
        assert_eq!(config.study.card_count, StudySettings::MIN_CARD_COUNT);
    }

    #[test]
    fn rejects_invalid_card_count() {
        let result = AppConfig::from_lookup(lookup_from(&[("MEDTERMS_CARD_COUNT", "lots")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidValue {
                var: "MEDTERMS_CARD_COUNT",
                value: "lots".to_string()
            })
        );
    }
}
