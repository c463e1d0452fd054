// File: src/config.rs
use crate::core::classifier::DEFAULT_NGRAM_LENGTH;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LANGS: [&str; 4] = ["ru", "uk", "be", "fr"];
pub const DEFAULT_DOCUMENT_COUNT: usize = 50;
pub const DEFAULT_SAMPLE_LANG: &str = "ru";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one acquisition + classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub langs: Vec<String>,
    /// Reference documents requested per language.
    pub count: usize,
    pub ngram_length: usize,
    /// Language of the random page classified when no text is supplied.
    pub sample_lang: String,
    pub timeout_secs: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            langs: DEFAULT_LANGS.iter().map(|l| l.to_string()).collect(),
            count: DEFAULT_DOCUMENT_COUNT,
            ngram_length: DEFAULT_NGRAM_LENGTH,
            sample_lang: DEFAULT_SAMPLE_LANG.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RunConfig {
    /// Loads a JSON config; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.langs.is_empty() {
            return Err(Error::EmptyLanguageSet);
        }
        if self.ngram_length == 0 {
            return Err(Error::InvalidNgramLength(self.ngram_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_follow_reference_run() {
        let config = RunConfig::default();
        assert_eq!(config.langs, vec!["ru", "uk", "be", "fr"]);
        assert_eq!(config.count, 50);
        assert_eq!(config.ngram_length, 4);
        assert_eq!(config.sample_lang, "ru");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"langs": ["en", "de"], "ngram_length": 3}}"#).unwrap();
        let config = RunConfig::from_file(file.path()).unwrap();
        assert_eq!(config.langs, vec!["en", "de"]);
        assert_eq!(config.ngram_length, 3);
        assert_eq!(config.count, DEFAULT_DOCUMENT_COUNT);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "langs = ru").unwrap();
        assert!(matches!(RunConfig::from_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RunConfig::from_file(Path::new("/nonexistent/langfreq.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn validation_rejects_bad_settings() {
        let empty = RunConfig { langs: vec![], ..RunConfig::default() };
        assert!(matches!(empty.validate(), Err(Error::EmptyLanguageSet)));

        let zero = RunConfig { ngram_length: 0, ..RunConfig::default() };
        assert!(matches!(zero.validate(), Err(Error::InvalidNgramLength(0))));
    }
}
