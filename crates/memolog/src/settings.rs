//! Layered configuration: defaults, then an optional file, then environment.
//!
//! Environment variables use the `MEMOLOG_` prefix, e.g.
//! `MEMOLOG_CONTEXT_LENGTH=80`.

use config::{Config, Environment, File};
use memolog_core::{AnalysisConfig, Error, Result};
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "MEMOLOG";

/// Load analysis settings, validating the merged result.
pub fn load_settings(file: Option<&Path>) -> Result<AnalysisConfig> {
    let defaults = Config::try_from(&AnalysisConfig::default())
        .map_err(|e| Error::config_error(format!("Invalid defaults: {}", e)))?;

    let mut builder = Config::builder().add_source(defaults);

    if let Some(path) = file {
        log::debug!("Reading settings from {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let settings: AnalysisConfig = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| Error::config_error(e.to_string()))?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.link_class, "memolog-link");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "link_class = \"ref\"\nmax_suggestions = 5").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.link_class, "ref");
        assert_eq!(settings.max_suggestions, 5);
        assert_eq!(settings.context_length, 50);
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "suggestion_threshold = 2.0").unwrap();

        let err = load_settings(Some(file.path())).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }
}
