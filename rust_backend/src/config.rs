//! Report configuration file support.
//!
//! This module reads report settings from TOML configuration files.
//!
//! ```toml
//! [conflicts]
//! day_break_back_to_back = false
//! back_to_back_distance = 67.0
//!
//! [distance]
//! ellipsoid = "wgs84"
//! speed = 67.0
//!
//! [report]
//! parallel = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithms::conflicts::ConflictSettings;
use crate::core::error::ReportError;
use crate::distance::DistanceSettings;

/// Report configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub conflicts: ConflictSettings,
    #[serde(default)]
    pub distance: DistanceSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

/// Report generation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Spread instructors over worker threads.
    #[serde(default)]
    pub parallel: bool,
}

impl ReportConfig {
    /// Load report configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ReportConfig)` if successful
    /// * `Err(ReportError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ReportError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        content.parse()
    }

    /// Load report configuration from the default location.
    ///
    /// Searches for `examtt.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists. A file that exists but does
    /// not parse or validate is an error.
    pub fn from_default_location() -> Result<Option<Self>, ReportError> {
        Self::from_first_existing(&[
            PathBuf::from("examtt.toml"),
            PathBuf::from("rust_backend/examtt.toml"),
            PathBuf::from("../examtt.toml"),
        ])
    }

    /// Load the first of `candidates` that exists, if any.
    pub fn from_first_existing(candidates: &[PathBuf]) -> Result<Option<Self>, ReportError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Check value ranges that the TOML types cannot express.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.conflicts.back_to_back_distance.is_finite() {
            return Err(ReportError::ConfigurationError(
                "'conflicts.back_to_back_distance' must be a finite number".to_string(),
            ));
        }
        if self.distance.speed.is_nan() || self.distance.speed <= 0.0 {
            return Err(ReportError::ConfigurationError(format!(
                "'distance.speed' must be positive, got {}",
                self.distance.speed
            )));
        }
        if self.distance.null_distance < 0.0 {
            return Err(ReportError::ConfigurationError(format!(
                "'distance.null_distance' must not be negative, got {}",
                self.distance.null_distance
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for ReportConfig {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ReportConfig = toml::from_str(s).map_err(|e| {
            ReportError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Ellipsoid;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ReportConfig = "".parse().unwrap();
        assert!(!config.conflicts.day_break_back_to_back);
        assert_eq!(config.conflicts.back_to_back_distance, -1.0);
        assert_eq!(config.distance.ellipsoid, Ellipsoid::Legacy);
        assert_eq!(config.distance.speed, 67.0);
        assert_eq!(config.distance.null_distance, 10_000.0);
        assert!(!config.report.parallel);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[conflicts]
day_break_back_to_back = true
back_to_back_distance = 67.0

[distance]
ellipsoid = "wgs84"
speed = 80.0
null_distance = 5000.0

[report]
parallel = true
"#;

        let config: ReportConfig = toml.parse().unwrap();
        assert!(config.conflicts.day_break_back_to_back);
        assert_eq!(config.conflicts.back_to_back_distance, 67.0);
        assert_eq!(config.distance.ellipsoid, Ellipsoid::Wgs84);
        assert_eq!(config.distance.speed, 80.0);
        assert!(config.report.parallel);
    }

    #[test]
    fn test_unknown_ellipsoid_is_rejected() {
        let toml = r#"
[distance]
ellipsoid = "mars"
"#;
        let result: Result<ReportConfig, _> = toml.parse();
        assert!(matches!(result, Err(ReportError::ConfigurationError(_))));
    }

    #[test]
    fn test_non_positive_speed_is_rejected() {
        let toml = r#"
[distance]
speed = 0.0
"#;
        assert!(toml.parse::<ReportConfig>().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[conflicts]\nback_to_back_distance = 10.0").unwrap();
        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.conflicts.back_to_back_distance, 10.0);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = ReportConfig::from_file("/nonexistent/examtt.toml");
        assert!(matches!(result, Err(ReportError::ConfigurationError(_))));
    }

    #[test]
    fn test_no_candidate_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = [dir.path().join("examtt.toml")];
        assert_eq!(ReportConfig::from_first_existing(&candidates).unwrap(), None);
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.toml");
        std::fs::write(&second, "[conflicts]\nday_break_back_to_back = true\n").unwrap();
        let candidates = [dir.path().join("first.toml"), second];
        let config = ReportConfig::from_first_existing(&candidates).unwrap().unwrap();
        assert!(config.conflicts.day_break_back_to_back);
    }

    #[test]
    fn test_invalid_candidate_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("examtt.toml");
        std::fs::write(&path, "[distance]\nspeed = 0.0\n").unwrap();
        let result = ReportConfig::from_first_existing(&[path]);
        assert!(matches!(result, Err(ReportError::ConfigurationError(_))));
    }
}
