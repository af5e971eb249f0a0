//! File-based flag set configuration.
//!
//! A configuration names the flag set and optionally lists the flag names it
//! admits. It can be written as YAML or JSON.
//!
//! # Example YAML
//!
//! ```yaml
//! name: deploy
//! expected:
//!   - env
//!   - region
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::parser::FlagSet;
use crate::types::Expected;

/// Serializable settings for a [`FlagSet`].
///
/// # Examples
///
/// ```
/// use genericflag_core::FlagSetConfig;
///
/// let config: FlagSetConfig = serde_json::from_str(r#"{"name": "build"}"#).unwrap();
/// let flags = config.into_flag_set();
/// assert_eq!(flags.name(), "build");
/// assert!(flags.expected().admits("anything"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSetConfig {
    /// Flag set label.
    pub name: String,
    /// Flag names to admit (empty = admit all).
    #[serde(default)]
    pub expected: Vec<String>,
}

impl FlagSetConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: Vec::new(),
        }
    }

    /// Loads configuration from a YAML or JSON file.
    ///
    /// Files ending in `.json` are read as JSON; anything else is read as
    /// YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] / [`ConfigError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: Self = if is_json {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };

        debug!(
            path = %path.display(),
            name = %config.name,
            expected = config.expected.len(),
            "loaded flag set config"
        );
        Ok(config)
    }

    /// Admission mode described by this configuration.
    pub fn expected(&self) -> Expected {
        Expected::from_names(self.expected.iter().cloned())
    }

    /// Builds an empty flag set from this configuration.
    pub fn into_flag_set(self) -> FlagSet {
        let expected = self.expected();
        FlagSet::new(self.name).with_expected(expected)
    }
}

impl From<FlagSetConfig> for FlagSet {
    fn from(config: FlagSetConfig) -> Self {
        config.into_flag_set()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("failed to write config");
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(".yaml", "name: deploy\nexpected:\n  - env\n  - region\n");
        let config = FlagSetConfig::load(file.path()).unwrap();

        assert_eq!(config.name, "deploy");
        assert_eq!(config.expected, vec!["env".to_string(), "region".to_string()]);
        assert_eq!(
            config.expected(),
            Expected::Restricted(vec!["env".to_string(), "region".to_string()])
        );
    }

    #[test]
    fn test_load_json_without_expected() {
        let file = write_config(".json", r#"{"name": "build"}"#);
        let config = FlagSetConfig::load(file.path()).unwrap();

        assert_eq!(config, FlagSetConfig::new("build"));
        assert_eq!(config.expected(), Expected::Unrestricted);
    }

    #[test]
    fn test_load_missing_file() {
        let err = FlagSetConfig::load("/nonexistent/genericflag.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_config(".json", "{ not json");
        let err = FlagSetConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let file = write_config(".yml", "expected: [a, b\n");
        let err = FlagSetConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_into_flag_set() {
        let mut config = FlagSetConfig::new("deploy");
        config.expected.push("env".into());

        let mut flags: FlagSet = config.into();
        flags.parse(["--env", "prod", "--force"]).unwrap();

        assert_eq!(flags.name(), "deploy");
        assert_eq!(flags.values("env"), Some(&["prod".to_string()][..]));
        assert_eq!(flags.args(), &["--force".to_string()]);
    }
}
