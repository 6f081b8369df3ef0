//! # CLI Configuration
//!
//! Layered configuration, lowest precedence first:
//!
//! 1. Built-in defaults.
//! 2. YAML file passed with `--config`.
//! 3. `REFCERT_OUTPUT` environment variable.
//! 4. Explicit command-line flags.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Environment variable overriding the output format.
pub const OUTPUT_ENV: &str = "REFCERT_OUTPUT";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Report format.
    pub output: OutputFormat,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl CliConfig {
    /// Read a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(raw) = lookup(OUTPUT_ENV) {
            self.output = OutputFormat::from_str(raw.trim(), true)
                .map_err(|e| anyhow::anyhow!("invalid {OUTPUT_ENV}={raw:?}: {e}"))?;
        }
        Ok(self)
    }

    /// Resolve all layers.
    pub fn resolve(
        config_path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
        output_flag: Option<OutputFormat>,
        log_json_flag: bool,
    ) -> Result<Self> {
        let base = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let mut config = base.with_env(lookup)?;
        if let Some(output) = output_flag {
            config.output = output;
        }
        config.log_json |= log_json_flag;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_layers() {
        let config = CliConfig::resolve(None, no_env, None, false).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn file_layer() {
        let file = write_config("output: json\nlog_json: true\n");
        let config = CliConfig::resolve(Some(file.path()), no_env, None, false).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.log_json);
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("   \n");
        assert_eq!(CliConfig::from_file(file.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_fields_rejected() {
        let file = write_config("output: json\ncolour: true\n");
        assert!(CliConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn missing_file_rejected() {
        let err = CliConfig::from_file(Path::new("/nonexistent/refcert.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn env_overrides_file_and_flag_overrides_env() {
        let file = write_config("output: text\n");
        let env = |key: &str| (key == OUTPUT_ENV).then(|| "JSON".to_string());
        let config = CliConfig::resolve(Some(file.path()), env, None, false).unwrap();
        assert_eq!(config.output, OutputFormat::Json);

        let config =
            CliConfig::resolve(Some(file.path()), env, Some(OutputFormat::Text), false).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn invalid_env_value_rejected() {
        let env = |_: &str| Some("xml".to_string());
        let err = CliConfig::resolve(None, env, None, false).unwrap_err();
        assert!(err.to_string().contains(OUTPUT_ENV));
    }
}
