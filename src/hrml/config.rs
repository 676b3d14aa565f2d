//! Layered configuration for the hrml tool.
//!
//! `defaults/hrml.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. Callers layer a user file and command-line overrides on top of those
//! defaults via [`Loader`] before deserializing into [`HrmlConfig`].

use super::parser::{CloseTagPolicy, DuplicatePolicy, ParserOptions};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/hrml.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct HrmlConfig {
    pub log: LogConfig,
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
}

/// Verbosity of the diagnostics sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Off,
    #[serde(alias = "w")]
    Warning,
    #[serde(alias = "i")]
    Info,
}

impl LogLevel {
    /// Filter directive for `tracing-subscriber`'s `EnvFilter`
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Warning => "hrml=warn",
            LogLevel::Info => "hrml=info",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub close_tags: CloseTagPolicy,
    pub duplicate_siblings: DuplicatePolicy,
}

impl From<&ParserConfig> for ParserOptions {
    fn from(config: &ParserConfig) -> Self {
        ParserOptions {
            close_tags: config.close_tags,
            duplicate_siblings: config.duplicate_siblings,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<HrmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<HrmlConfig, ConfigError> {
    Loader::new().build()
}
