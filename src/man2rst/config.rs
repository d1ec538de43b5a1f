//! Configuration loading
//!
//! `defaults/man2rst.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. User files and CLI
//! overrides are layered on top via [`Loader`] before deserializing into
//! [`Man2RstConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/man2rst.default.toml");

/// Widest accepted `indent_width`; nested `.RS` levels multiply it.
pub const MAX_INDENT_WIDTH: usize = 64;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Man2RstConfig {
    pub convert: ConvertConfig,
}

/// Knobs of the conversion passes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConvertConfig {
    /// Columns added per `.RS` level
    pub indent_width: usize,
    pub title_underline: char,
    pub section_underline: char,
    /// Fail on `.RE` without a matching `.RS` instead of warning
    pub strict_nesting: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            indent_width: 2,
            title_underline: '=',
            section_underline: '-',
            strict_nesting: false,
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

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<Man2RstConfig, ConfigError> {
        let config: Man2RstConfig = self.builder.build()?.try_deserialize()?;
        if config.convert.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Message(format!(
                "convert.indent_width must be at most {}, got {}",
                MAX_INDENT_WIDTH, config.convert.indent_width
            )));
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
