//! Layered configuration for moodlex.
//!
//! `defaults/moodlex.default.toml` is embedded into the binary so that the documented defaults
//! and the runtime behavior stay in sync. Callers layer a TOML file, `MOODLEX_*` environment
//! variables and explicit overrides on top via [`Loader`] before deserializing into
//! [`MoodlexConfig`].

use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::scorer::{Scorer, ScoringParams};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_TOML: &str = include_str!("../defaults/moodlex.default.toml");

/// Prefix of environment overrides, e.g. `MOODLEX_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "MOODLEX";

/// Top-level configuration consumed by the binary and the server.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodlexConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub scoring: ScoringParams,
    pub lexicon: LexiconConfig,
}

impl MoodlexConfig {
    /// Build the scorer this configuration describes.
    ///
    /// The lexicon is materialized here, once; without extra words the shared standard
    /// lexicon is reused as-is.
    pub fn scorer(&self) -> Scorer {
        let standard = Lexicon::standard();
        let lexicon = if self.lexicon.is_empty() {
            standard
        } else {
            Arc::new(standard.extended(&self.lexicon.extra_positive, &self.lexicon.extra_negative))
        };
        Scorer::new(lexicon, self.scoring)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allow_any_origin: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

/// Words merged into the standard lexicon at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_positive: Vec<String>,
    #[serde(default)]
    pub extra_negative: Vec<String>,
}

impl LexiconConfig {
    pub fn is_empty(&self) -> bool {
        self.extra_positive.is_empty() && self.extra_negative.is_empty()
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `MOODLEX_<SECTION>__<KEY>` environment variables.
    ///
    /// Word lists are comma-separated, e.g. `MOODLEX_LEXICON__EXTRA_POSITIVE=stellar,superb`.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("lexicon.extra_positive")
            .with_list_parse_key("lexicon.extra_negative");
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<MoodlexConfig, ConfigError> {
        let config: MoodlexConfig = self.builder.build()?.try_deserialize()?;
        config
            .scoring
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MoodlexConfig, ConfigError> {
    Loader::new().build()
}
