//! Shared configuration loader for regex-automaton consumers.
//!
//! `defaults/regex.default.toml` is embedded into every binary so the
//! documented defaults and the runtime behavior cannot drift. Applications
//! layer their own files on top via [`Loader`] before deserializing into
//! [`RegexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use log::debug;
use regex_automaton::regex::analysis::ReachabilityChecker;
use regex_automaton::regex::ast::{AstError, FlagSet, RegexDialect, RegexFeature, RegexSource};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/regex.default.toml");

/// Top-level configuration consumed by analyses.
#[derive(Debug, Clone, Deserialize)]
pub struct RegexConfig {
    pub dialect: DialectConfig,
    pub flags: FlagsConfig,
    pub analysis: AnalysisConfig,
}

/// Which flavor patterns are written in.
#[derive(Debug, Clone, Deserialize)]
pub struct DialectConfig {
    pub name: RegexDialect,
    pub extra_features: Vec<RegexFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlagsConfig {
    /// Inline-flag letters, e.g. `"im"`
    pub initial: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    pub reachability_cache_limit: usize,
    pub reachability_default_answer: bool,
}

impl RegexConfig {
    /// A source for `pattern` in the configured dialect, extra features included
    pub fn source_for(&self, pattern: &str) -> RegexSource {
        RegexSource::new(pattern, self.dialect.name)
            .with_features(self.dialect.extra_features.iter().copied())
    }

    /// The flags active at the start of every pattern
    pub fn initial_flags(&self) -> Result<FlagSet, AstError> {
        FlagSet::from_letters(&self.flags.initial)
    }

    pub fn reachability_checker(&self) -> ReachabilityChecker {
        ReachabilityChecker::new(self.analysis.reachability_default_answer)
            .with_cache_limit(self.analysis.reachability_cache_limit)
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

    /// Layer an optional configuration file, ignored when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `("dialect.name", "php")`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RegexConfig, ConfigError> {
        let config: RegexConfig = self.builder.build()?.try_deserialize()?;
        debug!(
            "Loaded regex config: dialect {:?}, initial flags `{}`",
            config.dialect.name, config.flags.initial
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RegexConfig, ConfigError> {
    Loader::new().build()
}
