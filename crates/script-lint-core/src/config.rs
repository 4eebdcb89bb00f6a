//! Configuration surface bound by the host before analysis runs.
//!
//! Rules never read configuration sources themselves: the host loads a
//! [`Config`], looks up the [`RuleConfig`] for each rule id, and binds it
//! through [`Configurable::configure`] before the first `analyze` call.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Top-level settings a host binds into its rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-rule configurations, keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content)?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks whether a rule is enabled.
    ///
    /// Rules here are opt-in: a rule with no configuration entry, or with no
    /// explicit `enabled` flag, stays disabled.
    #[must_use]
    pub fn is_rule_enabled(&self, id: &str) -> bool {
        self.rules.get(id).and_then(|c| c.enabled).unwrap_or(false)
    }

    /// Returns the configuration entry for a rule, if any.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&RuleConfig> {
        self.rules.get(id)
    }
}

/// Per-rule configuration as the host's settings file declares it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override. Rules with a fixed severity ignore this.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// The type of a declared rule option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Boolean option.
    Bool,
    /// Integer option.
    Int,
    /// String option.
    Str,
}

/// The value of a declared rule option.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// String value.
    Str(String),
}

impl ParamValue {
    /// Returns the boolean value, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

/// Declaration of one named, typed, defaulted rule option.
///
/// Rules publish their schema through [`Configurable::parameters`] so hosts
/// can surface and validate settings without reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Option name as it appears in the settings file.
    pub name: &'static str,
    /// Option type.
    pub kind: ParamKind,
    /// Value used when the host does not bind one.
    pub default: ParamValue,
}

impl ParamSpec {
    /// Creates a new option declaration.
    #[must_use]
    pub fn new(name: &'static str, kind: ParamKind, default: ParamValue) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }
}

/// A rule whose behavior is bound from host settings.
pub trait Configurable {
    /// Returns the declared option schema for this rule.
    fn parameters(&self) -> Vec<ParamSpec>;

    /// Binds a settings entry into this rule.
    ///
    /// Called by the host before the first `analyze` invocation; must not be
    /// called concurrently with an in-flight analysis on the same instance.
    fn configure(&mut self, settings: &RuleConfig);
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a settings file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a settings file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
