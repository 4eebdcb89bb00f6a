//! # script-lint-core
//!
//! Core framework for script linting.
//!
//! This crate provides the foundational traits and types for building script
//! analyzers. It includes:
//!
//! - [`Rule`] trait, the uniform contract hosts invoke per parsed script
//! - [`ParsedScript`], the read-only unit the host's parser produces
//! - [`Diagnostic`] with position-accurate [`SourceExtent`]s
//! - [`Config`]/[`RuleConfig`] and the declarative [`ParamSpec`] schema
//! - [`MessageCatalog`], the localized string boundary
//!
//! ## Example
//!
//! ```ignore
//! use script_lint_core::{Config, ParsedScript};
//! use script_lint_rules::configured_rules;
//!
//! let config = Config::parse(settings_toml)?;
//! let script = ParsedScript::new(path, source_text);
//! for rule in configured_rules(&config) {
//!     if !rule.is_enabled() {
//!         continue;
//!     }
//!     let diagnostics = rule.analyze(Some(&script))?;
//!     // aggregate and report ...
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod resources;
mod rule;
mod script;
mod types;

pub use config::{
    Config, ConfigError, Configurable, ParamKind, ParamSpec, ParamValue, RuleConfig,
};
pub use resources::{format_message, keys, Locale, MessageCatalog, StringTable, DEFAULT_LOCALE};
pub use rule::{Rule, RuleBox, RuleError};
pub use script::ParsedScript;
pub use types::{
    Diagnostic, DiagnosticReport, Severity, SourceExtent, SourceKind, SourcePosition, Suppression,
};
