//! # script-lint-rules
//!
//! Built-in rules for script-lint.
//!
//! ## Available Rules
//!
//! | Name | Description |
//! |------|-------------|
//! | `avoid-long-lines` | Flags lines longer than the configured maximum |
//!
//! ## Usage
//!
//! ```ignore
//! use script_lint_core::{Config, ParsedScript};
//! use script_lint_rules::Registry;
//!
//! let config = Config::parse(settings_toml)?;
//! let registry = Registry::from_config(&config);
//! let script = ParsedScript::new(path, source_text);
//! for rule in registry.enabled() {
//!     let diagnostics = rule.analyze(Some(&script))?;
//!     // aggregate and report ...
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod avoid_long_lines;
mod catalog;
mod registry;

pub use avoid_long_lines::{AvoidLongLines, AvoidLongLinesConfig};
pub use catalog::default_catalog;
pub use registry::{builtin_rules, configured_rules, Registry};

/// Re-export core types for convenience.
pub use script_lint_core::{Diagnostic, ParsedScript, Rule, Severity};
