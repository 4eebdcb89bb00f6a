//! Host-side registration for the built-in rules.
//!
//! Rules do not self-register: a host calls one of these factories (or
//! builds a [`Registry`] of its own) as an explicit step, then invokes only
//! the rules whose enablement its configuration switched on.

use script_lint_core::{Config, Configurable, Rule, RuleBox};

use crate::avoid_long_lines::AvoidLongLines;

/// Returns all built-in rules with their default configuration.
#[must_use]
pub fn builtin_rules() -> Vec<RuleBox> {
    vec![Box::new(AvoidLongLines::new())]
}

/// Returns all built-in rules with the host's settings bound.
///
/// Disabled rules are returned too - skipping them is the invocation-time
/// gate, and hosts may still want their metadata for reporting.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let mut rule = AvoidLongLines::new();
    if let Some(settings) = config.rule(rule.id()) {
        rule.configure(settings);
    }
    vec![Box::new(rule)]
}

/// An explicit collection of rules a host has registered.
#[derive(Default)]
pub struct Registry {
    rules: Vec<RuleBox>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding all built-in rules with defaults.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Creates a registry holding all built-in rules with settings bound.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            rules: configured_rules(config),
        }
    }

    /// Registers an additional rule.
    pub fn register(&mut self, rule: RuleBox) {
        self.rules.push(rule);
    }

    /// Looks a rule up by its id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == id)
            .map(AsRef::as_ref)
    }

    /// Iterates over every registered rule.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Iterates over the rules the host should actually invoke.
    pub fn enabled(&self) -> impl Iterator<Item = &dyn Rule> {
        self.iter().filter(|rule| rule.is_enabled())
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_populated() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("avoid-long-lines").is_some());
        assert!(registry.get("no-such-rule").is_none());
    }

    #[test]
    fn builtin_rules_are_disabled_until_configured() {
        let registry = Registry::builtin();
        assert_eq!(registry.enabled().count(), 0);

        let config = Config::parse("[rules.avoid-long-lines]\nenabled = true\n")
            .expect("settings should parse");
        let registry = Registry::from_config(&config);
        assert_eq!(registry.enabled().count(), 1);
    }

    #[test]
    fn from_config_binds_rule_options() {
        let config = Config::parse("[rules.avoid-long-lines]\nenabled = true\nline_length = 10\n")
            .expect("settings should parse");
        let registry = Registry::from_config(&config);

        let rule = registry.get("avoid-long-lines").expect("rule registered");
        let script = script_lint_core::ParsedScript::new("a.sh", "0123456789X");
        let diagnostics = rule.analyze(Some(&script)).expect("analyze succeeds");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn register_appends_external_rules() {
        struct Noop;
        impl Rule for Noop {
            fn id(&self) -> &'static str {
                "noop"
            }
            fn name(&self) -> String {
                "External.Noop".to_string()
            }
            fn common_name(&self) -> String {
                "Noop".to_string()
            }
            fn description(&self) -> String {
                "Does nothing".to_string()
            }
            fn analyze(
                &self,
                script: Option<&script_lint_core::ParsedScript>,
            ) -> Result<Vec<script_lint_core::Diagnostic>, script_lint_core::RuleError> {
                script.ok_or(script_lint_core::RuleError::MissingScript { rule: "noop" })?;
                Ok(Vec::new())
            }
        }

        let mut registry = Registry::builtin();
        registry.register(Box::new(Noop));
        assert_eq!(registry.len(), 2);
        assert!(registry.get("noop").is_some());
    }
}
