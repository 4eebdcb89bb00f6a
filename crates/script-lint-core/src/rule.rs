//! Rule contract every script analyzer implements.

use crate::script::ParsedScript;
use crate::types::{Diagnostic, Severity, SourceKind};
use thiserror::Error;

/// Errors surfaced by a rule invocation.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule was invoked without a parsed script.
    ///
    /// Hosts keep one parse outcome per file, and a file that failed to
    /// parse has no unit; handing that absence to a rule is a caller error,
    /// not an empty result.
    #[error("rule `{rule}` was invoked without a parsed script")]
    MissingScript {
        /// Identifier of the rule that was invoked.
        rule: &'static str,
    },
}

/// A self-contained script analyzer.
///
/// Hosts discover rules through a registry, bind configuration before any
/// invocation, and call [`Rule::analyze`] once per parsed script. Rules carry
/// no per-invocation state, so one instance may be reused across many
/// scripts; concurrent calls on a shared instance are safe as long as the
/// host is not mutating configuration at the same time.
///
/// # Example
///
/// ```ignore
/// use script_lint_core::{Diagnostic, ParsedScript, Rule, RuleError};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn id(&self) -> &'static str { "no-tabs" }
///
///     fn analyze(&self, script: Option<&ParsedScript>)
///         -> Result<Vec<Diagnostic>, RuleError>
///     {
///         let script = script.ok_or(RuleError::MissingScript { rule: self.id() })?;
///         // walk script.text() ...
///         Ok(Vec::new())
///     }
///     // metadata methods elided
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable kebab-case identifier used as the configuration
    /// and registry key (e.g. "avoid-long-lines").
    fn id(&self) -> &'static str;

    /// Returns the fully qualified display name, combining the source label
    /// with the rule's own label (e.g. "ScriptLint.AvoidLongLines").
    fn name(&self) -> String;

    /// Returns the human-readable display name.
    fn common_name(&self) -> String;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> String;

    /// Returns the severity this rule reports with.
    fn severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns where this rule comes from.
    fn source_kind(&self) -> SourceKind {
        SourceKind::Builtin
    }

    /// Whether the host should invoke this rule at all.
    ///
    /// Enablement is a host-side gate: `analyze` does not re-check it.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Analyzes one parsed script and returns the findings in source order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingScript`] when invoked with `None`,
    /// before any processing; no partial results accompany the error.
    fn analyze(&self, script: Option<&ParsedScript>) -> Result<Vec<Diagnostic>, RuleError>;
}

/// Type alias for boxed [`Rule`] trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SourceExtent, SourcePosition};

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn name(&self) -> String {
            "ScriptLint.TestRule".to_string()
        }
        fn common_name(&self) -> String {
            "Test rule".to_string()
        }
        fn description(&self) -> String {
            "A rule used to exercise the contract".to_string()
        }

        fn analyze(&self, script: Option<&ParsedScript>) -> Result<Vec<Diagnostic>, RuleError> {
            let script = script.ok_or(RuleError::MissingScript { rule: self.id() })?;
            let extent = SourceExtent::new(
                SourcePosition::new(script.path(), 1, 1),
                SourcePosition::new(script.path(), 1, 1),
            );
            Ok(vec![Diagnostic::new(
                self.name(),
                self.severity(),
                extent,
                "test finding",
            )])
        }
    }

    #[test]
    fn metadata_defaults() {
        let rule = TestRule;
        assert_eq!(rule.id(), "test-rule");
        assert_eq!(rule.severity(), Severity::Warning);
        assert_eq!(rule.source_kind(), SourceKind::Builtin);
        assert!(rule.is_enabled());
    }

    #[test]
    fn analyze_produces_diagnostics() {
        let script = ParsedScript::new("a.sh", "echo hi\n");
        let diagnostics = TestRule.analyze(Some(&script)).expect("analyze succeeds");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_name, "ScriptLint.TestRule");
    }

    #[test]
    fn analyze_without_script_is_an_error() {
        let err = TestRule.analyze(None).expect_err("must reject missing script");
        assert!(matches!(err, RuleError::MissingScript { rule: "test-rule" }));
    }

    #[test]
    fn rules_are_object_safe() {
        let rule: RuleBox = Box::new(TestRule);
        assert_eq!(rule.id(), "test-rule");
    }
}
