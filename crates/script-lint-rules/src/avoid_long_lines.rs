//! Rule that flags lines exceeding a configured maximum length.
//!
//! # Rationale
//!
//! Long lines hurt readability in editors, terminals, and side-by-side
//! diffs. This rule reports every line whose character count is strictly
//! greater than the configured maximum.
//!
//! # Configuration
//!
//! - `enabled`: whether the host invokes this rule (default: false)
//! - `line_length`: maximum allowed characters per line (default: 120)

use std::sync::Arc;

use script_lint_core::{
    format_message, keys, Configurable, Diagnostic, Locale, MessageCatalog, ParamKind, ParamSpec,
    ParamValue, ParsedScript, Rule, RuleConfig, RuleError, Severity, SourceExtent, SourceKind,
    SourcePosition,
};
use tracing::debug;

/// Rule id for avoid-long-lines (configuration and registry key).
pub const ID: &str = "avoid-long-lines";

/// Resource keys this rule requests from the message catalog.
pub mod resource {
    /// Violation message template; `{0}` is the configured maximum.
    pub const MESSAGE: &str = "avoid-long-lines.message";
    /// Rule label combined with the source label into the qualified name.
    pub const LABEL: &str = "avoid-long-lines.label";
    /// Human-readable display name.
    pub const COMMON_NAME: &str = "avoid-long-lines.common-name";
    /// Rule description.
    pub const DESCRIPTION: &str = "avoid-long-lines.description";
}

/// Configuration for the maximum line length.
#[derive(Debug, Clone)]
pub struct AvoidLongLinesConfig {
    /// Whether the host should invoke this rule.
    pub enabled: bool,
    /// Maximum allowed characters per line.
    pub line_length: usize,
}

impl Default for AvoidLongLinesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            line_length: 120,
        }
    }
}

/// Flags lines longer than the configured maximum.
#[derive(Debug, Clone)]
pub struct AvoidLongLines {
    config: AvoidLongLinesConfig,
    messages: Arc<dyn MessageCatalog>,
    locale: Locale,
}

impl Default for AvoidLongLines {
    fn default() -> Self {
        Self::new()
    }
}

impl AvoidLongLines {
    /// Creates the rule with default settings and the builtin catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AvoidLongLinesConfig::default(),
            messages: Arc::new(crate::catalog::default_catalog()),
            locale: Locale::default(),
        }
    }

    /// Sets whether the host should invoke this rule.
    #[must_use]
    pub fn enable(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Sets the maximum allowed characters per line.
    ///
    /// Zero is accepted: under strict greater-than comparison it flags every
    /// non-empty line.
    #[must_use]
    pub fn line_length(mut self, max: usize) -> Self {
        self.config.line_length = max;
        self
    }

    /// Replaces the message catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn MessageCatalog>) -> Self {
        self.messages = catalog;
        self
    }

    /// Sets the locale used for catalog lookups.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the configured maximum line length.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.config.line_length
    }

    fn resource(&self, key: &str) -> String {
        // Unknown keys degrade to the key itself so metadata stays total.
        self.messages
            .template(&self.locale, key)
            .unwrap_or(key)
            .to_string()
    }

    fn source_label(&self) -> String {
        let key = match self.source_kind() {
            SourceKind::Builtin => keys::SOURCE_BUILTIN,
            SourceKind::External => keys::SOURCE_EXTERNAL,
        };
        self.resource(key)
    }
}

impl Configurable for AvoidLongLines {
    fn parameters(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec::new("enabled", ParamKind::Bool, ParamValue::Bool(false)),
            ParamSpec::new("line_length", ParamKind::Int, ParamValue::Int(120)),
        ]
    }

    fn configure(&mut self, settings: &RuleConfig) {
        // The severity field of the settings entry is ignored: this rule's
        // severity is fixed.
        if let Some(enabled) = settings.enabled {
            self.config.enabled = enabled;
        }
        let fallback = i64::try_from(self.config.line_length).unwrap_or(i64::MAX);
        let max = settings.get_int("line_length", fallback);
        self.config.line_length = usize::try_from(max).unwrap_or(0);
    }
}

impl Rule for AvoidLongLines {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> String {
        format_message(
            &self.resource(keys::NAME_FORMAT),
            &[&self.source_label(), &self.resource(resource::LABEL)],
        )
    }

    fn common_name(&self) -> String {
        self.resource(resource::COMMON_NAME)
    }

    fn description(&self) -> String {
        self.resource(resource::DESCRIPTION)
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn source_kind(&self) -> SourceKind {
        SourceKind::Builtin
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    fn analyze(&self, script: Option<&ParsedScript>) -> Result<Vec<Diagnostic>, RuleError> {
        let script = script.ok_or(RuleError::MissingScript { rule: ID })?;

        let message = format_message(
            &self.resource(resource::MESSAGE),
            &[&self.config.line_length],
        );
        let rule_name = self.name();

        let mut diagnostics = Vec::new();
        let mut offset = 0usize;

        // `\n` is the line boundary; a preceding `\r` belongs to the
        // boundary, not the line. A trailing boundary yields a final empty
        // line, which can never exceed the maximum.
        for (index, raw) in script.text().split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let width = line.chars().count();

            if width > self.config.line_length {
                let line_number = index + 1;
                let start =
                    SourcePosition::new(script.path(), line_number, 1).with_line_text(line);
                let end =
                    SourcePosition::new(script.path(), line_number, width).with_line_text(line);
                let extent = SourceExtent::new(start, end).with_span(offset, line.len());

                diagnostics.push(Diagnostic::new(
                    rule_name.clone(),
                    self.severity(),
                    extent,
                    message.clone(),
                ));
            }

            offset += raw.len() + 1;
        }

        debug!(
            "avoid-long-lines: {} violation(s) in {}",
            diagnostics.len(),
            script.path().display()
        );

        Ok(diagnostics)
    }
}
