//! Core types for diagnostics produced by script rules.

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Severity level for reported diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding, does not fail analysis.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Origin of a rule, used by hosts for reporting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Rule shipped with the framework.
    Builtin,
    /// Rule supplied by a host or third-party module.
    External,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::External => write!(f, "external"),
        }
    }
}

/// A single point in script source text.
///
/// Line and column numbers are 1-indexed. The line text snippet is carried
/// so reporters can show the offending line without re-reading the script.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// File the position belongs to.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Text of the line the position sits on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_text: Option<String>,
}

impl SourcePosition {
    /// Creates a new position without a line snippet.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            line_text: None,
        }
    }

    /// Attaches the text of the line this position sits on.
    #[must_use]
    pub fn with_line_text(mut self, text: impl Into<String>) -> Self {
        self.line_text = Some(text.into());
        self
    }
}

/// A contiguous region of script source text.
///
/// `offset`/`length` describe the same region as a byte span and exist for
/// renderer integration (miette); they default to zero when a rule does not
/// track byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceExtent {
    /// Start of the region (inclusive).
    pub start: SourcePosition,
    /// End of the region (inclusive).
    pub end: SourcePosition,
    /// Byte offset of the region from the start of the script.
    pub offset: usize,
    /// Length of the region in bytes.
    pub length: usize,
}

impl SourceExtent {
    /// Creates a new extent from a start and end position.
    #[must_use]
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start,
            end,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte span for this extent.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }

    /// Returns the file this extent belongs to.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.start.file
    }
}

/// Suppression metadata a host may attach to or read from a diagnostic.
///
/// The framework carries this opaquely; matching suppressions against
/// diagnostics is host business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suppression {
    /// Identifier of the suppression that covers this diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form justification recorded with the suppression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl Suppression {
    /// Creates empty suppression metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the suppression identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the justification text.
    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }
}

/// A finding reported by a rule.
///
/// Produced fresh per violation and never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Fully qualified name of the rule that produced this finding.
    pub rule_name: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Region of the script this finding covers.
    pub extent: SourceExtent,
    /// Human-readable message.
    pub message: String,
    /// Path of the script the finding was produced for.
    pub script_path: PathBuf,
    /// Suppression metadata, when a host has attached any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppression: Option<Suppression>,
}

impl Diagnostic {
    /// Creates a new diagnostic. The script path is taken from the extent.
    #[must_use]
    pub fn new(
        rule_name: impl Into<String>,
        severity: Severity,
        extent: SourceExtent,
        message: impl Into<String>,
    ) -> Self {
        let script_path = extent.file().to_path_buf();
        Self {
            rule_name: rule_name.into(),
            severity,
            extent,
            message: message.into(),
            script_path,
            suppression: None,
        }
    }

    /// Attaches suppression metadata to this diagnostic.
    #[must_use]
    pub fn with_suppression(mut self, suppression: Suppression) -> Self {
        self.suppression = Some(suppression);
        self
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} at {}:{}:{}\n",
            self.rule_name,
            self.script_path.display(),
            self.extent.start.line,
            self.extent.start.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suppression) = &self.suppression {
            if let Some(id) = &suppression.id {
                let _ = writeln!(output, "  = suppressed by: {id}");
            }
        }
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.script_path.display(),
            self.extent.start.line,
            self.extent.start.column,
            self.severity,
            self.rule_name,
            self.message
        )
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich display.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        Self {
            message: d.message.clone(),
            span: SourceSpan::from((d.extent.offset, d.extent.length)),
            label_message: d.rule_name.clone(),
        }
    }
}
