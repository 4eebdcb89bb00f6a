//! Localized string resources for rule metadata and messages.
//!
//! The framework never embeds user-facing English text: rules request
//! templates from a [`MessageCatalog`] by key and locale, and a host (or the
//! builtin table shipped with the rules crate) owns the actual strings.

use std::collections::HashMap;
use std::fmt;

/// Locale tag of the fallback table.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Well-known resource keys shared by all rules.
pub mod keys {
    /// Template combining a source label and a rule label into a display
    /// name, e.g. `{0}.{1}`.
    pub const NAME_FORMAT: &str = "rule.name-format";
    /// Display label for builtin rules.
    pub const SOURCE_BUILTIN: &str = "source.builtin";
    /// Display label for externally supplied rules.
    pub const SOURCE_EXTERNAL: &str = "source.external";
}

/// A culture tag such as `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a culture tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the culture tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of localized templates, keyed by identifier and locale.
///
/// Implementations decide their own fallback policy; returning `None` means
/// the key is unknown everywhere, and callers degrade to the key itself
/// rather than failing.
pub trait MessageCatalog: Send + Sync + fmt::Debug {
    /// Returns the raw template for `key` in `locale`, if known.
    fn template(&self, locale: &Locale, key: &str) -> Option<&str>;
}

/// In-memory catalog implementation: one string table per locale, with
/// fallback to [`DEFAULT_LOCALE`].
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template for a key in a locale, replacing any previous value.
    pub fn add_string(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        locale: &Locale,
    ) {
        self.entries
            .entry(locale.as_str().to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    fn lookup(&self, tag: &str, key: &str) -> Option<&str> {
        self.entries
            .get(tag)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl MessageCatalog for StringTable {
    fn template(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.lookup(locale.as_str(), key)
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
    }
}

/// Substitutes positional `{0}`, `{1}`, ... placeholders in a template.
#[must_use]
pub fn format_message(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut output = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        output = output.replace(&format!("{{{index}}}"), &arg.to_string());
    }
    output
}
