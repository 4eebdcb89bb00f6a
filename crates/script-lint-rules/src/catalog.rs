//! Builtin message catalog for the shipped rules.
//!
//! Hosts that localize diagnostics replace this table with their own
//! [`MessageCatalog`](script_lint_core::MessageCatalog) implementation; the
//! core crates never carry user-facing text themselves.

use script_lint_core::{keys, Locale, StringTable};

use crate::avoid_long_lines;

/// Returns the default (`en-US`) string table for all builtin rules.
#[must_use]
pub fn default_catalog() -> StringTable {
    let en = Locale::default();
    let mut table = StringTable::new();

    table.add_string(keys::NAME_FORMAT, "{0}.{1}", &en);
    table.add_string(keys::SOURCE_BUILTIN, "ScriptLint", &en);
    table.add_string(keys::SOURCE_EXTERNAL, "External", &en);

    table.add_string(
        avoid_long_lines::resource::MESSAGE,
        "Line exceeds the configured maximum length of {0} characters",
        &en,
    );
    table.add_string(avoid_long_lines::resource::LABEL, "AvoidLongLines", &en);
    table.add_string(
        avoid_long_lines::resource::COMMON_NAME,
        "Avoid long lines",
        &en,
    );
    table.add_string(
        avoid_long_lines::resource::DESCRIPTION,
        "Lines should stay within the configured maximum length",
        &en,
    );

    table
}
