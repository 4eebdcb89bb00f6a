//! Integration test: host settings end-to-end through the registry.
//!
//! Drives the full TOML -> Config -> rule binding -> analyze pipeline the
//! way a host engine would, over inline script sources.

use std::io::Write;

use script_lint_core::{Config, ParsedScript, Severity};
use script_lint_rules::Registry;

const SETTINGS: &str = r#"
[rules.avoid-long-lines]
enabled = true
line_length = 40
"#;

fn analyze_with(registry: &Registry, source: &str) -> Vec<script_lint_core::Diagnostic> {
    let script = ParsedScript::new("scripts/deploy.sh", source);
    let mut diagnostics = Vec::new();
    for rule in registry.enabled() {
        diagnostics.extend(rule.analyze(Some(&script)).expect("analysis should succeed"));
    }
    diagnostics
}

#[test]
fn bound_settings_drive_the_rule() {
    let config = Config::parse(SETTINGS).expect("settings should parse");
    let registry = Registry::from_config(&config);

    let long_line = "x".repeat(41);
    let source = format!("#!/bin/sh\n{long_line}\necho done\n");
    let diagnostics = analyze_with(&registry, &source);

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.rule_name, "ScriptLint.AvoidLongLines");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.extent.start.line, 2);
    assert_eq!(diagnostic.extent.start.column, 1);
    assert_eq!(diagnostic.extent.end.column, 41);
    assert!(diagnostic.message.contains("40"));
    assert_eq!(
        diagnostic.script_path,
        std::path::PathBuf::from("scripts/deploy.sh")
    );
}

#[test]
fn lines_at_the_bound_maximum_pass() {
    let config = Config::parse(SETTINGS).expect("settings should parse");
    let registry = Registry::from_config(&config);

    let exact = "x".repeat(40);
    assert!(analyze_with(&registry, &exact).is_empty());
}

#[test]
fn empty_settings_leave_every_rule_disabled() {
    let registry = Registry::from_config(&Config::default());
    assert_eq!(registry.enabled().count(), 0);

    let long_line = "x".repeat(500);
    assert!(analyze_with(&registry, &long_line).is_empty());
}

#[test]
fn settings_file_round_trip_matches_inline_settings() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{SETTINGS}").expect("write settings");

    let from_file = Config::from_file(file.path()).expect("load settings");
    let registry = Registry::from_config(&from_file);

    let long_line = "x".repeat(41);
    assert_eq!(analyze_with(&registry, &long_line).len(), 1);
}

#[test]
fn crlf_scripts_report_like_lf_scripts() {
    let config = Config::parse(SETTINGS).expect("settings should parse");
    let registry = Registry::from_config(&config);

    let long_line = "x".repeat(41);
    let lf = format!("short\n{long_line}\nshort");
    let crlf = lf.replace('\n', "\r\n");

    let lf_diagnostics = analyze_with(&registry, &lf);
    let crlf_diagnostics = analyze_with(&registry, &crlf);

    assert_eq!(lf_diagnostics.len(), crlf_diagnostics.len());
    assert_eq!(
        lf_diagnostics[0].extent.start.line,
        crlf_diagnostics[0].extent.start.line
    );
    assert_eq!(
        lf_diagnostics[0].extent.end.column,
        crlf_diagnostics[0].extent.end.column
    );
}
