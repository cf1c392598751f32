//! Import path preprocessing.
//!
//! Rewrites `import` statements through the remapping table immediately
//! before source text is handed to an external compiler. [`transform_line`]
//! is pure and stateless over its inputs, so independent lines may be
//! processed concurrently without coordination.

use crate::remap::RemappingRule;
use regex::Regex;
use std::sync::OnceLock;

/// Matches lines that begin (after optional whitespace) with the `import`
/// keyword followed by at least one whitespace character, case-insensitively.
fn import_line() -> &'static Regex {
    static IMPORT_LINE: OnceLock<Regex> = OnceLock::new();
    IMPORT_LINE.get_or_init(|| Regex::new(r"(?i)^\s*import\s").expect("static regex"))
}

/// Rewrite a single source line through the rule table.
///
/// Non-import lines pass through unchanged. Otherwise the first rule whose
/// quoted find prefix (`"<find>`) occurs anywhere in the line is applied, and
/// only the first occurrence is replaced. Matching is a plain substring
/// search, not anchored to the start of the quoted path; a shorter prefix can
/// match inside an unrelated longer path on the same line, and existing rule
/// tables depend on exactly that behavior.
pub fn transform_line(line: &str, rules: &[RemappingRule]) -> String {
    if !import_line().is_match(line) {
        return line.to_string();
    }

    for rule in rules {
        let find = quoted(&rule.find);
        if line.contains(&find) {
            return line.replacen(&find, &quoted(&rule.replace), 1);
        }
    }

    line.to_string()
}

/// Rewrite a whole source text line-by-line, preserving line structure.
pub fn transform_source(source: &str, rules: &[RemappingRule]) -> String {
    source
        .split('\n')
        .map(|line| transform_line(line, rules))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quoted(prefix: &str) -> String {
    let mut s = String::with_capacity(prefix.len() + 1);
    s.push('"');
    s.push_str(prefix);
    s
}

// ── tests ─────────────────────────────────────────────────────────────────────
