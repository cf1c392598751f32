//! Remapping table loading.
//!
//! The table lives in a flat text file, one rule per non-blank line, in the
//! form `<find>=<replace>`. `=` is a reserved separator and may appear at
//! most once per line. Rule order is insertion order and matters downstream:
//! the preprocessor applies the first matching rule, not the longest.

use crate::{DeployerError, Result};
use std::path::Path;
use tracing::debug;

/// A single find/replace prefix pair for import path rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappingRule {
    pub find: String,
    pub replace: String,
}

/// Load and parse a remapping file.
///
/// Fails with a configuration error if the file is unreadable or any line is
/// malformed. No side effects beyond the file read.
pub fn load_remappings(path: &Path) -> Result<Vec<RemappingRule>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DeployerError::Config(format!("cannot read remappings file {}: {}", path.display(), e))
    })?;
    let rules = parse_remappings(&text)?;
    debug!("loaded {} remapping rules from {}", rules.len(), path.display());
    Ok(rules)
}

/// Parse remapping file contents into an ordered rule sequence.
///
/// Blank (whitespace-only) lines are discarded. A line without exactly one
/// `=` separator fails the whole load. Both sides are trimmed. A repeated
/// find prefix keeps its original position but takes the last-loaded replace
/// side.
pub fn parse_remappings(text: &str) -> Result<Vec<RemappingRule>> {
    let mut rules: Vec<RemappingRule> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((find, replace)) = line.split_once('=') else {
            return Err(DeployerError::Config(format!(
                "remapping line {} has no '=' separator: {:?}",
                idx + 1,
                raw
            ))
            .into());
        };
        if replace.contains('=') {
            return Err(DeployerError::Config(format!(
                "remapping line {} has more than one '=' separator: {:?}",
                idx + 1,
                raw
            ))
            .into());
        }

        let find = find.trim().to_string();
        let replace = replace.trim().to_string();
        if find.is_empty() {
            return Err(DeployerError::Config(format!(
                "remapping line {} has an empty find prefix: {:?}",
                idx + 1,
                raw
            ))
            .into());
        }

        match rules.iter_mut().find(|rule| rule.find == find) {
            Some(existing) => existing.replace = replace,
            None => rules.push(RemappingRule { find, replace }),
        }
    }

    Ok(rules)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_rules_in_order() {
        let rules = parse_remappings("@oz/=lib/openzeppelin/\nforge-std/=lib/forge-std/src/\n")
            .unwrap();
        assert_eq!(
            rules,
            vec![
                RemappingRule {
                    find: "@oz/".into(),
                    replace: "lib/openzeppelin/".into()
                },
                RemappingRule {
                    find: "forge-std/".into(),
                    replace: "lib/forge-std/src/".into()
                },
            ]
        );
    }

    #[test]
    fn discards_blank_lines_and_trims() {
        let rules = parse_remappings("\n  @oz/ = lib/openzeppelin/  \n\n   \n").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].find, "@oz/");
        assert_eq!(rules[0].replace, "lib/openzeppelin/");
    }

    #[test]
    fn line_without_separator_fails_load() {
        let err = parse_remappings("@oz/=lib/openzeppelin/\nbogus-line\n").unwrap_err();
        let kind = err.downcast_ref::<DeployerError>().unwrap();
        assert!(matches!(kind, DeployerError::Config(msg) if msg.contains("line 2")));
    }

    #[test]
    fn line_with_two_separators_fails_load() {
        let err = parse_remappings("@oz/=lib/=openzeppelin/\n").unwrap_err();
        assert!(err.downcast_ref::<DeployerError>().is_some());
    }

    #[test]
    fn empty_find_prefix_fails_load() {
        let err = parse_remappings("=lib/openzeppelin/\n").unwrap_err();
        let kind = err.downcast_ref::<DeployerError>().unwrap();
        assert!(matches!(kind, DeployerError::Config(msg) if msg.contains("empty find prefix")));
    }

    #[test]
    fn duplicate_find_prefix_last_replace_wins_in_place() {
        let rules =
            parse_remappings("@oz/=lib/old/\nforge-std/=lib/forge-std/src/\n@oz/=lib/new/\n")
                .unwrap();
        assert_eq!(rules.len(), 2);
        // Position of the first occurrence is kept; the replace side is updated.
        assert_eq!(rules[0].find, "@oz/");
        assert_eq!(rules[0].replace, "lib/new/");
        assert_eq!(rules[1].find, "forge-std/");
    }

    #[test]
    fn unreadable_file_fails_load() {
        let err = load_remappings(Path::new("/nonexistent/remappings.txt")).unwrap_err();
        let kind = err.downcast_ref::<DeployerError>().unwrap();
        assert!(matches!(kind, DeployerError::Config(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "@oz/=lib/openzeppelin/").unwrap();
        let rules = load_remappings(file.path()).unwrap();
        assert_eq!(rules.len(), 1);
    }
}
