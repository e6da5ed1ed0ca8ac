// src/rules.rs

//! Replacement rule definitions
//!
//! A rule set is an ordered table of literal `pattern -> replacement`
//! pairs. The built-in default table maps the SCSS color variables to
//! their CSS custom property equivalents. Custom tables are TOML files
//! with an optional `description` and one `[[rule]]` entry per pair:
//!
//! ```toml
//! description = "theme variables to custom properties"
//!
//! [[rule]]
//! pattern = "$accent"
//! replacement = "var(--accent)"
//! ```
//!
//! Rules apply in file order, each over the output of the previous one.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default description used for the built-in SCSS rule table
const SCSS_DESCRIPTION: &str = "SCSS variables to CSS custom properties";

/// A single literal replacement pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Literal substring to search for (no regex, no word boundaries)
    pub pattern: String,

    /// Literal text substituted for every occurrence of `pattern`
    pub replacement: String,
}

impl Rule {
    /// Create a rule from a pattern/replacement pair
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// An ordered set of replacement rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Human-readable summary, used in the success confirmation line
    #[serde(default = "default_description")]
    pub description: String,

    /// Rules in application order
    #[serde(rename = "rule", default)]
    pub rules: Vec<Rule>,
}

fn default_description() -> String {
    SCSS_DESCRIPTION.to_string()
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::scss_defaults()
    }
}

impl RuleSet {
    /// The built-in rule table: the three SCSS color variables
    pub fn scss_defaults() -> Self {
        Self {
            description: SCSS_DESCRIPTION.to_string(),
            rules: vec![
                Rule::new("$a", "var(--bat-color-a)"),
                Rule::new("$b", "var(--bat-color-b)"),
                Rule::new("$c", "var(--bat-color-c)"),
            ],
        }
    }

    /// Load a rule set from a TOML file
    ///
    /// A file that parses but contains no `[[rule]]` entries is rejected:
    /// a present-but-empty table is almost certainly a mistake, and the
    /// conversion it configures would silently do nothing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::RulesRead {
            path: path.to_path_buf(),
            source,
        })?;

        let ruleset: RuleSet = toml::from_str(&content).map_err(|source| Error::RulesParse {
            path: path.to_path_buf(),
            source,
        })?;

        if ruleset.rules.is_empty() {
            return Err(Error::EmptyRules {
                path: path.to_path_buf(),
            });
        }

        Ok(ruleset)
    }

    /// Number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scss_defaults_table() {
        let rules = RuleSet::scss_defaults();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.rules[0], Rule::new("$a", "var(--bat-color-a)"));
        assert_eq!(rules.rules[1], Rule::new("$b", "var(--bat-color-b)"));
        assert_eq!(rules.rules[2], Rule::new("$c", "var(--bat-color-c)"));
        assert_eq!(rules.description, "SCSS variables to CSS custom properties");
    }

    #[test]
    fn test_default_is_scss_table() {
        assert_eq!(RuleSet::default(), RuleSet::scss_defaults());
    }

    #[test]
    fn test_parse_toml_rules() {
        let toml_src = r#"
description = "test rules"

[[rule]]
pattern = "$x"
replacement = "var(--x)"

[[rule]]
pattern = "$y"
replacement = "var(--y)"
"#;
        let ruleset: RuleSet = toml::from_str(toml_src).unwrap();
        assert_eq!(ruleset.description, "test rules");
        assert_eq!(ruleset.len(), 2);
        assert_eq!(ruleset.rules[0], Rule::new("$x", "var(--x)"));
        assert_eq!(ruleset.rules[1], Rule::new("$y", "var(--y)"));
    }

    #[test]
    fn test_parse_toml_preserves_order() {
        // Application order is file order, so order must survive parsing
        let toml_src = r#"
[[rule]]
pattern = "b"
replacement = "2"

[[rule]]
pattern = "a"
replacement = "1"
"#;
        let ruleset: RuleSet = toml::from_str(toml_src).unwrap();
        assert_eq!(ruleset.rules[0].pattern, "b");
        assert_eq!(ruleset.rules[1].pattern, "a");
    }

    #[test]
    fn test_parse_toml_default_description() {
        let toml_src = r#"
[[rule]]
pattern = "$a"
replacement = "var(--a)"
"#;
        let ruleset: RuleSet = toml::from_str(toml_src).unwrap();
        assert_eq!(ruleset.description, "SCSS variables to CSS custom properties");
    }

    #[test]
    fn test_load_missing_file() {
        let result = RuleSet::load(Path::new("/nonexistent/rules.toml"));
        assert!(matches!(result, Err(Error::RulesRead { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        std::fs::write(temp.path(), "not [ valid toml").unwrap();
        let result = RuleSet::load(temp.path());
        assert!(matches!(result, Err(Error::RulesParse { .. })));
    }

    #[test]
    fn test_load_empty_rules_rejected() {
        let temp = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        std::fs::write(temp.path(), "description = \"nothing here\"\n").unwrap();
        let result = RuleSet::load(temp.path());
        assert!(matches!(result, Err(Error::EmptyRules { .. })));
    }

    #[test]
    fn test_load_roundtrip_through_file() {
        let temp = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        let original = RuleSet::scss_defaults();
        std::fs::write(temp.path(), toml::to_string(&original).unwrap()).unwrap();
        let loaded = RuleSet::load(temp.path()).unwrap();
        assert_eq!(loaded, original);
    }
}
