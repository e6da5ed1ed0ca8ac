// src/commands/mod.rs
//! Command handlers for the cssvar CLI

mod convert;
mod rules;

// Re-export all command handlers
pub use convert::cmd_convert;
pub use rules::cmd_rules;

use anyhow::{Context, Result};
use cssvar::RuleSet;
use std::path::Path;

/// Resolve the active rule set: a TOML file if one was given, otherwise
/// the built-in SCSS table.
fn load_ruleset(rules_path: Option<&str>) -> Result<RuleSet> {
    match rules_path {
        Some(path) => RuleSet::load(Path::new(path))
            .with_context(|| format!("Failed to load rules from: {}", path)),
        None => Ok(RuleSet::scss_defaults()),
    }
}
