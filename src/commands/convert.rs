// src/commands/convert.rs

//! Convert stylesheet command

use anyhow::{Context, Result};
use cssvar::{apply_rules, convert_file, RuleSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Convert a stylesheet file in place
///
/// # Arguments
/// * `file` - Path to the stylesheet file
/// * `rules_path` - Optional rules TOML file (None = built-in SCSS table)
/// * `dry_run` - Print the converted output instead of rewriting the file
/// * `quiet` - Suppress the confirmation lines
pub fn cmd_convert(file: &str, rules_path: Option<&str>, dry_run: bool, quiet: bool) -> Result<()> {
    let ruleset = super::load_ruleset(rules_path)?;
    let path = Path::new(file);

    info!("Converting stylesheet: {}", path.display());

    if dry_run {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet: {}", path.display()))?;
        print!("{}", apply_rules(&content, &ruleset));
        return Ok(());
    }

    convert_file(path, &ruleset)
        .with_context(|| format!("Failed to convert stylesheet: {}", path.display()))?;

    if !quiet {
        print_report(&ruleset);
    }

    Ok(())
}

/// Print the confirmation lines: one success line, then one line per
/// rule restating the mapping. The lines describe the rule table, they
/// do not count matches.
fn print_report(ruleset: &RuleSet) {
    println!("✓ Successfully converted {}", ruleset.description);
    for rule in &ruleset.rules {
        println!("✓ Replaced {} with {}", rule.pattern, rule.replacement);
    }
}
