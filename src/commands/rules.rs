// src/commands/rules.rs

//! Show active replacement rules command

use anyhow::Result;

/// Print the active rule table, one mapping per line
pub fn cmd_rules(rules_path: Option<&str>) -> Result<()> {
    let ruleset = super::load_ruleset(rules_path)?;

    println!("{} ({} rules)", ruleset.description, ruleset.len());
    for rule in &ruleset.rules {
        println!("  {} -> {}", rule.pattern, rule.replacement);
    }

    Ok(())
}
