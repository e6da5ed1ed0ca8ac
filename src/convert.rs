// src/convert.rs

//! The conversion core
//!
//! The whole stylesheet is held as a single in-memory buffer from read
//! to write-back. Each rule is a plain substring replacement over the
//! full current buffer, applied in rule-table order, so later rules see
//! the output of earlier ones. Matching is case-sensitive and has no
//! word-boundary awareness: under the default table, `$ab` becomes
//! `var(--bat-color-a)b`.

use crate::error::{Error, Result};
use crate::rules::RuleSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Apply every rule in the set to `content`, in order
///
/// Each rule replaces all non-overlapping occurrences of its pattern,
/// scanning left to right. Content that matches no pattern passes
/// through unchanged.
pub fn apply_rules(content: &str, rules: &RuleSet) -> String {
    let mut result = content.to_string();

    for rule in &rules.rules {
        result = result.replace(&rule.pattern, &rule.replacement);
    }

    result
}

/// Convert a stylesheet file in place
///
/// Reads the file at `path` fully into memory, applies the rule set,
/// and overwrites the file with the transformed buffer. No backup of
/// the original is made. The file must be valid UTF-8.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be read (missing,
/// unreadable, or not UTF-8) and `Error::Write` if the converted
/// buffer cannot be written back. Either failure leaves no partial
/// state to recover; a read failure leaves the file untouched.
pub fn convert_file(path: &Path, rules: &RuleSet) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let converted = apply_rules(&content, rules);
    debug!(
        "Converted {} ({} bytes in, {} bytes out, {} rules)",
        path.display(),
        content.len(),
        converted.len(),
        rules.len()
    );

    fs::write(path, &converted).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
