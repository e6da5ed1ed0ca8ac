// src/lib.rs

//! cssvar
//!
//! Rewrites SCSS-style variables in stylesheet files to CSS custom
//! properties using ordered literal substring replacement.
//!
//! # Design
//!
//! - Rule-driven: an ordered table of `pattern -> replacement` pairs,
//!   built in for the SCSS defaults or loaded from a TOML file
//! - Literal matching: plain substring scans, no regex and no
//!   tokenization, so `$ab` has its leading `$a` replaced
//! - In-place: the whole file is read into one buffer, transformed,
//!   and written back to the same path

pub mod convert;
mod error;
pub mod rules;

pub use convert::{apply_rules, convert_file};
pub use error::{Error, Result};
pub use rules::{Rule, RuleSet};
