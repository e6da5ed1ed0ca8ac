// src/error.rs
//! Error types for stylesheet conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during conversion or rule loading
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the target stylesheet
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the converted stylesheet back
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a rules file
    #[error("Failed to read rules file '{path}': {source}")]
    RulesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Rules file is not valid TOML or does not match the schema
    #[error("Invalid rules file '{path}': {source}")]
    RulesParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Rules file parsed but defines no rules
    #[error("Rules file '{path}' defines no [[rule]] entries")]
    EmptyRules { path: PathBuf },
}

/// Result type alias for cssvar operations
pub type Result<T> = std::result::Result<T, Error>;
