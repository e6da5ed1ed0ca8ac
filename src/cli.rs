// src/cli.rs
//! CLI definitions for the cssvar converter
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cssvar")]
#[command(author, version)]
#[command(about = "Rewrite SCSS-style variables in stylesheets to CSS custom properties", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a stylesheet file in place
    Convert {
        /// Path to the stylesheet file to convert
        file: String,

        /// TOML file defining the replacement rules (default: built-in SCSS table)
        #[arg(short, long)]
        rules: Option<String>,

        /// Print the converted output to stdout without rewriting the file
        #[arg(long)]
        dry_run: bool,

        /// Suppress the per-replacement confirmation lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the active replacement rules
    Rules {
        /// TOML file defining the replacement rules (default: built-in SCSS table)
        #[arg(short, long)]
        rules: Option<String>,
    },
}
