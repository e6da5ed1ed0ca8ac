// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging. Default to warn so a
    // plain run prints only the confirmation lines; RUST_LOG=info opts
    // into operational logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            file,
            rules,
            dry_run,
            quiet,
        }) => commands::cmd_convert(&file, rules.as_deref(), dry_run, quiet),
        Some(Commands::Rules { rules }) => commands::cmd_rules(rules.as_deref()),
        None => {
            // No command provided, show help
            println!("cssvar v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'cssvar --help' for usage information");
            Ok(())
        }
    }
}
