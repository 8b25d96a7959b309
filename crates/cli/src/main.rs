//! Bistro CLI - restaurant walkthrough and tools.
//!
//! # Usage
//!
//! ```bash
//! # Play the full walkthrough
//! bistro demo
//!
//! # Same, in English, with a menu from YAML
//! bistro --locale en demo --menu menu.yaml
//!
//! # Print the menu
//! bistro menu --json
//!
//! # Book a table
//! bistro reserve --kind VIP --party 4 --client Anna
//! ```
//!
//! # Commands
//!
//! - `demo` - Run every part of the restaurant once
//! - `menu` - Print the built-in or a YAML menu
//! - `reserve` - Book one table

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use bistro_core::Locale;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::BistroConfig;

#[derive(Parser)]
#[command(name = "bistro")]
#[command(author, version, about = "Bistro restaurant CLI")]
struct Cli {
    /// Output language (`ru`, `en`); overrides `BISTRO_LOCALE`
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full restaurant walkthrough
    Demo {
        /// YAML menu to use instead of the built-in one
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },
    /// Print the menu
    Menu {
        /// YAML menu file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Book a table
    Reserve {
        /// Reservation type (`Standard`, `VIP`, `Banquet`)
        #[arg(short, long)]
        kind: String,

        /// Number of guests
        #[arg(short, long, default_value_t = 2)]
        party: u32,

        /// Guest name
        #[arg(short, long)]
        client: String,

        /// Booking time, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
    },
}

fn main() {
    // Diagnostics go to stderr so stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BistroConfig::from_env()?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    match cli.command {
        Commands::Demo { menu } => commands::demo::run(&config, menu.as_deref())?,
        Commands::Menu { file, json } => commands::menu::list(&config, file.as_deref(), json)?,
        Commands::Reserve {
            kind,
            party,
            client,
            at,
        } => commands::reserve::run(&config, &kind, party, &client, at.as_deref())?,
    }
    Ok(())
}
