//! Racesim CLI
//!
//! Command-line demo runner for the deterministic race simulation engine.

use clap::{Parser, Subcommand};
use colored::*;

mod commands;

#[derive(Parser)]
#[command(name = "racesim")]
#[command(about = "Deterministic open-wheel race simulation engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo race to completion and print the final classification
    Simulate {
        /// Number of laps
        #[arg(short, long, default_value = "20")]
        laps: u16,

        /// Number of drivers on the grid (up to 8)
        #[arg(short, long, default_value = "6")]
        drivers: usize,

        /// RNG seed; the same seed reproduces the same race bit-for-bit
        #[arg(short, long, default_value = "42")]
        seed: u32,
    },

    /// Display version and build information
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    print_banner();

    match cli.command {
        Commands::Simulate { laps, drivers, seed } => {
            commands::simulate::run(laps, drivers, seed)?;
        }
        Commands::Info => {
            println!("\n{}", "Racesim system information".cyan().bold());
            println!("{}", "─".repeat(60));
            println!("Version: {}", env!("CARGO_PKG_VERSION").yellow());
            println!("Platform: {}", std::env::consts::OS.yellow());
            println!("Architecture: {}", std::env::consts::ARCH.yellow());
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        "{}",
        r#"
    ____                     _
   |  _ \ __ _  ___ ___  ___(_)_ __ ___
   | |_) / _` |/ __/ _ \/ __| | '_ ` _ \
   |  _ < (_| | (_|  __/\__ \ | | | | | |
   |_| \_\__,_|\___\___||___/_|_| |_| |_|
    "#
        .cyan()
    );
    println!("{}", "    Deterministic open-wheel race simulation".yellow());
    println!();
}
