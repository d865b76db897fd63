//! Formwork CLI - profile-form validation and country lookup

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("formwork=debug")
    } else {
        EnvFilter::new("formwork=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let verbose = cli.verbose;
    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Check(args) => commands::check::execute(args, verbose, color),
        Commands::Countries(args) => commands::countries::execute(args, verbose, color),
        Commands::Image(args) => commands::image::execute(args),
        Commands::Demo(args) => commands::demo::execute(args, color),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
