//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use formwork::Variant;

/// Formwork - profile-form validation, country lookup, and image tooling
#[derive(Parser)]
#[command(name = "formwork")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a profile file against the rule set
    Check(CheckArgs),

    /// Fetch and filter the country list
    Countries(CountriesArgs),

    /// Convert an image file to a data-URI
    Image(ImageArgs),

    /// Run a scripted walkthrough of both form variants
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Profile file (TOML or JSON)
    pub file: PathBuf,

    /// Form variant to validate as
    #[arg(long, default_value = "controlled")]
    pub variant: Variant,
}

#[derive(Args)]
pub struct CountriesArgs {
    /// Filter term (matches name or alpha-2 code)
    #[arg(long)]
    pub term: Option<String>,

    /// Read the country list from a local JSON file instead of the network
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Override the fetch endpoint
    #[arg(long, env = "FORMWORK_COUNTRIES_ENDPOINT")]
    pub endpoint: Option<String>,
}

#[derive(Args)]
pub struct ImageArgs {
    /// Image file to convert (png, jpeg, or svg)
    pub path: PathBuf,

    /// Print only the media type and encoded size
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Form variant to walk through (defaults to both)
    #[arg(long)]
    pub variant: Option<Variant>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
