//! Marquee theme CLI
//!
//! Inspect the built-in themes, validate theme files, and export themes as
//! CSS custom properties or JSON for the web client's stylesheet build.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect, validate and export Marquee themes
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Inspect, validate and export Marquee themes")]
#[command(version)]
struct Args {
    /// Extra theme files to register before running the command
    #[arg(short = 't', long = "theme-file", global = true)]
    theme_files: Vec<PathBuf>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered themes
    List,

    /// Print a theme's role colors
    Show {
        theme: String,

        /// Print a single role (dotted path, e.g. mediaCard.barFillColor)
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Export a theme as a CSS rule of custom properties
    Css {
        theme: String,

        /// CSS selector for the rule (defaults to `.theme-<name>`)
        #[arg(short, long)]
        selector: Option<String>,
    },

    /// Export a theme as nested JSON
    Json { theme: String },

    /// Validate a theme file against the registered themes
    Check { file: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = commands::load_registry(&args.theme_files)?;
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::List => commands::list(&registry, &mut out),
        Command::Show { theme, role } => {
            commands::show(&registry, &theme, role.as_deref(), &mut out)
        }
        Command::Css { theme, selector } => {
            commands::css(&registry, &theme, selector.as_deref(), &mut out)
        }
        Command::Json { theme } => commands::json(&registry, &theme, &mut out),
        Command::Check { file } => commands::check(registry, &file, &mut out),
    }
}
