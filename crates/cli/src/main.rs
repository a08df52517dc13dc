mod demo;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{PilotFilter, PilotFilterService};
use roster::{Pilot, PilotCategory, parser::load_roster, sample_pilots};
use std::path::{Path, PathBuf};

/// pilot-filter - Filter a roster of race drivers
#[derive(Parser)]
#[command(name = "pilot-filter")]
#[command(about = "Filter a roster of race drivers by category, status, titles and team", long_about = None)]
struct Cli {
    /// JSON roster to load instead of the built-in sample
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demonstration (default)
    Demo,

    /// List pilots matching every given criterion
    List(ListArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Category code: all, legend, current or rookie
    #[arg(long)]
    category: Option<PilotCategory>,

    /// Only active pilots
    #[arg(long, conflicts_with = "inactive_only")]
    active_only: bool,

    /// Only retired pilots
    #[arg(long)]
    inactive_only: bool,

    /// Minimum number of championships
    #[arg(long, allow_negative_numbers = true)]
    min_championships: Option<i64>,

    /// Team name (case-insensitive)
    #[arg(long)]
    team: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let pilots = load_pilots(cli.roster.as_deref())?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => print!("{}", demo::render_demo(pilots)?),
        Commands::List(args) => handle_list(pilots, &args),
    }

    Ok(())
}

fn load_pilots(path: Option<&Path>) -> Result<Vec<Pilot>> {
    match path {
        Some(path) => {
            let pilots = load_roster(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?;
            tracing::info!("Loaded {} pilots from {}", pilots.len(), path.display());
            Ok(pilots)
        }
        None => Ok(sample_pilots()),
    }
}

/// Build the conjunction of every criterion given on the command line.
fn build_filter(args: &ListArgs) -> PilotFilter {
    let mut filter = PilotFilter::by_category(args.category.unwrap_or(PilotCategory::All));

    if args.active_only || args.inactive_only {
        filter = filter.and(&PilotFilter::by_active_status(args.active_only));
    }
    if let Some(min) = args.min_championships {
        filter = filter.and(&PilotFilter::by_minimum_championships(min));
    }
    if let Some(team) = &args.team {
        filter = filter.and(&PilotFilter::by_team(team));
    }
    filter
}

/// Handle the 'list' command
fn handle_list(pilots: Vec<Pilot>, args: &ListArgs) {
    let service = PilotFilterService::with_pilots(pilots);
    let filter = build_filter(args);
    let matches = service.filter(&filter);

    println!("{}", format!("Pilots matching {}:", filter.name()).bold().blue());
    for pilot in &matches {
        println!("{}{}", "• ".green(), pilot);
    }
    println!(
        "{} {} of {}",
        "Total:".cyan(),
        matches.len(),
        service.pilot_count()
    );
}
