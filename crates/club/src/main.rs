//! Club CLI
//!
//! Manage the member registry and build balanced teams for a session.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use club::{ClubConfig, MemberRegistry, SessionRunner, DEFAULT_CONFIG_PATH};
use team_core::Rating;

#[derive(Parser)]
#[command(
    name = "club",
    about = "Balanced team generator for club sessions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Member file, overrides `members_path` from the config
    #[arg(long, global = true)]
    members: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build balanced teams from the members present today
    Teams {
        /// Names of the members present
        names: Vec<String>,
        /// Use every registered member
        #[arg(long, conflicts_with = "names")]
        all: bool,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Number of random trials
        #[arg(long)]
        trials: Option<usize>,
        /// Spread trials over all cores
        #[arg(long)]
        parallel: bool,
        /// Also save the report as JSON
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Manage the member registry
    Members {
        #[command(subcommand)]
        action: MembersAction,
    },
}

#[derive(Subcommand)]
enum MembersAction {
    /// List all members
    List,
    /// Register a new member
    Add { name: String, rating: Rating },
    /// Change a member's rating
    Rate { name: String, rating: Rating },
    /// Remove a member
    Remove { name: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClubConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    if let Some(path) = cli.members {
        config.members_path = path;
    }

    match cli.command {
        Commands::Teams {
            names,
            all,
            seed,
            trials,
            parallel,
            out,
        } => {
            if let Some(seed) = seed {
                config.balance.seed = Some(seed);
            }
            if let Some(trials) = trials {
                config.balance.trials = trials;
            }
            config.balance.parallel |= parallel;
            run_teams(&config, &names, all, out)
        }
        Commands::Members { action } => run_members(&config, action),
    }
}

fn run_teams(config: &ClubConfig, names: &[String], all: bool, out: Option<PathBuf>) -> anyhow::Result<()> {
    let registry = MemberRegistry::load(&config.members_path, config.ratings)
        .context("loading members")?;
    let runner = SessionRunner::new(&config.balance)?;

    let report = if all {
        runner.run(registry.all())?
    } else {
        if names.is_empty() {
            bail!("no players given; list the members present or pass --all");
        }
        let roster = registry.select(names)?;
        println!("{} players selected", roster.len());
        runner.run(&roster)?
    };

    report.print_report();

    if let Some(path) = out {
        report
            .save(&path)
            .with_context(|| format!("saving report to {}", path.display()))?;
    }
    Ok(())
}

fn run_members(config: &ClubConfig, action: MembersAction) -> anyhow::Result<()> {
    let path = &config.members_path;
    let mut registry = MemberRegistry::load(path, config.ratings).context("loading members")?;

    match action {
        MembersAction::List => {
            registry.print_members();
            return Ok(());
        }
        MembersAction::Add { name, rating } => {
            registry.add(&name, rating)?;
            println!("{} added with rating {}", name.trim(), rating);
        }
        MembersAction::Rate { name, rating } => {
            let previous = registry.rate(&name, rating)?;
            println!("{} rating changed from {} to {}", name.trim(), previous, rating);
        }
        MembersAction::Remove { name } => {
            registry.remove(&name)?;
            println!("{} removed", name.trim());
        }
    }

    registry
        .save(path)
        .with_context(|| format!("saving members to {}", path.display()))
}
