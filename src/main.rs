//! osric-round - roll dice and resolve combat rounds from the command line

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use osric_combat::combat::Encounter;
use osric_combat::dice::DiceNotation;
use osric_combat::Config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// OSRIC dice and combat round resolver
#[derive(Parser, Debug)]
#[command(
    name = "osric-round",
    version,
    about = "Roll dice and resolve OSRIC combat rounds"
)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run (overrides the configuration)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll dice notation such as 3d8+5
    Roll {
        /// Dice notation: <count>d<sides>[+|-<modifier>]
        notation: String,
    },
    /// Resolve initiative, surprise and turn order for one round
    Round {
        /// TOML encounter file
        encounter: PathBuf,

        /// Also rank each side by individual initiative
        #[arg(long)]
        individual: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osric_combat=info,osric_round=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
    }

    let config = Config::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_seed(args.seed);
    if let Some(seed) = config.seed {
        info!("Using seed {}", seed);
    }

    let mut rng = config.random_source();

    match args.command {
        Command::Roll { notation } => {
            let dice: DiceNotation = notation.parse()?;
            println!("{}", dice.roll_report(&mut rng));
        }
        Command::Round {
            encounter,
            individual,
        } => {
            let encounter = Encounter::load(&encounter)
                .with_context(|| format!("Failed to load encounter {}", encounter.display()))?;

            let report = encounter.report(&config.rules, &mut rng, individual)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
