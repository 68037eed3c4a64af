//! nusa-cli — Command-line driver for the NUSA PoVC engine.
//!
//! Computes single-participant rewards, anti-whale assessments, and full
//! population simulations, printing engine output as JSON. Serves as the
//! reference caller for the engine's wire contract.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nusa_core::config::EngineConfig;
use nusa_core::constants::{MONTHLY_REWARD_POOL, TOTAL_SUPPLY};
use nusa_core::traits::RewardCalculator;
use nusa_core::types::ParticipantMetrics;
use nusa_povc::PovcEngine;

/// NUSA PoVC command-line interface.
#[derive(Parser)]
#[command(name = "nusa-cli")]
#[command(version, about = "Value created, value rewarded.")]
struct Cli {
    /// Override the total token supply.
    #[arg(long, global = true)]
    total_supply: Option<f64>,

    /// Override the monthly reward pool.
    #[arg(long, global = true)]
    reward_pool: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the monthly reward for one participant.
    Reward(RewardArgs),
    /// Assess a balance against the anti-whale tiers.
    Whale(WhaleArgs),
    /// Simulate a full monthly distribution over a population.
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct RewardArgs {
    /// Path to a participant-metrics JSON file (reads stdin when omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct WhaleArgs {
    /// Wallet balance in NUSA token units.
    balance: f64,
}

#[derive(Args)]
struct SimulateArgs {
    /// Path to a JSON array of participant metrics. When omitted, a
    /// synthetic population is generated instead.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Size of the generated population.
    #[arg(short, long, default_value_t = 10)]
    participants: usize,

    /// Seed for the generated population.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = EngineConfig::new(
        cli.total_supply.unwrap_or(TOTAL_SUPPLY),
        cli.reward_pool.unwrap_or(MONTHLY_REWARD_POOL),
    )?;
    let engine = PovcEngine::new(config);

    match cli.command {
        Commands::Reward(args) => {
            let metrics: ParticipantMetrics = read_json(args.input.as_deref())?;
            let reward = engine.calculate_reward(&metrics)?;
            println!("{}", serde_json::to_string_pretty(&reward)?);
        }
        Commands::Whale(args) => {
            let result = engine.assess_concentration(args.balance)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Simulate(args) => {
            let population: Vec<ParticipantMetrics> = match args.input.as_deref() {
                Some(path) => read_json(Some(path))?,
                None => {
                    info!(
                        participants = args.participants,
                        seed = args.seed,
                        "generating synthetic population"
                    );
                    generate_population(args.participants, args.seed)
                }
            };
            let summary = engine.simulate_distribution(&population)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

/// Parse JSON from a file, or from stdin when no path is given.
fn read_json<T: serde::de::DeserializeOwned>(path: Option<&std::path::Path>) -> Result<T> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("parsing JSON input")
}

/// Deterministic synthetic population spanning all anti-whale tiers.
fn generate_population(n: usize, seed: u64) -> Vec<ParticipantMetrics> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| ParticipantMetrics {
            daily_active_minutes: rng.gen_range(0.0..480.0),
            contributions_count: rng.gen_range(0..250),
            community_interactions: rng.gen_range(0..120),
            days_active: rng.gen_range(0..1500),
            wallet_balance: rng.gen_range(0.0..750_000.0),
            quality_score: rng.gen_range(0.0..=1.0),
            ..ParticipantMetrics::new(format!("nusa1sim{i:04}"))
        })
        .collect()
}
