//! `synthq` synthetic dataset tool

#![allow(clippy::print_stdout)] // This is a CLI tool that needs to print output
#![allow(clippy::uninlined_format_args)] // Format args are fine for CLI output

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use market_generator::{FakeCompanyNames, MarketGenerator, simulate_session};
use profile_aggregator::{
    ProfileGenerator, ProfileTuple, RecordShape, aggregate_document,
    compare_representations, today,
};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::Value;
use std::{fs, path::PathBuf};
use synthq_common::{SynthConfig, telemetry::init_tracing};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "synthq", about = "Synthetic profile and stock-market datasets")]
struct Cli {
    #[arg(long, default_value = "info")]
    log: String,
    /// Optional configuration file layered over the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured random seed
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Aggregate generated profiles in both representations and compare timings
    Compare {
        #[arg(long)]
        count: Option<usize>,
    },
    /// Generate a market and run one session over it
    Market {
        #[arg(long)]
        companies: Option<usize>,
    },
    /// Write generated profiles as a JSON document
    Generate {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value = "keyed")]
        shape: RecordShape,
        /// stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Aggregate a JSON document and print the result as JSON
    Aggregate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "keyed")]
        shape: RecordShape,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let config = SynthConfig::load(cli.config.as_deref()).context("load configuration")?;
    let seed = cli.seed.unwrap_or(config.random.seed);
    let mut rng = StdRng::seed_from_u64(seed);
    info!("Random seed {}", seed);

    match cli.cmd {
        Cmd::Compare { count } => {
            cmd_compare(&mut rng, count.unwrap_or(config.profiles.sample_size))
        }
        Cmd::Market { companies } => cmd_market(
            &mut rng,
            &config,
            companies.unwrap_or(config.market.company_count),
        ),
        Cmd::Generate {
            count,
            shape,
            output,
        } => cmd_generate(&mut rng, count, shape, output),
        Cmd::Aggregate { input, shape } => cmd_aggregate(input, shape),
    }
}

fn cmd_compare(rng: &mut StdRng, count: usize) -> Result<()> {
    let today = today();
    let profiles = ProfileGenerator::new(today).generate(rng, count);
    let comparison = compare_representations(&profiles, today).context("compare representations")?;

    println!("=== KEYED ===");
    println!("{}", serde_json::to_string_pretty(&comparison.keyed)?);
    println!("Elapsed: {:?}", comparison.keyed_elapsed);
    println!("\n=== POSITIONAL ===");
    println!("{}", serde_json::to_string_pretty(&comparison.positional)?);
    println!("Elapsed: {:?}", comparison.positional_elapsed);
    println!("\nResults match: {}", comparison.results_match());
    println!("Speedup (keyed / positional): {:.2}x", comparison.speedup());
    Ok(())
}

fn cmd_market(rng: &mut StdRng, config: &SynthConfig, companies: usize) -> Result<()> {
    let generator = MarketGenerator::new(config.market.clone());
    let market = generator
        .generate(rng, &FakeCompanyNames, companies)
        .context("generate companies")?;
    let session = simulate_session(rng, &market, config.market.session_swing_pct);

    println!("Opening market value: {}", session.opening_market_value);
    println!("\n{:<6} {:>14} {:>18}", "SYMBOL", "OPEN CAP", "NEW VALUE");
    for (company, value) in market.companies.iter().zip(&session.new_values) {
        println!("{:<6} {:>14} {:>18.2}", company.symbol, company.market_cap, value);
    }
    println!("\nCurrent market value: {:.2}", session.current_market_value);
    println!(
        "Points: {:.2} ({})",
        session.point_change,
        if session.is_up() { "up" } else { "down" }
    );
    Ok(())
}

fn cmd_generate(
    rng: &mut StdRng,
    count: usize,
    shape: RecordShape,
    output: Option<PathBuf>,
) -> Result<()> {
    let profiles = ProfileGenerator::new(today()).generate(rng, count);
    let document = match shape {
        RecordShape::Keyed => serde_json::to_string_pretty(&profiles)?,
        RecordShape::Positional => {
            let tuples: Vec<ProfileTuple> = profiles.iter().map(ProfileTuple::from).collect();
            serde_json::to_string_pretty(&tuples)?
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, document).with_context(|| format!("write {}", path.display()))?;
            info!("Wrote {} {} profiles to {}", count, shape, path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}

fn cmd_aggregate(input: PathBuf, shape: RecordShape) -> Result<()> {
    let raw = fs::read_to_string(&input).with_context(|| format!("read {}", input.display()))?;
    let document: Value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", input.display()))?;

    let result = aggregate_document(&document, shape, today())
        .with_context(|| format!("aggregate {} records", shape))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
