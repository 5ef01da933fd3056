// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diversify_catalog::{Catalog, CatalogConfig, Criteria, FixtureGenerator, SeedData};

/// Build the investment catalog and print one page of it as JSON.
#[derive(Debug, Parser)]
#[command(name = "diversify-catalog", version)]
struct Cli {
    /// Seed data JSON file (defaults to the built-in listings)
    #[arg(long, env = "CATALOG_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Catalog config JSON file
    #[arg(long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible generated listings
    #[arg(long)]
    rng_seed: Option<u64>,

    #[arg(long, default_value = "all")]
    category: String,

    #[arg(long, default_value = "all")]
    risk: String,

    /// Largest acceptable minimum investment, e.g. "$1,000"
    #[arg(long, default_value = "all")]
    max_min: String,

    /// all, accredited or non-accredited
    #[arg(long, default_value = "all")]
    accreditation: String,

    #[arg(long, default_value = "all")]
    liquidity: String,

    /// rating, correlation or minInvestment
    #[arg(long, default_value = "rating")]
    sort: String,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Overrides the configured page size
    #[arg(long)]
    page_size: Option<usize>,

    /// Print every matching listing instead of a single page
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CatalogConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CatalogConfig::default(),
    };

    let seed = match &cli.seed_file {
        Some(path) => SeedData::from_path(path)
            .with_context(|| format!("failed to load seed data from {}", path.display()))?,
        None => SeedData::builtin(),
    };

    let mut generator = match cli.rng_seed {
        Some(rng_seed) => FixtureGenerator::seeded(rng_seed, config.generator.clone()),
        None => FixtureGenerator::from_entropy(config.generator.clone()),
    };
    let catalog = Catalog::build(&seed, &mut generator).context("failed to build catalog")?;

    let criteria = Criteria::from_selections(
        &cli.category,
        &cli.risk,
        &cli.max_min,
        &cli.accreditation,
        &cli.liquidity,
        &cli.sort,
    )?;

    let output = if cli.all {
        serde_json::to_string_pretty(&criteria.apply(catalog.investments()))?
    } else {
        let page_size = cli.page_size.unwrap_or(config.page_size);
        serde_json::to_string_pretty(&catalog.view(&criteria, page_size, cli.page))?
    };
    println!("{}", output);

    Ok(())
}
