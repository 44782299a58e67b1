//! cyclus-report — summarise a Cyclus output store.
//!
//! Prints the time index, the commodities traded, yearly mass flow per
//! commodity, and (with `--groups`) deployed power per prototype group.
//!
//! ```text
//! cyclus-report run.sqlite --groups lwr,sfr
//! cyclus-report run.sqlite --json --config results.json
//! RUST_LOG=debug cyclus-report run.sqlite
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use watts_core::{MONTHS_PER_YEAR, ResultsConfig, TimeIndex};
use watts_results::CyclusOutput;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "cyclus-report")]
#[command(about = "Summarise commodities, mass flow, and deployment from a Cyclus store")]
struct Cli {
    /// Path to the Cyclus output store
    store: PathBuf,

    /// Comma-separated reactor class names for the deployment table
    #[arg(long, value_delimiter = ',')]
    groups: Vec<String>,

    /// Group key for prototypes matching no class (overrides the config file)
    #[arg(long)]
    legacy_key: Option<String>,

    /// JSON file with `ResultsConfig` fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit one JSON document instead of text
    #[arg(long)]
    json: bool,
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DeploymentReport {
    power:     BTreeMap<String, Vec<f64>>,
    nameplate: BTreeMap<String, f64>,
}

#[derive(Serialize)]
struct Report {
    time:        TimeIndex,
    years:       Vec<f64>,
    commodities: Vec<String>,
    mass_flow:   BTreeMap<String, Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment:  Option<DeploymentReport>,
}

fn load_config(path: Option<&Path>) -> Result<ResultsConfig> {
    let Some(path) = path else {
        return Ok(ResultsConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

fn build_report(cli: &Cli, config: ResultsConfig) -> Result<Report> {
    let legacy_key = cli.legacy_key.clone().unwrap_or_else(|| config.legacy_key.clone());
    let out = CyclusOutput::open(&cli.store, config)
        .with_context(|| format!("opening store {}", cli.store.display()))?;

    let time = out.time_index().clone();
    // One coordinate per yearly bucket: the calendar year each bucket starts in.
    let years = (0..time.years()).map(|y| time.year_of(y * MONTHS_PER_YEAR)).collect();

    let deployment = if cli.groups.is_empty() {
        None
    } else {
        let d = out.deployment_by_prototype_group(cli.groups.as_slice(), &legacy_key)?;
        Some(DeploymentReport { power: d.power, nameplate: d.nameplate })
    };

    Ok(Report {
        time,
        years,
        commodities: out.commodities()?,
        mass_flow:   out.mass_flow_by_commodity()?,
        deployment,
    })
}

fn print_text(report: &Report) {
    println!("time:        {}", report.time);
    println!("years:       {}", report.time.years());
    println!("commodities: {}", report.commodities.join(", "));
    println!();
    println!("yearly mass flow");
    for (commodity, yearly) in &report.mass_flow {
        let total: f64 = yearly.iter().sum();
        println!("  {commodity:<24} total {total:>14.3}  {yearly:?}");
    }
    if let Some(dep) = &report.deployment {
        println!();
        println!("deployment (peak power, nameplate)");
        for (group, series) in &dep.power {
            let peak = series.iter().copied().fold(0.0_f64, f64::max);
            match dep.nameplate.get(group) {
                Some(cap) => println!("  {group:<24} peak {peak:>12.3}  nameplate {cap:>10.3}"),
                None => println!("  {group:<24} peak {peak:>12.3}"),
            }
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    info!(store = %cli.store.display(), "building report");
    let report = build_report(&cli, config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}
