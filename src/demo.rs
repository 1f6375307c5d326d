//! The `demo` subcommand: built-in example scenarios.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use hermes_chain::MarkovChain;
use hermes_emission::{AutoregressiveEmission, CategoricalEmission, EmissionModel, Regime};
use hermes_generator::SequenceGenerator;
use hermes_io::{OutputFormat, write_observations};

use crate::cli::{DemoArgs, DemoName};

/// Run the `demo` subcommand.
pub fn run(args: DemoArgs) -> Result<()> {
    match args.name {
        DemoName::HealthyFever => healthy_fever(args),
        DemoName::ArRegimes => ar_regimes(args),
    }
}

/// Two-state, three-symbol HMM: hidden healthy/fever states emitting
/// normal/cold/dizzy observations. 100 timesteps, one symbol per line.
fn healthy_fever(args: DemoArgs) -> Result<()> {
    let chain = MarkovChain::new(vec![vec![0.7, 0.3], vec![0.4, 0.6]], vec![0.8, 0.2]);
    let emission = CategoricalEmission::new(vec![vec![0.5, 0.4, 0.1], vec![0.1, 0.3, 0.6]]);

    run_demo(
        args,
        chain,
        emission,
        100,
        "healthy_fever.txt",
        OutputFormat::Lines,
    )
}

/// Two-regime AR model: regime-specific three-lag coefficients with
/// Gaussian noise. 280 timesteps, CSV output.
fn ar_regimes(args: DemoArgs) -> Result<()> {
    let chain = MarkovChain::new(vec![vec![0.7, 0.3], vec![0.4, 0.6]], vec![0.8, 0.2]);
    let emission = AutoregressiveEmission::new(vec![
        Regime::new(vec![-0.5, 0.7, 0.1], 1.0, 2.0),
        Regime::new(vec![0.1, -0.1, 0.2], 3.0, 3.0),
    ]);

    run_demo(args, chain, emission, 280, "ar_regimes.csv", OutputFormat::Csv)
}

fn run_demo<E: EmissionModel>(
    args: DemoArgs,
    chain: MarkovChain,
    emission: E,
    default_timesteps: usize,
    default_output: &str,
    format: OutputFormat,
) -> Result<()>
where
    E::Observation: std::fmt::Display,
{
    let timesteps = args.timesteps.unwrap_or(default_timesteps);
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_output));

    let mut generator = match args.seed {
        Some(s) => SequenceGenerator::seeded(chain, emission, s),
        None => SequenceGenerator::from_os_rng(chain, emission),
    };
    let sequence = generator.generate(timesteps)?;

    write_observations(&output, sequence.observations(), format)?;
    info!(path = %output.display(), n = sequence.len(), "demo sequence written");
    Ok(())
}
