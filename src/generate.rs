//! The `generate` subcommand.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use hermes_emission::EmissionModel;
use hermes_generator::{GeneratedSequence, SequenceGenerator};
use hermes_io::{OutputFormat, write_lines, write_observations};

use crate::cli::GenerateArgs;
use crate::config::{ModelToml, ScenarioConfig};
use crate::convert;

/// Run the `generate` subcommand.
pub fn run(args: GenerateArgs) -> Result<()> {
    // Step 1: Load the scenario
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read scenario file: {}", args.config.display()))?;
    let mut config: ScenarioConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse scenario file: {}", args.config.display()))?;

    // Step 2: Apply CLI overrides
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(timesteps) = args.timesteps {
        config.timesteps = timesteps;
    }
    if let Some(output) = args.output {
        config.output.observations = Some(output);
    }

    // Step 3: Resolve outputs
    let observations_path = config.output.observations.clone().ok_or_else(|| {
        anyhow::anyhow!("no output path: set [output].observations in config or use --output")
    })?;
    let format = convert::parse_format(&config.output.format)?;
    let states_path = config.output.states.clone();

    // Step 4: Build the model and generate
    match config.model {
        ModelToml::Categorical {
            transition,
            initial,
            symbols,
        } => {
            let chain = convert::build_chain(transition, initial)?;
            let emission = convert::build_categorical(symbols, chain.n_states())?;
            info!(
                kind = "categorical",
                n_states = chain.n_states(),
                timesteps = config.timesteps,
                "scenario loaded"
            );
            let sequence = generate_sequence(chain, emission, config.seed, config.timesteps)?;
            write_outputs(&observations_path, states_path.as_deref(), format, &sequence)
        }
        ModelToml::Autoregressive {
            transition,
            initial,
            regimes,
        } => {
            let chain = convert::build_chain(transition, initial)?;
            let emission = convert::build_autoregressive(regimes, chain.n_states())?;
            info!(
                kind = "autoregressive",
                n_states = chain.n_states(),
                timesteps = config.timesteps,
                "scenario loaded"
            );
            let sequence = generate_sequence(chain, emission, config.seed, config.timesteps)?;
            write_outputs(&observations_path, states_path.as_deref(), format, &sequence)
        }
    }
}

/// Constructs a generator (seeded or from OS entropy) and runs it.
fn generate_sequence<E: EmissionModel>(
    chain: hermes_chain::MarkovChain,
    emission: E,
    seed: Option<u64>,
    timesteps: usize,
) -> Result<GeneratedSequence<E::Observation>> {
    let mut generator = match seed {
        Some(s) => SequenceGenerator::seeded(chain, emission, s),
        None => SequenceGenerator::from_os_rng(chain, emission),
    };
    Ok(generator.generate(timesteps)?)
}

/// Writes the observation sequence and, if requested, the hidden states.
fn write_outputs<T: Display>(
    observations_path: &Path,
    states_path: Option<&Path>,
    format: OutputFormat,
    sequence: &GeneratedSequence<T>,
) -> Result<()> {
    write_observations(observations_path, sequence.observations(), format)?;
    info!(
        path = %observations_path.display(),
        n = sequence.len(),
        "observations written"
    );
    if let Some(path) = states_path {
        write_lines(path, sequence.states())?;
        info!(path = %path.display(), "hidden states written");
    }
    Ok(())
}
