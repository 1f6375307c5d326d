use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Hermes synthetic sequence generator.
#[derive(Parser)]
#[command(
    name = "hermes",
    version,
    about = "Synthetic HMM and AR-HMM sequence generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a sequence from a TOML scenario file.
    Generate(GenerateArgs),
    /// Run a built-in demo scenario.
    Demo(DemoArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML scenario file.
    #[arg(short, long, default_value = "hermes.toml")]
    pub config: PathBuf,

    /// Override observation output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override timestep count from config.
    #[arg(short, long)]
    pub timesteps: Option<usize>,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Which demo scenario to run.
    #[arg(value_enum)]
    pub name: DemoName,

    /// Override the scenario's output path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RNG seed (defaults to OS entropy).
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the scenario's timestep count.
    #[arg(short, long)]
    pub timesteps: Option<usize>,
}

/// Built-in demo scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoName {
    /// Two-state, three-symbol HMM (the healthy/fever observation chain).
    HealthyFever,
    /// Two-regime autoregressive model with Gaussian noise.
    ArRegimes,
}
