//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Result, bail};

use hermes_chain::MarkovChain;
use hermes_emission::{AutoregressiveEmission, CategoricalEmission, Regime};
use hermes_io::OutputFormat;

use crate::config::RegimeToml;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "lines" => Ok(OutputFormat::Lines),
        "two-row" | "tworow" => Ok(OutputFormat::TwoRow),
        "csv" => Ok(OutputFormat::Csv),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds a Markov chain from the transition and initial tables.
///
/// The state count is taken from the number of transition rows; all other
/// dimensions are checked against it before generation starts.
pub fn build_chain(transition: Vec<Vec<f64>>, initial: Vec<f64>) -> Result<MarkovChain> {
    let chain = MarkovChain::new(transition, initial);
    chain.validate()?;
    Ok(chain)
}

/// Builds the categorical emission model, checked against the state count.
pub fn build_categorical(
    symbols: Vec<Vec<f64>>,
    n_states: usize,
) -> Result<CategoricalEmission> {
    let emission = CategoricalEmission::new(symbols);
    emission.validate(n_states)?;
    Ok(emission)
}

/// Builds the autoregressive emission model, checked against the state count.
pub fn build_autoregressive(
    regimes: Vec<RegimeToml>,
    n_states: usize,
) -> Result<AutoregressiveEmission> {
    let regimes = regimes
        .into_iter()
        .map(|r| Regime::new(r.coefficients, r.mean, r.std_dev))
        .collect();
    let emission = AutoregressiveEmission::new(regimes);
    emission.validate(n_states)?;
    Ok(emission)
}
