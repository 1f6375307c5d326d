//! TOML scenario configuration.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level scenario configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// RNG seed. Omit to seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of timesteps to generate.
    #[serde(default = "default_timesteps")]
    pub timesteps: usize,

    /// Model parameters.
    pub model: ModelToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

fn default_timesteps() -> usize {
    1000
}

/// Model parameter tables, tagged by `kind`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelToml {
    /// HMM: per-state categorical symbol weights.
    Categorical {
        /// Transition-weight matrix, one row per state.
        transition: Vec<Vec<f64>>,
        /// Initial-state weights.
        initial: Vec<f64>,
        /// Symbol-weight matrix, one row per state.
        symbols: Vec<Vec<f64>>,
    },
    /// AR-HMM: per-regime lag coefficients and Gaussian noise.
    Autoregressive {
        /// Transition-weight matrix, one row per state.
        transition: Vec<Vec<f64>>,
        /// Initial-state weights.
        initial: Vec<f64>,
        /// One regime table per state.
        regimes: Vec<RegimeToml>,
    },
}

/// Per-regime AR parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegimeToml {
    /// Lag coefficients, most-recent first. May be empty.
    #[serde(default)]
    pub coefficients: Vec<f64>,
    /// Noise mean.
    pub mean: f64,
    /// Noise standard deviation.
    pub std_dev: f64,
}

/// Output settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Observation output path.
    pub observations: Option<PathBuf>,

    /// Optional hidden-state output path (one state per line).
    #[serde(default)]
    pub states: Option<PathBuf>,

    /// Observation format: "lines", "two-row", or "csv".
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            observations: None,
            states: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "lines".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_categorical_scenario() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            seed = 42
            timesteps = 100

            [model]
            kind = "categorical"
            transition = [[0.7, 0.3], [0.4, 0.6]]
            initial = [0.8, 0.2]
            symbols = [[0.5, 0.4, 0.1], [0.1, 0.3, 0.6]]

            [output]
            observations = "symbols.txt"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timesteps, 100);
        assert_eq!(config.output.format, "lines");
        assert!(matches!(config.model, ModelToml::Categorical { .. }));
    }

    #[test]
    fn parse_autoregressive_scenario() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            timesteps = 280

            [model]
            kind = "autoregressive"
            transition = [[0.7, 0.3], [0.4, 0.6]]
            initial = [0.8, 0.2]

            [[model.regimes]]
            coefficients = [-0.5, 0.7, 0.1]
            mean = 1.0
            std_dev = 2.0

            [[model.regimes]]
            coefficients = [0.1, -0.1, 0.2]
            mean = 3.0
            std_dev = 3.0

            [output]
            observations = "series.csv"
            format = "csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, None);
        let ModelToml::Autoregressive { regimes, .. } = config.model else {
            panic!("expected autoregressive model");
        };
        assert_eq!(regimes.len(), 2);
        assert_eq!(regimes[0].coefficients, vec![-0.5, 0.7, 0.1]);
        assert_eq!(regimes[1].std_dev, 3.0);
    }

    #[test]
    fn defaults_applied() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            [model]
            kind = "categorical"
            transition = [[1.0]]
            initial = [1.0]
            symbols = [[1.0]]
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.timesteps, 1000);
        assert!(config.output.observations.is_none());
        assert!(config.output.states.is_none());
        assert_eq!(config.output.format, "lines");
    }

    #[test]
    fn empty_coefficients_allowed() {
        let regime: RegimeToml = toml::from_str(
            r#"
            mean = 5.0
            std_dev = 0.0
            "#,
        )
        .unwrap();
        assert!(regime.coefficients.is_empty());
    }

    #[test]
    fn unknown_top_level_field_rejected() {
        let result: Result<ScenarioConfig, _> = toml::from_str(
            r#"
            iterations = 10

            [model]
            kind = "categorical"
            transition = [[1.0]]
            initial = [1.0]
            symbols = [[1.0]]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_model_kind_rejected() {
        let result: Result<ScenarioConfig, _> = toml::from_str(
            r#"
            [model]
            kind = "gaussian_mixture"
            transition = [[1.0]]
            initial = [1.0]
            "#,
        );
        assert!(result.is_err());
    }
}
