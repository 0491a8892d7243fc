pub mod preview;
pub mod run;
pub mod serve;

use clap::Args;

use pmcc_core::{Population, PopulationConfig, SimError};

/// Shared population flags. Defaults are the standard experiment's fixed
/// table, so plain `pmcc run` is the canonical simulation.
#[derive(Debug, Args)]
pub struct PopulationArgs {
    /// Number of rows in the synthetic population
    #[arg(long, default_value_t = PopulationConfig::default().size)]
    pub population_size: usize,

    /// Mean of the normal distribution (both columns)
    #[arg(long, default_value_t = PopulationConfig::default().mean)]
    pub mean: f64,

    /// Standard deviation of the normal distribution, before clamping
    #[arg(long, default_value_t = PopulationConfig::default().std_dev)]
    pub std_dev: f64,

    /// Lower clamp bound
    #[arg(long, default_value_t = PopulationConfig::default().range.0)]
    pub min: f64,

    /// Upper clamp bound
    #[arg(long, default_value_t = PopulationConfig::default().range.1)]
    pub max: f64,

    /// Population RNG seed
    #[arg(long, default_value_t = PopulationConfig::default().seed)]
    pub population_seed: u64,
}

impl PopulationArgs {
    pub fn to_config(&self) -> PopulationConfig {
        PopulationConfig {
            size: self.population_size,
            mean: self.mean,
            std_dev: self.std_dev,
            range: (self.min, self.max),
            seed: self.population_seed,
        }
    }

    /// Generate the population these flags describe.
    pub fn build(&self) -> Result<Population, SimError> {
        Population::generate(self.to_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> PopulationArgs {
        let defaults = PopulationConfig::default();
        PopulationArgs {
            population_size: defaults.size,
            mean: defaults.mean,
            std_dev: defaults.std_dev,
            min: defaults.range.0,
            max: defaults.range.1,
            population_seed: defaults.seed,
        }
    }

    #[test]
    fn default_args_round_trip_to_default_config() {
        assert_eq!(default_args().to_config(), PopulationConfig::default());
    }

    #[test]
    fn overridden_args_carry_through() {
        let mut args = default_args();
        args.population_size = 500;
        args.min = -10.0;
        args.max = 10.0;
        let config = args.to_config();
        assert_eq!(config.size, 500);
        assert_eq!(config.range, (-10.0, 10.0));
    }

    #[test]
    fn inverted_range_fails_at_build() {
        let mut args = default_args();
        args.min = 50.0;
        args.max = 1.0;
        assert!(args.build().is_err());
    }
}
