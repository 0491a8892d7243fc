//! Request/report glue for hosting layers.
//!
//! The dashboard-facing surfaces (HTTP, CLI) supply `(sample_size,
//! threshold)` pairs per request; the core answers with the full PMCC
//! sequence and its threshold stats. `run_request` is a pure function over
//! the immutable population — event wiring, rendering, and transport all
//! belong to the caller.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::population::Population;
use crate::simulate::{simulate, simulate_seeded};
use crate::threshold::{ThresholdStats, aggregate};

/// Default bootstrap iteration count.
pub const DEFAULT_ITERATIONS: usize = 50_000;

/// One simulation request, as supplied by a hosting layer.
///
/// `Default` is the standard run: sample size 10, threshold 0.6319,
/// 50,000 iterations, entropy seeding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Bootstrap sample size per draw.
    pub sample_size: usize,
    /// Symmetric band half-width the PMCC values are classified against.
    pub threshold: f64,
    /// Number of bootstrap iterations.
    pub iterations: usize,
    /// Explicit seed for reproducible runs; None draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            sample_size: 10,
            threshold: 0.6319,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

/// Simulation output: the raw PMCC sequence plus its aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// The request this report answers.
    pub request: SimulationRequest,
    /// All correlation values, in generation order (NaN = undefined).
    pub values: Vec<f64>,
    /// Threshold band classification of `values`.
    pub stats: ThresholdStats,
}

/// Run one full request against the population: resample, correlate,
/// aggregate.
pub fn run_request(
    population: &Population,
    request: &SimulationRequest,
) -> Result<SimulationReport, SimError> {
    let values = match request.seed {
        Some(seed) => simulate_seeded(population, request.sample_size, request.iterations, seed)?,
        None => simulate(population, request.sample_size, request.iterations)?,
    };
    let stats = aggregate(&values, request.threshold);
    Ok(SimulationReport {
        request: *request,
        values,
        stats,
    })
}
