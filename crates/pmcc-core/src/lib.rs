//! # pmcc-core
//!
//! Bootstrap simulation of the Pearson correlation sampling distribution.
//!
//! A fixed synthetic bivariate population is generated once per process.
//! Each request then draws thousands of small bootstrap samples from it —
//! two independent, unpaired draws per iteration, one per column — and
//! computes the Pearson correlation of every pair. Because the draws are
//! unpaired, the true correlation is zero and the resulting distribution
//! shows how often pure sampling noise produces a correlation beyond a
//! chosen threshold band.
//!
//! ## Quick Start
//!
//! ```
//! use pmcc_core::{Population, PopulationConfig, aggregate, simulate_seeded};
//!
//! let population = Population::generate(PopulationConfig::default()).unwrap();
//! let values = simulate_seeded(&population, 10, 5000, 42).unwrap();
//! let stats = aggregate(&values, 0.6319);
//! assert!((stats.within + stats.outside - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Architecture
//!
//! Population (generate once) → Resampling engine (per request) →
//! Threshold aggregation
//!
//! All three stages are pure functions over immutable inputs; the only
//! process-wide state is the population itself, constructed explicitly and
//! passed into every call. The engine shards its iteration loop across
//! scoped threads with per-shard RNG streams, so results are bit-identical
//! for a given seed regardless of core count.

pub mod error;
pub mod population;
pub mod request;
pub mod simulate;
pub mod stats;
pub mod threshold;

pub use error::SimError;
pub use population::{COLUMN_LABELS, Population, PopulationConfig};
pub use request::{DEFAULT_ITERATIONS, SimulationReport, SimulationRequest, run_request};
pub use simulate::{simulate, simulate_seeded};
pub use stats::pearson;
pub use threshold::{ThresholdStats, aggregate};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
