//! Bootstrap resampling engine.
//!
//! Pipeline per iteration:
//! 1. Draw `sample_size` row indices uniformly with replacement for column 1
//! 2. Independently draw `sample_size` indices for column 2
//! 3. Gather both samples into reused scratch buffers
//! 4. Compute the Pearson correlation of the pair
//!
//! The two index draws are independent — samples are NOT paired by row, so
//! the true correlation between the sampled sequences is zero by
//! construction and everything observed is sampling noise.
//!
//! The iteration loop is sharded into fixed-size chunks. Chunk `i` owns an
//! RNG derived from `(seed, i)`, so the output sequence is bit-identical no
//! matter how many worker threads the machine provides. Workers are scoped
//! std threads that share the read-only population and write disjoint
//! slices of the output.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::SimError;
use crate::population::Population;
use crate::stats::pearson;

/// Iterations per shard. Small enough to spread tens of thousands of
/// iterations across every core, large enough that per-shard RNG setup
/// never dominates.
const SHARD_LEN: usize = 1024;

/// Run the simulation with a seed drawn from OS entropy.
///
/// Sampling is always with replacement, so `sample_size` may exceed the
/// population size. A zero-variance draw yields NaN in the output, never
/// an error.
pub fn simulate(
    population: &Population,
    sample_size: usize,
    iterations: usize,
) -> Result<Vec<f64>, SimError> {
    let seed = rand::rng().random::<u64>();
    log::debug!("simulate: drew entropy seed {seed:#018x}");
    simulate_seeded(population, sample_size, iterations, seed)
}

/// Run the simulation with an explicit seed.
///
/// Returns exactly `iterations` correlation values in generation order,
/// each in [-1, 1] or NaN. Identical `(population, sample_size,
/// iterations, seed)` inputs produce identical output, independent of the
/// number of worker threads.
pub fn simulate_seeded(
    population: &Population,
    sample_size: usize,
    iterations: usize,
    seed: u64,
) -> Result<Vec<f64>, SimError> {
    if sample_size == 0 {
        return Err(SimError::invalid("sample_size", "must be at least 1"));
    }
    if iterations == 0 {
        return Err(SimError::invalid("iterations", "must be at least 1"));
    }

    let mut values = vec![0.0f64; iterations];
    let n_shards = values.len().div_ceil(SHARD_LEN);
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(n_shards);

    if workers <= 1 {
        for (idx, shard) in values.chunks_mut(SHARD_LEN).enumerate() {
            fill_shard(population, sample_size, seed, idx, shard);
        }
        return Ok(values);
    }

    log::debug!("simulate: {iterations} iterations across {n_shards} shards on {workers} workers");

    // Round-robin shard assignment; each worker owns a disjoint set of
    // output slices, so no synchronization is needed.
    let mut assignments: Vec<Vec<(usize, &mut [f64])>> =
        (0..workers).map(|_| Vec::new()).collect();
    for (idx, shard) in values.chunks_mut(SHARD_LEN).enumerate() {
        assignments[idx % workers].push((idx, shard));
    }

    std::thread::scope(|s| {
        for shards in assignments {
            s.spawn(move || {
                for (idx, shard) in shards {
                    fill_shard(population, sample_size, seed, idx, shard);
                }
            });
        }
    });

    Ok(values)
}

/// Fill one output shard. The shard RNG depends only on `(seed, shard_idx)`,
/// never on which worker runs it.
fn fill_shard(
    population: &Population,
    sample_size: usize,
    seed: u64,
    shard_idx: usize,
    out: &mut [f64],
) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(shard_seed(seed, shard_idx));
    let mut xs = vec![0.0f64; sample_size];
    let mut ys = vec![0.0f64; sample_size];
    for slot in out.iter_mut() {
        draw_with_replacement(&mut rng, population.column1(), &mut xs);
        draw_with_replacement(&mut rng, population.column2(), &mut ys);
        *slot = pearson(&xs, &ys);
    }
}

/// Gather `buf.len()` values from `column` at uniform random indices,
/// repetition allowed.
fn draw_with_replacement(rng: &mut Xoshiro256PlusPlus, column: &[f64], buf: &mut [f64]) {
    let n = column.len();
    for v in buf.iter_mut() {
        *v = column[rng.random_range(0..n)];
    }
}

/// SplitMix64 finalizer over the shard index, so neighboring shards get
/// well-separated RNG streams.
fn shard_seed(seed: u64, shard_idx: usize) -> u64 {
    let mut z = seed ^ (shard_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
