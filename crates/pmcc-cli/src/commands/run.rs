use std::error::Error;
use std::time::Instant;

use pmcc_core::{SimulationRequest, run_request};

use super::PopulationArgs;

/// Terminal histogram geometry: 25 bins over [-1, 1], bars up to 48 chars.
const BINS: usize = 25;
const BAR_WIDTH: usize = 48;

pub fn run(
    sample_size: usize,
    threshold: f64,
    iterations: usize,
    seed: Option<u64>,
    population: &PopulationArgs,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let population = population.build()?;
    let request = SimulationRequest {
        sample_size,
        threshold,
        iterations,
        seed,
    };

    let started = Instant::now();
    let report = run_request(&population, &request)?;
    let elapsed = started.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "PMCC simulation — sample_size={sample_size} threshold={threshold} iterations={iterations}"
    );
    println!(
        "population: {} rows, mean {}, std_dev {:.4}, range [{}, {}], seed {}",
        population.len(),
        population.config().mean,
        population.config().std_dev,
        population.config().range.0,
        population.config().range.1,
        population.config().seed,
    );
    println!();
    print_histogram(&report.values);
    println!();
    println!("within  ±{threshold}: {:.4}", report.stats.within);
    println!("outside ±{threshold}: {:.4}", report.stats.outside);
    if report.stats.undefined > 0 {
        println!(
            "undefined (zero-variance draws, excluded): {}",
            report.stats.undefined
        );
    }
    println!("elapsed: {:.2?}", elapsed);
    Ok(())
}

/// ASCII histogram of the PMCC sequence over [-1, 1]. NaN values are
/// skipped; an all-NaN run prints a note instead of empty bars.
fn print_histogram(values: &[f64]) {
    let bin_width = 2.0 / BINS as f64;
    let mut counts = vec![0u64; BINS];
    for &v in values {
        if v.is_nan() {
            continue;
        }
        let idx = (((v + 1.0) / bin_width) as usize).min(BINS - 1);
        counts[idx] += 1;
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        println!("(no defined correlation values to plot)");
        return;
    }

    for (i, &count) in counts.iter().enumerate() {
        let lo = -1.0 + i as f64 * bin_width;
        let hi = lo + bin_width;
        let bar_len = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(bar_len);
        println!("{lo:>6.2} .. {hi:>5.2} | {bar:<width$} {count}", width = BAR_WIDTH);
    }
}
