//! CLI for pmcc-sim — bootstrap simulation of the Pearson correlation
//! sampling distribution.

mod commands;

use clap::{Parser, Subcommand};

use commands::PopulationArgs;

#[derive(Parser)]
#[command(name = "pmcc")]
#[command(about = "pmcc — how often does pure sampling noise look like correlation?")]
#[command(version = pmcc_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print threshold stats with a histogram
    Run {
        /// Bootstrap sample size per draw
        #[arg(long, default_value_t = 10)]
        sample_size: usize,

        /// Symmetric band half-width for the within/outside split
        #[arg(long, default_value_t = 0.6319)]
        threshold: f64,

        /// Number of bootstrap iterations
        #[arg(long, default_value_t = pmcc_core::DEFAULT_ITERATIONS)]
        iterations: usize,

        /// Explicit seed for a reproducible run (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        population: PopulationArgs,

        /// Emit the full report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },

    /// Print the first rows of the generated population
    Preview {
        /// Number of rows to show
        #[arg(long, default_value_t = 10)]
        rows: usize,

        #[command(flatten)]
        population: PopulationArgs,

        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Host the simulation as a local JSON service
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Bind port
        #[arg(long, default_value_t = 8050)]
        port: u16,

        #[command(flatten)]
        population: PopulationArgs,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            sample_size,
            threshold,
            iterations,
            seed,
            population,
            json,
        } => commands::run::run(sample_size, threshold, iterations, seed, &population, json),
        Commands::Preview {
            rows,
            population,
            json,
        } => commands::preview::run(rows, &population, json),
        Commands::Serve {
            host,
            port,
            population,
        } => commands::serve::run(&host, port, &population),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
