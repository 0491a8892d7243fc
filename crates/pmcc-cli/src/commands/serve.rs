use std::error::Error;

use super::PopulationArgs;

pub fn run(host: &str, port: u16, population: &PopulationArgs) -> Result<(), Box<dyn Error>> {
    let population = population.build()?;

    let base = format!("http://{host}:{port}");
    println!("pmcc-sim server v{}", pmcc_core::VERSION);
    println!("   {base}");
    println!(
        "   population: {} rows (seed {})",
        population.len(),
        population.config().seed
    );
    println!();
    println!("   Endpoints:");
    println!("     GET /                    API index (try: curl {base})");
    println!("     GET /api/v1/simulate     Run a bootstrap PMCC simulation");
    println!("     GET /api/v1/population   Preview the generated population");
    println!("     GET /health              Health check");
    println!();
    println!("   Query params for /api/v1/simulate:");
    println!("     sample_size=N            Bootstrap sample size (default: 10)");
    println!("     threshold=T              Band half-width (default: 0.6319)");
    println!("     iterations=N             Bootstrap iterations (default: 50000)");
    println!("     seed=N                   Reproducible run");
    println!("     include_values=true      Include the raw PMCC sequence");
    println!();
    println!("   Examples:");
    println!("     curl '{base}/api/v1/simulate?sample_size=5&threshold=0.4'");
    println!("     curl '{base}/api/v1/population?rows=10'");
    println!();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(pmcc_server::run_server(population, host, port))?;
    Ok(())
}
