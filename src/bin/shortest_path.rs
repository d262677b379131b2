use indexed_sssp::runner::{run, RunConfig};
use std::env;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let config = RunConfig::from_args(env::args().skip(1))?;
    log::debug!("Running with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, stdin.lock(), io::BufWriter::new(stdout.lock()))?;

    Ok(())
}
