use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bulkcopy::core::config::loader;
use bulkcopy::core::config::types::DemoConfig;
use bulkcopy::core::logging;
use bulkcopy::utils::BulkCopyResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> BulkCopyResult<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_config(path)?,
        None => DemoConfig::default(),
    };
    let seed = config.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, batch_size = config.batch_size, "starting demo pipelines");

    // One generator for the whole process, shared by the pipelines in turn.
    let mut rng = StdRng::seed_from_u64(seed);

    for entry in &config.pipelines {
        let mut pipeline = entry
            .system
            .pipeline(&entry.name, &mut rng, config.batch_size, io::stdout)?;

        let done = pipeline.run();
        if !done.error.is_exhausted() {
            println!("{}", done.error);
        }
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
