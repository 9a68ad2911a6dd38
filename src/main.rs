//! Binary entry point: load configuration, set up logging, run the server.

use spadev::config::Config;
use spadev::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logger::init(&config)?;

    // Build the runtime by hand so server.workers can size the thread pool
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = config.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(server::run(config))
}
