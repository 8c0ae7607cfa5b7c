mod aggregator;
mod config;
mod discovery;
mod loader;
mod logger;
mod model;
mod processor;
mod summary;

use std::process;
use std::sync::Arc;

use config::Config;
use logger::RunLog;
use model::error::SalesError;

fn main() {
    if let Err(e) = run() {
        println!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SalesError> {
    let config = Config::from_env()?;

    // An unusable log path only disables the run log
    let logger = config
        .log_path
        .as_deref()
        .and_then(|path| RunLog::open(path).ok())
        .map(Arc::new);

    processor::run_batch(&config.directory, logger)
}
