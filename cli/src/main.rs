mod run;

use plane_filter_common::config::Config;
use plane_filter_predicates::PredicateRegistry;
use std::path::PathBuf;
use tracing::{error, info};

fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));

    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {e}", config_path.display());
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.parse().unwrap_or_default()),
        )
        .init();

    let registry = PredicateRegistry::with_defaults();
    let available: Vec<_> = registry.symbols().collect();
    info!(
        predicate = config.filter.predicate,
        input = %config.input.path.display(),
        available = ?available,
        "starting plane filter"
    );

    match run::run(&config, &registry) {
        Ok(urls) => {
            for url in urls {
                println!("{url}");
            }
        }
        Err(e) => {
            error!(error = %e, "plane filter failed");
            std::process::exit(1);
        }
    }
}
