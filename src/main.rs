//! Cohera CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cohera::cli::{Cli, Commands};
use cohera::domain::models::{Config, LoggingConfig};
use cohera::infrastructure::config::ConfigLoader;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() {
    let config = ConfigLoader::load().unwrap_or_else(|err| {
        eprintln!("warning: falling back to default configuration: {err:#}");
        Config::default()
    });
    init_tracing(&config.logging);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diagnose(args) => cohera::cli::commands::diagnose::execute(args, &config, cli.json),
        Commands::Verify(args) => cohera::cli::commands::verify::execute(args, &config, cli.json),
        Commands::Batch(args) => cohera::cli::commands::batch::execute(args, &config, cli.json),
        Commands::Params => cohera::cli::commands::params::execute(cli.json),
    };

    if let Err(err) = result {
        cohera::cli::handle_error(&err, cli.json);
    }
}
