// src/main.rs

use anyhow::Result;
use clap::Parser;
use picstat::cli::Cli;
use picstat::config::ConfigBuilder;
use picstat::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "picstat=debug".parse()?
                } else {
                    "picstat=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting picstat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // Missing paths are rejected here by clap, before any output.
    let cli = Cli::parse();

    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully.");

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
