// src/main.rs

use anyhow::Result;
use clap::Parser;
use srcbundle::cli::Cli;
use srcbundle::config::ConfigBuilder;
use srcbundle::output::report;

fn main() -> Result<()> {
    // Initialize logging. Default to 'warn' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::debug!("Starting srcbundle v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = Cli::parse();
    let quiet = args.quiet;

    let config = match ConfigBuilder::from_cli(args).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    match srcbundle::run(&config) {
        Ok(outcome) => {
            if !quiet {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                report::write_report(&mut handle, &outcome)?;
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
