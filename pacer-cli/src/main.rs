use anyhow::Context;
use clap::Parser;
use pacer::prelude::*;
use std::fs;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

use cli::Cli;

const DEFAULT_LOG_FILTER: &str = "pacer=info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

/// Plays the part of the test host: fires the lifecycle events once, then hands the published
/// values to whoever consumes them.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    let sink = MemorySink::new();
    let host = cli.host.as_deref();

    let mut element = CalculatorElement::new(config, sink.clone());
    element.test_started(host);
    element.test_ended(host);

    let Some(text) = output::render(&sink, cli.format)? else {
        warn!("Nothing was published");
        return Ok(());
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}
