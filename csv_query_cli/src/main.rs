mod args;
mod demo;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use csv_query_core::{process_csv, process_csv_file};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if cli.demo {
        let file = cli.demo_file.clone().unwrap_or_else(demo::bundled_file);
        return demo::run(&file);
    }

    let definitions = cli.filter_definitions();
    debug!(columns = %cli.columns, filters = cli.filters.len(), "starting query");

    let output = match &cli.file {
        Some(path) => process_csv_file(path, &cli.columns, &definitions)
            .with_context(|| format!("Query over {} failed", path.display()))?,
        None => {
            let mut data = String::new();
            io::stdin()
                .read_to_string(&mut data)
                .context("Failed to read CSV from stdin")?;
            process_csv(&data, &cli.columns, &definitions).context("Query over stdin failed")?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
