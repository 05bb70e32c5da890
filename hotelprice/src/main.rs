use anyhow::{Context, Result};
use clap::Parser;
use hotelpricelib::pipeline::{self, RunConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "hotelprice", version, about = "Cheapest room and total prices from hotel quotes")]
struct Cli {
    /// Input JSON with `assignment_results`
    #[arg(short = 'i', long = "input", env = "HOTELPRICE_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Report file (overwritten)
    #[arg(short = 'o', long = "output", env = "HOTELPRICE_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Only write the report file
    #[arg(long = "no-console")]
    no_console: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // логи в stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RunConfig {
        input: cli.input,
        output: cli.output,
        echo: !cli.no_console,
    };

    let stdout = io::stdout();
    pipeline::run(&config, stdout.lock())
        .with_context(|| format!("price check of {} failed", config.input.display()))?;
    Ok(())
}
