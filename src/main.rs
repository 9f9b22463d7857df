use std::env;

use anyhow::Context;
use colored::*;
use structopt::{self, StructOpt};
use tracing_subscriber::{prelude::*, EnvFilter};

mod command;
mod display;

/// Decode scrambled seven-segment displays
#[derive(Debug, StructOpt)]
struct SegmentDecoder {
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    Count(command::count::Command),
    Sum(command::sum::Command),
    Check(command::check::Command),
    Decode(command::decode::Command),
}

const DEFAULT_LOG_FILTER: &str = "warn";

/// `RUST_LOG` when set, otherwise [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_new(directives.unwrap_or(DEFAULT_LOG_FILTER))
        .with_context(|| {
            format!("invalid {} directives", EnvFilter::DEFAULT_ENV)
        })?;
    Ok(filter)
}

fn init_tracing() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter_layer = log_filter(directives.as_deref())?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn main() {
    let opt = SegmentDecoder::from_args();
    if let Err(err) = init_tracing().and_then(|_| match opt.command {
        Command::Count(command) => command.run(),
        Command::Sum(command) => command.run(),
        Command::Check(command) => command.run(),
        Command::Decode(command) => command.run(),
    }) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
