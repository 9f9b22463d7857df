use std::path::PathBuf;

use colored::*;
use structopt::{self, StructOpt};
use tracing::info;

use super::read_lines;
use crate::display::Totals;

/// Decode every display and sum the output readings
#[derive(Debug, StructOpt)]
pub struct Command {
    #[structopt(required(true), parse(from_os_str))]
    input: PathBuf,

    /// Print each display's decoded reading
    #[structopt(long)]
    verbose: bool,
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        let lines = read_lines(&self.input)?;
        let totals =
            Totals::tally_with(lines.iter().map(String::as_str), |sample, reading| {
                if self.verbose {
                    let output = sample
                        .output()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("{}: {}", output, format!("{:04}", reading).bold());
                }
            })?;
        info!(sum = totals.reading_sum, "summed display readings");

        println!("summed message output: {}", totals.reading_sum);
        Ok(())
    }
}
