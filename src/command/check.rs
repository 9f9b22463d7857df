use std::path::PathBuf;

use colored::*;
use structopt::{self, StructOpt};
use tracing::info;

use super::read_lines;
use crate::display::Totals;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CheckError {
    #[error("{total} mismatch: expected {expected}, computed {actual}")]
    Mismatch {
        total: &'static str,
        expected: u64,
        actual: u64,
    },
}

/// Compute both totals and fail unless they match the expected values
#[derive(Debug, StructOpt)]
pub struct Command {
    #[structopt(required(true), parse(from_os_str))]
    input: PathBuf,

    /// Expected count of outputs with a unique segment count
    #[structopt(long, default_value("452"))]
    expected_count: u64,

    /// Expected sum of decoded output readings
    #[structopt(long, default_value("1096964"))]
    expected_sum: u64,
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        let lines = read_lines(&self.input)?;
        let totals = Totals::tally(lines.iter().map(String::as_str))?;
        info!(
            count = totals.unique_count,
            sum = totals.reading_sum,
            "computed totals"
        );

        verify(&totals, self.expected_count, self.expected_sum)?;
        println!(
            "{} count {} and sum {} match",
            "ok".green().bold(),
            totals.unique_count,
            totals.reading_sum
        );
        Ok(())
    }
}

fn verify(
    totals: &Totals,
    expected_count: u64,
    expected_sum: u64,
) -> Result<(), CheckError> {
    let checks = [
        ("unique segment count", expected_count, totals.unique_count as u64),
        ("reading sum", expected_sum, totals.reading_sum),
    ];
    for (total, expected, actual) in checks {
        if expected != actual {
            return Err(CheckError::Mismatch {
                total,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
