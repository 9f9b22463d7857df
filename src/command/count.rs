use std::path::PathBuf;

use structopt::{self, StructOpt};
use tracing::info;

use super::read_lines;
use crate::display::Totals;

/// Count output digits identifiable by their segment count alone
#[derive(Debug, StructOpt)]
pub struct Command {
    #[structopt(required(true), parse(from_os_str))]
    input: PathBuf,
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        let lines = read_lines(&self.input)?;
        let count = Totals::count_unique(lines.iter().map(String::as_str))?;
        info!(count, "counted unique segment count outputs");

        println!("digits 1, 4, 7 or 8 in output: {}", count);
        Ok(())
    }
}
