use colored::*;
use structopt::{self, StructOpt};

use crate::display::{DisplayDecoder, DisplaySample};

/// Decode a single display given on the command line
#[derive(Debug, StructOpt)]
pub struct Command {
    /// Ten signal patterns, '|', then four output patterns
    #[structopt(required(true))]
    patterns: Vec<String>,
}

impl Command {
    pub fn run(&self) -> anyhow::Result<()> {
        let sample = DisplaySample::parse(&self.patterns.join(" "))?;
        let decoder = DisplayDecoder::build(sample.patterns())?;

        let mut mapping = decoder.mapping().into_iter().collect::<Vec<_>>();
        mapping.sort_by_key(|(_, digit)| *digit);
        for (pattern, digit) in mapping {
            println!("{:>7} => {}", pattern.to_string(), digit);
        }
        println!(
            "reading: {}",
            decoder.reading(sample.output())?.to_string().bold()
        );
        Ok(())
    }
}
