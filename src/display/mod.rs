use std::collections::HashMap;

use anyhow::Context;
use lazy_static::lazy_static;
use tracing::debug;

mod decoder;
mod pattern;
mod sample;

pub use decoder::DisplayDecoder;
pub use pattern::{DigitPattern, SEGMENT_COUNT};
pub use sample::DisplaySample;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("invalid digit pattern '{0}'")]
    InvalidPattern(String),

    #[error("malformed display line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },
}

lazy_static! {
    /// Digits whose segment count alone identifies them.
    pub static ref UNIQUE_SEGMENT_COUNT_DIGITS: HashMap<usize, u8> =
        [(2, 1), (3, 7), (4, 4), (SEGMENT_COUNT, 8)]
            .into_iter()
            .collect();
}

pub fn has_unique_segment_count(pattern: &DigitPattern) -> bool {
    UNIQUE_SEGMENT_COUNT_DIGITS.contains_key(&pattern.len())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Output patterns identifiable by segment count alone.
    pub unique_count: usize,
    /// Sum of every line's decoded four-digit reading.
    pub reading_sum: u64,
}

impl Totals {
    /// Counts unique-length outputs without decoding any line.
    pub fn count_unique<'a, Iter>(lines: Iter) -> anyhow::Result<usize>
    where
        Iter: Iterator<Item = &'a str>,
    {
        let mut count = 0;
        for (index, line) in numbered_records(lines) {
            let sample = DisplaySample::parse(line)
                .with_context(|| format!("line {}", index))?;
            count += sample.unique_output_count();
        }
        Ok(count)
    }

    pub fn tally<'a, Iter>(lines: Iter) -> anyhow::Result<Totals>
    where
        Iter: Iterator<Item = &'a str>,
    {
        Self::tally_with(lines, |_, _| {})
    }

    /// Like [`Totals::tally`], handing each line's sample and reading to
    /// `inspect` as it is decoded.
    pub fn tally_with<'a, Iter, F>(
        lines: Iter,
        mut inspect: F,
    ) -> anyhow::Result<Totals>
    where
        Iter: Iterator<Item = &'a str>,
        F: FnMut(&DisplaySample, u32),
    {
        let mut totals = Totals::default();
        for (index, line) in numbered_records(lines) {
            let sample = DisplaySample::parse(line)
                .with_context(|| format!("line {}", index))?;
            let decoder = DisplayDecoder::build(sample.patterns())
                .with_context(|| format!("line {}", index))?;
            let reading = decoder
                .reading(sample.output())
                .with_context(|| format!("line {}", index))?;
            debug!(line = index, reading, "decoded display");
            inspect(&sample, reading);

            totals.unique_count += sample.unique_output_count();
            totals.reading_sum += u64::from(reading);
        }
        Ok(totals)
    }
}

/// Skips blank lines, keeping 1-based line numbers for diagnostics.
fn numbered_records<'a, Iter>(
    lines: Iter,
) -> impl Iterator<Item = (usize, &'a str)>
where
    Iter: Iterator<Item = &'a str>,
{
    lines
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}
