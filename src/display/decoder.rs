use std::collections::HashMap;

use tracing::trace;

use super::{DigitPattern, UNIQUE_SEGMENT_COUNT_DIGITS};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("expected exactly one candidate pattern for digit {digit}, found {matches}")]
    Ambiguous { digit: u8, matches: usize },

    #[error("output pattern '{0}' is not one of the signal patterns")]
    UnknownOutput(DigitPattern),
}

type Result<T> = std::result::Result<T, DecodeError>;

/// Which already decoded digit a candidate is compared against, and how many
/// segments the two must share.
struct Overlap {
    with: u8,
    count: usize,
}

/// Deduction order for the five and six segment digits. Each rule may only
/// refer to digits decoded before it.
const OVERLAP_RULES: [(u8, usize, Overlap); 6] = [
    (2, 5, Overlap { with: 4, count: 2 }),
    (5, 5, Overlap { with: 1, count: 1 }),
    (3, 5, Overlap { with: 1, count: 2 }),
    (9, 6, Overlap { with: 3, count: 5 }),
    (0, 6, Overlap { with: 1, count: 2 }),
    (6, 6, Overlap { with: 1, count: 1 }),
];

/// The digit each signal pattern of one display stands for.
#[derive(Debug)]
pub struct DisplayDecoder {
    digit_patterns: [DigitPattern; 10],
}

impl DisplayDecoder {
    pub fn build<'a>(
        patterns: impl Iterator<Item = &'a DigitPattern>,
    ) -> Result<DisplayDecoder> {
        let mut undecided = patterns.copied().collect::<Vec<DigitPattern>>();
        let mut digit_patterns = [DigitPattern::default(); 10];

        for (digit, len) in unique_digits() {
            digit_patterns[digit as usize] =
                take_single(&mut undecided, digit, |pattern| pattern.len() == len)?;
        }

        for (digit, len, overlap) in OVERLAP_RULES.iter() {
            let reference = digit_patterns[overlap.with as usize];
            digit_patterns[*digit as usize] =
                take_single(&mut undecided, *digit, |pattern| {
                    pattern.len() == *len
                        && pattern.overlap(&reference) == overlap.count
                })?;
        }

        Ok(DisplayDecoder { digit_patterns })
    }

    pub fn digit(&self, pattern: &DigitPattern) -> Option<u8> {
        self.digit_patterns
            .iter()
            .position(|digit_pattern| digit_pattern == pattern)
            .map(|index| index as u8)
    }

    pub fn mapping(&self) -> HashMap<DigitPattern, u8> {
        self.digit_patterns
            .iter()
            .enumerate()
            .map(|(digit, pattern)| (*pattern, digit as u8))
            .collect()
    }

    pub fn decode<'a>(
        &self,
        patterns: impl Iterator<Item = &'a DigitPattern>,
    ) -> Result<Vec<u8>> {
        patterns
            .map(|pattern| {
                self.digit(pattern)
                    .ok_or(DecodeError::UnknownOutput(*pattern))
            })
            .collect()
    }

    /// Decodes `patterns` and reads the digits as one base 10 number.
    pub fn reading<'a>(
        &self,
        patterns: impl Iterator<Item = &'a DigitPattern>,
    ) -> Result<u32> {
        Ok(self
            .decode(patterns)?
            .into_iter()
            .fold(0, |value, digit| value * 10 + u32::from(digit)))
    }
}

/// Digits decoded by segment count alone, as `(digit, len)` in digit order.
fn unique_digits() -> Vec<(u8, usize)> {
    let mut unique = UNIQUE_SEGMENT_COUNT_DIGITS
        .iter()
        .map(|(len, digit)| (*digit, *len))
        .collect::<Vec<(u8, usize)>>();
    unique.sort_unstable();
    unique
}

/// Removes and returns the one undecided pattern matching `predicate`.
fn take_single<F>(
    undecided: &mut Vec<DigitPattern>,
    digit: u8,
    predicate: F,
) -> Result<DigitPattern>
where
    F: Fn(&DigitPattern) -> bool,
{
    let matches = undecided
        .iter()
        .enumerate()
        .filter(|(_, pattern)| predicate(pattern))
        .map(|(index, _)| index)
        .collect::<Vec<usize>>();
    if matches.len() != 1 {
        return Err(DecodeError::Ambiguous {
            digit,
            matches: matches.len(),
        });
    }
    let pattern = undecided.swap_remove(matches[0]);
    trace!(digit, %pattern, "decoded digit");
    Ok(pattern)
}
