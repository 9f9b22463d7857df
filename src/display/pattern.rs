use std::{fmt, str::FromStr};

use bitvec::prelude::*;

use super::ParseError;

pub const SEGMENT_COUNT: usize = 7;

type Segments = BitArray<[u8; 1], Lsb0>;

/// The lit segments of one scrambled digit.
///
/// Segments are stored as a set, so `"dab"` and `"abd"` parse to equal
/// patterns and display in the same `a..=g` order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitPattern(Segments);

impl DigitPattern {
    pub fn len(&self) -> usize {
        self.0.count_ones()
    }

    /// Number of segments lit in both patterns.
    pub fn overlap(&self, other: &Self) -> usize {
        self.0.iter_ones().filter(|index| other.0[*index]).count()
    }

    fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0
            .iter_ones()
            .map(|index| (b'a' + index as u8) as char)
    }
}

impl FromStr for DigitPattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::InvalidPattern(s.to_owned()));
        }
        let mut segments = Segments::ZERO;
        for element in s.bytes() {
            if !(b'a'..=b'g').contains(&element) {
                return Err(ParseError::InvalidPattern(s.to_owned()));
            }
            let index = (element - b'a') as usize;
            if segments[index] {
                return Err(ParseError::InvalidPattern(s.to_owned()));
            }
            segments.set(index, true);
        }
        Ok(DigitPattern(segments))
    }
}

impl fmt::Display for DigitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DigitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitPattern({})", self)
    }
}
