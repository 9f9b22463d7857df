use std::str::FromStr;

use super::{has_unique_segment_count, DigitPattern, ParseError};

const SIGNAL_PATTERN_COUNT: usize = 10;
const OUTPUT_PATTERN_COUNT: usize = 4;
const DELIMITER: &str = " | ";

type ParseResult<T> = Result<T, ParseError>;

/// One line of observations: the ten signal patterns that define the
/// wiring, and the four output patterns to read through it.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySample {
    patterns: Vec<DigitPattern>,
    output: Vec<DigitPattern>,
}

impl DisplaySample {
    pub fn parse(text: &str) -> ParseResult<DisplaySample> {
        let text = text.trim();
        let malformed = |reason: String| ParseError::MalformedLine {
            line: text.to_owned(),
            reason,
        };

        let mut sections = text.split(DELIMITER);
        let (patterns, output) =
            match (sections.next(), sections.next(), sections.next()) {
                (Some(patterns), Some(output), None) => (patterns, output),
                (_, None, _) => {
                    return Err(malformed(format!(
                        "missing '{}' delimiter",
                        DELIMITER.trim()
                    )))
                }
                _ => {
                    return Err(malformed(format!(
                        "more than one '{}' delimiter",
                        DELIMITER.trim()
                    )))
                }
            };

        let patterns = parse_patterns(patterns)?;
        if patterns.len() != SIGNAL_PATTERN_COUNT {
            return Err(malformed(format!(
                "expected {} signal patterns, found {}",
                SIGNAL_PATTERN_COUNT,
                patterns.len()
            )));
        }
        let output = parse_patterns(output)?;
        if output.len() != OUTPUT_PATTERN_COUNT {
            return Err(malformed(format!(
                "expected {} output patterns, found {}",
                OUTPUT_PATTERN_COUNT,
                output.len()
            )));
        }

        Ok(DisplaySample { patterns, output })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &DigitPattern> {
        self.patterns.iter()
    }

    pub fn output(&self) -> impl Iterator<Item = &DigitPattern> {
        self.output.iter()
    }

    pub fn unique_output_count(&self) -> usize {
        self.output()
            .filter(|pattern| has_unique_segment_count(pattern))
            .count()
    }
}

fn parse_patterns(text: &str) -> ParseResult<Vec<DigitPattern>> {
    text.split(' ')
        .filter(|s| !s.is_empty())
        .map(DigitPattern::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DigitPattern, DisplaySample, ParseError};
    use crate::display::tests::SINGLE_LINE;
    use std::str::FromStr;

    #[test]
    fn display_sample_parse() {
        let expected_patterns = vec![
            "be", "cfbegad", "cbdgef", "fgaecd", "cgeb", "fdcge", "agebfd",
            "fecdb", "fabcd", "edb",
        ];
        let expected_output = vec!["fdgacbe", "cefdb", "cefbgd", "gcbe"];
        let text = format!(
            "{} | {}\n",
            expected_patterns.join(" "),
            expected_output.join(" ")
        );

        let sample = DisplaySample::parse(&text).expect("valid text input");

        assert!(sample
            .patterns()
            .zip(expected_patterns.iter())
            .all(|(actual, expected_str)| *actual
                == DigitPattern::from_str(expected_str).unwrap()));
        assert!(sample
            .output()
            .zip(expected_output.iter())
            .all(|(actual, expected_str)| *actual
                == DigitPattern::from_str(expected_str).unwrap()));
        assert_eq!(sample.unique_output_count(), 2);
    }

    #[test]
    fn single_line_has_no_unique_outputs() {
        let sample = DisplaySample::parse(SINGLE_LINE).expect("valid input");

        assert_eq!(sample.unique_output_count(), 0);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        for line in MALFORMED_LINES {
            match DisplaySample::parse(line) {
                Err(ParseError::MalformedLine { .. }) => {}
                other => panic!("{:?} parsed as {:?}", line, other),
            }
        }
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let line = "acedgfb cdfbe gcdfa fbcad dax cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

        assert_eq!(
            DisplaySample::parse(line),
            Err(ParseError::InvalidPattern("dax".to_owned()))
        );
    }

    const MALFORMED_LINES: [&str; 6] = [
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab cdfeb fcadb cdfeb cdbaf",
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb | cdfeb fcadb cdfeb cdbaf",
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab dab | cdfeb fcadb cdfeb cdbaf",
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb",
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf ab",
        "acedgfb cdfbe gcdfa fbcad dab | cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf",
    ];
}
