use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

pub mod check;
pub mod count;
pub mod decode;
pub mod sum;

fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let file = File::open(file_path).with_context(|| {
        format!("failed to open file '{}'", file_path.display())
    })?;
    let mut lines = Vec::new();
    let reader = BufReader::new(file);
    for line in reader.lines() {
        lines.push(line.with_context(|| {
            format!("failed to read line from '{}'", file_path.display())
        })?);
    }
    Ok(lines)
}
