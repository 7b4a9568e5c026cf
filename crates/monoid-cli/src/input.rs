//! Input sources: a file path or standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Read the whole input as a string. `None` or `-` means stdin.
pub fn read_to_string(path: Option<&Path>) -> Result<String> {
    let mut text = String::new();
    open(path)?
        .read_to_string(&mut text)
        .context("Failed to read input")?;
    Ok(text)
}

/// Open the input for line-by-line reading. `None` or `-` means stdin.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}
