//! Parser module: load a script once, then run the aggregator over it.

pub mod bash;
pub mod cursor;
pub mod grammar;
pub mod line;
pub mod tag;

use crate::config::Config;
use crate::error::ParseError;
use crate::model::Docblock;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a script on disk. Only failing to open or read it is an error.
pub fn parse_file(path: &Path, config: &Config) -> Result<Vec<Docblock>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_lines(BufReader::new(file)).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "parsing");
    Ok(bash::parse(&path.display().to_string(), &lines, config))
}

/// Parse in-memory script text. `file_name` seeds Docblock[0].file_name.
pub fn parse_str(file_name: &str, input: &str, config: &Config) -> Vec<Docblock> {
    let lines: Vec<String> = input.lines().map(str::to_string).collect();
    bash::parse(file_name, &lines, config)
}

/// Split into lines, replacing invalid UTF-8 and dropping a trailing `\r`.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader
        .split(b'\n')
        .map(|chunk| -> std::io::Result<String> {
            let chunk = chunk?;
            let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk);
            Ok(String::from_utf8_lossy(chunk).into_owned())
        })
        .collect()
}
