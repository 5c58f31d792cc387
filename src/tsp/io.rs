//! Loading city lists.
//!
//! The text format is one city per line: two real numbers separated by
//! whitespace and/or a comma. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! # x, y
//! 0, 0
//! 1.5 2
//! ```

use super::city::City;
use crate::error::{Error, Result};
use std::path::Path;

/// Parses cities from text.
///
/// # Errors
/// [`Error::Parse`] with the 1-based line number of the first bad line.
pub fn parse_cities(input: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        cities.push(parse_line(line).map_err(|reason| Error::Parse {
            line: idx + 1,
            reason,
        })?);
    }
    Ok(cities)
}

fn parse_line(line: &str) -> std::result::Result<City, String> {
    let fields: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    let [x, y] = fields.as_slice() else {
        return Err(format!("expected 2 coordinates, found {}", fields.len()));
    };
    let parse = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| format!("invalid coordinate {s:?}: {e}"))
    };
    Ok(City::new(parse(*x)?, parse(*y)?))
}

/// Reads and parses a city file.
pub fn read_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cities(&text)
}

/// A small built-in ten-city instance.
pub fn sample_cities() -> Vec<City> {
    [
        (0.0, 0.0),
        (1.0, 2.0),
        (3.0, 1.0),
        (4.0, 6.0),
        (2.0, 3.0),
        (5.0, 5.0),
        (7.0, 8.0),
        (6.0, 2.0),
        (9.0, 1.0),
        (8.0, 4.0),
    ]
    .into_iter()
    .map(City::from)
    .collect()
}
