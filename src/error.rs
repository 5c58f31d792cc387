//! Error type shared by the GA engine, the TSP problem and instance loading.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while setting up or running a search.
///
/// Randomness is never a failure: a poor generation is expected and is
/// recovered by elitism, not by error handling. The variants below are
/// either caller mistakes detected before the run starts, or the one
/// numerical edge of the fitness function (a tour of length zero).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The instance has fewer than two cities.
    #[error("at least 2 cities are required, found {found}")]
    TooFewCities { found: usize },

    /// A city coordinate is NaN or infinite.
    #[error("city {index} has a non-finite coordinate")]
    InvalidCoordinate { index: usize },

    /// Every city sits on the same point, so every tour has length zero.
    #[error("all cities coincide; tour length would be zero")]
    DegenerateGeometry,

    /// The cities are spread so far apart (or so close together) that
    /// some tour length or its reciprocal is not a finite `f64`.
    #[error("city coordinates span a range whose tour lengths cannot be represented")]
    CoordinateRange,

    /// Fitness was requested for a tour of zero length.
    #[error("tour has zero length; fitness is undefined")]
    ZeroLengthTour,

    /// A tour length or its reciprocal overflowed to infinity.
    #[error("tour length {length} has no finite fitness")]
    FitnessOutOfRange { length: f64 },

    /// A tour does not visit the same number of cities as the instance.
    #[error("tour visits {found} cities, instance has {expected}")]
    TourSizeMismatch { expected: usize, found: usize },

    /// A line of a city file could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A city file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::TooFewCities { found: 1 }.to_string(),
            "at least 2 cities are required, found 1"
        );
        assert_eq!(
            Error::Parse {
                line: 3,
                reason: "expected 2 numbers".into()
            }
            .to_string(),
            "line 3: expected 2 numbers"
        );
        assert!(Error::InvalidConfig("population_size must be at least 2".into())
            .to_string()
            .contains("population_size"));
    }
}
