use thiserror::Error;

/// Errors raised while loading a distance matrix.
#[derive(Debug, Error)]
pub enum DistanceMatrixError {
    /// The input held fewer than a header and one data row.
    #[error("distance matrix needs a header and at least one row, found {rows} non-empty rows")]
    TooFewRows {
        /// Number of non-empty rows found.
        rows: usize,
    },
    /// A delimiter name was not recognised.
    #[error("unsupported delimiter `{value}`; expected auto, comma, semicolon, or tab")]
    UnsupportedDelimiter {
        /// The rejected input.
        value: String,
    },
    /// A record could not be decoded.
    #[error("malformed matrix record: {0}")]
    Csv(#[from] csv::Error),
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
