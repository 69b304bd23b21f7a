use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Errors raised while building or applying a ranking loss
pub enum Error {
    /// The DCG base must be finite and greater than 1, otherwise the discount
    /// divides by zero or goes negative
    #[error("dcg_base must be finite and greater than 1, got {0}")]
    InvalidDcgBase(f64),

    /// A group referenced an example that the column doesn't have
    #[error("index {index} is out of range for the {what} ({len} entries)")]
    IndexOutOfRange {
        /// The offending example index
        index: usize,
        /// Size of the column that was indexed
        len: usize,
        /// Which column was indexed
        what: &'static str,
    },

    /// The loss configuration could not be parsed
    #[error("invalid loss configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The loss configuration could not be read
    #[error("failed to read loss configuration: {0}")]
    Io(#[from] std::io::Error),
}
