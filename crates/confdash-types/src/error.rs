use std::fmt;

/// Result type for confdash-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year filter could not be parsed from user input
    InvalidYear(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidYear(input) => write!(
                f,
                "Invalid year '{}': expected a number or 'all'",
                input
            ),
        }
    }
}

impl std::error::Error for Error {}
