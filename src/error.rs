//! Error types for dynbuf operations

/// Errors that can occur when working with a byte store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Slice range with a start greater than its end
    InvalidRange,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::InvalidRange => "slice start exceeds end",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for dynbuf operations
pub type Result<T> = core::result::Result<T, Error>;
