//! Error taxonomy for the fetch-and-save pipeline.

use std::fmt;

/// Error from a single fetch-and-save operation. Every variant is recovered at
/// the CLI boundary and reported as a message; none of them abort the process.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure: DNS, connection refused/reset, timeout.
    /// Malformed URLs also land here (libcurl rejects them).
    Network(curl::Error),
    /// Transport succeeded but the server answered with a non-2xx status.
    HttpStatus(u32),
    /// Directory creation or file write failed (permissions, disk full, ...).
    Filesystem(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::HttpStatus(code) => write!(f, "HTTP {}", code),
            FetchError::Filesystem(e) => write!(f, "filesystem error: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(e) => Some(e),
            FetchError::Filesystem(e) => Some(e),
            FetchError::HttpStatus(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Network(e)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Filesystem(e)
    }
}
