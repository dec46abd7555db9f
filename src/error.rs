//! Error handling for circuit-vis
//!
//! This module defines the crate error type and a Result alias for use
//! throughout the library. The text grammar parser is best-effort and never
//! produces an error; everything else surfaces failures through [`CircuitError`].

use thiserror::Error;

/// Main error type for circuit-vis operations
#[derive(Error, Debug)]
pub enum CircuitError {
    /// The vector cannot be split into a head element plus destination pairs
    #[error("Malformed circuit vector: length {len} does not leave an even number of destinations")]
    MalformedVector { len: usize },

    /// Rank classification needs three distinct magnitudes
    #[error("Insufficient distinct values: need 3, found {found}")]
    InsufficientDistinctValues { found: usize },

    /// A line of a vector data file could not be read
    #[error("Data file error on line {line}: {message}")]
    DataFile { line: usize, message: String },

    /// The weight list does not line up with the decoded stream edges
    #[error("Weight count mismatch: expected {expected} weights, found {found}")]
    WeightCount { expected: usize, found: usize },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors raised by a rendering backend
    #[error("Render error: {0}")]
    Render(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CircuitError>,
    },
}

impl CircuitError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CircuitError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Strip any context wrappers and return the underlying error
    pub fn root(&self) -> &CircuitError {
        match self {
            CircuitError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for circuit-vis operations
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CircuitError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CircuitError::Io(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CircuitError::MalformedVector { len: 4 };
        assert!(err.to_string().contains("length 4"));

        let err = CircuitError::InsufficientDistinctValues { found: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient distinct values: need 3, found 1"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = CircuitError::Config("bad rankdir".to_string());
        let with_ctx = err.with_context("Failed to load config");
        assert!(with_ctx.to_string().contains("Failed to load config"));
        assert!(matches!(with_ctx.root(), CircuitError::Config(_)));
    }

    #[test]
    fn test_io_result_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("Reading circuit.txt").unwrap_err();
        assert!(err.to_string().starts_with("Reading circuit.txt"));
        assert!(matches!(err.root(), CircuitError::Io(_)));
    }
}
