//! Result and error types for Contar.

use thiserror::Error;

/// Result type for Contar operations
pub type ContarResult<T> = Result<T, ContarError>;

/// Errors that can occur in Contar
#[derive(Debug, Error)]
pub enum ContarError {
    /// No element matched the selector
    #[error("No element matched selector {selector}")]
    ElementNotFound {
        /// Description of the selector that failed
        selector: String,
    },

    /// Strict selection found more than one match
    #[error("Selector {selector} matched {count} elements, expected exactly 1")]
    AmbiguousSelector {
        /// Description of the selector
        selector: String,
        /// Number of elements that matched
        count: usize,
    },

    /// Activation was dispatched to an element with no bound action
    #[error("Element matched by {selector} is not actionable")]
    NotActionable {
        /// Description of the selector
        selector: String,
    },

    /// Assertion error (from `expect()`)
    #[error("Assertion error: {message}")]
    AssertionError {
        /// Diagnostic describing expected vs. actual text
        message: String,
    },

    /// Invalid text pattern in a selector
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// JSON error (tree dumps in diagnostics)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContarError {
    /// Build an assertion error carrying an expected/actual diagnostic.
    #[must_use]
    pub fn assertion(expected: impl AsRef<str>, actual: impl AsRef<str>) -> Self {
        Self::AssertionError {
            message: format!(
                "expected text '{}' but got '{}'",
                expected.as_ref(),
                actual.as_ref()
            ),
        }
    }
}
