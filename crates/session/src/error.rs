// Error types shared by the session backends and the page-object layer.

use thiserror::Error;

/// Result type alias for session and page-object operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a session or checking page state.
#[derive(Debug, Error)]
pub enum Error {
    /// The WebDriver endpoint refused or dropped the session handshake.
    ///
    /// Common causes: the driver is not running, or another session already
    /// holds the browser. Start one with `geckodriver --port 4444` or
    /// `chromedriver --port 9515`.
    #[error("Failed to connect to WebDriver at {url}: {message}")]
    Connect { url: String, message: String },

    /// Navigation failed at the transport level (unreachable route, DNS,
    /// TLS). Fatal to the current scenario only.
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    /// No element matched the selector.
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Any other command failure reported by the browser backend.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Invalid argument provided to an operation (e.g. a malformed pattern).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A URL could not be parsed or joined against the base URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An assertion gave up after its timeout (expect API).
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),
}
