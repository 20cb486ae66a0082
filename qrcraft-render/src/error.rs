//! Error types for the rendering client.

use thiserror::Error;

/// Rendering-specific errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Transport-level HTTP failure (connection, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The rendering service answered with a non-success status.
    #[error("rendering service returned status {status}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// A download was requested while another one was still in flight.
    #[error("a download is already in flight")]
    DownloadInFlight,

    /// Writing the fetched image to disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
