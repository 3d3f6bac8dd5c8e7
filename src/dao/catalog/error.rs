//! Error types raised while talking to the catalog API.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`CatalogError`] failures.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures that can occur while querying the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No API key was configured; the catalog refuses anonymous calls.
    #[error("catalog API key is not configured")]
    MissingApiKey,
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build catalog HTTP client")]
    ClientBuilder {
        /// reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent.
    #[error("failed to send catalog request to `{path}`")]
    RequestSend {
        /// Requested API path.
        path: String,
        /// reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The catalog answered with a non-success status.
    #[error("unexpected catalog response status {status} for `{path}`")]
    RequestStatus {
        /// Requested API path.
        path: String,
        /// Status returned by the catalog.
        status: StatusCode,
    },
    /// The payload did not match the expected shape.
    #[error("failed to decode catalog response for `{path}`")]
    DecodeResponse {
        /// Requested API path.
        path: String,
        /// Decoding failure.
        #[source]
        source: reqwest::Error,
    },
}
