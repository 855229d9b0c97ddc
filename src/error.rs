//! Error Types
//!
//! Failures surfaced by fetch capabilities and by autocomplete construction.

use thiserror::Error;

/// Failure of an asynchronous fetch (suggestions or movie detail)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, no window)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
    /// The API reported an error in an otherwise valid payload
    #[error("api error: {0}")]
    Api(String),
}

/// A required autocomplete configuration function was not supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("autocomplete config is missing `render_option`")]
    MissingRenderOption,
    #[error("autocomplete config is missing `input_value`")]
    MissingInputValue,
    #[error("autocomplete config is missing `fetch_data`")]
    MissingFetchData,
}
