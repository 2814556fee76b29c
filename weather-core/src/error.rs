use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the weather core.
///
/// The dashboard collapses the first three variants into a single
/// "could not load" outcome per view; they stay distinct here so the
/// diagnostic log keeps the underlying cause.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not complete (DNS, connect, TLS, body read).
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The weather service answered with a non-success status.
    #[error("Weather service returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape we asked for.
    #[error("Failed to parse weather response: {0}")]
    Parse(String),

    #[error("Unknown view '{0}'. Supported views: current, forecast.")]
    UnknownView(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WeatherError {
    pub(crate) fn parse(err: impl std::fmt::Display) -> Self {
        WeatherError::Parse(err.to_string())
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
