// Error types for the playlist pipeline

use thiserror::Error;

/// Result alias used across the playlist module
pub type Result<T> = std::result::Result<T, PlaylistError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlaylistError {
    /// Transport failure while talking to the API
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete before the client timeout
    #[error("Network timeout: the playlist API is not responding")]
    Timeout,

    /// API answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body is not the expected JSON structure
    #[error("Decode error: {0}")]
    Decode(String),

    /// `select` called with an index outside the rendered list
    #[error("Index {index} out of range (playlist has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No entry carries the requested video id
    #[error("Unknown video id: {0}")]
    UnknownVideo(String),

    /// Selection attempted before the controller was initialized
    #[error("Playlist controller is not initialized")]
    NotInitialized,

    /// Client or module configuration could not be applied
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlaylistError {
    /// Transport or non-OK response
    pub fn is_network_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout | Self::HttpStatus { .. }
        )
    }

    /// Body not parseable as the expected structure
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<reqwest::Error> for PlaylistError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return Self::Timeout;
        }

        if e.is_decode() {
            return Self::Decode(e.to_string());
        }

        if let Some(status) = e.status() {
            return Self::HttpStatus {
                status: status.as_u16(),
                message: e.to_string(),
            };
        }

        Self::Network(e.to_string())
    }
}

impl From<serde_json::Error> for PlaylistError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
