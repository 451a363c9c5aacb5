use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback text when neither the server nor the transport supplied a message.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// The single error kind of the API boundary.
///
/// Produced for every non-2xx response and for every transport failure.
/// `status` is `None` when no HTTP response was received at all.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    /// HTTP status code, if a response arrived.
    pub status: Option<u16>,
    /// Human readable message, already resolved by precedence
    /// (server message, then transport text, then a generic fallback).
    pub message: String,
}

impl RemoteError {
    /// Error for a non-2xx response.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: non_empty_or_generic(message.into()),
        }
    }

    /// Error for a request that never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: non_empty_or_generic(message.into()),
        }
    }

    /// A 2xx response whose body could not be decoded.
    pub fn decode(status: u16, detail: impl std::fmt::Display) -> Self {
        Self {
            status: Some(status),
            message: format!("Invalid response from server: {detail}"),
        }
    }

    /// `true` for HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// 4xx responses are caused by the request, not by the server or the network.
    /// Used to pick the log level (`warn` vs `error`).
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }
}

fn non_empty_or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Result alias for every client operation.
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Local failure while preparing an [`ImageUpload`](crate::ImageUpload).
///
/// Raised before any request is made, so it never carries an HTTP status.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file name has no supported image extension
    #[error("Please select a valid image file (PNG, JPG, JPEG, or WEBP)")]
    UnsupportedType,

    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_falls_back_to_generic() {
        let e = RemoteError::from_status(500, "  ");
        assert_eq!(e.message, GENERIC_ERROR_MESSAGE);
        assert_eq!(e.status, Some(500));
    }

    #[test]
    fn not_found_only_for_404() {
        assert!(RemoteError::from_status(404, "gone").is_not_found());
        assert!(!RemoteError::from_status(400, "bad").is_not_found());
        assert!(!RemoteError::transport("refused").is_not_found());
    }

    #[test]
    fn expected_errors_are_client_side() {
        assert!(RemoteError::from_status(422, "invalid").is_expected());
        assert!(!RemoteError::from_status(503, "down").is_expected());
        assert!(!RemoteError::transport("refused").is_expected());
    }

    #[test]
    fn image_errors_name_the_problem() {
        assert_eq!(
            ImageError::UnsupportedType.to_string(),
            "Please select a valid image file (PNG, JPG, JPEG, or WEBP)"
        );
        let read = ImageError::Read {
            path: "/tmp/castle.png".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(read.to_string().starts_with("Failed to read /tmp/castle.png: "));
    }

    #[test]
    fn display_is_the_message() {
        let e = RemoteError::from_status(409, "Country code already exists");
        assert_eq!(e.to_string(), "Country code already exists");
    }
}
