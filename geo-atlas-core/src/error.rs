//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error types
pub use geo_atlas_client::{ImageError, RemoteError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The requested entity does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: String, id: i64 },

    /// Form input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration (API origin, settings file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file access failed
    #[error("IO error: {0}")]
    Io(String),

    /// API error (converting from library)
    #[error("{0}")]
    Remote(#[from] RemoteError),
}

impl CoreError {
    /// Whether the error is caused by user input or missing data; used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::Validation(_) => true,
            Self::Remote(e) => e.is_expected(),
            Self::Config(_) | Self::Io(_) => false,
        }
    }

    /// Message shown to the user in a toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote(e) => e.message.clone(),
            other => other.to_string(),
        }
    }
}

/// A rejected image is a validation failure; an unreadable one is an IO failure.
impl From<ImageError> for CoreError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::UnsupportedType => Self::Validation(e.to_string()),
            ImageError::Read { .. } => Self::Io(e.to_string()),
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_errors_are_local() {
        let rejected = CoreError::from(ImageError::UnsupportedType);
        assert!(rejected.is_expected());
        assert!(matches!(rejected, CoreError::Validation(ref m) if m.contains("PNG, JPG, JPEG, or WEBP")));

        let unreadable = CoreError::from(ImageError::Read {
            path: "castle.png".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert!(!unreadable.is_expected());
        assert!(matches!(unreadable, CoreError::Io(_)));
    }

    #[test]
    fn remote_errors_keep_their_classification() {
        let not_found: CoreError = RemoteError::from_status(404, "gone").into();
        assert!(not_found.is_expected());

        let server: CoreError = RemoteError::from_status(500, "boom").into();
        assert!(!server.is_expected());
        assert_eq!(server.user_message(), "boom");
    }

    #[test]
    fn validation_is_expected() {
        let e = CoreError::Validation("Name is required".into());
        assert!(e.is_expected());
        assert_eq!(e.user_message(), "Validation error: Name is required");
    }
}
