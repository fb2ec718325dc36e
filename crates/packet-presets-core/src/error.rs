//! Error types for packet presets.

use thiserror::Error;

/// Shared error type for the storage-facing parts of the workspace.
///
/// Preset operations themselves never surface these: the manager works
/// against infallible collaborator traits, and implementations that can fail
/// (files, configuration) use this type internally before degrading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend error (locking, layout)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PresetError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PresetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PresetError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PresetError>`.
pub type Result<T> = std::result::Result<T, PresetError>;

/// Why `save_current_as_preset` did not store anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    /// The name was empty after trimming. Callers treat this as "nothing to do".
    #[error("Preset name is empty")]
    EmptyName,

    /// The collection already holds `limit` presets.
    #[error("Maximum of {limit} presets reached")]
    CapacityExceeded { limit: usize },
}

impl SaveError {
    /// Whether the user should be told about this outcome.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: PresetError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, PresetError::Io { .. }));
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err: PresetError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_save_error_visibility() {
        assert!(!SaveError::EmptyName.is_user_visible());
        assert!(SaveError::CapacityExceeded { limit: 25 }.is_user_visible());
        assert_eq!(
            SaveError::CapacityExceeded { limit: 25 }.to_string(),
            "Maximum of 25 presets reached"
        );
    }
}
