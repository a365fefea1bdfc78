//! Error types for the ORB application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::mode::InteractionState;

/// A shared error type for the entire ORB application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. User-visible flows never
/// surface these directly; every failure path resolves to an in-universe
/// sentinel phrase before it reaches the display layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum OrbError {
    /// A user-supplied value failed validation
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    /// An operation was requested in a state that does not allow it
    #[error("Cannot {action} while in state {state}")]
    InvalidTransition {
        state: InteractionState,
        action: &'static str,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrbError {
    /// Creates an InvalidInput error
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(state: InteractionState, action: &'static str) -> Self {
        Self::InvalidTransition { state, action }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<std::io::Error> for OrbError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OrbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OrbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for OrbError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OrbError>`.
pub type Result<T> = std::result::Result<T, OrbError>;
