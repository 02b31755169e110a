//! # Error Types
//!
//! Structured error types for tanker_core.
//!
//! The calculation pipeline itself never fails: malformed numbers normalize
//! to zero and limit exceedances are reported as flags. Errors only come from
//! the edges, when a name typed by an operator (engine variant, aircraft
//! model, input field) doesn't match anything, or when a dashboard snapshot
//! can't be (de)serialized.
//!
//! ## Example
//!
//! ```rust
//! use tanker_core::aircraft::EngineVariant;
//! use tanker_core::errors::CalcError;
//!
//! let err = "LEO".parse::<EngineVariant>().unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_VARIANT");
//! assert_eq!(err, CalcError::unknown_variant("LEO"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tanker_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for the parsing and adapter edges.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Engine variant name not recognized
    #[error("Unknown engine variant: '{value}' (expected CEO or NEO)")]
    UnknownVariant { value: String },

    /// Aircraft model name not recognized
    #[error("Unknown aircraft model: '{value}' (expected A320 or A321)")]
    UnknownModel { value: String },

    /// Calculator input field name not recognized
    #[error("Unknown input field: '{value}'")]
    UnknownField { value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Reading input failed (front ends only)
    #[error("I/O error: {operation} - {reason}")]
    Io { operation: String, reason: String },
}

impl CalcError {
    /// Create an UnknownVariant error
    pub fn unknown_variant(value: impl Into<String>) -> Self {
        CalcError::UnknownVariant {
            value: value.into(),
        }
    }

    /// Create an UnknownModel error
    pub fn unknown_model(value: impl Into<String>) -> Self {
        CalcError::UnknownModel {
            value: value.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(value: impl Into<String>) -> Self {
        CalcError::UnknownField {
            value: value.into(),
        }
    }

    /// Create an Io error
    pub fn io(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::Io {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownVariant { .. } => "UNKNOWN_VARIANT",
            CalcError::UnknownModel { .. } => "UNKNOWN_MODEL",
            CalcError::UnknownField { .. } => "UNKNOWN_FIELD",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Io { .. } => "IO_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_model("B737");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownModel\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_variant("x").error_code(), "UNKNOWN_VARIANT");
        assert_eq!(CalcError::unknown_field("fuel").error_code(), "UNKNOWN_FIELD");
        assert_eq!(CalcError::io("read stdin", "closed").error_code(), "IO_ERROR");
    }

    #[test]
    fn test_from_serde_error() {
        let err: CalcError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_mentions_value() {
        let err = CalcError::unknown_variant("LEO");
        assert!(err.to_string().contains("LEO"));
    }
}
