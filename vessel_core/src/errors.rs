//! # Error Types
//!
//! Structured error types for vessel_core. Every failure is deterministic
//! input validation: nothing is retried, nothing is clamped, and no partial
//! result is ever returned alongside an error.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(da: f64) -> CalcResult<()> {
//!     if da <= 0.0 {
//!         return Err(CalcError::invalid_shape(
//!             "external_diameter",
//!             da.to_string(),
//!             "Diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_diameter(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for vessel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for geometry and design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Shape factors or diameter give no valid torispherical head
    /// (non-positive diameter, division by zero, arcsine out of domain,
    /// knuckle radius not smaller than crown radius).
    #[error("Invalid head shape '{field}': {value} - {reason}")]
    InvalidShape {
        field: String,
        value: String,
        reason: String,
    },

    /// No tabulated allowable stress for this grade/temperature pair
    #[error("Unsupported material: {material} at {temperature_c} °C has no tabulated design stress")]
    UnsupportedMaterial { material: String, temperature_c: f64 },

    /// No finite wall thickness satisfies the design formula
    #[error("Infeasible design: {component} - {reason}")]
    InfeasibleDesign { component: String, reason: String },

    /// A design input or setting is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidShape error
    pub fn invalid_shape(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidShape {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedMaterial error
    pub fn unsupported_material(material: impl Into<String>, temperature_c: f64) -> Self {
        CalcError::UnsupportedMaterial {
            material: material.into(),
            temperature_c,
        }
    }

    /// Create an InfeasibleDesign error
    pub fn infeasible_design(component: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InfeasibleDesign {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidShape { .. } => "INVALID_SHAPE",
            CalcError::UnsupportedMaterial { .. } => "UNSUPPORTED_MATERIAL",
            CalcError::InfeasibleDesign { .. } => "INFEASIBLE_DESIGN",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
