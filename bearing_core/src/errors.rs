//! # Error Types
//!
//! Structured error types for bearing_core. Every failure carries the
//! offending quantity and its value so a front end can tell the engineer
//! exactly which input to adjust.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_m: f64) -> CalcResult<()> {
//!     if width_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_m",
//!             width_m.to_string(),
//!             "Footing width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bearing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// All calculation failures are deterministic functions of the input:
/// re-running with the same input fails the same way.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The resultant load falls outside the footing: B' or L' is not positive
    #[error(
        "Invalid geometry: B' = {effective_width_m:.3} m, L' = {effective_length_m:.3} m \
         (e_B = {e_b_m:.3} m, e_L = {e_l_m:.3} m) - check the moments and the vertical load"
    )]
    InvalidGeometry {
        e_b_m: f64,
        e_l_m: f64,
        effective_width_m: f64,
        effective_length_m: f64,
    },

    /// An operation left its numeric domain (division by zero, power of a non-positive base)
    #[error("Numeric domain error in '{quantity}' = {value}: {reason}")]
    NumericDomain {
        quantity: String,
        value: f64,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error from the eccentricities and effective dimensions
    pub fn invalid_geometry(e_b_m: f64, e_l_m: f64, effective_width_m: f64, effective_length_m: f64) -> Self {
        CalcError::InvalidGeometry {
            e_b_m,
            e_l_m,
            effective_width_m,
            effective_length_m,
        }
    }

    /// Create a NumericDomain error
    pub fn numeric_domain(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::NumericDomain {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// True for errors raised by the calculation itself rather than by I/O
    pub fn is_calculation_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::InvalidGeometry { .. } | CalcError::NumericDomain { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::NumericDomain { .. } => "NUMERIC_DOMAIN",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
