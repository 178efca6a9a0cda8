//! # File I/O Module
//!
//! Reads foundation inputs from JSON files so a calculation can be driven
//! without interactive prompts. Results are never persisted.
//!
//! ## File Format
//!
//! A single [`FoundationInput`] object as JSON. `label` and `settings` may
//! be omitted and take their defaults.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bearing_core::file_io::load_input;
//! use bearing_core::calculations::bearing_capacity::calculate;
//! use std::path::Path;
//!
//! let input = load_input(Path::new("footing.json")).unwrap();
//! let result = calculate(&input).unwrap();
//! println!("R = {:.1} kN", result.resistance_kn);
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::calculations::bearing_capacity::FoundationInput;
use crate::errors::{CalcError, CalcResult};

/// Parse a [`FoundationInput`] from a JSON string.
pub fn input_from_json(json: &str) -> CalcResult<FoundationInput> {
    serde_json::from_str(json).map_err(|e| CalcError::serialization(format!("Invalid foundation input: {}", e)))
}

/// Load a [`FoundationInput`] from a JSON file.
///
/// # Errors
///
/// * [`CalcError::FileError`] if the file cannot be read
/// * [`CalcError::SerializationError`] if the contents are not a valid input
pub fn load_input(path: &Path) -> CalcResult<FoundationInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let input: FoundationInput = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })?;

    debug!("Loaded foundation input '{}' from {}", input.label, path.display());
    Ok(input)
}
