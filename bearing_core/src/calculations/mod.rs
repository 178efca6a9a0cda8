//! # Foundation Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bearing_capacity`] - EC7 drained bearing resistance of a shallow footing

pub mod bearing_capacity;

// Re-export commonly used types
pub use bearing_capacity::{
    calculate,
    BearingCapacityResult,
    BearingFactors,
    EffectiveGeometry,
    FoundationInput,
    InclinationFactors,
    ShapeFactors,
};
