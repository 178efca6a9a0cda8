//! # bearing_core - Shallow Foundation Bearing Capacity Engine
//!
//! `bearing_core` computes the ultimate bearing capacity of a rectangular
//! shallow foundation under eccentric, inclined load following the drained
//! formulas of EN 1997-1 (Eurocode 7) Annex D. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function from an immutable input to an immutable result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Invalid geometry and numeric-domain failures are structured values
//! - **Auditable**: Every formula lives in [`equations`] with its code reference
//!
//! ## Quick Start
//!
//! ```rust
//! use bearing_core::{compute_bearing_capacity, FoundationInput};
//!
//! let input = FoundationInput::reference();
//! let result = compute_bearing_capacity(&input).unwrap();
//!
//! println!("q_r = {:.1} kPa, R = {:.1} kN", result.bearing_pressure_kpa, result.resistance_kn);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! # assert!(json.contains("resistance_kn"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The bearing capacity pipeline
//! - [`equations`] - Closed-form EC7 equations and the equation registry
//! - [`settings`] - Formula-variant selection (load direction, s_c form)
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON input files

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::bearing_capacity::{calculate as compute_bearing_capacity, BearingCapacityResult, FoundationInput};
pub use errors::{CalcError, CalcResult};
pub use file_io::{input_from_json, load_input};
pub use settings::{CalculationSettings, CohesionShapeFactor, EccentricityConvention, LoadDirection};
