//! # Bearing Capacity Equations
//!
//! This module contains every closed-form equation used by the bearing
//! capacity calculation. Keeping them in one place enables:
//! - Easy verification against EN 1997-1 Annex D
//! - Documentation of assumptions and sign conventions
//! - A generated equations reference (`EQUATIONS.md`)
//!
//! The functions here are plain `f64` formulas with no validation; the
//! calculation pipeline in [`crate::calculations`] guards their domains.
//!
//! ## Modules
//!
//! - [`effective`] - Eccentricity and effective footing dimensions
//! - [`bearing`] - Bearing capacity factors N_q, N_c, N_γ
//! - [`shape`] - Shape factors s_q, s_γ, s_c
//! - [`inclination`] - Load-direction exponent and inclination factors
//! - [`resistance`] - Bearing pressure terms and total resistance
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Conventions
//!
//! - **Units**: kN, m, kPa, kN/m³; φ in radians
//! - **M_L**: moment about the L axis, eccentricity across B
//! - **M_B**: moment about the B axis, eccentricity across L
//!
//! ## References
//!
//! - EN 1997-1:2004 Eurocode 7: Geotechnical design, Annex D

pub mod bearing;
pub mod effective;
pub mod inclination;
pub mod registry;
pub mod resistance;
pub mod shape;

pub use bearing::{bearing_factor_nc, bearing_factor_ngamma, bearing_factor_nq};

pub use effective::{eccentricity, effective_area, effective_dimension, effective_dimension_abs};

pub use inclination::{
    inclination_base,
    inclination_denominator,
    inclination_factor_c,
    inclination_factor_gamma,
    inclination_factor_q,
    load_direction_exponent_b,
    load_direction_exponent_l,
};

pub use resistance::{bearing_pressure, cohesion_term, overburden_term, self_weight_term, total_resistance};

pub use shape::{
    cohesion_shape_factor_ec7,
    cohesion_shape_factor_literal,
    shape_factor_gamma,
    shape_factor_q,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
