//! # Equation Registry
//!
//! Central registry of every geotechnical equation used by the bearing
//! calculation. Each equation has metadata including its EN 1997-1
//! reference, plain-text formula, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for audit trails and the generated `EQUATIONS.md`
//! - An `EquationTracker` that records which equations a calculation applied
//!
//! ## Usage
//!
//! ```rust
//! use bearing_core::equations::registry::{Equation, EquationUsage};
//!
//! let usage = EquationUsage::new(Equation::BearingFactorNq, "phi = 30°");
//!
//! let meta = Equation::BearingFactorNq.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the standard an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// EN 1997-1 (Eurocode 7, Part 1)
    Ec7 {
        year: u16,
        annex: &'static str,
        clause: &'static str,
    },
    /// Statics of a rigid footing (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Ec7 { year, annex, clause } => {
                format!("EN 1997-1:{} Annex {}, {}", year, annex, clause)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Ec7 { .. } => "EC7",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const EC7_ANNEX_D1: CodeReference = CodeReference::Ec7 { year: 2004, annex: "D", clause: "D.1" };
const EC7_ANNEX_D4: CodeReference = CodeReference::Ec7 { year: 2004, annex: "D", clause: "D.4" };

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Eccentricity and effective footing dimensions
    EffectiveArea,
    /// N_q, N_c, N_γ
    BearingFactors,
    /// s_q, s_γ, s_c
    ShapeFactors,
    /// m, i_q, i_γ, i_c
    InclinationFactors,
    /// q_r and R
    Resistance,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::EffectiveArea => "Effective Area",
            EquationCategory::BearingFactors => "Bearing Capacity Factors",
            EquationCategory::ShapeFactors => "Shape Factors",
            EquationCategory::InclinationFactors => "Inclination Factors",
            EquationCategory::Resistance => "Bearing Resistance",
        }
    }

    /// Sort order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::EffectiveArea => 1,
            EquationCategory::BearingFactors => 2,
            EquationCategory::ShapeFactors => 3,
            EquationCategory::InclinationFactors => 4,
            EquationCategory::Resistance => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "B'", "phi")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "m", "kPa", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a bearing capacity equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the bearing capacity pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Effective Area
    // -------------------------------------------------------------------------
    /// e = M / V
    Eccentricity,
    /// B' = B - 2e_B, L' = L - 2e_L
    EffectiveDimensions,
    /// B' = B - 2|e_B|, L' = L - 2|e_L|
    EffectiveDimensionsAbsolute,
    /// A' = B'·L'
    EffectiveArea,

    // -------------------------------------------------------------------------
    // Bearing Capacity Factors
    // -------------------------------------------------------------------------
    /// N_q = e^(π tan φ) tan²(45° + φ/2)
    BearingFactorNq,
    /// N_c = (N_q - 1) cot φ
    BearingFactorNc,
    /// N_γ = 2(N_q - 1) tan φ
    BearingFactorNgamma,

    // -------------------------------------------------------------------------
    // Shape Factors
    // -------------------------------------------------------------------------
    /// s_γ = 1 - 0.3 B'/L'
    ShapeFactorGamma,
    /// s_q = 1 + (B'/L') sin φ
    ShapeFactorQ,
    /// s_c = s_q (N_q - 1)/(N_q - 1)
    ShapeFactorCLiteral,
    /// s_c = (s_q N_q - 1)/(N_q - 1)
    ShapeFactorCEc7,

    // -------------------------------------------------------------------------
    // Inclination Factors
    // -------------------------------------------------------------------------
    /// m_B = (2 + B'/L')/(1 + B'/L')
    LoadDirectionExponentB,
    /// m_L = (2 + L'/B')/(1 + L'/B')
    LoadDirectionExponentL,
    /// i_q = (1 - H/(V + A'c cot φ))^m
    InclinationFactorQ,
    /// i_γ = (1 - H/(V + A'c cot φ))^(m+1)
    InclinationFactorGamma,
    /// i_c = i_q - (1 - i_q)/(N_c tan φ)
    InclinationFactorC,

    // -------------------------------------------------------------------------
    // Resistance
    // -------------------------------------------------------------------------
    /// q_r = ½γB'N_γs_γi_γ + cN_cs_ci_c + qN_qs_qi_q
    DrainedBearingResistance,
    /// R = q_r A'
    TotalResistance,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::Eccentricity => EquationMetadata {
                name: "Load Eccentricity",
                description: "Offset of the vertical load resultant from the footing centroid",
                formula_plain: "e_B = M_L / V, e_L = M_B / V",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("M_L", "Moment about the L axis", "kN·m"),
                    Variable::new("M_B", "Moment about the B axis", "kN·m"),
                    Variable::new("V", "Vertical load", "kN"),
                    Variable::new("e_B", "Eccentricity across B", "m"),
                    Variable::new("e_L", "Eccentricity across L", "m"),
                ],
                assumptions: vec!["Rigid footing", "V > 0"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/effective.rs",
                source_function: "eccentricity",
            },

            Equation::EffectiveDimensions => EquationMetadata {
                name: "Effective Footing Dimensions",
                description: "Footing dimensions reduced so the resultant acts at the effective centroid",
                formula_plain: "B' = B - 2e_B, L' = L - 2e_L",
                reference: EC7_ANNEX_D1,
                variables: vec![
                    Variable::new("B", "Nominal footing width", "m"),
                    Variable::new("L", "Nominal footing length", "m"),
                    Variable::new("B'", "Effective width", "m"),
                    Variable::new("L'", "Effective length", "m"),
                ],
                assumptions: vec!["Signed eccentricity; a negative moment widens the footing", "B' > 0 and L' > 0, otherwise the calculation halts"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/effective.rs",
                source_function: "effective_dimension",
            },

            Equation::EffectiveDimensionsAbsolute => EquationMetadata {
                name: "Effective Footing Dimensions (Absolute Eccentricity)",
                description: "Footing dimensions reduced by the eccentricity magnitude, whatever the moment sign",
                formula_plain: "B' = B - 2|e_B|, L' = L - 2|e_L|",
                reference: EC7_ANNEX_D1,
                variables: vec![
                    Variable::new("B'", "Effective width", "m"),
                    Variable::new("L'", "Effective length", "m"),
                ],
                assumptions: vec!["B' > 0 and L' > 0, otherwise the calculation halts"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/effective.rs",
                source_function: "effective_dimension_abs",
            },

            Equation::EffectiveArea => EquationMetadata {
                name: "Effective Area",
                description: "Area of the effective footing carrying the load",
                formula_plain: "A' = B' * L'",
                reference: EC7_ANNEX_D1,
                variables: vec![Variable::new("A'", "Effective area", "m²")],
                assumptions: vec!["Rectangular footing"],
                category: EquationCategory::EffectiveArea,
                source_module: "equations/effective.rs",
                source_function: "effective_area",
            },

            Equation::BearingFactorNq => EquationMetadata {
                name: "Bearing Capacity Factor N_q",
                description: "Overburden bearing capacity factor",
                formula_plain: "N_q = e^(pi * tan(phi)) * tan^2(45° + phi/2)",
                reference: EC7_ANNEX_D4,
                variables: vec![
                    Variable::new("phi", "Effective angle of internal friction", "rad"),
                    Variable::new("N_q", "Overburden factor", "-"),
                ],
                assumptions: vec!["Drained conditions", "0 < phi < 90°"],
                category: EquationCategory::BearingFactors,
                source_module: "equations/bearing.rs",
                source_function: "bearing_factor_nq",
            },

            Equation::BearingFactorNc => EquationMetadata {
                name: "Bearing Capacity Factor N_c",
                description: "Cohesion bearing capacity factor",
                formula_plain: "N_c = (N_q - 1) / tan(phi)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("N_c", "Cohesion factor", "-")],
                assumptions: vec!["phi > 0 (undefined at phi = 0)"],
                category: EquationCategory::BearingFactors,
                source_module: "equations/bearing.rs",
                source_function: "bearing_factor_nc",
            },

            Equation::BearingFactorNgamma => EquationMetadata {
                name: "Bearing Capacity Factor N_γ",
                description: "Self-weight bearing capacity factor for a rough base",
                formula_plain: "N_gamma = 2 * (N_q - 1) * tan(phi)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("N_gamma", "Self-weight factor", "-")],
                assumptions: vec!["Rough base (delta >= phi/2)"],
                category: EquationCategory::BearingFactors,
                source_module: "equations/bearing.rs",
                source_function: "bearing_factor_ngamma",
            },

            Equation::ShapeFactorGamma => EquationMetadata {
                name: "Shape Factor s_γ",
                description: "Shape factor for the self-weight term",
                formula_plain: "s_gamma = 1 - 0.3 * (B'/L')",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("s_gamma", "Self-weight shape factor", "-")],
                assumptions: vec!["Rectangular effective footing"],
                category: EquationCategory::ShapeFactors,
                source_module: "equations/shape.rs",
                source_function: "shape_factor_gamma",
            },

            Equation::ShapeFactorQ => EquationMetadata {
                name: "Shape Factor s_q",
                description: "Shape factor for the overburden term",
                formula_plain: "s_q = 1 + (B'/L') * sin(phi)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("s_q", "Overburden shape factor", "-")],
                assumptions: vec!["Rectangular effective footing"],
                category: EquationCategory::ShapeFactors,
                source_module: "equations/shape.rs",
                source_function: "shape_factor_q",
            },

            Equation::ShapeFactorCLiteral => EquationMetadata {
                name: "Shape Factor s_c (calculation sheet form)",
                description: "Cohesion shape factor as written in the reference calculation sheet; equals s_q",
                formula_plain: "s_c = s_q * (N_q - 1) / (N_q - 1)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("s_c", "Cohesion shape factor", "-")],
                assumptions: vec!["N_q != 1", "Pending confirmation against EN 1997-1 D.4"],
                category: EquationCategory::ShapeFactors,
                source_module: "equations/shape.rs",
                source_function: "cohesion_shape_factor_literal",
            },

            Equation::ShapeFactorCEc7 => EquationMetadata {
                name: "Shape Factor s_c (EN 1997-1)",
                description: "Cohesion shape factor for drained conditions",
                formula_plain: "s_c = (s_q * N_q - 1) / (N_q - 1)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("s_c", "Cohesion shape factor", "-")],
                assumptions: vec!["N_q != 1"],
                category: EquationCategory::ShapeFactors,
                source_module: "equations/shape.rs",
                source_function: "cohesion_shape_factor_ec7",
            },

            Equation::LoadDirectionExponentB => EquationMetadata {
                name: "Load Direction Exponent m_B",
                description: "Inclination exponent when H acts in the direction of B'",
                formula_plain: "m_B = (2 + B'/L') / (1 + B'/L')",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("m", "Load direction exponent", "-")],
                assumptions: vec!["H parallel to B'"],
                category: EquationCategory::InclinationFactors,
                source_module: "equations/inclination.rs",
                source_function: "load_direction_exponent_b",
            },

            Equation::LoadDirectionExponentL => EquationMetadata {
                name: "Load Direction Exponent m_L",
                description: "Inclination exponent when H acts in the direction of L'",
                formula_plain: "m_L = (2 + L'/B') / (1 + L'/B')",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("m", "Load direction exponent", "-")],
                assumptions: vec!["H parallel to L'"],
                category: EquationCategory::InclinationFactors,
                source_module: "equations/inclination.rs",
                source_function: "load_direction_exponent_l",
            },

            Equation::InclinationFactorQ => EquationMetadata {
                name: "Inclination Factor i_q",
                description: "Inclination factor for the overburden term",
                formula_plain: "i_q = (1 - H / (V + A' * c * cot(phi)))^m",
                reference: EC7_ANNEX_D4,
                variables: vec![
                    Variable::new("H", "Horizontal load", "kN"),
                    Variable::new("c", "Effective cohesion", "kPa"),
                    Variable::new("i_q", "Overburden inclination factor", "-"),
                ],
                assumptions: vec!["1 - H/D > 0"],
                category: EquationCategory::InclinationFactors,
                source_module: "equations/inclination.rs",
                source_function: "inclination_factor_q",
            },

            Equation::InclinationFactorGamma => EquationMetadata {
                name: "Inclination Factor i_γ",
                description: "Inclination factor for the self-weight term",
                formula_plain: "i_gamma = (1 - H / (V + A' * c * cot(phi)))^(m + 1)",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("i_gamma", "Self-weight inclination factor", "-")],
                assumptions: vec!["1 - H/D > 0"],
                category: EquationCategory::InclinationFactors,
                source_module: "equations/inclination.rs",
                source_function: "inclination_factor_gamma",
            },

            Equation::InclinationFactorC => EquationMetadata {
                name: "Inclination Factor i_c",
                description: "Inclination factor for the cohesion term",
                formula_plain: "i_c = i_q - (1 - i_q) / (N_c * tan(phi))",
                reference: EC7_ANNEX_D4,
                variables: vec![Variable::new("i_c", "Cohesion inclination factor", "-")],
                assumptions: vec!["phi > 0"],
                category: EquationCategory::InclinationFactors,
                source_module: "equations/inclination.rs",
                source_function: "inclination_factor_c",
            },

            Equation::DrainedBearingResistance => EquationMetadata {
                name: "Drained Bearing Resistance",
                description: "Ultimate bearing pressure on the effective area",
                formula_plain: "q_r = 0.5*gamma*B'*N_gamma*s_gamma*i_gamma + c*N_c*s_c*i_c + q*N_q*s_q*i_q",
                reference: EC7_ANNEX_D4,
                variables: vec![
                    Variable::new("gamma", "Soil unit weight", "kN/m³"),
                    Variable::new("q", "Effective overburden pressure at foundation level", "kPa"),
                    Variable::new("q_r", "Ultimate bearing pressure", "kPa"),
                ],
                assumptions: vec!["No depth or base/ground inclination factors", "Characteristic values, no partial factors"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "bearing_pressure",
            },

            Equation::TotalResistance => EquationMetadata {
                name: "Total Bearing Resistance",
                description: "Ultimate vertical resistance of the footing",
                formula_plain: "R = q_r * A'",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("R", "Ultimate resistance", "kN")],
                assumptions: vec!["Uniform pressure over A'"],
                category: EquationCategory::Resistance,
                source_module: "equations/resistance.rs",
                source_function: "total_resistance",
            },
        }
    }

    /// Get all equations in a specific category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in sort order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut cats = vec![
            EquationCategory::EffectiveArea,
            EquationCategory::BearingFactors,
            EquationCategory::ShapeFactors,
            EquationCategory::InclinationFactors,
            EquationCategory::Resistance,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All registered equations, in pipeline order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::Eccentricity,
    Equation::EffectiveDimensions,
    Equation::EffectiveDimensionsAbsolute,
    Equation::EffectiveArea,
    Equation::BearingFactorNq,
    Equation::BearingFactorNc,
    Equation::BearingFactorNgamma,
    Equation::ShapeFactorGamma,
    Equation::ShapeFactorQ,
    Equation::ShapeFactorCLiteral,
    Equation::ShapeFactorCEc7,
    Equation::LoadDirectionExponentB,
    Equation::LoadDirectionExponentL,
    Equation::InclinationFactorQ,
    Equation::InclinationFactorGamma,
    Equation::InclinationFactorC,
    Equation::DrainedBearingResistance,
    Equation::TotalResistance,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "H along B")
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, in first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the EQUATIONS.md reference document from the registry.
///
/// ```rust
/// use bearing_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Bearing Capacity Equations Reference"));
/// assert!(markdown.contains("Shape Factors"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Bearing Capacity Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the shallow foundation bearing
capacity calculation, with its EN 1997-1 reference and source location.

## Conventions

| Quantity | Convention |
|----------|------------|
| Units | kN, m, kPa, kN/m³; phi entered in degrees, evaluated in radians |
| M_L | Moment about the L axis, shifts the resultant across B |
| M_B | Moment about the B axis, shifts the resultant across L |
| H | Magnitude of the horizontal load; its axis is a calculation setting |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 18);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(meta.source_module.starts_with("equations/"), "Equation {:?} has bad source", eq);
        }
    }

    #[test]
    fn test_resistance_metadata_names_pipeline_functions() {
        assert_eq!(Equation::DrainedBearingResistance.metadata().source_function, "bearing_pressure");
        assert_eq!(Equation::TotalResistance.metadata().source_function, "total_resistance");
        assert_eq!(
            Equation::EffectiveDimensionsAbsolute.metadata().source_function,
            "effective_dimension_abs"
        );
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(EC7_ANNEX_D4.citation(), "EN 1997-1:2004 Annex D, D.4");
        assert_eq!(CodeReference::Mechanics.short_form(), "Mechanics");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::Eccentricity, "across B");
        tracker.record(Equation::Eccentricity, "across L");
        tracker.record(Equation::BearingFactorNq, "phi = 30°");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::Eccentricity, Equation::BearingFactorNq]
        );
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::TotalResistance, "R");
        tracker.record(Equation::ShapeFactorQ, "s_q");
        tracker.record(Equation::EffectiveArea, "A'");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            cats,
            vec![
                EquationCategory::EffectiveArea,
                EquationCategory::ShapeFactors,
                EquationCategory::Resistance
            ]
        );
    }

    #[test]
    fn test_every_category_has_equations() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_metadata_cites_references() {
        let meta = Equation::BearingFactorNc.metadata();
        assert!(meta.formula_plain.contains("N_c = (N_q - 1) / tan(phi)"));
        assert!(meta.reference.citation().contains("EN 1997-1"));
        assert_eq!(meta.reference.short_form(), "EC7");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(md.contains(eq.metadata().name), "Missing {:?}", eq);
        }
        assert!(md.contains("**Total Equations:** 18"));
    }
}
