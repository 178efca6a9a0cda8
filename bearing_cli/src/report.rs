use std::fmt::Write;

use bearing_core::units::{Degrees, KiloNewtonMeters, KiloNewtons, KiloPascals, KnPerCubicMeter, Meters, SquareMeters};
use bearing_core::{BearingCapacityResult, CalcError, FoundationInput};

const RULE: &str = "═══════════════════════════════════════════════";

/// Render a textual report of a successful calculation.
///
/// The layout follows the pipeline: effective area, factors, then the
/// headline resistance, so each number can be checked by hand in order.
#[must_use]
pub fn render_report(input: &FoundationInput, result: &BearingCapacityResult) -> String {
    let mut out = String::new();

    writeln!(out, "{RULE}").expect("writing to string cannot fail");
    writeln!(out, "  BEARING CAPACITY RESULTS{}", label_suffix(&input.label)).expect("writing to string cannot fail");
    writeln!(out, "{RULE}").expect("writing to string cannot fail");
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "Input:").expect("writing to string cannot fail");
    writeln!(
        out,
        "  B = {:.2}, L = {:.2}, γ = {:.1}",
        Meters(input.width_m),
        Meters(input.length_m),
        KnPerCubicMeter(input.unit_weight_kn_m3)
    )
    .expect("writing to string cannot fail");
    writeln!(
        out,
        "  V = {:.1}, H = {:.1}, M_L = {:.1}, M_B = {:.1}",
        KiloNewtons(input.vertical_load_kn),
        KiloNewtons(input.horizontal_load_kn),
        KiloNewtonMeters(input.moment_about_l_knm),
        KiloNewtonMeters(input.moment_about_b_knm)
    )
    .expect("writing to string cannot fail");
    writeln!(
        out,
        "  c = {:.1}, φ = {:.1}, q = {:.1}",
        KiloPascals(input.cohesion_kpa),
        Degrees(input.friction_angle_deg),
        KiloPascals(input.overburden_kpa)
    )
    .expect("writing to string cannot fail");
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "Effective area ({}):", result.settings.eccentricity).expect("writing to string cannot fail");
    writeln!(
        out,
        "  e_B = {:.3} | B' = {:.3}",
        Meters(result.e_b_m),
        Meters(result.effective_width_m)
    )
    .expect("writing to string cannot fail");
    writeln!(
        out,
        "  e_L = {:.3} | L' = {:.3}",
        Meters(result.e_l_m),
        Meters(result.effective_length_m)
    )
    .expect("writing to string cannot fail");
    writeln!(out, "  A'  = {:.3}", SquareMeters(result.effective_area_m2)).expect("writing to string cannot fail");
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "Bearing capacity factors:").expect("writing to string cannot fail");
    writeln!(
        out,
        "  N_q = {:.2}, N_c = {:.2}, N_γ = {:.2}",
        result.nq, result.nc, result.ngamma
    )
    .expect("writing to string cannot fail");
    writeln!(out, "Shape factors:").expect("writing to string cannot fail");
    writeln!(
        out,
        "  s_γ = {:.3}, s_q = {:.3}, s_c = {:.3}  ({})",
        result.sgamma, result.sq, result.sc, result.settings.cohesion_shape_factor
    )
    .expect("writing to string cannot fail");
    writeln!(out, "Inclination factors:").expect("writing to string cannot fail");
    writeln!(
        out,
        "  m = {:.3} ({}), H/D = {:.4}",
        result.m, result.settings.load_direction, result.load_ratio
    )
    .expect("writing to string cannot fail");
    writeln!(
        out,
        "  i_γ = {:.4}, i_q = {:.4}, i_c = {:.4}",
        result.igamma, result.iq, result.ic
    )
    .expect("writing to string cannot fail");
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "Bearing pressure terms:").expect("writing to string cannot fail");
    writeln!(out, "  ½γB'N_γs_γi_γ = {:.2}", KiloPascals(result.self_weight_term_kpa))
        .expect("writing to string cannot fail");
    writeln!(out, "  cN_cs_ci_c    = {:.2}", KiloPascals(result.cohesion_term_kpa))
        .expect("writing to string cannot fail");
    writeln!(out, "  qN_qs_qi_q    = {:.2}", KiloPascals(result.overburden_term_kpa))
        .expect("writing to string cannot fail");
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "Equations applied:").expect("writing to string cannot fail");
    for (category, equations) in result.equations.by_category() {
        writeln!(out, "  {}", category.display_name()).expect("writing to string cannot fail");
        for equation in equations {
            let meta = equation.metadata();
            writeln!(out, "    {} [{}]", meta.formula_plain, meta.reference.short_form())
                .expect("writing to string cannot fail");
        }
    }
    writeln!(out).expect("writing to string cannot fail");

    writeln!(out, "{RULE}").expect("writing to string cannot fail");
    writeln!(out, "  q_r = {:.2}", KiloPascals(result.bearing_pressure_kpa)).expect("writing to string cannot fail");
    writeln!(out, "  R   = {:.2}", KiloNewtons(result.resistance_kn)).expect("writing to string cannot fail");
    writeln!(out, "  R/V = {:.2}", result.resistance_ratio(input.vertical_load_kn))
        .expect("writing to string cannot fail");
    writeln!(out, "{RULE}").expect("writing to string cannot fail");

    out
}

/// Render a calculation error with guidance on which input to change.
#[must_use]
pub fn render_error(err: &CalcError) -> String {
    let hint = match err {
        CalcError::InvalidGeometry { .. } => {
            "Reduce the moments or increase the vertical load so the resultant stays within the footing."
        }
        CalcError::NumericDomain { .. } => {
            "Check that φ > 0, V > 0 and that the horizontal load is smaller than the vertical load."
        }
        CalcError::InvalidInput { .. } => "Correct the highlighted value and run again.",
        CalcError::FileError { .. } | CalcError::SerializationError { .. } => {
            "Check the input file path and its JSON contents."
        }
    };
    format!("Error [{}]: {}\n  {}", err.error_code(), err, hint)
}

fn label_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" - {}", label)
    }
}
