use approx::assert_relative_eq;
use bearing_core::calculations::bearing_capacity::bearing_factors;
use bearing_core::units::{Degrees, Radians};
use bearing_core::{compute_bearing_capacity, CalcError, FoundationInput};

fn reference() -> FoundationInput {
    FoundationInput::reference()
}

#[test]
fn scenario_reference_footing() {
    let result = compute_bearing_capacity(&reference()).expect("reference footing is valid");

    assert_relative_eq!(result.e_b_m, 0.2, epsilon = 1e-12);
    assert_relative_eq!(result.e_l_m, 0.15, epsilon = 1e-12);
    assert_relative_eq!(result.effective_width_m, 1.1, epsilon = 1e-12);
    assert_relative_eq!(result.effective_length_m, 0.7, epsilon = 1e-12);
    assert_relative_eq!(result.effective_area_m2, 0.77, epsilon = 1e-12);

    assert!(result.bearing_pressure_kpa.is_finite() && result.bearing_pressure_kpa > 0.0);
    assert!(result.resistance_kn.is_finite() && result.resistance_kn > 0.0);
    assert_eq!(result.resistance_kn, result.bearing_pressure_kpa * result.effective_area_m2);
    assert_relative_eq!(result.bearing_pressure_kpa, 825.067, epsilon = 1e-3);
    assert_relative_eq!(result.resistance_kn, 635.302, epsilon = 1e-3);
}

#[test]
fn scenario_resultant_outside_footing() {
    let input = FoundationInput {
        moment_about_l_knm: 800.0,
        ..reference()
    };

    match compute_bearing_capacity(&input) {
        Err(CalcError::InvalidGeometry { e_b_m, effective_width_m, .. }) => {
            assert_relative_eq!(e_b_m, 0.8, epsilon = 1e-12);
            assert_relative_eq!(effective_width_m, -0.1, epsilon = 1e-12);
        }
        other => panic!("expected InvalidGeometry, got {other:?}"),
    }
}

#[test]
fn scenario_zero_friction_angle() {
    let input = FoundationInput {
        friction_angle_deg: 0.0,
        ..reference()
    };

    let err = compute_bearing_capacity(&input).unwrap_err();
    assert_eq!(err.error_code(), "NUMERIC_DOMAIN");
}

#[test]
fn scenario_horizontal_load_equals_vertical() {
    let input = FoundationInput {
        horizontal_load_kn: 1000.0,
        vertical_load_kn: 1000.0,
        cohesion_kpa: 0.0,
        ..reference()
    };

    match compute_bearing_capacity(&input) {
        Err(CalcError::NumericDomain { quantity, .. }) => assert_eq!(quantity, "1 - H/D"),
        other => panic!("expected NumericDomain, got {other:?}"),
    }
}

#[test]
fn effective_width_exactly_zero_is_rejected() {
    // e_B = 750/1000 = 0.75, B' = 1.5 - 1.5 = 0
    let input = FoundationInput {
        moment_about_l_knm: 750.0,
        ..reference()
    };

    match compute_bearing_capacity(&input) {
        Err(CalcError::InvalidGeometry { effective_width_m, .. }) => assert_eq!(effective_width_m, 0.0),
        other => panic!("expected InvalidGeometry, got {other:?}"),
    }
}

#[test]
fn repeated_calculation_is_bit_identical() {
    let input = reference();
    let first = compute_bearing_capacity(&input).unwrap();
    let second = compute_bearing_capacity(&input).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.resistance_kn.to_bits(), second.resistance_kn.to_bits());
}

#[test]
fn bearing_factors_monotonic_over_friction_range() {
    // N_q overflows f64 just below 90°
    let mut previous = None;
    for tenth_degree in 1..897 {
        let phi: Radians = Degrees(tenth_degree as f64 / 10.0).into();
        let factors = bearing_factors(phi).unwrap();

        assert!(factors.nq > 1.0);
        assert!(factors.ngamma >= 0.0);
        if let Some((nq, ngamma)) = previous {
            assert!(factors.nq > nq);
            assert!(factors.ngamma > ngamma);
        }
        previous = Some((factors.nq, factors.ngamma));
    }
}

#[test]
fn vanishing_friction_angle_never_yields_negative_resistance() {
    for exponent in 1..=300 {
        let phi_deg = 10f64.powi(-exponent);
        let input = FoundationInput {
            cohesion_kpa: 10.0,
            friction_angle_deg: phi_deg,
            ..reference()
        };
        match compute_bearing_capacity(&input) {
            Ok(result) => {
                assert!(result.nq > 1.0, "N_q = {} at phi = {phi_deg:e}°", result.nq);
                assert!(result.nc > 0.0, "N_c = {} at phi = {phi_deg:e}°", result.nc);
                assert!(
                    result.bearing_pressure_kpa > 0.0,
                    "q_r = {} at phi = {phi_deg:e}°",
                    result.bearing_pressure_kpa
                );
                assert!(result.resistance_kn > 0.0);
            }
            Err(CalcError::NumericDomain { .. }) => {}
            Err(other) => panic!("unexpected error at phi = {phi_deg:e}°: {other:?}"),
        }
    }
}

#[test]
fn negative_moment_uses_signed_eccentricity() {
    let input = FoundationInput {
        moment_about_l_knm: -200.0,
        ..reference()
    };
    let result = compute_bearing_capacity(&input).expect("signed reduction widens the footing");
    assert_relative_eq!(result.e_b_m, -0.2, epsilon = 1e-12);
    assert_relative_eq!(result.effective_width_m, 1.9, epsilon = 1e-12);
}

#[test]
fn independent_calculations_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = FoundationInput {
                    vertical_load_kn: 1000.0 + 100.0 * i as f64,
                    ..FoundationInput::reference()
                };
                compute_bearing_capacity(&input).map(|r| r.resistance_kn)
            })
        })
        .collect();

    for handle in handles {
        let resistance = handle.join().expect("thread completes").expect("valid input");
        assert!(resistance > 0.0);
    }
}
