//! Property-based tests for head geometry and vessel design.
//!
//! Covers: contour continuity and monotonicity, volume scaling, nominal
//! thickness rounding, shape validation.

use proptest::prelude::*;
use vessel_core::errors::CalcError;
use vessel_core::geometry::HeadShape;
use vessel_core::materials::{default_stress_table, MaterialGrade};
use vessel_core::{design_vessel, VesselDesignInput};

// ── Geometry ─────────────────────────────────────────────────────────

proptest! {
    /// Any accepted shape has its transition angle in [0, π/2] and the two
    /// circles meet at the transition point.
    #[test]
    fn transition_is_continuous(
        da in 10.0f64..5000.0,
        alpha1 in 0.55f64..2.0,
        alpha2 in 0.01f64..0.49,
    ) {
        let head = HeadShape::new(da, alpha1, alpha2).unwrap();
        let theta = head.theta();
        prop_assert!((0.0..=std::f64::consts::FRAC_PI_2).contains(&theta));

        let (x_t, y_t) = head.transition_point();
        let tol = 1e-9 * da;
        prop_assert!((head.crown_height_at(x_t) - y_t).abs() < tol);
        prop_assert!((head.knuckle_height_at(x_t) - y_t).abs() < tol);

        let crown_end = head.crown_arc().end_point();
        let knuckle_start = head.knuckle_arc().start_point();
        prop_assert!((crown_end.0 - knuckle_start.0).abs() < tol);
        prop_assert!((crown_end.1 - knuckle_start.1).abs() < tol);
    }

    /// The half profile never rises as x moves out to the wall, and ends on
    /// the base plane.
    #[test]
    fn profile_is_non_increasing(
        da in 10.0f64..5000.0,
        alpha1 in 0.55f64..2.0,
        alpha2 in 0.01f64..0.49,
        n in 2usize..300,
    ) {
        let head = HeadShape::new(da, alpha1, alpha2).unwrap();
        let points: Vec<(f64, f64)> = head.profile(n).collect();
        prop_assert_eq!(points.len(), n);

        for pair in points.windows(2) {
            prop_assert!(pair[1].0 > pair[0].0);
            prop_assert!(pair[1].1 <= pair[0].1 + 1e-9 * da);
        }

        let (x_last, y_last) = points[n - 1];
        prop_assert_eq!(x_last, da / 2.0);
        prop_assert!(y_last.abs() < 1e-6 * da);
    }

    /// Volume scales with the cube of the diameter.
    #[test]
    fn volume_scales_cubically(
        da in 100.0f64..5000.0,
        k in 0.1f64..10.0,
        alpha1 in 0.55f64..2.0,
        alpha2 in 0.01f64..0.49,
    ) {
        let small = HeadShape::new(da, alpha1, alpha2).unwrap();
        let large = HeadShape::new(k * da, alpha1, alpha2).unwrap();
        let expected = k.powi(3) * small.volume();
        prop_assert!(((large.volume() - expected) / expected).abs() < 1e-9);
    }

    /// Equal shape factors are always rejected.
    #[test]
    fn equal_factors_rejected(
        da in 10.0f64..5000.0,
        alpha in 0.0f64..2.0,
    ) {
        let err = HeadShape::new(da, alpha, alpha).unwrap_err();
        prop_assert!(matches!(err, CalcError::InvalidShape { .. }), "unexpected error: {:?}", err);
    }
}

// ── Vessel design ────────────────────────────────────────────────────

proptest! {
    /// Nominal thickness covers both components and sits on the 0.5 mm grid.
    #[test]
    fn nominal_covers_required(
        diameter in 100u32..5000,
        length in 100u32..10_000,
        pressure_bar in 0.1f64..100.0,
        temperature in -10.0f64..100.0,
        z in 0.5f64..=1.0,
        c in 0.0f64..5.0,
    ) {
        let input = VesselDesignInput::new(diameter, length, pressure_bar, temperature, MaterialGrade::X2CrNiMo17_12_2)
            .with_weld_coefficient(z)
            .with_allowance(c);
        let result = design_vessel(&input, default_stress_table()).unwrap();

        prop_assert!(result.nominal_mm >= result.shell_required_mm);
        prop_assert!(result.nominal_mm >= result.head_required_mm);
        prop_assert!(result.nominal_mm - result.governing_required_mm() < 0.5 + 1e-12);
        prop_assert_eq!((result.nominal_mm / 0.5).fract(), 0.0);
    }

    /// Past 2·f·z the shell has no finite thickness.
    #[test]
    fn overpressure_is_infeasible(
        diameter in 100u32..5000,
        pressure_bar in 2400.0f64..10_000.0,
    ) {
        let input = VesselDesignInput::new(diameter, 1000, pressure_bar, 20.0, MaterialGrade::X2CrNiMo17_12_2);
        let err = design_vessel(&input, default_stress_table()).unwrap_err();
        prop_assert!(matches!(err, CalcError::InfeasibleDesign { .. }), "unexpected error: {:?}", err);
    }
}

// ── Fixed reference values ───────────────────────────────────────────

#[test]
fn kloepper_reference_values() {
    let head = HeadShape::kloepper(1000.0).unwrap();
    assert!((head.sin_theta() - 4.0 / 9.0).abs() < 1e-12);
    assert!((head.theta_degrees() - 26.3878).abs() < 1e-3);
    assert!((head.internal_height() - 193.774225).abs() < 1e-5);
    assert!((head.volume() / 1000.0_f64.powi(3) - 0.0990).abs() < 1e-4);
}

#[test]
fn hemisphere_limit() {
    let head = HeadShape::new(1000.0, 1.0, 0.5).unwrap();
    let expected = 2.0 / 3.0 * std::f64::consts::PI * 500.0_f64.powi(3);
    assert!(((head.volume() - expected) / expected).abs() < 1e-12);
}

#[test]
fn reference_vessel_design() {
    let input = VesselDesignInput::new(1200, 3000, 3.0, 100.0, MaterialGrade::X2CrNiMo17_12_2);
    let result = design_vessel(&input, default_stress_table()).unwrap();
    assert!((result.shell_required_mm - 2.5019).abs() < 1e-4);
    assert!((result.head_required_mm - 3.3124).abs() < 1e-4);
    assert_eq!(result.nominal_mm, 3.5);
}
