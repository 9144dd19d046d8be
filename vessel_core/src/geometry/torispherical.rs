//! # Torispherical Head
//!
//! A torispherical head is built from two circular arcs that meet
//! tangentially: the spherical crown (Kalotte, radius r1, center on the
//! vessel axis) and the toroidal knuckle (Krempe, radius r2) that turns the
//! contour down onto the cylindrical wall.
//!
//! ## Coordinate System
//!
//! - x: radial distance from the vessel axis (0 at the axis, Da/2 at the wall)
//! - y: height above the base plane, where the knuckle meets the wall
//!
//! ## Derivation
//!
//! The knuckle arc ends vertically on the wall, so its center sits at
//! (Da/2 - r2, 0). Both arcs share the normal direction at the transition
//! angle θ (measured from the axis), which gives
//!
//! ```text
//! Da/2 = r1·sin θ + r2·(1 - sin θ)
//! sin θ = (1 - 2·α2) / (2·(α1 - α2))
//! ```
//!
//! with α1 = r1/Da and α2 = r2/Da.
//!
//! ## Example
//!
//! ```rust
//! use vessel_core::geometry::HeadShape;
//!
//! let head = HeadShape::kloepper(1000.0).unwrap();
//! assert!((head.sin_theta() - 4.0 / 9.0).abs() < 1e-12);
//! assert!((head.theta_degrees() - 26.3878).abs() < 1e-3);
//!
//! let (x_t, y_t) = head.transition_point();
//! println!("Transition at ({:.1}, {:.1}) mm", x_t, y_t);
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::profile::ProfilePoints;
use crate::units::{Degrees, Radians};

/// Standardised torispherical head types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadPreset {
    /// Klöpperboden per DIN 28011: r1 = Da, r2 = 0.1·Da
    Kloepper,
    /// Korbbogenboden per DIN 28013: r1 = 0.8·Da, r2 = 0.154·Da
    Korbbogen,
}

impl HeadPreset {
    /// All presets for UI selection
    pub const ALL: [HeadPreset; 2] = [HeadPreset::Kloepper, HeadPreset::Korbbogen];

    /// Crown radius ratio r1/Da
    pub fn alpha1(&self) -> f64 {
        match self {
            HeadPreset::Kloepper => 1.0,
            HeadPreset::Korbbogen => 0.8,
        }
    }

    /// Knuckle radius ratio r2/Da
    pub fn alpha2(&self) -> f64 {
        match self {
            HeadPreset::Kloepper => 0.1,
            HeadPreset::Korbbogen => 0.154,
        }
    }

    /// Governing DIN standard
    pub fn standard(&self) -> &'static str {
        match self {
            HeadPreset::Kloepper => "DIN 28011",
            HeadPreset::Korbbogen => "DIN 28013",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HeadPreset::Kloepper => "Klöpperboden",
            HeadPreset::Korbbogen => "Korbbogenboden",
        }
    }

    /// Build a head of this type for the given external diameter.
    pub fn shape(&self, external_diameter: f64) -> CalcResult<HeadShape> {
        HeadShape::new(external_diameter, self.alpha1(), self.alpha2())
    }
}

impl std::fmt::Display for HeadPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.standard())
    }
}

/// Serializable head description, validated on conversion to [`HeadShape`].
///
/// ## JSON Example
///
/// ```json
/// { "external_diameter": 1000.0, "alpha1": 0.8, "alpha2": 0.154 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadShapeInput {
    /// External diameter Da
    pub external_diameter: f64,

    /// Crown radius ratio r1/Da (Klöpper default 1.0)
    #[serde(default = "default_alpha1")]
    pub alpha1: f64,

    /// Knuckle radius ratio r2/Da (Klöpper default 0.1)
    #[serde(default = "default_alpha2")]
    pub alpha2: f64,
}

fn default_alpha1() -> f64 {
    HeadPreset::Kloepper.alpha1()
}

fn default_alpha2() -> f64 {
    HeadPreset::Kloepper.alpha2()
}

impl TryFrom<HeadShapeInput> for HeadShape {
    type Error = CalcError;

    fn try_from(input: HeadShapeInput) -> CalcResult<Self> {
        HeadShape::new(input.external_diameter, input.alpha1, input.alpha2)
    }
}

impl From<HeadShape> for HeadShapeInput {
    fn from(shape: HeadShape) -> Self {
        HeadShapeInput {
            external_diameter: shape.external_diameter,
            alpha1: shape.alpha1,
            alpha2: shape.alpha2,
        }
    }
}

/// Validated torispherical head geometry.
///
/// The three defining scalars are private so that every live value satisfies
/// the shape invariants. All other quantities are derived on demand.
///
/// Values are immutable; the radius "setters" ([`HeadShape::with_crown_radius`],
/// [`HeadShape::with_knuckle_radius`]) return a new validated shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HeadShapeInput", into = "HeadShapeInput")]
pub struct HeadShape {
    external_diameter: f64,
    alpha1: f64,
    alpha2: f64,
}

impl HeadShape {
    /// Create a head from its external diameter and shape factors.
    ///
    /// # Errors
    ///
    /// `CalcError::InvalidShape` if the diameter is not positive, the ratios
    /// are not finite, `alpha2` is negative or not smaller than `alpha1`, or
    /// `sin θ` falls outside `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vessel_core::geometry::HeadShape;
    ///
    /// let korbbogen = HeadShape::new(1000.0, 0.8, 0.154).unwrap();
    /// assert!((korbbogen.crown_radius() - 800.0).abs() < 1e-9);
    ///
    /// assert!(HeadShape::new(1000.0, 0.5, 0.5).is_err());
    /// ```
    pub fn new(external_diameter: f64, alpha1: f64, alpha2: f64) -> CalcResult<Self> {
        if !external_diameter.is_finite() || external_diameter <= 0.0 {
            return Err(CalcError::invalid_shape(
                "external_diameter",
                external_diameter.to_string(),
                "External diameter must be positive and finite",
            ));
        }
        if !alpha1.is_finite() {
            return Err(CalcError::invalid_shape(
                "alpha1",
                alpha1.to_string(),
                "Crown radius ratio must be finite",
            ));
        }
        if !alpha2.is_finite() {
            return Err(CalcError::invalid_shape(
                "alpha2",
                alpha2.to_string(),
                "Knuckle radius ratio must be finite",
            ));
        }
        if alpha2 < 0.0 {
            return Err(CalcError::invalid_shape(
                "alpha2",
                alpha2.to_string(),
                "Knuckle radius ratio cannot be negative",
            ));
        }
        if alpha1 == alpha2 {
            return Err(CalcError::invalid_shape(
                "alpha1",
                format!("alpha1 = alpha2 = {}", alpha1),
                "Crown and knuckle ratios are equal, transition angle is undefined",
            ));
        }
        if alpha2 > alpha1 {
            return Err(CalcError::invalid_shape(
                "alpha2",
                format!("{} > alpha1 = {}", alpha2, alpha1),
                "Knuckle radius must be smaller than crown radius",
            ));
        }

        let sin_theta = transition_sine(alpha1, alpha2);
        if !(0.0..=1.0).contains(&sin_theta) {
            return Err(CalcError::invalid_shape(
                "sin_theta",
                sin_theta.to_string(),
                "Shape factors put the transition angle outside [0°, 90°]",
            ));
        }

        Ok(HeadShape {
            external_diameter,
            alpha1,
            alpha2,
        })
    }

    /// Klöpperboden (DIN 28011) for the given external diameter
    pub fn kloepper(external_diameter: f64) -> CalcResult<Self> {
        HeadPreset::Kloepper.shape(external_diameter)
    }

    /// Korbbogenboden (DIN 28013) for the given external diameter
    pub fn korbbogen(external_diameter: f64) -> CalcResult<Self> {
        HeadPreset::Korbbogen.shape(external_diameter)
    }

    /// External diameter Da
    pub fn external_diameter(&self) -> f64 {
        self.external_diameter
    }

    /// Crown radius ratio r1/Da
    pub fn alpha1(&self) -> f64 {
        self.alpha1
    }

    /// Knuckle radius ratio r2/Da
    pub fn alpha2(&self) -> f64 {
        self.alpha2
    }

    /// The preset this shape matches exactly, if any.
    pub fn preset(&self) -> Option<HeadPreset> {
        HeadPreset::ALL
            .into_iter()
            .find(|p| p.alpha1() == self.alpha1 && p.alpha2() == self.alpha2)
    }

    // ------------------------------------------------------------------
    // Radii
    // ------------------------------------------------------------------

    /// Crown radius r1 = α1·Da
    pub fn crown_radius(&self) -> f64 {
        self.alpha1 * self.external_diameter
    }

    /// Knuckle radius r2 = α2·Da
    pub fn knuckle_radius(&self) -> f64 {
        self.alpha2 * self.external_diameter
    }

    /// Copy of this head with the crown radius set to `r1`.
    ///
    /// The diameter is kept; α1 becomes `r1 / Da`.
    ///
    /// ```rust
    /// use vessel_core::geometry::{HeadPreset, HeadShape};
    ///
    /// let head = HeadShape::kloepper(1000.0).unwrap()
    ///     .with_crown_radius(800.0).unwrap()
    ///     .with_knuckle_radius(154.0).unwrap();
    /// assert_eq!(head.preset(), Some(HeadPreset::Korbbogen));
    /// ```
    pub fn with_crown_radius(self, r1: f64) -> CalcResult<Self> {
        HeadShape::new(self.external_diameter, r1 / self.external_diameter, self.alpha2)
    }

    /// Copy of this head with the knuckle radius set to `r2`.
    ///
    /// The diameter is kept; α2 becomes `r2 / Da`.
    pub fn with_knuckle_radius(self, r2: f64) -> CalcResult<Self> {
        HeadShape::new(self.external_diameter, self.alpha1, r2 / self.external_diameter)
    }

    // ------------------------------------------------------------------
    // Transition
    // ------------------------------------------------------------------

    /// sin θ = (1 - 2·α2) / (2·(α1 - α2))
    pub fn sin_theta(&self) -> f64 {
        transition_sine(self.alpha1, self.alpha2)
    }

    /// Transition angle θ in radians, in `[0, π/2]`
    pub fn theta(&self) -> f64 {
        self.sin_theta().asin()
    }

    /// Transition angle θ in degrees
    pub fn theta_degrees(&self) -> f64 {
        Degrees::from(Radians(self.theta())).value()
    }

    /// Knuckle arc center (Da/2 - r2, 0)
    pub fn knuckle_center(&self) -> (f64, f64) {
        (self.external_diameter / 2.0 - self.knuckle_radius(), 0.0)
    }

    /// Point where crown and knuckle meet
    pub fn transition_point(&self) -> (f64, f64) {
        let (_, y_kc) = self.knuckle_center();
        (
            self.crown_radius() * self.sin_theta(),
            y_kc + self.knuckle_radius() * self.theta().cos(),
        )
    }

    /// Crown arc center, on the axis and usually below the base plane
    pub fn crown_center(&self) -> (f64, f64) {
        let (_, y_t) = self.transition_point();
        (0.0, y_t - self.crown_radius() * self.theta().cos())
    }

    /// Internal height from the base plane to the apex (straight flange excluded)
    pub fn internal_height(&self) -> f64 {
        self.crown_center().1 + self.crown_radius()
    }

    // ------------------------------------------------------------------
    // Contour
    // ------------------------------------------------------------------

    /// Height of the crown circle at radial position `x`.
    pub fn crown_height_at(&self, x: f64) -> f64 {
        let r1 = self.crown_radius();
        self.crown_center().1 + (r1 * r1 - x * x).max(0.0).sqrt()
    }

    /// Height of the knuckle circle at radial position `x`.
    pub fn knuckle_height_at(&self, x: f64) -> f64 {
        let r2 = self.knuckle_radius();
        let (x_kc, y_kc) = self.knuckle_center();
        let dx = x - x_kc;
        y_kc + (r2 * r2 - dx * dx).max(0.0).sqrt()
    }

    /// Contour height at radial position `x`: crown up to the transition
    /// point (inclusive), knuckle beyond it.
    pub fn height_at(&self, x: f64) -> f64 {
        if x <= self.transition_point().0 {
            self.crown_height_at(x)
        } else {
            self.knuckle_height_at(x)
        }
    }

    /// Half cross-section sampled at `num_points` evenly spaced x in `[0, Da/2]`.
    ///
    /// The sequence is lazy; clone it (or call `profile` again) to restart.
    ///
    /// ```rust
    /// use vessel_core::geometry::HeadShape;
    ///
    /// let head = HeadShape::kloepper(1000.0).unwrap();
    /// let points: Vec<(f64, f64)> = head.profile(5).collect();
    /// assert_eq!(points.len(), 5);
    /// assert_eq!(points[4].0, 500.0);
    /// ```
    pub fn profile(&self, num_points: usize) -> ProfilePoints {
        ProfilePoints::new(*self, num_points)
    }

    /// Full cross-section from -Da/2 to Da/2, built by mirroring
    /// [`HeadShape::profile`] about the axis. The axis point appears once.
    pub fn mirrored_profile(&self, num_points: usize) -> Vec<(f64, f64)> {
        let half: Vec<(f64, f64)> = self.profile(num_points).collect();
        let mut full = Vec::with_capacity(half.len() * 2);
        full.extend(half.iter().rev().map(|&(x, y)| (-x, y)));
        full.extend(half.iter().skip(1).copied());
        full
    }

    /// Crown arc, from the apex down to the transition point.
    pub fn crown_arc(&self) -> ArcSegment {
        ArcSegment {
            center: self.crown_center(),
            radius: self.crown_radius(),
            start_angle: FRAC_PI_2,
            sweep: -self.theta(),
        }
    }

    /// Knuckle arc, from the transition point down to the wall.
    pub fn knuckle_arc(&self) -> ArcSegment {
        let theta = self.theta();
        ArcSegment {
            center: self.knuckle_center(),
            radius: self.knuckle_radius(),
            start_angle: FRAC_PI_2 - theta,
            sweep: -(FRAC_PI_2 - theta),
        }
    }

    // ------------------------------------------------------------------
    // Volume
    // ------------------------------------------------------------------

    /// Internal volume enclosed between the base plane and the contour
    /// (straight flange excluded), in cubed length units.
    ///
    /// Crown: spherical cap of height `hc = r1·(1 - cos θ)`.
    /// Knuckle: the knuckle arc `x = xc + r2·sin φ`, `y = r2·cos φ` for
    /// φ ∈ [θ, π/2], revolved about the axis:
    ///
    /// ```text
    /// V = π·r2·( xc²·cos θ
    ///          + 2·xc·r2·(π/4 - θ/2 + sin 2θ / 4)
    ///          + r2²·(cos θ - cos³θ / 3) )
    /// ```
    pub fn volume(&self) -> f64 {
        self.crown_volume() + self.knuckle_volume()
    }

    /// Volume of the spherical cap above the transition plane
    pub fn crown_volume(&self) -> f64 {
        let r1 = self.crown_radius();
        let hc = r1 * (1.0 - self.theta().cos());
        PI * hc * hc / 3.0 * (3.0 * r1 - hc)
    }

    /// Volume of the toroidal segment between the base and transition planes
    pub fn knuckle_volume(&self) -> f64 {
        let r2 = self.knuckle_radius();
        let (xc, _) = self.knuckle_center();
        let theta = self.theta();
        let cos_theta = theta.cos();

        let sin_sq_integral = FRAC_PI_4 - theta / 2.0 + (2.0 * theta).sin() / 4.0;
        let sin_cube_integral = cos_theta - cos_theta.powi(3) / 3.0;

        PI * r2 * (xc * xc * cos_theta + 2.0 * xc * r2 * sin_sq_integral + r2 * r2 * sin_cube_integral)
    }
}

impl Default for HeadShape {
    /// Klöpperboden with Da = 1000
    fn default() -> Self {
        HeadShape {
            external_diameter: 1000.0,
            alpha1: HeadPreset::Kloepper.alpha1(),
            alpha2: HeadPreset::Kloepper.alpha2(),
        }
    }
}

fn transition_sine(alpha1: f64, alpha2: f64) -> f64 {
    (1.0 - 2.0 * alpha2) / (2.0 * (alpha1 - alpha2))
}

/// Circular arc for renderers.
///
/// Angles are in radians from the +x axis, counter-clockwise positive;
/// `sweep` is negative for both head arcs since they run outward and down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Arc center (x, y)
    pub center: (f64, f64),
    /// Arc radius
    pub radius: f64,
    /// Angle of the start point
    pub start_angle: f64,
    /// Signed angular extent
    pub sweep: f64,
}

impl ArcSegment {
    /// Point at parameter `t` in `[0, 1]` along the arc
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let angle = self.start_angle + t * self.sweep;
        (
            self.center.0 + self.radius * angle.cos(),
            self.center.1 + self.radius * angle.sin(),
        )
    }

    /// Start point
    pub fn start_point(&self) -> (f64, f64) {
        self.point_at(0.0)
    }

    /// End point
    pub fn end_point(&self) -> (f64, f64) {
        self.point_at(1.0)
    }

    /// Arc length
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_point_eq(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-6, "x: {} vs {}", a.0, b.0);
        assert!((a.1 - b.1).abs() < 1e-6, "y: {} vs {}", a.1, b.1);
    }

    #[test]
    fn test_kloepper_transition_angle() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        assert!((head.sin_theta() - 4.0 / 9.0).abs() < TOL);
        // asin(4/9) = 26.3878°
        assert!((head.theta_degrees() - 26.3878).abs() < 1e-3);
    }

    #[test]
    fn test_kloepper_dimensions() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        assert!((head.crown_radius() - 1000.0).abs() < TOL);
        assert!((head.knuckle_radius() - 100.0).abs() < TOL);
        assert_point_eq(head.knuckle_center(), (400.0, 0.0));

        // x_t = 1000·4/9, y_t = 100·cos θ
        let (x_t, y_t) = head.transition_point();
        assert!((x_t - 444.444444).abs() < 1e-5);
        assert!((y_t - 89.580642).abs() < 1e-5);

        assert!((head.crown_center().1 - (-806.225775)).abs() < 1e-5);
        assert!((head.internal_height() - 193.774225).abs() < 1e-5);
    }

    #[test]
    fn test_korbbogen_dimensions() {
        let head = HeadShape::korbbogen(1000.0).unwrap();
        assert!((head.theta_degrees() - 32.3849).abs() < 1e-3);
        assert!((head.internal_height() - 254.472732).abs() < 1e-5);
    }

    #[test]
    fn test_arc_continuity_at_transition() {
        for head in [
            HeadShape::kloepper(1000.0).unwrap(),
            HeadShape::korbbogen(2400.0).unwrap(),
            HeadShape::new(500.0, 1.5, 0.3).unwrap(),
        ] {
            let (x_t, y_t) = head.transition_point();
            assert!((head.crown_height_at(x_t) - y_t).abs() < 1e-6);
            assert!((head.knuckle_height_at(x_t) - y_t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_contour_endpoints() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        assert!((head.height_at(0.0) - head.internal_height()).abs() < TOL);
        assert!(head.height_at(500.0).abs() < TOL);
    }

    #[test]
    fn test_kloepper_volume() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        // Closed form checked against numerical integration of the contour
        assert!((head.crown_volume() - 32_921_536.33).abs() < 1.0);
        assert!((head.knuckle_volume() - 66_044_458.79).abs() < 1.0);
        assert!((head.volume() - 98_965_995.12).abs() < 1.0);
        // Rule of thumb V ≈ 0.1·Da³
        assert!((head.volume() / 1.0e9 - 0.099).abs() < 1e-3);
    }

    #[test]
    fn test_korbbogen_volume() {
        let head = HeadShape::korbbogen(1000.0).unwrap();
        assert!((head.volume() - 130_771_733.52).abs() < 1.0);
    }

    #[test]
    fn test_hemispherical_limit() {
        // α2 = 0.5 gives θ = 0 and a knuckle that is a full hemisphere
        let head = HeadShape::new(1000.0, 1.0, 0.5).unwrap();
        assert!(head.theta().abs() < TOL);
        assert!(head.crown_volume().abs() < TOL);
        let hemisphere = 2.0 / 3.0 * PI * 500.0_f64.powi(3);
        assert!((head.volume() - hemisphere).abs() / hemisphere < 1e-12);
        assert!((head.internal_height() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_volume_scales_with_cube() {
        let small = HeadShape::korbbogen(100.0).unwrap();
        let large = HeadShape::korbbogen(300.0).unwrap();
        assert!((large.volume() / small.volume() - 27.0).abs() < 1e-9);
    }

    #[test]
    fn test_equal_ratios_rejected() {
        let err = HeadShape::new(1000.0, 0.3, 0.3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SHAPE");
    }

    #[test]
    fn test_invalid_diameter_rejected() {
        assert!(HeadShape::new(0.0, 1.0, 0.1).is_err());
        assert!(HeadShape::new(-10.0, 1.0, 0.1).is_err());
        assert!(HeadShape::new(f64::NAN, 1.0, 0.1).is_err());
        assert!(HeadShape::new(f64::INFINITY, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_arcsine_domain_rejected() {
        // Crown too small to span the diameter: sin θ = 0.8 / 0.4 = 2
        let err = HeadShape::new(1000.0, 0.3, 0.1).unwrap_err();
        match err {
            CalcError::InvalidShape { field, .. } => assert_eq!(field, "sin_theta"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_physical_ordering_enforced() {
        assert!(HeadShape::new(1000.0, 0.1, 0.3).is_err());
        assert!(HeadShape::new(1000.0, 1.0, -0.1).is_err());
        // α2 > 0.5 would put θ below zero
        assert!(HeadShape::new(1000.0, 2.0, 0.6).is_err());
    }

    #[test]
    fn test_zero_knuckle_is_valid() {
        let head = HeadShape::new(1000.0, 1.0, 0.0).unwrap();
        assert!((head.transition_point().0 - 500.0).abs() < TOL);
        assert!(head.knuckle_volume().abs() < TOL);
        assert!(head.height_at(500.0).abs() < 1e-6);
    }

    #[test]
    fn test_radius_setters_copy() {
        let original = HeadShape::kloepper(2000.0).unwrap();
        let modified = original.with_crown_radius(1600.0).unwrap();
        assert!((modified.alpha1() - 0.8).abs() < TOL);
        assert_eq!(modified.external_diameter(), 2000.0);
        assert_eq!(original.alpha1(), 1.0);

        let modified = modified.with_knuckle_radius(308.0).unwrap();
        assert!((modified.knuckle_radius() - 308.0).abs() < 1e-9);
        assert!((modified.alpha2() - 0.154).abs() < TOL);
    }

    #[test]
    fn test_radius_setter_revalidates() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        assert!(head.with_knuckle_radius(1000.0).is_err());
        assert!(head.with_crown_radius(f64::NAN).is_err());
    }

    #[test]
    fn test_preset_classification() {
        assert_eq!(HeadShape::kloepper(10.0).unwrap().preset(), Some(HeadPreset::Kloepper));
        assert_eq!(HeadShape::korbbogen(10.0).unwrap().preset(), Some(HeadPreset::Korbbogen));
        assert_eq!(HeadShape::new(10.0, 0.9, 0.17).unwrap().preset(), None);
        assert_eq!(HeadShape::default().preset(), Some(HeadPreset::Kloepper));
    }

    #[test]
    fn test_arc_segments_meet() {
        let head = HeadShape::korbbogen(1000.0).unwrap();
        let crown = head.crown_arc();
        let knuckle = head.knuckle_arc();

        assert_point_eq(crown.start_point(), (0.0, head.internal_height()));
        assert_point_eq(crown.end_point(), head.transition_point());
        assert_point_eq(knuckle.start_point(), head.transition_point());
        assert_point_eq(knuckle.end_point(), (500.0, 0.0));
        assert!((knuckle.length() - 154.0 * (FRAC_PI_2 - head.theta())).abs() < 1e-9);
    }

    #[test]
    fn test_mirrored_profile() {
        let head = HeadShape::kloepper(1000.0).unwrap();
        let full = head.mirrored_profile(11);
        assert_eq!(full.len(), 21);
        assert_eq!(full[0].0, -500.0);
        assert_eq!(full[10].0, 0.0);
        assert_eq!(full[20].0, 500.0);
        assert_eq!(full[3].1, full[17].1);
        assert!(head.mirrored_profile(0).is_empty());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let head = HeadShape::korbbogen(1200.0).unwrap();
        let json = serde_json::to_string(&head).unwrap();
        assert!(json.contains("external_diameter"));
        let roundtrip: HeadShape = serde_json::from_str(&json).unwrap();
        assert_eq!(head, roundtrip);
    }

    #[test]
    fn test_deserialization_defaults_and_validation() {
        let head: HeadShape = serde_json::from_str(r#"{"external_diameter": 800.0}"#).unwrap();
        assert_eq!(head.preset(), Some(HeadPreset::Kloepper));

        let bad: Result<HeadShape, _> =
            serde_json::from_str(r#"{"external_diameter": 800.0, "alpha1": 0.2, "alpha2": 0.2}"#);
        assert!(bad.is_err());
    }
}
