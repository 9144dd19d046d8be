//! Text and JSON reports for a design run.
//!
//! Core results keep full precision; values are rounded to two decimals here,
//! at presentation time only.

use serde::Serialize;

use vessel_core::calculations::{DesignResult, VesselCapacity, VesselDesignInput};
use vessel_core::geometry::HeadShape;
use vessel_core::settings::DesignSettings;

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Geometry figures of one head, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadSummary {
    pub head_type: String,
    pub external_diameter_mm: f64,
    pub crown_radius_mm: f64,
    pub knuckle_radius_mm: f64,
    pub theta_deg: f64,
    pub transition_point_mm: (f64, f64),
    pub internal_height_mm: f64,
    pub volume_l: f64,
}

impl HeadSummary {
    pub fn from_shape(shape: &HeadShape) -> Self {
        let head_type = match shape.preset() {
            Some(preset) => format!("{} ({})", preset.display_name(), preset.standard()),
            None => "Custom".to_string(),
        };
        let (x_t, y_t) = shape.transition_point();
        HeadSummary {
            head_type,
            external_diameter_mm: round2(shape.external_diameter()),
            crown_radius_mm: round2(shape.crown_radius()),
            knuckle_radius_mm: round2(shape.knuckle_radius()),
            theta_deg: round2(shape.theta_degrees()),
            transition_point_mm: (round2(x_t), round2(y_t)),
            internal_height_mm: round2(shape.internal_height()),
            volume_l: round2(shape.volume() / 1.0e6),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("  Type:             {}\n", self.head_type));
        out.push_str(&format!("  Diameter:         {:.2} mm\n", self.external_diameter_mm));
        out.push_str(&format!("  Crown radius:     {:.2} mm\n", self.crown_radius_mm));
        out.push_str(&format!("  Knuckle radius:   {:.2} mm\n", self.knuckle_radius_mm));
        out.push_str(&format!("  Transition angle: {:.2}°\n", self.theta_deg));
        out.push_str(&format!(
            "  Transition point: ({:.2}, {:.2}) mm\n",
            self.transition_point_mm.0, self.transition_point_mm.1
        ));
        out.push_str(&format!("  Internal height:  {:.2} mm\n", self.internal_height_mm));
        out.push_str(&format!("  Volume:           {:.2} L\n", self.volume_l));
        out
    }
}

/// Every printed figure of a design run, for the JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DesignReport<'a> {
    pub design_code: &'a str,
    pub input: &'a VesselDesignInput,
    pub head: HeadSummary,
    pub result: &'a DesignResult,
    pub capacity: &'a VesselCapacity,
}

impl DesignReport<'_> {
    pub fn render(&self) -> String {
        let input = self.input;
        let result = self.result;
        let mut out = String::new();

        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!("  VESSEL DESIGN ({})\n", self.design_code));
        out.push_str("═══════════════════════════════════════\n\n");

        out.push_str("Input:\n");
        out.push_str(&format!("  Diameter D_i:  {} mm\n", input.internal_diameter_mm));
        out.push_str(&format!("  Length L:      {} mm\n", input.shell_length_mm));
        out.push_str(&format!(
            "  Pressure:      {:.2} bar ({:.2} MPa)\n",
            input.design_pressure_bar,
            round2(result.design_pressure_mpa)
        ));
        out.push_str(&format!("  Temperature:   {:.1} °C\n", input.design_temperature_c));
        out.push_str(&format!("  Material:      {}\n", input.material_grade));
        out.push_str(&format!("  z = {:.2}, c = {:.2} mm\n\n", input.z, input.c));

        out.push_str("Head:\n");
        out.push_str(&self.head.render());
        out.push('\n');

        out.push_str("Thickness:\n");
        out.push_str(&format!("  f = {:.2} MPa, M = {:.4}\n", result.allowable_stress_mpa, result.stress_factor_m));
        out.push_str(&format!("  Shell required: {:.2} mm\n", round2(result.shell_required_mm)));
        out.push_str(&format!("  Head required:  {:.2} mm\n\n", round2(result.head_required_mm)));

        out.push_str(&format!(
            "Capacity: {:.2} L (shell + 2 heads)\n\n",
            round2(self.capacity.total_volume_l())
        ));

        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!(
            "  NOMINAL: {:.1} mm (governs: {})\n",
            result.nominal_mm,
            result.governing()
        ));
        out.push_str("═══════════════════════════════════════\n");
        out
    }
}

/// Coarse half profile, about ten rows, for the text report.
pub fn render_profile(shape: &HeadShape, settings: &DesignSettings) -> String {
    let n = settings.profile_points;
    let last = n.saturating_sub(1);
    let stride = (last / 10).max(1);
    let mut out = String::from("  x [mm]      y [mm]\n");
    for (i, (x, y)) in shape.profile(n).enumerate() {
        if i % stride == 0 || i == last {
            out.push_str(&format!("  {:>8.2}  {:>8.2}\n", x, y));
        }
    }
    out
}
