//! Tabulated nominal design stresses (EN 13445-3, simplified)
//!
//! Each entry states the design stress of a grade up to a maximum design
//! temperature. A lookup picks the entry with the lowest temperature limit
//! that still covers the requested temperature; there is no interpolation
//! and no extrapolation beyond the highest limit.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{AllowableStress, MaterialGrade};

/// One tabulated design stress value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressEntry {
    /// Material grade
    pub grade: MaterialGrade,
    /// Highest design temperature this value covers (°C)
    pub max_temperature_c: f64,
    /// Nominal design stress f (MPa)
    pub stress_mpa: f64,
}

/// Design stress table keyed by grade and temperature limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressTable {
    entries: Vec<StressEntry>,
}

/// Built-in table: 1.4404 at f = 120 MPa up to 100 °C.
pub static EN13445_STRESS_TABLE: Lazy<StressTable> = Lazy::new(|| {
    StressTable::new().with_entry(MaterialGrade::X2CrNiMo17_12_2, 100.0, 120.0)
});

/// The built-in design stress table
pub fn default_stress_table() -> &'static StressTable {
    &EN13445_STRESS_TABLE
}

impl StressTable {
    /// Create an empty table
    pub fn new() -> Self {
        StressTable { entries: Vec::new() }
    }

    /// Add an entry (builder pattern)
    pub fn with_entry(mut self, grade: MaterialGrade, max_temperature_c: f64, stress_mpa: f64) -> Self {
        self.entries.push(StressEntry {
            grade,
            max_temperature_c,
            stress_mpa,
        });
        self
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[StressEntry] {
        &self.entries
    }

    /// Design stress for `grade` at `temperature_c`, if tabulated.
    pub fn lookup(&self, grade: MaterialGrade, temperature_c: f64) -> Option<f64> {
        self.entries
            .iter()
            .filter(|e| e.grade == grade && temperature_c <= e.max_temperature_c)
            .min_by(|a, b| a.max_temperature_c.total_cmp(&b.max_temperature_c))
            .map(|e| e.stress_mpa)
    }
}

impl AllowableStress for StressTable {
    fn allowable_stress(&self, grade: MaterialGrade, temperature_c: f64) -> CalcResult<f64> {
        self.lookup(grade, temperature_c)
            .ok_or_else(|| CalcError::unsupported_material(grade.to_string(), temperature_c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADE: MaterialGrade = MaterialGrade::X2CrNiMo17_12_2;

    #[test]
    fn test_default_table() {
        let table = default_stress_table();
        assert_eq!(table.allowable_stress(GRADE, 100.0).unwrap(), 120.0);
        assert_eq!(table.allowable_stress(GRADE, 20.0).unwrap(), 120.0);
    }

    #[test]
    fn test_unsupported_temperature() {
        let err = default_stress_table().allowable_stress(GRADE, 100.5).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_MATERIAL");
        assert!(default_stress_table().allowable_stress(GRADE, f64::NAN).is_err());
    }

    #[test]
    fn test_lowest_covering_limit_wins() {
        let table = StressTable::new()
            .with_entry(GRADE, 200.0, 110.0)
            .with_entry(GRADE, 100.0, 120.0);
        assert_eq!(table.lookup(GRADE, 50.0), Some(120.0));
        assert_eq!(table.lookup(GRADE, 150.0), Some(110.0));
        assert_eq!(table.lookup(GRADE, 250.0), None);
        assert_eq!(table.entries().len(), 2);
    }

    #[test]
    fn test_empty_table() {
        assert!(StressTable::default().allowable_stress(GRADE, 20.0).is_err());
    }
}
