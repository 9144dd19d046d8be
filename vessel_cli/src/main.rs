//! # Vessel CLI
//!
//! Terminal front-end for the vessel design engine. Prompts for the vessel
//! dimensions and design conditions, prints the head geometry and the
//! thickness report, then the same figures as JSON.
//!
//! ```text
//! vessel_cli [settings.json]
//! ```
//!
//! Log output goes to stderr; set `VESSEL_LOG=debug` for more detail.

mod logger;
mod report;

use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, error, info, warn};

use vessel_core::calculations::{design_vessel_with_settings, vessel_capacity, VesselDesignInput};
use vessel_core::errors::{CalcError, CalcResult};
use vessel_core::materials::{default_stress_table, MaterialGrade};
use vessel_core::settings::DesignSettings;

use report::{render_profile, DesignReport, HeadSummary};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    match prompt_line(prompt) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("could not parse '{}', using {}", value, default);
            default
        }),
        None => default,
    }
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    match prompt_line(prompt) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("could not parse '{}', using {}", value, default);
            default
        }),
        None => default,
    }
}

fn prompt_grade(prompt: &str, default: MaterialGrade) -> MaterialGrade {
    match prompt_line(prompt) {
        Some(value) => MaterialGrade::from_str_flexible(&value).unwrap_or_else(|e| {
            warn!("{}, using {}", e, default);
            default
        }),
        None => default,
    }
}

fn load_settings(path: Option<&Path>) -> CalcResult<DesignSettings> {
    let Some(path) = path else {
        return Ok(DesignSettings::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| {
        CalcError::invalid_input("settings", path.display().to_string(), e.to_string())
    })?;
    let settings = DesignSettings::from_json(&json)?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

fn run(settings: &DesignSettings) -> CalcResult<()> {
    let diameter = prompt_u32("Internal diameter D_i (mm) [1200]: ", 1200);
    let length = prompt_u32("Shell length L (mm) [3000]: ", 3000);
    let pressure = prompt_f64("Design pressure (bar) [3.0]: ", 3.0);
    let temperature = prompt_f64("Design temperature (°C) [100]: ", 100.0);
    let grade = prompt_grade("Material [1.4404]: ", MaterialGrade::X2CrNiMo17_12_2);

    let input = VesselDesignInput::new(diameter, length, pressure, temperature, grade)
        .with_settings_defaults(settings);
    debug!("input: {:?}", input);

    let result = design_vessel_with_settings(&input, default_stress_table(), settings)?;
    let capacity = vessel_capacity(&input)?;
    let head = input.head_shape()?;
    info!(
        "design complete: nominal {} mm, governed by {}",
        result.nominal_mm,
        result.governing()
    );

    let report = DesignReport {
        design_code: &settings.design_code,
        input: &input,
        head: HeadSummary::from_shape(&head),
        result: &result,
        capacity: &capacity,
    };

    println!();
    print!("{}", report.render());
    println!();
    println!("Head profile ({} points):", settings.profile_points);
    print!("{}", render_profile(&head, settings));

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_error(e: &CalcError) {
    error!("{}", e);
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    if let Err(e) = logger::init() {
        eprintln!("logger unavailable: {}", e);
    }

    println!("Vessel CLI - Torispherical Head & Shell Thickness");
    println!("=================================================");
    println!();

    let settings_path = std::env::args().nth(1);
    let settings = match load_settings(settings_path.as_deref().map(Path::new)) {
        Ok(settings) => settings,
        Err(e) => {
            print_error(&e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&settings) {
        print_error(&e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_without_path() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, DesignSettings::default());
    }

    #[test]
    fn test_missing_settings_file() {
        let err = load_settings(Some(Path::new("/nonexistent/vessel-settings.json"))).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_settings_file() {
        let path = std::env::temp_dir().join(format!("vessel_cli_settings_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "plate_step_mm": 1.0, "design_code": "EN 13445-3:2021" }"#).unwrap();
        let settings = load_settings(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.plate_step_mm, 1.0);
        assert_eq!(settings.design_code, "EN 13445-3:2021");
    }
}
