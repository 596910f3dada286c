mod schema;

pub use schema::{Config, ThemeChoice, VitalsDefaults};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Declared vitals domains, shared by config clamping and the CLI parsers.
pub const AGE_RANGE: (u32, u32) = (18, 90);
pub const BMI_RANGE: (f64, f64) = (15.0, 50.0);
pub const BLOOD_PRESSURE_RANGE: (u32, u32) = (40, 130);
pub const GLUCOSE_RANGE: (u32, u32) = (40, 200);

/// Get the config directory path (~/.config/diarisk/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("diarisk")
}

/// Get the default config file path (~/.config/diarisk/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// If `path` is None the default path is used. A missing file is not an
/// error: the tool runs with defaults and zero setup. A file that exists but
/// does not parse is an error.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

/// Clamp configured slider defaults into the declared vitals domains.
/// Returns all adjustments at once (not just the first) so the user can fix
/// the file in one pass.
pub fn clamp_defaults(config: &mut Config) -> Vec<String> {
    let mut warnings = Vec::new();

    let d = &mut config.defaults;
    if d.age < AGE_RANGE.0 || d.age > AGE_RANGE.1 {
        let clamped = d.age.clamp(AGE_RANGE.0, AGE_RANGE.1);
        warnings.push(format!(
            "defaults.age: {} outside {}-{}, clamped to {}",
            d.age, AGE_RANGE.0, AGE_RANGE.1, clamped
        ));
        d.age = clamped;
    }
    if d.bmi < BMI_RANGE.0 || d.bmi > BMI_RANGE.1 {
        let clamped = d.bmi.clamp(BMI_RANGE.0, BMI_RANGE.1);
        warnings.push(format!(
            "defaults.bmi: {} outside {}-{}, clamped to {}",
            d.bmi, BMI_RANGE.0, BMI_RANGE.1, clamped
        ));
        d.bmi = clamped;
    }
    if d.blood_pressure < BLOOD_PRESSURE_RANGE.0 || d.blood_pressure > BLOOD_PRESSURE_RANGE.1 {
        let clamped = d
            .blood_pressure
            .clamp(BLOOD_PRESSURE_RANGE.0, BLOOD_PRESSURE_RANGE.1);
        warnings.push(format!(
            "defaults.blood_pressure: {} outside {}-{}, clamped to {}",
            d.blood_pressure, BLOOD_PRESSURE_RANGE.0, BLOOD_PRESSURE_RANGE.1, clamped
        ));
        d.blood_pressure = clamped;
    }
    if d.glucose < GLUCOSE_RANGE.0 || d.glucose > GLUCOSE_RANGE.1 {
        let clamped = d.glucose.clamp(GLUCOSE_RANGE.0, GLUCOSE_RANGE.1);
        warnings.push(format!(
            "defaults.glucose: {} outside {}-{}, clamped to {}",
            d.glucose, GLUCOSE_RANGE.0, GLUCOSE_RANGE.1, clamped
        ));
        d.glucose = clamped;
    }

    if config.tick_rate_ms == 0 {
        warnings.push("tick_rate_ms: 0 is invalid, using 250".to_string());
        config.tick_rate_ms = 250;
    }

    warnings
}
