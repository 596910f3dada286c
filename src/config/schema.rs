use serde::{Deserialize, Serialize};

/// Main configuration.
///
/// Everything is optional; a missing file means defaults. Example YAML:
/// ```yaml
/// theme: dark
/// tick_rate_ms: 250
/// defaults:
///   age: 52
///   bmi: 27.5
///   blood_pressure: 85
///   glucose: 110
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Color theme: auto picks dark/light from the terminal background.
    #[serde(default)]
    pub theme: ThemeChoice,

    /// TUI tick interval in milliseconds (flash-message expiry cadence).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Initial slider positions on the Home page.
    #[serde(default)]
    pub defaults: VitalsDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            tick_rate_ms: default_tick_rate_ms(),
            defaults: VitalsDefaults::default(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Dark,
    Light,
}

/// Initial slider positions. Mirrors the declared vitals domains; values
/// outside them are clamped at load time.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct VitalsDefaults {
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_bmi")]
    pub bmi: f64,
    #[serde(default = "default_blood_pressure")]
    pub blood_pressure: u32,
    #[serde(default = "default_glucose")]
    pub glucose: u32,
}

impl Default for VitalsDefaults {
    fn default() -> Self {
        Self {
            age: default_age(),
            bmi: default_bmi(),
            blood_pressure: default_blood_pressure(),
            glucose: default_glucose(),
        }
    }
}

fn default_age() -> u32 {
    45
}

fn default_bmi() -> f64 {
    25.0
}

fn default_blood_pressure() -> u32 {
    80
}

fn default_glucose() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeChoice::Auto);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.defaults.age, 45);
        assert_eq!(config.defaults.bmi, 25.0);
        assert_eq!(config.defaults.blood_pressure, 80);
        assert_eq!(config.defaults.glucose, 100);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
theme: light
defaults:
  age: 60
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.defaults.age, 60);
        assert_eq!(config.defaults.glucose, 100);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "not_a_field: 1";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
