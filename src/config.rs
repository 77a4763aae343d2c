//! TOML-based profile configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{Datelike, Local};
use serde::Deserialize;
use thiserror::Error;

use crate::profile::{
    CalendarWindow, HourlyLoadRecord, LoadLevels, NoiseConfig, OperatingDays, OperatingSchedule,
    ProfileError, generate, parse_time_of_day,
};

/// Supported year range of the configuration surface.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2000..=2100;

/// Upper bound of the random variation slider (%).
pub const MAX_RANDOM_PCT: f64 = 30.0;

/// Top-level profile configuration parsed from TOML.
///
/// All sections have defaults matching the office preset for the current
/// month. Load from TOML with [`ProfileConfig::from_toml_file`] or use
/// [`ProfileConfig::office`] for the built-in default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Target month.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Operating days and window.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Base and peak load levels.
    #[serde(default)]
    pub load: LoadConfig,
    /// Random variation.
    #[serde(default)]
    pub noise: NoiseSettings,
}

/// Target month of the profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// Calendar year (2000-2100).
    pub year: i32,
    /// Month of the year (1-12).
    pub month: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

/// Operating schedule as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Window start, `HH:MM` or `HH:MM:SS` (inclusive).
    pub start: String,
    /// Window end, `HH:MM` or `HH:MM:SS` (exclusive, may be before start).
    pub end: String,
    /// Operating weekday names.
    pub days: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "18:00".to_string(),
            days: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Base and peak load levels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Load outside operating hours (kW).
    pub base_kw: f64,
    /// Load at the middle of the operating window (kW).
    pub peak_kw: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            base_kw: 50.0,
            peak_kw: 150.0,
        }
    }
}

/// Random variation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// Noise standard deviation as % of the instantaneous load (0-30).
    pub random_pct: f64,
    /// Random seed, `0` for a different series on every run.
    pub seed: u64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            random_pct: 5.0,
            seed: 0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"calendar.month"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Typed, validated inputs for one generation run.
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    pub calendar: CalendarWindow,
    pub schedule: OperatingSchedule,
    pub load: LoadLevels,
    pub noise: NoiseConfig,
}

impl ProfileRequest {
    /// Runs the generator for this request.
    ///
    /// # Errors
    ///
    /// Propagates [`ProfileError`] from input validation.
    pub fn generate(&self) -> Result<Vec<HourlyLoadRecord>, ProfileError> {
        generate(self.calendar, &self.schedule, self.load, self.noise)
    }
}

impl fmt::Display for ProfileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<&str> = self
            .schedule
            .days
            .iter()
            .map(crate::profile::weekday_name)
            .collect();
        write!(
            f,
            "{}-{:02} | {}-{} on [{}] | base={:.2} kW peak={:.2} kW | noise={:.1}%",
            self.calendar.year(),
            self.calendar.month(),
            self.schedule.start.format("%H:%M"),
            self.schedule.end.format("%H:%M"),
            days.join(", "),
            self.load.base_kw,
            self.load.peak_kw,
            self.noise.random_pct,
        )
    }
}

impl ProfileConfig {
    /// Office preset: weekdays 08:00-18:00, 50 kW base, 150 kW peak.
    pub fn office() -> Self {
        Self::default()
    }

    /// Retail preset: Monday-Saturday 09:00-21:00.
    pub fn retail() -> Self {
        Self {
            schedule: ScheduleConfig {
                start: "09:00".to_string(),
                end: "21:00".to_string(),
                days: [
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                    "Friday",
                    "Saturday",
                ]
                .map(String::from)
                .to_vec(),
            },
            load: LoadConfig {
                base_kw: 30.0,
                peak_kw: 120.0,
            },
            ..Self::default()
        }
    }

    /// Night-shift preset: overnight window 22:00-06:00, every day.
    pub fn night_shift() -> Self {
        Self {
            schedule: ScheduleConfig {
                start: "22:00".to_string(),
                end: "06:00".to_string(),
                days: [
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                    "Friday",
                    "Saturday",
                    "Sunday",
                ]
                .map(String::from)
                .to_vec(),
            },
            load: LoadConfig {
                base_kw: 80.0,
                peak_kw: 220.0,
            },
            noise: NoiseSettings {
                random_pct: 3.0,
                ..NoiseSettings::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["office", "retail", "night_shift"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "office" => Ok(Self::office()),
            "retail" => Ok(Self::retail()),
            "night_shift" => Ok(Self::night_shift()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields against the bounds of the configuration surface.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let c = &self.calendar;
        if !YEAR_RANGE.contains(&c.year) {
            errors.push(ConfigError::new(
                "calendar.year",
                format!(
                    "must be in {}-{}, got {}",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end(),
                    c.year
                ),
            ));
        }
        if !(1..=12).contains(&c.month) {
            errors.push(ConfigError::new(
                "calendar.month",
                format!("must be in 1-12, got {}", c.month),
            ));
        }

        let s = &self.schedule;
        if let Err(e) = parse_time_of_day(&s.start) {
            errors.push(ConfigError::new("schedule.start", e.to_string()));
        }
        if let Err(e) = parse_time_of_day(&s.end) {
            errors.push(ConfigError::new("schedule.end", e.to_string()));
        }
        if let Err(e) = OperatingDays::from_names(s.days.as_slice()) {
            errors.push(ConfigError::new("schedule.days", e.to_string()));
        }

        let l = &self.load;
        if !l.base_kw.is_finite() || l.base_kw < 0.0 {
            errors.push(ConfigError::new("load.base_kw", "must be >= 0"));
        }
        if !l.peak_kw.is_finite() || l.peak_kw < 0.0 {
            errors.push(ConfigError::new("load.peak_kw", "must be >= 0"));
        }

        let n = &self.noise;
        if !(0.0..=MAX_RANDOM_PCT).contains(&n.random_pct) {
            errors.push(ConfigError::new(
                "noise.random_pct",
                format!("must be in [0, {MAX_RANDOM_PCT}], got {}", n.random_pct),
            ));
        }

        errors
    }

    /// Converts the configuration into typed generator inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] for an invalid month, time of day or
    /// weekday name. Load and noise bounds are checked by the generator.
    pub fn build(&self) -> Result<ProfileRequest, ProfileError> {
        let calendar = CalendarWindow::new(self.calendar.year, self.calendar.month)?;
        let schedule = OperatingSchedule::parse(
            self.schedule.days.as_slice(),
            &self.schedule.start,
            &self.schedule.end,
        )?;
        Ok(ProfileRequest {
            calendar,
            schedule,
            load: LoadLevels::new(self.load.base_kw, self.load.peak_kw),
            noise: NoiseConfig::new(self.noise.random_pct, Some(self.noise.seed)),
        })
    }
}
