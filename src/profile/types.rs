//! Output record of the generator.

use std::fmt;

use chrono::{NaiveDateTime, Weekday};

use super::schedule::weekday_name;

/// Load of one hour of the month.
///
/// Created once per hour by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyLoadRecord {
    /// Start of the hour.
    pub timestamp: NaiveDateTime,
    pub year: i32,
    /// Month of the year (1-12).
    pub month: u32,
    /// Day of the month (1-31).
    pub day: u32,
    /// Hour of the day (0-23).
    pub hour: u32,
    pub weekday: Weekday,
    /// Whether the hour is on an operating day and inside the window.
    pub is_operating: bool,
    /// Load rounded to three decimals (kW, >= 0 when noise is applied).
    pub load_kw: f64,
}

impl HourlyLoadRecord {
    /// Full English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

impl fmt::Display for HourlyLoadRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:<9} | {:<3} | {:>10.3} kW",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.weekday_name(),
            if self.is_operating { "on" } else { "off" },
            self.load_kw,
        )
    }
}

/// Rounds a load value to three decimals.
pub fn round_kw(load_kw: f64) -> f64 {
    (load_kw * 1000.0).round() / 1000.0
}
