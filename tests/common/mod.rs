//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use load_model::profile::{
    CalendarWindow, HourlyLoadRecord, LoadLevels, NoiseConfig, OperatingDays, OperatingSchedule,
    generate,
};

/// Whole hour of the day.
pub fn hm(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

/// Timestamp at a whole hour.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Office schedule: weekdays 08:00-18:00.
pub fn office_schedule() -> OperatingSchedule {
    OperatingSchedule::new(OperatingDays::WEEKDAYS, hm(8), hm(18))
}

/// Overnight schedule: every day 22:00-06:00.
pub fn overnight_schedule() -> OperatingSchedule {
    OperatingSchedule::new(OperatingDays::ALL, hm(22), hm(6))
}

/// February 2024 office profile (10 kW base, 20 kW peak) with the given noise.
pub fn leap_february(noise: NoiseConfig) -> Vec<HourlyLoadRecord> {
    generate(
        CalendarWindow::new(2024, 2).unwrap(),
        &office_schedule(),
        LoadLevels::new(10.0, 20.0),
        noise,
    )
    .expect("valid inputs should generate")
}

/// Noiseless profile for any month with the given schedule and levels.
pub fn noiseless(
    year: i32,
    month: u32,
    schedule: &OperatingSchedule,
    base_kw: f64,
    peak_kw: f64,
) -> Vec<HourlyLoadRecord> {
    generate(
        CalendarWindow::new(year, month).unwrap(),
        schedule,
        LoadLevels::new(base_kw, peak_kw),
        NoiseConfig::disabled(),
    )
    .expect("valid inputs should generate")
}

/// Finds the record at the given timestamp.
pub fn record_at(records: &[HourlyLoadRecord], ts: NaiveDateTime) -> &HourlyLoadRecord {
    records
        .iter()
        .find(|r| r.timestamp == ts)
        .unwrap_or_else(|| panic!("no record at {ts}"))
}
