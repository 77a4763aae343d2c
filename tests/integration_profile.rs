mod common;

use chrono::{Datelike, TimeDelta, Timelike, Weekday};
use common::{at, hm, leap_february, noiseless, office_schedule, overnight_schedule, record_at};
use load_model::profile::{
    CalendarWindow, LoadLevels, NoiseConfig, OperatingDays, OperatingSchedule, ProfileError,
    ProfileSummary, generate,
};

#[test]
fn covers_every_hour_without_gaps() {
    for (year, month, days) in [(2024, 2, 29), (2023, 2, 28), (2023, 4, 30), (2023, 12, 31)] {
        let records = noiseless(year, month, &office_schedule(), 10.0, 20.0);
        assert_eq!(records.len(), days * 24, "{year}-{month}");
        assert_eq!(records[0].timestamp, at(year, month, 1, 0));
        assert!(
            records
                .windows(2)
                .all(|w| w[1].timestamp - w[0].timestamp == TimeDelta::hours(1)),
            "gap or disorder in {year}-{month}"
        );
        assert!(records.iter().all(|r| r.month == month && r.year == year));
    }
}

#[test]
fn record_fields_match_timestamp() {
    let records = noiseless(2024, 2, &office_schedule(), 10.0, 20.0);
    for r in &records {
        assert_eq!(r.year, r.timestamp.year());
        assert_eq!(r.month, r.timestamp.month());
        assert_eq!(r.day, r.timestamp.day());
        assert_eq!(r.hour, r.timestamp.hour());
        assert_eq!(r.weekday, r.timestamp.weekday());
    }
}

#[test]
fn operating_flag_follows_days_and_window() {
    let records = noiseless(2024, 2, &office_schedule(), 10.0, 20.0);
    for r in &records {
        let weekday = !matches!(r.weekday, Weekday::Sat | Weekday::Sun);
        let in_window = (8..18).contains(&r.hour);
        assert_eq!(r.is_operating, weekday && in_window, "at {}", r.timestamp);
    }
}

#[test]
fn leap_february_office_scenario() {
    let records = leap_february(NoiseConfig::disabled());
    assert_eq!(records.len(), 696);

    // 2024-02-03 is a Saturday
    for h in 0..24 {
        let r = record_at(&records, at(2024, 2, 3, h));
        assert!(!r.is_operating);
        assert_eq!(r.load_kw, 10.0);
    }

    // 2024-02-05 is a Monday; midpoint at 13:00
    assert_eq!(record_at(&records, at(2024, 2, 5, 8)).load_kw, 10.0);
    assert_eq!(record_at(&records, at(2024, 2, 5, 13)).load_kw, 20.0);
    assert_eq!(record_at(&records, at(2024, 2, 5, 18)).load_kw, 10.0);

    let summary = ProfileSummary::from_records(&records);
    // 21 weekdays in February 2024, 10 operating hours each
    assert_eq!(summary.operating_hours, 210);
    assert_eq!(summary.peak_kw, 20.0);
}

#[test]
fn triangular_ramp_is_symmetric() {
    let records = noiseless(2024, 2, &office_schedule(), 50.0, 150.0);
    let day = |h| record_at(&records, at(2024, 2, 6, h)).load_kw;
    for offset in 1..5 {
        assert_eq!(day(13 - offset), day(13 + offset), "offset {offset}");
    }
    let rising: Vec<f64> = (8..=13).map(day).collect();
    assert!(rising.windows(2).all(|w| w[0] < w[1]), "rising: {rising:?}");
}

#[test]
fn non_operating_hours_sit_at_base() {
    let records = noiseless(2023, 7, &office_schedule(), 42.5, 99.0);
    assert!(
        records
            .iter()
            .filter(|r| !r.is_operating)
            .all(|r| r.load_kw == 42.5)
    );
    assert!(records.iter().all(|r| r.load_kw >= 42.5 && r.load_kw <= 99.0));
}

#[test]
fn overnight_window_wraps_midnight() {
    let records = noiseless(2024, 3, &overnight_schedule(), 20.0, 100.0);
    let r = |d, h| record_at(&records, at(2024, 3, d, h));

    assert!(r(4, 22).is_operating);
    assert!(r(4, 23).is_operating);
    assert!(r(5, 0).is_operating);
    assert!(r(5, 5).is_operating);
    assert!(!r(5, 6).is_operating);
    assert!(!r(5, 21).is_operating);

    assert_eq!(r(4, 22).load_kw, 20.0);
    assert_eq!(r(5, 2).load_kw, 100.0);
    assert_eq!(r(4, 23).load_kw, r(5, 5).load_kw);
}

#[test]
fn boundaries_are_start_inclusive_end_exclusive() {
    let schedule = OperatingSchedule::new(OperatingDays::ALL, hm(9), hm(17));
    let records = noiseless(2023, 1, &schedule, 1.0, 2.0);
    for r in &records {
        assert_eq!(r.is_operating, r.hour >= 9 && r.hour < 17, "at {}", r.timestamp);
    }
}

#[test]
fn empty_window_never_operates() {
    let schedule = OperatingSchedule::new(OperatingDays::ALL, hm(10), hm(10));
    let records = noiseless(2023, 1, &schedule, 5.0, 50.0);
    assert!(records.iter().all(|r| !r.is_operating && r.load_kw == 5.0));
}

#[test]
fn no_operating_days_gives_flat_base() {
    let schedule = OperatingSchedule::new(OperatingDays::NONE, hm(8), hm(18));
    let records = noiseless(2023, 5, &schedule, 7.0, 70.0);
    assert!(records.iter().all(|r| !r.is_operating && r.load_kw == 7.0));
}

#[test]
fn same_seed_reproduces_series() {
    let a = leap_february(NoiseConfig::new(10.0, Some(42)));
    let b = leap_february(NoiseConfig::new(10.0, Some(42)));
    assert_eq!(a, b);

    let c = leap_february(NoiseConfig::new(10.0, Some(43)));
    assert_ne!(a, c);
}

#[test]
fn unseeded_runs_differ() {
    let a = leap_february(NoiseConfig::new(10.0, None));
    let b = leap_february(NoiseConfig::new(10.0, None));
    assert_ne!(a, b);

    // zero seed also draws from entropy
    let c = leap_february(NoiseConfig::new(10.0, Some(0)));
    let d = leap_february(NoiseConfig::new(10.0, Some(0)));
    assert_ne!(c, d);
}

#[test]
fn noise_keeps_loads_non_negative() {
    let records = generate(
        CalendarWindow::new(2024, 1).unwrap(),
        &office_schedule(),
        LoadLevels::new(0.5, 1.0),
        NoiseConfig::new(300.0, Some(7)),
    )
    .unwrap();
    assert!(records.iter().all(|r| r.load_kw >= 0.0));
    assert!(records.iter().any(|r| r.load_kw == 0.0));
}

#[test]
fn zero_base_stays_zero_with_noise() {
    let records = generate(
        CalendarWindow::new(2024, 1).unwrap(),
        &office_schedule(),
        LoadLevels::new(0.0, 10.0),
        NoiseConfig::new(20.0, Some(3)),
    )
    .unwrap();
    assert!(
        records
            .iter()
            .filter(|r| !r.is_operating)
            .all(|r| r.load_kw == 0.0)
    );
}

#[test]
fn loads_are_rounded_to_three_decimals() {
    let records = leap_february(NoiseConfig::new(5.0, Some(11)));
    for r in &records {
        let scaled = r.load_kw * 1000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "{} not rounded",
            r.load_kw
        );
    }
}

#[test]
fn peak_below_base_dips_during_operation() {
    let records = noiseless(2024, 2, &office_schedule(), 100.0, 40.0);
    assert_eq!(record_at(&records, at(2024, 2, 5, 13)).load_kw, 40.0);
    assert_eq!(record_at(&records, at(2024, 2, 5, 8)).load_kw, 100.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(matches!(
        CalendarWindow::new(2024, 13),
        Err(ProfileError::InvalidCalendar(_))
    ));
    assert!(matches!(
        OperatingSchedule::parse(&["Monday"], "8 o'clock", "18:00"),
        Err(ProfileError::InvalidSchedule(_))
    ));
    assert!(matches!(
        OperatingSchedule::parse(&["Caturday"], "08:00", "18:00"),
        Err(ProfileError::InvalidSchedule(_))
    ));
    let err = generate(
        CalendarWindow::new(2024, 2).unwrap(),
        &office_schedule(),
        LoadLevels::new(f64::NAN, 10.0),
        NoiseConfig::disabled(),
    )
    .unwrap_err();
    assert!(matches!(err, ProfileError::InvalidLoad(_)));
}
