//! Operating schedule: which weekdays and which time-of-day window count as
//! operating hours.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

use super::error::ProfileError;

const SECONDS_PER_DAY: u32 = 86_400;

/// Full English name of a weekday, as shown in previews and exports.
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a time of day given as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns [`ProfileError::InvalidSchedule`] if the string is not a valid
/// wall-clock time.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ProfileError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| {
            ProfileError::InvalidSchedule(format!(
                "\"{raw}\" is not a time of day (expected HH:MM or HH:MM:SS)"
            ))
        })
}

/// Set of weekdays on which the operating window applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatingDays([bool; 7]);

impl OperatingDays {
    /// Monday through Friday.
    pub const WEEKDAYS: Self = Self([true, true, true, true, true, false, false]);
    /// Every day of the week.
    pub const ALL: Self = Self([true; 7]);
    /// No operating days: the whole month stays at base load.
    pub const NONE: Self = Self([false; 7]);

    /// Parses weekday names such as `"Monday"` or `"sat"` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidSchedule`] naming the first entry that
    /// is not a weekday.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ProfileError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                name.parse::<Weekday>().map_err(|_| {
                    ProfileError::InvalidSchedule(format!("\"{name}\" is not a weekday name"))
                })
            })
            .collect()
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0[day.num_days_from_monday() as usize] = true;
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&d| d)
    }

    /// Iterates over the selected days, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|&d| self.contains(d))
    }
}

impl FromIterator<Weekday> for OperatingDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut days = Self::NONE;
        for day in iter {
            days.insert(day);
        }
        days
    }
}

/// Operating days plus a daily operating window.
///
/// The window is start-inclusive and end-exclusive. When `end <= start`
/// the window wraps past midnight (e.g. 22:00-06:00). A window with
/// `start == end` never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingSchedule {
    pub days: OperatingDays,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl OperatingSchedule {
    pub fn new(days: OperatingDays, start: NaiveTime, end: NaiveTime) -> Self {
        Self { days, start, end }
    }

    /// Builds a schedule from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidSchedule`] for unknown weekday names or
    /// malformed times.
    pub fn parse<S: AsRef<str>>(days: &[S], start: &str, end: &str) -> Result<Self, ProfileError> {
        Ok(Self {
            days: OperatingDays::from_names(days)?,
            start: parse_time_of_day(start)?,
            end: parse_time_of_day(end)?,
        })
    }

    /// Returns `true` when the window wraps past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Returns `true` when `time` falls inside the daily window.
    pub fn in_window(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }

    /// Returns `true` when `ts` is on an operating day and inside the window.
    ///
    /// The day test uses the weekday of `ts` itself, so the after-midnight
    /// part of an overnight window belongs to the following calendar day.
    pub fn is_operating(&self, ts: NaiveDateTime) -> bool {
        self.days.contains(ts.weekday()) && self.in_window(ts.time())
    }

    /// Position of `time` on the triangular ramp, as `(rising, fraction)`.
    ///
    /// `rising` is `true` up to and including the window midpoint. The
    /// fraction runs 0 → 1 on the rising half (start → midpoint) and 0 → 1
    /// on the falling half (midpoint → end). Half-window lengths are floored
    /// at one second so a degenerate window never divides by zero.
    pub fn ramp_fraction(&self, time: NaiveTime) -> (bool, f64) {
        let start = self.start.num_seconds_from_midnight();
        let mut end = self.end.num_seconds_from_midnight();
        let mut current = time.num_seconds_from_midnight();

        if end <= start {
            end += SECONDS_PER_DAY;
        }
        if current < start {
            current += SECONDS_PER_DAY;
        }

        let start = f64::from(start);
        let end = f64::from(end);
        let current = f64::from(current);
        let midpoint = (start + end) / 2.0;

        if current <= midpoint {
            (true, (current - start) / (midpoint - start).max(1.0))
        } else {
            (false, (current - midpoint) / (end - midpoint).max(1.0))
        }
    }
}

impl Default for OperatingSchedule {
    fn default() -> Self {
        Self {
            days: OperatingDays::WEEKDAYS,
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}
