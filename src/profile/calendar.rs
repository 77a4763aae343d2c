use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use super::error::ProfileError;

/// One calendar month, the window a profile covers.
///
/// The window spans day 1 at 00:00 through the last hour of the last day,
/// inclusive. December rolls over into January of the next year when the
/// end of the window is computed.
///
/// # Examples
///
/// ```
/// use load_model::profile::CalendarWindow;
///
/// let feb = CalendarWindow::new(2024, 2).unwrap();
/// assert_eq!(feb.days_in_month(), 29);
/// assert_eq!(feb.hour_count(), 696);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    /// First day of the month.
    first: NaiveDate,
    /// First day of the following month (exclusive bound).
    next: NaiveDate,
}

impl CalendarWindow {
    /// Creates the window for `year`/`month`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::InvalidCalendar`] if `month` is outside
    /// 1-12 or the year cannot be represented.
    pub fn new(year: i32, month: u32) -> Result<Self, ProfileError> {
        if !(1..=12).contains(&month) {
            return Err(ProfileError::InvalidCalendar(format!(
                "month must be in 1-12, got {month}"
            )));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ProfileError::InvalidCalendar(format!("year {year} is out of range"))
        })?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(|| {
            ProfileError::InvalidCalendar(format!("year {year} is out of range"))
        })?;
        Ok(Self { first, next })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of days in the month, leap years included.
    pub fn days_in_month(&self) -> u32 {
        // Always 28..=31, the cast cannot truncate.
        self.next.signed_duration_since(self.first).num_days() as u32
    }

    /// Number of hourly records the month produces.
    pub fn hour_count(&self) -> usize {
        self.days_in_month() as usize * 24
    }

    /// Timestamp of the first hour (day 1, 00:00).
    pub fn start(&self) -> NaiveDateTime {
        self.first.and_time(chrono::NaiveTime::MIN)
    }

    /// Timestamp of the last hour of the last day.
    pub fn last_hour(&self) -> NaiveDateTime {
        self.next.and_time(chrono::NaiveTime::MIN) - TimeDelta::hours(1)
    }

    /// Returns a clock that yields every hour of the month in order.
    pub fn hours(&self) -> HourClock {
        HourClock {
            current: self.start(),
            end: self.next.and_time(chrono::NaiveTime::MIN),
        }
    }
}

/// Hourly clock over a calendar window.
///
/// Yields strictly increasing timestamps one hour apart, from the window
/// start up to (excluding) the first hour of the following month.
#[derive(Debug, Clone)]
pub struct HourClock {
    /// Next timestamp to hand out.
    current: NaiveDateTime,
    /// Exclusive end of the window.
    end: NaiveDateTime,
}

impl HourClock {
    /// Advances the clock by one hour.
    ///
    /// # Returns
    ///
    /// * `Some(ts)` - The current hour before advancing
    /// * `None` - If the clock has passed the end of the month
    pub fn tick(&mut self) -> Option<NaiveDateTime> {
        if self.current < self.end {
            let ts = self.current;
            self.current += TimeDelta::hours(1);
            Some(ts)
        } else {
            None
        }
    }
}

impl Iterator for HourClock {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .end
            .signed_duration_since(self.current)
            .num_hours()
            .max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HourClock {}
