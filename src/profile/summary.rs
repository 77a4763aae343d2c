//! Post-hoc views over a generated profile: summary statistics, the
//! one-week preview and the chart series.

use std::fmt;

use chrono::NaiveDateTime;

use super::types::HourlyLoadRecord;

/// Number of records in the preview (one week).
pub const PREVIEW_HOURS: usize = 168;

/// Returns the first week of records (fewer if the series is shorter).
pub fn preview(records: &[HourlyLoadRecord]) -> &[HourlyLoadRecord] {
    &records[..records.len().min(PREVIEW_HOURS)]
}

/// Returns `(timestamp, load_kw)` points in chronological order.
pub fn chart_points(records: &[HourlyLoadRecord]) -> Vec<(NaiveDateTime, f64)> {
    records.iter().map(|r| (r.timestamp, r.load_kw)).collect()
}

/// Aggregate statistics of a generated month.
///
/// Computed from the rounded `load_kw` values the records carry, so the
/// figures match what an export of the same records would show.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    /// Number of hourly records.
    pub hours: usize,
    /// Arithmetic mean load (kW).
    pub mean_kw: f64,
    /// Maximum hourly load (kW).
    pub peak_kw: f64,
    /// Number of hours flagged as operating.
    pub operating_hours: usize,
    /// Total energy over the month (kWh, one hour per record).
    pub energy_kwh: f64,
}

impl ProfileSummary {
    /// Computes the summary of a record series.
    ///
    /// An empty series yields all-zero statistics.
    pub fn from_records(records: &[HourlyLoadRecord]) -> Self {
        if records.is_empty() {
            return Self {
                hours: 0,
                mean_kw: 0.0,
                peak_kw: 0.0,
                operating_hours: 0,
                energy_kwh: 0.0,
            };
        }

        let mut sum = 0.0_f64;
        let mut peak = f64::NEG_INFINITY;
        let mut operating = 0_usize;

        for r in records {
            sum += r.load_kw;
            peak = peak.max(r.load_kw);
            if r.is_operating {
                operating += 1;
            }
        }

        Self {
            hours: records.len(),
            mean_kw: sum / records.len() as f64,
            peak_kw: peak,
            operating_hours: operating,
            energy_kwh: sum,
        }
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Hours in month:   {}", self.hours)?;
        writeln!(f, "Average load:     {:.2} kW", self.mean_kw)?;
        writeln!(f, "Peak load:        {:.2} kW", self.peak_kw)?;
        writeln!(f, "Operating hours:  {}", self.operating_hours)?;
        write!(f, "Energy:           {:.1} kWh", self.energy_kwh)
    }
}
