//! CSV export for hourly load records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::COLUMNS;
use crate::profile::HourlyLoadRecord;

/// Timestamp layout used in the `Datetime` column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exports records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[HourlyLoadRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes records as UTF-8 CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[HourlyLoadRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(COLUMNS)?;

    for r in records {
        wtr.write_record(&[
            r.timestamp.format(DATETIME_FORMAT).to_string(),
            r.year.to_string(),
            r.month.to_string(),
            r.day.to_string(),
            r.hour.to_string(),
            r.weekday_name().to_string(),
            r.is_operating.to_string(),
            format!("{:.3}", r.load_kw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
