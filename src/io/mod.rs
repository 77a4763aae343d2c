//! Export of generated profiles to files.

/// CSV export.
pub mod export;
/// Spreadsheet export.
pub mod xlsx;

use crate::profile::CalendarWindow;

/// Column headers shared by every export format, in record-field order.
pub const COLUMNS: [&str; 8] = [
    "Datetime", "Year", "Month", "Day", "Hour", "Weekday", "Operating", "Load_kW",
];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// File name for an exported month, e.g. `load_model_2024_02.csv`.
pub fn export_file_name(calendar: &CalendarWindow, format: ExportFormat) -> String {
    format!(
        "load_model_{}_{:02}.{}",
        calendar.year(),
        calendar.month(),
        format.extension()
    )
}
