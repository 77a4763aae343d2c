//! Spreadsheet (`.xlsx`) export for hourly load records.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::COLUMNS;
use crate::profile::HourlyLoadRecord;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "LoadModel";

/// Exports records to an `.xlsx` file at the given path.
///
/// # Errors
///
/// Returns an `XlsxError` if the workbook cannot be built or written.
pub fn export_xlsx(records: &[HourlyLoadRecord], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path)
}

/// Renders records as an in-memory `.xlsx` file.
///
/// # Errors
///
/// Returns an `XlsxError` if the workbook cannot be built.
pub fn write_xlsx(records: &[HourlyLoadRecord]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = build_workbook(records)?;
    workbook.save_to_buffer()
}

/// One sheet, bold header row, one row per hour in column order.
fn build_workbook(records: &[HourlyLoadRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let datetime = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let load = Format::new().set_num_format("0.000");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_column_width(0, 20)?;

    for (col, name) in (0_u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, r) in (1_u32..).zip(records) {
        sheet.write_datetime_with_format(row, 0, &r.timestamp, &datetime)?;
        sheet.write_number(row, 1, r.year)?;
        sheet.write_number(row, 2, r.month)?;
        sheet.write_number(row, 3, r.day)?;
        sheet.write_number(row, 4, r.hour)?;
        sheet.write_string(row, 5, r.weekday_name())?;
        sheet.write_boolean(row, 6, r.is_operating)?;
        sheet.write_number_with_format(row, 7, r.load_kw, &load)?;
    }

    Ok(workbook)
}
