//! Synthetic hourly electricity load profiles for one calendar month.

/// Command-line arguments.
pub mod cli;
/// TOML configuration and presets.
pub mod config;
/// CSV and spreadsheet export.
pub mod io;
pub mod logging;
/// Core generator.
pub mod profile;
#[cfg(feature = "tui")]
pub mod tui;
