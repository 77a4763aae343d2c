//! Hourly load-profile generation for one calendar month.

/// Calendar month window and hourly clock.
pub mod calendar;
pub mod error;
/// Generator loop.
pub mod generator;
/// Seeded Gaussian noise.
pub mod noise;
/// Operating days and operating window.
pub mod schedule;
/// Base/peak load levels and the triangular ramp.
pub mod shape;
pub mod summary;
pub mod types;

pub use calendar::{CalendarWindow, HourClock};
pub use error::ProfileError;
pub use generator::{LoadProfileGenerator, generate};
pub use noise::{NoiseConfig, NoiseSource};
pub use schedule::{OperatingDays, OperatingSchedule, parse_time_of_day, weekday_name};
pub use shape::LoadLevels;
pub use summary::{PREVIEW_HOURS, ProfileSummary, chart_points, preview};
pub use types::HourlyLoadRecord;
