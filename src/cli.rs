//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::ProfileConfig;
use crate::io::ExportFormat;

/// Which files to write after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportChoice {
    Csv,
    Xlsx,
    Both,
}

impl ExportChoice {
    /// Formats to write, CSV first.
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            Self::Csv => &[ExportFormat::Csv],
            Self::Xlsx => &[ExportFormat::Xlsx],
            Self::Both => &[ExportFormat::Csv, ExportFormat::Xlsx],
        }
    }
}

/// Generate an hourly electricity load profile for one month.
#[derive(Debug, Parser)]
#[command(name = "load-model", version)]
#[command(
    long_about = "Generate an hourly electricity load profile for one calendar month.\n\
    \nLoad ramps linearly from base to peak at the middle of the operating window and\n\
    back to base at its end; outside operating hours the load stays at base.\n\
    \nExamples:\n  \
    load-model --preset office --year 2024 --month 2\n  \
    load-model --config plant.toml --seed 42 --export both --out-dir ./out\n  \
    load-model --start 22:00 --end 06:00 --days Mon,Tue,Wed,Thu,Fri --random-pct 0"
)]
pub struct Cli {
    /// Load configuration from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (office, retail, night_shift)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Calendar year (2000-2100)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month of the year (1-12)
    #[arg(long)]
    pub month: Option<u32>,

    /// Operating window start, HH:MM
    #[arg(long, value_name = "HH:MM")]
    pub start: Option<String>,

    /// Operating window end, HH:MM (before start for overnight windows)
    #[arg(long, value_name = "HH:MM")]
    pub end: Option<String>,

    /// Comma-separated operating weekdays, e.g. Mon,Tue,Wed
    #[arg(long, value_delimiter = ',', value_name = "DAYS")]
    pub days: Option<Vec<String>>,

    /// Base load in kW
    #[arg(long)]
    pub base_kw: Option<f64>,

    /// Peak load in kW
    #[arg(long)]
    pub peak_kw: Option<f64>,

    /// Random variation, % of the instantaneous load (0-30)
    #[arg(long)]
    pub random_pct: Option<f64>,

    /// Random seed (0 = different every run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of preview rows to print
    #[arg(long, default_value_t = crate::profile::PREVIEW_HOURS)]
    pub preview: usize,

    /// Write the profile to disk
    #[arg(long, value_enum)]
    pub export: Option<ExportChoice>,

    /// Directory for exported files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Show the month as a terminal chart (requires the `tui` feature)
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, cfg: &mut ProfileConfig) {
        if let Some(year) = self.year {
            cfg.calendar.year = year;
        }
        if let Some(month) = self.month {
            cfg.calendar.month = month;
        }
        if let Some(start) = &self.start {
            cfg.schedule.start.clone_from(start);
        }
        if let Some(end) = &self.end {
            cfg.schedule.end.clone_from(end);
        }
        if let Some(days) = &self.days {
            cfg.schedule.days.clone_from(days);
        }
        if let Some(base_kw) = self.base_kw {
            cfg.load.base_kw = base_kw;
        }
        if let Some(peak_kw) = self.peak_kw {
            cfg.load.peak_kw = peak_kw;
        }
        if let Some(random_pct) = self.random_pct {
            cfg.noise.random_pct = random_pct;
        }
        if let Some(seed) = self.seed {
            cfg.noise.seed = seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("load-model").chain(args.iter().copied()))
    }

    #[test]
    fn supports_config_cli() {
        let cli = parse(&["--config", "plant.toml"]).expect("parse should succeed");
        assert_eq!(
            cli.config.as_deref().and_then(|p| p.to_str()),
            Some("plant.toml")
        );
        assert!(cli.preset.is_none());
    }

    #[test]
    fn config_and_preset_are_exclusive() {
        assert!(parse(&["--config", "a.toml", "--preset", "office"]).is_err());
    }

    #[test]
    fn days_split_on_commas() {
        let cli = parse(&["--days", "Mon,Wed,Fri"]).unwrap();
        assert_eq!(
            cli.days,
            Some(vec!["Mon".to_string(), "Wed".to_string(), "Fri".to_string()])
        );
    }

    #[test]
    fn export_choice_formats() {
        let cli = parse(&["--export", "both"]).unwrap();
        assert_eq!(
            cli.export.map(ExportChoice::formats),
            Some(&[ExportFormat::Csv, ExportFormat::Xlsx][..])
        );
    }

    #[test]
    fn overrides_replace_config_fields() {
        let cli = parse(&[
            "--year", "2024", "--month", "2", "--start", "09:00", "--end", "17:00", "--base-kw",
            "10", "--peak-kw", "20", "--random-pct", "0", "--seed", "5",
        ])
        .unwrap();
        let mut cfg = ProfileConfig::office();
        cli.apply_overrides(&mut cfg);
        assert_eq!(cfg.calendar.year, 2024);
        assert_eq!(cfg.calendar.month, 2);
        assert_eq!(cfg.schedule.start, "09:00");
        assert_eq!(cfg.schedule.end, "17:00");
        assert_eq!(cfg.load.base_kw, 10.0);
        assert_eq!(cfg.load.peak_kw, 20.0);
        assert_eq!(cfg.noise.random_pct, 0.0);
        assert_eq!(cfg.noise.seed, 5);
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-vv"]).unwrap().verbose, 2);
        assert_eq!(parse(&[]).unwrap().preview, 168);
    }
}
