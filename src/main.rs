//! Load-model entry point: CLI wiring and config-driven generation.

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use load_model::cli::{Cli, ExportChoice};
use load_model::config::ProfileConfig;
use load_model::io::export::export_csv;
use load_model::io::xlsx::export_xlsx;
use load_model::io::{ExportFormat, export_file_name};
use load_model::logging::init_tracing;
use load_model::profile::{CalendarWindow, HourlyLoadRecord, ProfileSummary};

/// Loads the configuration: --config takes priority, then --preset, then the
/// office default. CLI overrides are applied before validation.
fn load_config(cli: &Cli) -> Result<ProfileConfig> {
    let mut cfg = if let Some(path) = &cli.config {
        ProfileConfig::from_toml_file(path)?
    } else if let Some(name) = &cli.preset {
        ProfileConfig::from_preset(name)?
    } else {
        ProfileConfig::office()
    };

    cli.apply_overrides(&mut cfg);

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("{} configuration error(s)", errors.len());
    }
    Ok(cfg)
}

/// Writes the requested export files into `out_dir`.
fn export(
    records: &[HourlyLoadRecord],
    calendar: &CalendarWindow,
    choice: ExportChoice,
    out_dir: &Path,
) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

    for &format in choice.formats() {
        let path = out_dir.join(export_file_name(calendar, format));
        match format {
            ExportFormat::Csv => export_csv(records, &path)
                .with_context(|| format!("failed to write CSV {}", path.display()))?,
            ExportFormat::Xlsx => export_xlsx(records, &path)
                .with_context(|| format!("failed to write spreadsheet {}", path.display()))?,
        }
        info!(path = %path.display(), "exported profile");
        eprintln!("Profile written to {}", path.display());
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui(cli: &Cli, cfg: ProfileConfig) -> Result<()> {
    let label = cli.preset.as_deref().unwrap_or(if cli.config.is_some() {
        "custom"
    } else {
        "office"
    });
    load_model::tui::run(cfg, label).context("terminal chart failed")
}

#[cfg(not(feature = "tui"))]
fn run_tui(_cli: &Cli, _cfg: ProfileConfig) -> Result<()> {
    bail!("this build has no terminal chart; rebuild with `--features tui`")
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = load_config(cli)?;

    if cli.tui {
        return run_tui(cli, cfg);
    }

    let request = cfg.build()?;
    info!(%request, "profile request");
    let records = request.generate()?;
    let summary = ProfileSummary::from_records(&records);

    let shown = &records[..records.len().min(cli.preview)];
    if !shown.is_empty() {
        println!("--- Preview (first {} hours) ---", shown.len());
        for r in shown {
            println!("{r}");
        }
        println!();
    }
    println!("{summary}");

    if let Some(choice) = cli.export {
        export(&records, &request.calendar, choice, &cli.out_dir)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
