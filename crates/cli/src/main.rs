//! `attrcalc`: runs the attribute scenario battery and, optionally, computes
//! attributes for characters loaded from a CSV table.
mod config;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use attr_content::{CharacterLoader, LoaderConfig};
use attr_core::{Character, GrowthCurve};
use attr_validator::{CsvReportSink, ScenarioRecord, ValidationRun, Validator};
use clap::Parser;

use config::CliConfig;

/// Attribute calculator test runner
#[derive(Parser, Debug)]
#[command(name = "attrcalc")]
#[command(about = "Character attribute calculator with scenario validation", long_about = None)]
#[command(version)]
pub struct Args {
    /// Character table to load after the scenario battery
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Print computed attributes for every loaded character
    #[arg(long)]
    pub show: bool,

    /// Scenario report path [default: test_report.csv]
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Log file path [default: test_report.log]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Level scaling convention: linear or from-first-level
    #[arg(long, value_name = "CURVE")]
    pub growth_curve: Option<GrowthCurve>,

    /// Do not echo log events to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = CliConfig::from_env().with_args(&args);

    let logging = logging::setup_logging(&config.log_file, config.quiet);
    tracing::dispatcher::with_default(&logging.dispatch, || run(&config))
}

fn run(config: &CliConfig) -> Result<()> {
    tracing::info!(
        growth_curve = %config.growth_curve(),
        report = %config.report_path.display(),
        "starting attribute calculator tests"
    );
    println!("--- attribute calculator tests ---");

    let validator = Validator::new(config.validator);
    let run = run_validator(&validator, &config.report_path);
    print_run(&run, &config.report_path);

    if let Some(path) = &config.csv_path {
        show_characters(path, config);
    }

    println!("all tests finished");
    Ok(())
}

/// Run the battery against the report file, or an in-memory sink when the
/// file cannot be created.
fn run_validator(validator: &Validator, report_path: &Path) -> ValidationRun {
    match CsvReportSink::create(report_path) {
        Ok(mut sink) => validator.run(&mut sink),
        Err(error) => {
            tracing::error!(path = %report_path.display(), %error, "cannot create report file");
            let mut fallback: Vec<ScenarioRecord> = Vec::new();
            let mut run = validator.run(&mut fallback);
            run.report_error = Some(error);
            run
        }
    }
}

fn print_run(run: &ValidationRun, report_path: &Path) {
    let summary = run.summary();
    println!(
        "scenarios: {} passed, {} failed, {} errored",
        summary.passed, summary.failed, summary.errored
    );
    match &run.report_error {
        None => println!("report written to {}", report_path.display()),
        Some(error) => println!("report not written: {error}"),
    }

    for check in &run.consistency {
        println!(
            "consistency {}: expected {:.2}, actual {:.2} ({})",
            check.name,
            check.expected,
            check.actual,
            check.status()
        );
    }
}

fn show_characters(path: &Path, config: &CliConfig) {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "CSV file not found");
        println!("CSV file not found: {}", path.display());
        return;
    }

    let loader = CharacterLoader::new(LoaderConfig {
        growth_curve: config.growth_curve(),
        ..LoaderConfig::default()
    });

    let report = match loader.load_path(path) {
        Ok(report) => report,
        Err(error) => {
            let message = format!("{error:#}");
            tracing::error!(path = %path.display(), error = %message, "failed to load characters");
            println!("failed to load {}: {message}", path.display());
            return;
        }
    };

    println!(
        "loaded {} characters from {} ({} rows skipped)",
        report.characters.len(),
        path.display(),
        report.failures.len()
    );

    if config.show {
        for character in &report.characters {
            println!("{}", character_line(character));
        }
    }
}

fn character_line(character: &Character) -> String {
    let attrs = character.calculate_final_attributes();
    format!(
        "{} level {} attack {:.2} defense {:.2} health {:.2}",
        character.name, character.level, attrs.final_attack, attrs.final_defense, attrs.final_health
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use attr_core::Effect;

    #[test]
    fn character_line_uses_two_decimals() {
        let mut knight = Character::new("Knight", 10, 12.0, 8.0, 120.0).with_growth(2.0, 1.5, 10.0);
        knight.apply_effect(Effect::new("csv bonus").with_attack_percent(15.0));

        assert_eq!(
            character_line(&knight),
            "Knight level 10 attack 36.80 defense 23.00 health 220.00"
        );
    }

    #[test]
    fn unwritable_report_still_runs_every_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("missing-dir").join("report.csv");

        let run = run_validator(&Validator::default(), &report);

        assert_eq!(run.records.len(), 7);
        assert!(run.report_error.is_some());
    }
}
