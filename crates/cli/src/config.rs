//! Runtime configuration for the `attrcalc` binary.
use std::env;
use std::path::PathBuf;

use attr_core::GrowthCurve;
use attr_validator::ValidatorConfig;

use crate::Args;

pub const DEFAULT_REPORT_PATH: &str = "test_report.csv";
pub const DEFAULT_LOG_FILE: &str = "test_report.log";

/// Everything one invocation needs, after env and arguments are merged.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub validator: ValidatorConfig,
    pub report_path: PathBuf,
    pub log_file: PathBuf,
    pub csv_path: Option<PathBuf>,
    pub show: bool,
    pub quiet: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            validator: ValidatorConfig::default(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            csv_path: None,
            show: false,
            quiet: false,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ATTRCALC_GROWTH_CURVE` / `ATTRCALC_TOLERANCE` - see [`ValidatorConfig::from_env`]
    /// - `ATTRCALC_REPORT` - Scenario report path (default: test_report.csv)
    /// - `ATTRCALC_LOG_FILE` - Log file path (default: test_report.log)
    /// - `ATTRCALC_QUIET` - Disable console logging (default: false)
    pub fn from_env() -> Self {
        let mut config = Self {
            validator: ValidatorConfig::from_env(),
            ..Self::default()
        };

        if let Some(path) = read_env::<PathBuf>("ATTRCALC_REPORT") {
            config.report_path = path;
        }

        if let Some(path) = read_env::<PathBuf>("ATTRCALC_LOG_FILE") {
            config.log_file = path;
        }

        if let Some(quiet) = read_env::<bool>("ATTRCALC_QUIET") {
            config.quiet = quiet;
        }

        config
    }

    /// Apply command-line arguments on top of the environment.
    #[must_use]
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(curve) = args.growth_curve {
            self.validator.growth_curve = curve;
        }
        if let Some(path) = &args.report {
            self.report_path = path.clone();
        }
        if let Some(path) = &args.log_file {
            self.log_file = path.clone();
        }
        self.csv_path = args.csv.clone();
        self.show = args.show;
        self.quiet |= args.quiet;
        self
    }

    pub fn growth_curve(&self) -> GrowthCurve {
        self.validator.growth_curve
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
