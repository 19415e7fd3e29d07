//! Validator configuration.
use std::env;

use attr_core::GrowthCurve;

/// Default tolerance for consistency comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Settings shared by every scenario and check in a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatorConfig {
    /// Level scaling convention used for every character the validator builds.
    pub growth_curve: GrowthCurve,
    /// Absolute tolerance for consistency comparisons.
    pub tolerance: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            growth_curve: GrowthCurve::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ValidatorConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ATTRCALC_GROWTH_CURVE` - `linear` or `from-first-level` (default: linear)
    /// - `ATTRCALC_TOLERANCE` - Consistency tolerance (default: 1e-6)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(curve) = read_env::<GrowthCurve>("ATTRCALC_GROWTH_CURVE") {
            config.growth_curve = curve;
        }

        if let Some(tolerance) = read_env::<f64>("ATTRCALC_TOLERANCE") {
            if tolerance.is_finite() && tolerance > 0.0 {
                config.tolerance = tolerance;
            }
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
