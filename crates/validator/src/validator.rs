//! Scenario harness.
//!
//! [`Validator`] runs scenarios and consistency checks against the attribute
//! model and classifies each outcome:
//!
//! - **Pass**: the character was built and its attributes are reasonable
//! - **Fail**: the character was built, but `final_attack >= 0` or
//!   `final_health > 0` does not hold
//! - **Error**: building the character failed; the message is captured
//!
//! Nothing here aborts the batch. Every scenario produces a record and a log
//! line, in run order.

use attr_core::{Character, Effect, FinalAttributes};

use crate::config::ValidatorConfig;
use crate::report::{ReportError, ReportSink, ScenarioRecord, ScenarioStatus};
use crate::scenario::Scenario;

/// Expected behavior of a scenario that builds successfully.
pub const EXPECT_REASONABLE: &str = "final_attack >= 0, final_health > 0";
/// Expected behavior of a scenario whose inputs cannot be coerced.
pub const EXPECT_ERROR: &str = "raises or records an error";

/// Outcome of one consistency check.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsistencyOutcome {
    pub name: &'static str,
    pub expected: f64,
    pub actual: f64,
    pub passed: bool,
}

impl ConsistencyOutcome {
    pub fn status(&self) -> ScenarioStatus {
        if self.passed {
            ScenarioStatus::Pass
        } else {
            ScenarioStatus::Fail
        }
    }
}

/// Pass/fail/error counts over a set of records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn from_records(records: &[ScenarioRecord]) -> Self {
        records.iter().fold(Self::default(), |mut summary, record| {
            match record.status {
                ScenarioStatus::Pass => summary.passed += 1,
                ScenarioStatus::Fail => summary.failed += 1,
                ScenarioStatus::Error => summary.errored += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.errored
    }
}

/// Everything a full run produced.
#[derive(Debug)]
pub struct ValidationRun {
    pub records: Vec<ScenarioRecord>,
    pub consistency: Vec<ConsistencyOutcome>,
    /// Set when the report sink rejected the records. The run still completes.
    pub report_error: Option<ReportError>,
}

impl ValidationRun {
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_records(&self.records)
    }
}

/// Drives the attribute model through scenarios and checks.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run the fixed catalog, hand the records to `sink`, then run the
    /// consistency checks.
    pub fn run(&self, sink: &mut dyn ReportSink) -> ValidationRun {
        let records = self.run_scenarios(&Scenario::catalog());

        let report_error = match sink.write_records(&records) {
            Ok(()) => None,
            Err(error) => {
                tracing::error!(%error, "failed to write scenario report");
                Some(error)
            }
        };

        let consistency = self.run_consistency_checks();

        ValidationRun {
            records,
            consistency,
            report_error,
        }
    }

    /// Run `scenarios` in order, one record each.
    pub fn run_scenarios(&self, scenarios: &[Scenario]) -> Vec<ScenarioRecord> {
        scenarios
            .iter()
            .map(|scenario| self.run_scenario(scenario))
            .collect()
    }

    /// Build, calculate and classify a single scenario.
    pub fn run_scenario(&self, scenario: &Scenario) -> ScenarioRecord {
        let input = scenario.input_json();

        let character = match scenario.build_character(self.config.growth_curve) {
            Ok(character) => character,
            Err(error) => {
                tracing::error!(
                    scenario = %scenario.description,
                    %input,
                    %error,
                    "scenario raised an error"
                );
                return ScenarioRecord {
                    description: scenario.description.clone(),
                    input,
                    expected: EXPECT_ERROR.to_string(),
                    actual: String::new(),
                    status: ScenarioStatus::Error,
                    detail: error.to_string(),
                };
            }
        };

        let attrs = character.calculate_final_attributes();
        let actual = serde_json::to_string(&attrs).unwrap_or_else(|_| attrs.to_string());

        let (status, detail) = match unreasonable(&attrs) {
            None => (ScenarioStatus::Pass, String::new()),
            Some(reason) => (ScenarioStatus::Fail, reason),
        };

        match status {
            ScenarioStatus::Pass => tracing::info!(
                scenario = %scenario.description,
                %input,
                result = %actual,
                %status,
                "scenario finished"
            ),
            _ => tracing::warn!(
                scenario = %scenario.description,
                %input,
                result = %actual,
                %status,
                reason = %detail,
                "scenario finished"
            ),
        }

        ScenarioRecord {
            description: scenario.description.clone(),
            input,
            expected: EXPECT_REASONABLE.to_string(),
            actual,
            status,
            detail,
        }
    }

    /// Check linear stacking and cancellation of attack bonuses.
    ///
    /// One character is reused for both checks and its effects are cleared in
    /// between, so the second check must not see the first check's effects.
    pub fn run_consistency_checks(&self) -> Vec<ConsistencyOutcome> {
        const LEVEL: i32 = 10;
        const BASE_ATTACK: f64 = 10.0;
        const ATTACK_GROWTH: f64 = 2.0;

        let curve = self.config.growth_curve;
        let raw_attack = curve.raw_value(BASE_ATTACK, ATTACK_GROWTH, LEVEL);

        let mut character = Character::new("consistency check", LEVEL, BASE_ATTACK, 5.0, 100.0)
            .with_growth(ATTACK_GROWTH, 0.0, 0.0)
            .with_growth_curve(curve);

        let mut outcomes = Vec::with_capacity(2);

        // Two +10% attack effects stack to +20%
        character.apply_effect(Effect::new("attack +10%").with_attack_percent(10.0));
        character.apply_effect(Effect::new("attack +10%").with_attack_percent(10.0));
        outcomes.push(self.compare("stacking", raw_attack * 1.2, &character));

        // +10% and -10% cancel out
        character.clear_effects();
        character.apply_effect(Effect::new("attack +10%").with_attack_percent(10.0));
        character.apply_effect(Effect::new("attack -10%").with_attack_percent(-10.0));
        outcomes.push(self.compare("cancellation", raw_attack, &character));

        outcomes
    }

    fn compare(&self, name: &'static str, expected: f64, character: &Character) -> ConsistencyOutcome {
        let actual = character.calculate_final_attributes().final_attack;
        let passed = (actual - expected).abs() < self.config.tolerance;

        let outcome = ConsistencyOutcome {
            name,
            expected,
            actual,
            passed,
        };

        if passed {
            tracing::info!(check = name, expected, actual, status = %outcome.status(), "consistency check finished");
        } else {
            tracing::warn!(check = name, expected, actual, status = %outcome.status(), "consistency check finished");
        }

        outcome
    }
}

/// Describe why `attrs` are unreasonable, or `None` when they are fine.
///
/// NaN values fail both comparisons and are therefore unreasonable.
pub fn unreasonable(attrs: &FinalAttributes) -> Option<String> {
    let mut reasons = Vec::new();
    if !(attrs.final_attack >= 0.0) {
        reasons.push(format!("final_attack {:.2} is negative", attrs.final_attack));
    }
    if !(attrs.final_health > 0.0) {
        reasons.push(format!("final_health {:.2} is not positive", attrs.final_health));
    }

    if reasons.is_empty() {
        None
    } else {
        Some(format!("unreasonable attribute values: {}", reasons.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attr_core::GrowthCurve;

    fn attrs(attack: f64, health: f64) -> FinalAttributes {
        FinalAttributes {
            final_attack: attack,
            final_defense: 5.0,
            final_health: health,
        }
    }

    #[test]
    fn zero_attack_is_reasonable_zero_health_is_not() {
        assert_eq!(unreasonable(&attrs(0.0, 1.0)), None);
        assert!(unreasonable(&attrs(0.0, 0.0)).unwrap().contains("final_health"));
        assert!(unreasonable(&attrs(-0.5, 10.0)).unwrap().contains("final_attack"));
        assert!(unreasonable(&attrs(f64::NAN, 10.0)).is_some());
    }

    #[test]
    fn error_record_has_empty_actual() {
        let record = Validator::default().run_scenario(&Scenario::new("bad", "abc", 10, 2));

        assert_eq!(record.status, ScenarioStatus::Error);
        assert_eq!(record.expected, EXPECT_ERROR);
        assert!(record.actual.is_empty());
        assert!(record.detail.contains("abc"));
    }

    #[test]
    fn fail_record_carries_reason() {
        let record = Validator::default().run_scenario(&Scenario::new("negative growth", 10, 10, -10));

        assert_eq!(record.status, ScenarioStatus::Fail);
        assert_eq!(record.expected, EXPECT_REASONABLE);
        assert!(record.actual.contains(r#""final_attack":-90.0"#));
        assert!(record.detail.contains("final_attack -90.00"));
    }

    #[test]
    fn consistency_checks_pass_under_both_curves() {
        for curve in [GrowthCurve::Linear, GrowthCurve::FromFirstLevel] {
            let validator = Validator::new(ValidatorConfig {
                growth_curve: curve,
                ..ValidatorConfig::default()
            });
            let outcomes = validator.run_consistency_checks();

            assert_eq!(outcomes.len(), 2);
            assert!(outcomes.iter().all(|o| o.passed), "{curve}: {outcomes:?}");
        }
    }

    #[test]
    fn consistency_expected_values_follow_curve() {
        let linear = Validator::default().run_consistency_checks();
        assert!((linear[0].expected - 36.0).abs() < 1e-9);
        assert!((linear[1].expected - 30.0).abs() < 1e-9);

        let first_level = Validator::new(ValidatorConfig {
            growth_curve: GrowthCurve::FromFirstLevel,
            ..ValidatorConfig::default()
        })
        .run_consistency_checks();
        assert!((first_level[0].expected - 33.6).abs() < 1e-9);
        assert!((first_level[1].expected - 28.0).abs() < 1e-9);
    }

    #[test]
    fn summary_counts_statuses() {
        let records = Validator::default().run_scenarios(&Scenario::catalog());
        let summary = RunSummary::from_records(&records);

        assert_eq!(summary, RunSummary { passed: 5, failed: 1, errored: 1 });
        assert_eq!(summary.total(), 7);
    }
}
