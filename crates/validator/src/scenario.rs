//! Boundary and exception scenarios.
//!
//! Each [`Scenario`] varies the three inputs that drive attack (level, base
//! attack, attack growth) and optionally attaches one effect. Everything else
//! comes from a fixed fixture so that only the varied inputs can change the
//! outcome.

use attr_core::{Character, CharacterFields, Effect, FieldError, GrowthCurve, MAX_LEVEL, NumericField};
use serde::Serialize;

/// Name of every scenario character.
pub const FIXTURE_NAME: &str = "test character";
/// Base defense of every scenario character.
pub const FIXTURE_BASE_DEFENSE: i32 = 5;
/// Max health of every scenario character.
pub const FIXTURE_MAX_HEALTH: i32 = 100;

/// One named boundary or exception case.
///
/// Inputs stay loosely typed so that non-numeric literals can be expressed and
/// fail during construction, exactly as bad table data would.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    #[serde(skip)]
    pub description: String,
    pub level: NumericField,
    pub base_attack: NumericField,
    pub attack_growth: NumericField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

impl Scenario {
    pub fn new(
        description: impl Into<String>,
        level: impl Into<NumericField>,
        base_attack: impl Into<NumericField>,
        attack_growth: impl Into<NumericField>,
    ) -> Self {
        Self {
            description: description.into(),
            level: level.into(),
            base_attack: base_attack.into(),
            attack_growth: attack_growth.into(),
            effect: None,
        }
    }

    /// Attach an extra effect (builder pattern)
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// The fixed battery, in run order.
    pub fn catalog() -> Vec<Scenario> {
        vec![
            // Boundaries
            Scenario::new("level=0", 0, 10, 2),
            Scenario::new(format!("level=MAX_LEVEL({MAX_LEVEL})"), MAX_LEVEL, 10, 2),
            Scenario::new("base_attack=0", 10, 0, 2),
            Scenario::new("negative growth", 10, 10, -10),
            Scenario::new("extreme bonus", 10, 10, 2)
                .with_effect(Effect::new("extreme bonus").with_attack_percent(200.0)),
            // Exceptions
            Scenario::new("negative level", -1, 10, 2),
            Scenario::new("non-numeric level (\"abc\")", "abc", 10, 2),
        ]
    }

    /// Construct the scenario character, coercing the loosely-typed inputs.
    pub fn build_character(&self, curve: GrowthCurve) -> Result<Character, FieldError> {
        let fields = CharacterFields {
            name: FIXTURE_NAME.to_string(),
            level: self.level.clone(),
            base_attack: self.base_attack.clone(),
            base_defense: FIXTURE_BASE_DEFENSE.into(),
            max_health: FIXTURE_MAX_HEALTH.into(),
            attack_growth: Some(self.attack_growth.clone()),
            defense_growth: None,
            health_growth: None,
        };

        let mut character = Character::from_fields(&fields)?.with_growth_curve(curve);
        if let Some(effect) = &self.effect {
            character.apply_effect(effect.clone());
        }
        Ok(character)
    }

    /// Inputs as compact JSON, for reports and logs.
    pub fn input_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}
