//! Characters and the final-attribute calculation.
//!
//! A [`Character`] owns its base stats, per-level growth and the ordered list
//! of [`Effect`]s applied to it. [`Character::calculate_final_attributes`] is
//! the whole formula:
//!
//! ```text
//! raw   = base + level_factor × growth          (per GrowthCurve)
//! bonus = Σ effect.bonus_percent                (per attribute)
//! final = raw × (1 + bonus / 100)
//! ```
//!
//! Calculation borrows the character immutably, performs no coercion and never
//! clamps. Validating whether the result is reasonable is the caller's job.

use core::fmt;

use crate::attribute::Attribute;
use crate::bonus::BonusTotals;
use crate::effect::Effect;
use crate::error::FieldError;
use crate::field::NumericField;
use crate::growth::GrowthCurve;

/// Highest level content is expected to use. Not enforced.
pub const MAX_LEVEL: i32 = 100;

/// A game character's base stats, growth and active effects.
///
/// Effects can only be appended ([`Character::apply_effect`]) or removed all at
/// once ([`Character::clear_effects`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub level: i32,
    pub base_attack: f64,
    pub base_defense: f64,
    pub max_health: f64,
    pub attack_growth: f64,
    pub defense_growth: f64,
    pub health_growth: f64,
    pub growth_curve: GrowthCurve,
    effects: Vec<Effect>,
}

impl Character {
    /// Create a character with zero growth, no effects and the default curve.
    pub fn new(
        name: impl Into<String>,
        level: i32,
        base_attack: f64,
        base_defense: f64,
        max_health: f64,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            base_attack,
            base_defense,
            max_health,
            attack_growth: 0.0,
            defense_growth: 0.0,
            health_growth: 0.0,
            growth_curve: GrowthCurve::default(),
            effects: Vec::new(),
        }
    }

    /// Set per-level growth (builder pattern)
    #[must_use]
    pub fn with_growth(mut self, attack: f64, defense: f64, health: f64) -> Self {
        self.attack_growth = attack;
        self.defense_growth = defense;
        self.health_growth = health;
        self
    }

    /// Set the level scaling convention (builder pattern)
    #[must_use]
    pub fn with_growth_curve(mut self, curve: GrowthCurve) -> Self {
        self.growth_curve = curve;
        self
    }

    /// Build a character from loosely-typed fields, coercing each one.
    ///
    /// Fields are coerced in declaration order and the first failure is
    /// returned, so a bad level is reported before a bad stat.
    pub fn from_fields(fields: &CharacterFields) -> Result<Self, FieldError> {
        let level = fields.level.to_level("level")?;
        let base_attack = fields.base_attack.to_real("base_attack")?;
        let base_defense = fields.base_defense.to_real("base_defense")?;
        let max_health = fields.max_health.to_real("max_health")?;
        let attack_growth = optional_real(&fields.attack_growth, "attack_growth")?;
        let defense_growth = optional_real(&fields.defense_growth, "defense_growth")?;
        let health_growth = optional_real(&fields.health_growth, "health_growth")?;

        Ok(Self::new(
            fields.name.clone(),
            level,
            base_attack,
            base_defense,
            max_health,
        )
        .with_growth(attack_growth, defense_growth, health_growth))
    }

    /// Append an effect. Effects stack, duplicates included.
    pub fn apply_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Remove every effect.
    pub fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Active effects in the order they were applied.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Base stats plus level growth, before any effect is applied.
    pub fn raw_attributes(&self) -> FinalAttributes {
        let curve = self.growth_curve;
        FinalAttributes {
            final_attack: curve.raw_value(self.base_attack, self.attack_growth, self.level),
            final_defense: curve.raw_value(self.base_defense, self.defense_growth, self.level),
            final_health: curve.raw_value(self.max_health, self.health_growth, self.level),
        }
    }

    /// Summed effect percentages per attribute.
    pub fn bonus_totals(&self) -> BonusTotals {
        BonusTotals::from_effects(&self.effects)
    }

    /// Compute final attack, defense and health.
    pub fn calculate_final_attributes(&self) -> FinalAttributes {
        let raw = self.raw_attributes();
        let totals = self.bonus_totals();

        FinalAttributes {
            final_attack: totals.apply(Attribute::Attack, raw.final_attack),
            final_defense: totals.apply(Attribute::Defense, raw.final_defense),
            final_health: totals.apply(Attribute::Health, raw.final_health),
        }
    }
}

fn optional_real(field: &Option<NumericField>, name: &'static str) -> Result<f64, FieldError> {
    field.as_ref().map_or(Ok(0.0), |value| value.to_real(name))
}

/// Compute final attributes for `character`.
///
/// Equivalent to [`Character::calculate_final_attributes`].
pub fn calculate_final_attributes(character: &Character) -> FinalAttributes {
    character.calculate_final_attributes()
}

/// Loosely-typed constructor arguments for a [`Character`].
///
/// Growth fields are optional and default to zero when absent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterFields {
    pub name: String,
    pub level: NumericField,
    pub base_attack: NumericField,
    pub base_defense: NumericField,
    pub max_health: NumericField,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub attack_growth: Option<NumericField>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub defense_growth: Option<NumericField>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub health_growth: Option<NumericField>,
}

/// Result of the attribute calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalAttributes {
    pub final_attack: f64,
    pub final_defense: f64,
    pub final_health: f64,
}

impl FinalAttributes {
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Attack => self.final_attack,
            Attribute::Defense => self.final_defense,
            Attribute::Health => self.final_health,
        }
    }
}

impl fmt::Display for FinalAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attack {:.2}, defense {:.2}, health {:.2}",
            self.final_attack, self.final_defense, self.final_health
        )
    }
}
