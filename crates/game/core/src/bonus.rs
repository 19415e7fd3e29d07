//! Additive percentage stacking.
//!
//! Effects stack linearly: every effect's percentage for an attribute is
//! summed first, and the sum is applied once as a single multiplier.
//!
//! ```text
//! final = raw × (1 + Σ bonus_percent / 100)
//! ```
//!
//! Two +10% effects therefore give +20% (×1.2), not ×1.1×1.1, and a +10% and a
//! -10% effect cancel to ×1.0. Nothing is clamped: a total below -100% yields
//! a negative result.

use crate::attribute::Attribute;
use crate::effect::Effect;

/// Per-attribute sums of effect percentages.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusTotals {
    pub attack_percent: f64,
    pub defense_percent: f64,
    pub health_percent: f64,
}

impl BonusTotals {
    /// Create empty totals (no effects)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum the bonuses of every effect, independently per attribute.
    pub fn from_effects<'a>(effects: impl IntoIterator<Item = &'a Effect>) -> Self {
        effects.into_iter().fold(Self::new(), |mut totals, effect| {
            totals.add(effect);
            totals
        })
    }

    /// Add one effect's bonuses to the running totals.
    pub fn add(&mut self, effect: &Effect) {
        self.attack_percent += effect.attack_bonus_percent();
        self.defense_percent += effect.defense_bonus_percent();
        self.health_percent += effect.health_bonus_percent();
    }

    /// Summed percentage for `attribute`.
    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Attack => self.attack_percent,
            Attribute::Defense => self.defense_percent,
            Attribute::Health => self.health_percent,
        }
    }

    /// Combined multiplier for `attribute`: `1 + total / 100`.
    pub fn multiplier(&self, attribute: Attribute) -> f64 {
        1.0 + self.get(attribute) / 100.0
    }

    /// Apply the combined multiplier for `attribute` to a raw value.
    pub fn apply(&self, attribute: Attribute, raw: f64) -> f64 {
        raw * self.multiplier(attribute)
    }
}
