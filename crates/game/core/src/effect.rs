//! Percentage-based effects that modify a character's attributes.

use crate::attribute::Attribute;

/// Default duration, in rounds, of a newly created effect.
pub const DEFAULT_DURATION: u32 = 1;

/// A named buff or debuff expressed as signed percentages per attribute.
///
/// Effects are value objects: built once with the `with_*` methods, then moved
/// into the [`crate::Character`] they apply to. Names are labels only and need
/// not be unique.
///
/// `duration` is carried for content authors but does not take part in any
/// calculation.
///
/// # Example
/// ```
/// # use attr_core::Effect;
/// let rage = Effect::new("rage")
///     .with_attack_percent(25.0)
///     .with_defense_percent(-10.0);
/// assert_eq!(rage.attack_bonus_percent(), 25.0);
/// assert_eq!(rage.health_bonus_percent(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    name: String,
    attack_bonus_percent: f64,
    defense_bonus_percent: f64,
    health_bonus_percent: f64,
    duration: u32,
}

impl Effect {
    /// Create an effect with no bonuses and the default duration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attack_bonus_percent: 0.0,
            defense_bonus_percent: 0.0,
            health_bonus_percent: 0.0,
            duration: DEFAULT_DURATION,
        }
    }

    /// Set the attack bonus (20.0 = +20%)
    #[must_use]
    pub fn with_attack_percent(mut self, percent: f64) -> Self {
        self.attack_bonus_percent = percent;
        self
    }

    /// Set the defense bonus (20.0 = +20%)
    #[must_use]
    pub fn with_defense_percent(mut self, percent: f64) -> Self {
        self.defense_bonus_percent = percent;
        self
    }

    /// Set the health bonus (20.0 = +20%)
    #[must_use]
    pub fn with_health_percent(mut self, percent: f64) -> Self {
        self.health_bonus_percent = percent;
        self
    }

    /// Set the bonus for a single attribute
    #[must_use]
    pub fn with_percent(self, attribute: Attribute, percent: f64) -> Self {
        match attribute {
            Attribute::Attack => self.with_attack_percent(percent),
            Attribute::Defense => self.with_defense_percent(percent),
            Attribute::Health => self.with_health_percent(percent),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack_bonus_percent(&self) -> f64 {
        self.attack_bonus_percent
    }

    pub fn defense_bonus_percent(&self) -> f64 {
        self.defense_bonus_percent
    }

    pub fn health_bonus_percent(&self) -> f64 {
        self.health_bonus_percent
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Bonus percentage this effect grants to `attribute`.
    pub fn bonus_percent(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Attack => self.attack_bonus_percent,
            Attribute::Defense => self.defense_bonus_percent,
            Attribute::Health => self.health_bonus_percent,
        }
    }

    /// True when every bonus is zero.
    pub fn is_neutral(&self) -> bool {
        self.attack_bonus_percent == 0.0
            && self.defense_bonus_percent == 0.0
            && self.health_bonus_percent == 0.0
    }
}
