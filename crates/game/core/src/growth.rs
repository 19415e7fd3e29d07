//! Level scaling conventions.
//!
//! Raw attributes grow linearly with level:
//!
//! ```text
//! raw = base + level_factor × growth
//! ```
//!
//! Two conventions for `level_factor` exist in content authored for this
//! calculator, and they disagree by exactly one growth step:
//!
//! | curve            | level_factor | level 10, base 10, growth 2 |
//! |------------------|--------------|-----------------------------|
//! | `Linear`         | `level`      | 30                          |
//! | `FromFirstLevel` | `level - 1`  | 28                          |
//!
//! `Linear` is the default. `FromFirstLevel` treats the base stats as the
//! level-1 values. Neither curve clamps the level, so level 0 and negative
//! levels scale the growth term accordingly.

/// Selects how a character's level scales its per-level growth.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GrowthCurve {
    /// `level_factor = level`
    #[default]
    Linear,
    /// `level_factor = level - 1`
    FromFirstLevel,
}

impl GrowthCurve {
    /// Multiplier applied to per-level growth at `level`.
    pub fn level_factor(self, level: i32) -> f64 {
        match self {
            Self::Linear => f64::from(level),
            Self::FromFirstLevel => f64::from(level) - 1.0,
        }
    }

    /// `base + level_factor × growth`
    pub fn raw_value(self, base: f64, growth: f64, level: i32) -> f64 {
        base + self.level_factor(level) * growth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_differ_by_one_level() {
        assert_eq!(GrowthCurve::Linear.level_factor(10), 10.0);
        assert_eq!(GrowthCurve::FromFirstLevel.level_factor(10), 9.0);
        assert_eq!(GrowthCurve::FromFirstLevel.level_factor(1), 0.0);
    }

    #[test]
    fn raw_value_matches_table() {
        assert_eq!(GrowthCurve::Linear.raw_value(10.0, 2.0, 10), 30.0);
        assert_eq!(GrowthCurve::FromFirstLevel.raw_value(10.0, 2.0, 10), 28.0);
    }

    #[test]
    fn negative_levels_are_not_clamped() {
        assert_eq!(GrowthCurve::Linear.raw_value(10.0, 2.0, -1), 8.0);
        assert_eq!(GrowthCurve::FromFirstLevel.raw_value(10.0, 2.0, -1), 6.0);
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("linear".parse::<GrowthCurve>().unwrap(), GrowthCurve::Linear);
        assert_eq!(
            "from-first-level".parse::<GrowthCurve>().unwrap(),
            GrowthCurve::FromFirstLevel
        );
        assert_eq!(GrowthCurve::FromFirstLevel.to_string(), "from-first-level");
    }
}
