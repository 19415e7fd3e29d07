//! Combat attribute identifiers.

/// One of the three derived combat attributes.
///
/// Used wherever a value must be looked up per attribute: bonus totals,
/// computed results, and the loader's bonus-column mapping.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Attack,
    Defense,
    Health,
}
