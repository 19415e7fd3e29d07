//! Deterministic attribute calculation for game characters.
//!
//! `attr-core` defines the data model ([`Character`], [`Effect`]) and the pure
//! function that derives final attack, defense and health from base stats,
//! per-level growth and stacked percentage effects. It performs no I/O;
//! loaders, validators and binaries depend on the types re-exported here.
//!
//! # Architecture
//!
//! ```text
//! [ NumericField ] --coerce--> [ Character ] --apply_effect--> [ Effect* ]
//!                                    │
//!                 GrowthCurve ──> raw_attributes
//!                 BonusTotals ──> calculate_final_attributes ──> FinalAttributes
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: calculation borrows immutably, no side effects
//! 2. **Deterministic**: identical inputs give identical outputs
//! 3. **Linear stacking**: effect percentages are summed, then applied once
//! 4. **No clamping**: reasonableness is checked by callers
pub mod attribute;
pub mod bonus;
pub mod character;
pub mod effect;
pub mod error;
pub mod field;
pub mod growth;

pub use attribute::Attribute;
pub use bonus::BonusTotals;
pub use character::{
    Character, CharacterFields, FinalAttributes, MAX_LEVEL, calculate_final_attributes,
};
pub use effect::Effect;
pub use error::FieldError;
pub use field::NumericField;
pub use growth::GrowthCurve;
