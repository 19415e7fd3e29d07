//! Data-driven character definitions and loaders.
//!
//! This crate turns tabular character data into `attr-core` types:
//! - Column layout and declared bonus-column mapping (always available)
//! - CSV character loader (`loaders` feature, on by default)
//!
//! Content is consumed by the validator and the CLI and never feeds back into
//! the calculation itself.

pub mod columns;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use columns::{BonusColumn, BonusColumns, ColumnLayout, GROWTH_COLUMNS, REQUIRED_COLUMNS};

#[cfg(feature = "loaders")]
pub use loaders::{
    BONUS_EFFECT_NAME, CharacterLoader, LoadReport, LoadResult, LoaderConfig, RowError,
    RowFailure,
};
