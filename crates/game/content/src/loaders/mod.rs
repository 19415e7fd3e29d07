//! Content loaders for reading character data from files.
//!
//! Loaders turn tabular files into [`attr_core::Character`] values. File-level
//! problems are errors; row-level problems are collected and reported.

pub mod characters;

pub use characters::{
    BONUS_EFFECT_NAME, CharacterLoader, LoadReport, LoaderConfig, RowError, RowFailure,
};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;
