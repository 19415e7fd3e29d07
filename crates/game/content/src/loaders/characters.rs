//! Character table loader.
//!
//! Loads characters from CSV with one header row. A row that cannot be turned
//! into a [`Character`] is logged and recorded in [`LoadReport::failures`];
//! the remaining rows still load.
//!
//! # Format
//!
//! ```text
//! name,level,base_attack,base_defense,max_health,attack_growth,defense_growth,health_growth,attack_bonus
//! Knight,10,12,8,120,2,1.5,10,15
//! Archer,8,15,4,80,3,0.5,6,
//! ```
//!
//! Growth columns are optional. Declared bonus columns (see
//! [`crate::BonusColumns`]) become one synthetic effect per row when any of
//! them carries a non-zero value.

use std::fs::File;
use std::io;
use std::path::Path;

use attr_core::{Attribute, Character, CharacterFields, Effect, FieldError, GrowthCurve, NumericField};
use csv::StringRecord;

use crate::columns::{BonusColumns, ColumnLayout};
use crate::loaders::LoadResult;

/// Name given to the effect synthesized from bonus columns.
pub const BONUS_EFFECT_NAME: &str = "csv bonus";

/// Loader settings.
#[derive(Clone, Debug, Default)]
pub struct LoaderConfig {
    /// Declared bonus columns, resolved once per file.
    pub bonus_columns: BonusColumns,
    /// Curve assigned to every loaded character.
    pub growth_curve: GrowthCurve,
}

/// Why a single row was skipped.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("malformed record: {0}")]
    Malformed(#[from] csv::Error),
}

/// A skipped row and its 1-based line number in the source.
#[derive(Debug)]
pub struct RowFailure {
    pub line: u64,
    pub error: RowError,
}

/// Outcome of loading one table.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub characters: Vec<Character>,
    pub failures: Vec<RowFailure>,
}

impl LoadReport {
    /// Data rows seen, loaded or not.
    pub fn rows_read(&self) -> usize {
        self.characters.len() + self.failures.len()
    }
}

/// Loader for character tables in CSV form.
#[derive(Clone, Debug, Default)]
pub struct CharacterLoader {
    config: LoaderConfig,
}

impl CharacterLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load characters from a CSV file.
    ///
    /// # Errors
    ///
    /// Fails only when the file cannot be opened or its header row cannot be
    /// read. Bad data rows are reported in the returned [`LoadReport`].
    pub fn load_path(&self, path: &Path) -> LoadResult<LoadReport> {
        let file = File::open(path).map_err(|e| {
            anyhow::anyhow!("Failed to open character table {}: {}", path.display(), e)
        })?;
        tracing::debug!(path = %path.display(), "loading character table");
        self.load_reader(file)
    }

    /// Load characters from any CSV source.
    pub fn load_reader<R: io::Read>(&self, source: R) -> LoadResult<LoadReport> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| anyhow::anyhow!("Failed to read character table header: {}", e))?
            .clone();
        let header_names: Vec<&str> = headers.iter().collect();
        let layout = ColumnLayout::resolve(&header_names, &self.config.bonus_columns);

        let missing = layout.missing_required();
        if !missing.is_empty() {
            tracing::warn!(?missing, "character table is missing required columns");
        }

        let mut report = LoadReport::default();
        for (index, result) in reader.records().enumerate() {
            // Header occupies line 1
            let fallback_line = index as u64 + 2;

            let (line, outcome, raw) = match result {
                Ok(record) => {
                    let line = record.position().map_or(fallback_line, |p| p.line());
                    let raw = record.iter().collect::<Vec<_>>().join(",");
                    (line, self.parse_row(&record, &layout), raw)
                }
                Err(e) => {
                    let line = e.position().map_or(fallback_line, |p| p.line());
                    (line, Err(RowError::from(e)), String::new())
                }
            };

            match outcome {
                Ok(character) => report.characters.push(character),
                Err(error) => {
                    tracing::error!(line, row = %raw, %error, "failed to load character");
                    report.failures.push(RowFailure { line, error });
                }
            }
        }

        tracing::info!(
            loaded = report.characters.len(),
            failed = report.failures.len(),
            "character table loaded"
        );
        Ok(report)
    }

    fn parse_row(&self, record: &StringRecord, layout: &ColumnLayout) -> Result<Character, RowError> {
        let fields = CharacterFields {
            name: required(record, layout.name, "name")?.to_string(),
            level: required(record, layout.level, "level")?.into(),
            base_attack: required(record, layout.base_attack, "base_attack")?.into(),
            base_defense: required(record, layout.base_defense, "base_defense")?.into(),
            max_health: required(record, layout.max_health, "max_health")?.into(),
            attack_growth: optional(record, layout.attack_growth, "attack_growth")?,
            defense_growth: optional(record, layout.defense_growth, "defense_growth")?,
            health_growth: optional(record, layout.health_growth, "health_growth")?,
        };

        let mut character =
            Character::from_fields(&fields)?.with_growth_curve(self.config.growth_curve);
        if let Some(effect) = bonus_effect(record, layout) {
            character.apply_effect(effect);
        }
        Ok(character)
    }
}

fn required<'r>(
    record: &'r StringRecord,
    index: Option<usize>,
    field: &'static str,
) -> Result<&'r str, RowError> {
    index
        .and_then(|i| record.get(i))
        .ok_or(RowError::MissingField(field))
}

/// Absent column: no value. Present column but short row: missing field.
fn optional(
    record: &StringRecord,
    index: Option<usize>,
    field: &'static str,
) -> Result<Option<NumericField>, RowError> {
    match index {
        None => Ok(None),
        Some(i) => record
            .get(i)
            .map(|cell| Some(NumericField::from(cell)))
            .ok_or(RowError::MissingField(field)),
    }
}

/// Build the synthetic bonus effect for a row.
///
/// Per attribute, the first declared column holding a parseable number wins.
/// Unparseable or empty cells are ignored rather than failing the row.
fn bonus_effect(record: &StringRecord, layout: &ColumnLayout) -> Option<Effect> {
    let mut effect = Effect::new(BONUS_EFFECT_NAME);
    let mut resolved: Vec<Attribute> = Vec::with_capacity(3);

    for (index, attribute) in &layout.bonuses {
        if resolved.contains(attribute) {
            continue;
        }
        let Some(percent) = record
            .get(*index)
            .and_then(|cell| cell.trim().parse::<f64>().ok())
        else {
            continue;
        };
        effect = effect.with_percent(*attribute, percent);
        resolved.push(*attribute);
    }

    (!effect.is_neutral()).then_some(effect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> LoadReport {
        CharacterLoader::default()
            .load_reader(csv.as_bytes())
            .expect("header should parse")
    }

    #[test]
    fn loads_rows_with_defaults_for_missing_growth() {
        let report = load(
            "name,level,base_attack,base_defense,max_health\n\
             Knight,10,12,8,120\n",
        );

        assert!(report.failures.is_empty());
        let knight = &report.characters[0];
        assert_eq!(knight.name, "Knight");
        assert_eq!(knight.level, 10);
        assert_eq!(knight.attack_growth, 0.0);
        assert!(knight.effects().is_empty());
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let report = load(
            "name,level,base_attack,base_defense,max_health,attack_growth\n\
             Good,5,10,5,100,2\n\
             BadLevel,abc,10,5,100,2\n\
             BadGrowth,5,10,5,100,fast\n\
             AlsoGood,6,11,5,100,1\n",
        );

        assert_eq!(report.rows_read(), 4);
        let names: Vec<_> = report.characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Good", "AlsoGood"]);

        assert_eq!(report.failures[0].line, 3);
        assert!(matches!(
            &report.failures[0].error,
            RowError::Field(FieldError::NotNumeric { field: "level", .. })
        ));
        assert_eq!(report.failures[1].line, 4);
    }

    #[test]
    fn short_rows_report_missing_field() {
        let report = load(
            "name,level,base_attack,base_defense,max_health\n\
             Stub,3,10\n",
        );

        assert!(matches!(
            report.failures[0].error,
            RowError::MissingField("base_defense")
        ));
    }

    #[test]
    fn bonus_columns_become_one_effect() {
        let report = load(
            "name,level,base_attack,base_defense,max_health,attack_bonus,health_bonus\n\
             Berserker,10,10,5,100,50,-10\n\
             Plain,10,10,5,100,0,\n",
        );

        let berserker = &report.characters[0];
        assert_eq!(berserker.effects().len(), 1);
        let effect = &berserker.effects()[0];
        assert_eq!(effect.name(), BONUS_EFFECT_NAME);
        assert_eq!(effect.attack_bonus_percent(), 50.0);
        assert_eq!(effect.health_bonus_percent(), -10.0);
        assert_eq!(effect.defense_bonus_percent(), 0.0);

        // All-zero or empty bonus cells attach nothing
        assert!(report.characters[1].effects().is_empty());
    }

    #[test]
    fn first_parseable_declared_column_wins() {
        let loader = CharacterLoader::new(LoaderConfig {
            bonus_columns: BonusColumns::none()
                .with("attack_bonus_primary", Attribute::Attack)
                .with("attack_bonus_fallback", Attribute::Attack),
            ..LoaderConfig::default()
        });
        let report = loader
            .load_reader(
                "name,level,base_attack,base_defense,max_health,attack_bonus_primary,attack_bonus_fallback\n\
                 A,1,10,5,100,n/a,30\n\
                 B,1,10,5,100,20,30\n"
                    .as_bytes(),
            )
            .unwrap();

        assert_eq!(report.characters[0].effects()[0].attack_bonus_percent(), 30.0);
        assert_eq!(report.characters[1].effects()[0].attack_bonus_percent(), 20.0);
    }

    #[test]
    fn loaded_characters_use_configured_curve() {
        let loader = CharacterLoader::new(LoaderConfig {
            growth_curve: GrowthCurve::FromFirstLevel,
            ..LoaderConfig::default()
        });
        let report = loader
            .load_reader("name,level,base_attack,base_defense,max_health,attack_growth\nA,10,10,5,100,2\n".as_bytes())
            .unwrap();

        assert_eq!(report.characters[0].calculate_final_attributes().final_attack, 28.0);
    }
}
