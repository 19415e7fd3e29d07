use std::io::Write;

use attr_content::{CharacterLoader, LoaderConfig, RowError};
use attr_core::GrowthCurve;

const TABLE: &str = "\
name,level,base_attack,base_defense,max_health,attack_growth,defense_growth,health_growth,attack_bonus,defense_bonus,health_bonus
Knight,10,12,8,120,2,1.5,10,15,,
Archer,8,15,4,80,3,0.5,6,,,
Broken,ten,15,4,80,3,0.5,6,,,
Cleric,5,6,6,90,1,1,12,,20,25
";

#[test]
fn loads_table_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(TABLE.as_bytes()).expect("write table");

    let report = CharacterLoader::new(LoaderConfig::default())
        .load_path(file.path())
        .expect("table should load");

    assert_eq!(report.rows_read(), 4);
    assert_eq!(report.characters.len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].line, 4);
    assert!(matches!(report.failures[0].error, RowError::Field(_)));

    // Knight: 12 + 10×2 = 32, +15% → 36.8
    let knight = &report.characters[0];
    let attrs = knight.calculate_final_attributes();
    assert!((attrs.final_attack - 36.8).abs() < 1e-6);
    assert_eq!(attrs.final_defense, 8.0 + 10.0 * 1.5);

    // Archer has no bonus cells at all
    assert!(report.characters[1].effects().is_empty());

    // Cleric: defense (6 + 5) × 1.2, health (90 + 60) × 1.25
    let cleric = report.characters[2].calculate_final_attributes();
    assert!((cleric.final_defense - 13.2).abs() < 1e-6);
    assert!((cleric.final_health - 187.5).abs() < 1e-6);
}

#[test]
fn growth_curve_applies_to_every_row() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(TABLE.as_bytes()).expect("write table");

    let loader = CharacterLoader::new(LoaderConfig {
        growth_curve: GrowthCurve::FromFirstLevel,
        ..LoaderConfig::default()
    });
    let report = loader.load_path(file.path()).expect("table should load");

    assert!(
        report
            .characters
            .iter()
            .all(|c| c.growth_curve == GrowthCurve::FromFirstLevel)
    );
    // Archer: 15 + 7×3
    assert_eq!(
        report.characters[1].calculate_final_attributes().final_attack,
        36.0
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.csv");

    let err = CharacterLoader::default().load_path(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn table_without_required_columns_fails_every_row() {
    let report = CharacterLoader::default()
        .load_reader("name,level\nA,1\nB,2\n".as_bytes())
        .expect("header should parse");

    assert!(report.characters.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert!(
        report
            .failures
            .iter()
            .all(|f| matches!(f.error, RowError::MissingField("base_attack")))
    );
}
