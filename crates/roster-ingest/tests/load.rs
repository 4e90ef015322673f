//! Loading a CSV with its configuration.

use std::io::Write;

use roster_ingest::{IngestError, ReadOptions, SheetConfig, read_sheet};
use roster_model::{Column, ErrorKind, FieldName, IdFieldKind};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn config_is_applied_to_csv() {
    let dir = TempDir::new().unwrap();
    let csv = write(
        &dir,
        "members.csv",
        "ID,Phone,Notes\n1,0739567148,likes cats\n2,,\n",
    );
    let config = write(
        &dir,
        "members.json",
        r#"{
            "country": "SE",
            "columns": [
                {"kind": "identifier", "id_field": "internal", "selected": true},
                {"kind": "field", "field": "phone", "selected": true},
                {"kind": "field", "field": "street_address", "selected": false}
            ]
        }"#,
    );

    let sheet = read_sheet(&csv, &ReadOptions::default()).unwrap();
    let config = SheetConfig::load(&config).unwrap();
    let sheet = config.apply(sheet).unwrap();

    assert_eq!(sheet.title, "members");
    assert!(sheet.first_row_is_headers);
    assert_eq!(sheet.data_row_count(), 2);
    assert_eq!(sheet.columns[0], Column::identifier(IdFieldKind::Internal));
    assert_eq!(
        sheet.columns[2],
        Column::field(FieldName::StreetAddress).with_selected(false)
    );
    assert_eq!(config.country().as_str(), "SE");
    assert_eq!(ErrorKind::for_field_type(sheet.columns[1].field_type()), Some(ErrorKind::Phone));
}

#[test]
fn missing_id_field_means_undeclared() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "ids.json",
        r#"{"columns": [{"kind": "identifier", "selected": true}]}"#,
    );
    let config = SheetConfig::load(&config).unwrap();
    assert_eq!(config.columns, vec![Column::identifier(IdFieldKind::Undeclared)]);
    assert!(config.country.is_none());
}

#[test]
fn unknown_field_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "bad.json",
        r#"{"columns": [{"kind": "field", "field": "shoe_size", "selected": true}]}"#,
    );
    let err = SheetConfig::load(&config).unwrap_err();
    assert!(matches!(err, IngestError::ConfigParse { .. }));
}

#[test]
fn invalid_country_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.json", r#"{"country": "Sweden", "columns": []}"#);
    let err = SheetConfig::load(&config).unwrap_err();
    assert!(matches!(err, IngestError::ConfigParse { .. }));
}

#[test]
fn suggested_config_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let csv = write(&dir, "people.csv", "First name,E-mail,Postcode\nAngela,a@b.se,12345\n");
    let sheet = read_sheet(&csv, &ReadOptions::default()).unwrap();

    let suggested = SheetConfig::suggest(&sheet);
    let path = write(&dir, "people.json", &serde_json::to_string_pretty(&suggested).unwrap());

    assert_eq!(SheetConfig::load(&path).unwrap(), suggested);
    assert_eq!(
        suggested.columns,
        vec![
            Column::field(FieldName::FirstName),
            Column::field(FieldName::Email),
            Column::field(FieldName::ZipCode),
        ]
    );
}
