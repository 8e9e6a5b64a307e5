use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::model::{Dataset, LaunchRecord, Outcome};
use crate::error::LoadError;

// Required columns of the source table. Extra columns are ignored.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch records table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least `Launch Site`, `Payload Mass (kg)`,
///   `Booster Version` and `class` columns
/// * `.json` – records-oriented array (the default
///   `df.to_json(orient='records')` of the same table)
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(LoadError::UnsupportedExtension(other.to_string())),
    };

    log::debug!("parsed {} launch records from {}", records.len(), path.display());

    Dataset::from_records(records).ok_or(LoadError::NoRecords)
}

// ---------------------------------------------------------------------------
// Raw row – shared by both loaders
// ---------------------------------------------------------------------------

/// One row as it appears in the source file, before validation. The serde
/// renames match the table's column headers, so the JSON loader can use
/// this directly.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "class")]
    class: u8,
}

/// Validate one raw row: payload must be a finite non-negative mass and
/// `class` must be 0 or 1.
fn validate_record(raw: RawRecord, row: usize) -> Result<LaunchRecord, LoadError> {
    if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
        return Err(LoadError::InvalidField {
            row,
            column: COL_PAYLOAD,
            value: raw.payload_mass_kg.to_string(),
        });
    }

    let outcome = Outcome::from_class(raw.class).ok_or_else(|| LoadError::InvalidField {
        row,
        column: COL_CLASS,
        value: raw.class.to_string(),
    })?;

    Ok(LaunchRecord {
        launch_site: raw.launch_site,
        payload_mass_kg: raw.payload_mass_kg,
        booster_version: raw.booster_version,
        outcome,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };

    let site_idx = column(COL_SITE)?;
    let payload_idx = column(COL_PAYLOAD)?;
    let booster_idx = column(COL_BOOSTER)?;
    let class_idx = column(COL_CLASS)?;

    let mut records = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let payload_mass_kg: f64 =
            cell(payload_idx)
                .parse()
                .map_err(|_| LoadError::InvalidField {
                    row,
                    column: COL_PAYLOAD,
                    value: cell(payload_idx).to_string(),
                })?;
        let class: u8 = cell(class_idx).parse().map_err(|_| LoadError::InvalidField {
            row,
            column: COL_CLASS,
            value: cell(class_idx).to_string(),
        })?;

        let raw = RawRecord {
            launch_site: cell(site_idx).to_string(),
            payload_mass_kg,
            booster_version: cell(booster_idx).to_string(),
            class,
        };
        records.push(validate_record(raw, row)?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<LaunchRecord>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let raw_records: Vec<RawRecord> = serde_json::from_str(&text)?;

    raw_records
        .into_iter()
        .enumerate()
        .map(|(row, raw)| validate_record(raw, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    const GOOD_CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),Booster Version,class
1,CCAFS LC-40,500,F9 v1.0,0
2,CCAFS LC-40,1500,F9 v1.1,1
3,KSC LC-39A,5300,F9 FT,1
";

    #[test]
    fn loads_csv_and_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.csv", GOOD_CSV);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.min_payload_kg, 500.0);
        assert_eq!(ds.max_payload_kg, 5300.0);
        assert_eq!(ds.records[0].outcome, Outcome::Failure);
        assert_eq!(ds.records[2].booster_version, "F9 FT");
    }

    #[test]
    fn loads_json_records_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.json",
            r#"[
                {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 9600.0,
                 "Booster Version": "F9 B5", "class": 1},
                {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 500.0,
                 "Booster Version": "F9 v1.0", "class": 0}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sites, vec!["VAFB SLC-4E"]);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),class\nCCAFS LC-40,500,1\n",
        );

        match load_file(&path) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, COL_BOOSTER),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn invalid_class_is_reported_with_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),Booster Version,class\n\
             CCAFS LC-40,500,F9 v1.0,1\n\
             CCAFS LC-40,600,F9 v1.0,7\n",
        );

        match load_file(&path) {
            Err(LoadError::InvalidField { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, COL_CLASS);
                assert_eq!(value, "7");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn negative_payload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),Booster Version,class\nCCAFS LC-40,-10,F9 v1.0,1\n",
        );

        match load_file(&path) {
            Err(LoadError::InvalidField { column, .. }) => assert_eq!(column, COL_PAYLOAD),
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_has_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.csv",
            "Launch Site,Payload Mass (kg),Booster Version,class\n",
        );

        assert!(matches!(load_file(&path), Err(LoadError::NoRecords)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(load_file(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.parquet", "");
        assert!(matches!(
            load_file(&path),
            Err(LoadError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }
}
