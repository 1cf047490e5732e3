use camino::{Utf8Path, Utf8PathBuf};
use neocad::database::NeoDatabase;
use neocad::write::{write_to_csv, write_to_json};
use neocad::NeoCadError;

fn test_database() -> NeoDatabase {
    NeoDatabase::from_files(
        Utf8Path::new("tests/data/neos.csv"),
        Utf8Path::new("tests/data/cad.json"),
    )
    .unwrap()
}

#[test]
fn test_write_to_csv() {
    let db = test_database();
    let linked: Vec<_> = db
        .approaches()
        .iter()
        .filter(|approach| approach.neo().is_some())
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(dir.path().join("cad_out.csv")).unwrap();
    write_to_csv(&db, linked.iter().copied(), &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
    );
    assert_eq!(
        lines[1],
        "2025-11-30 02:18,0.397647483265833,3.72885069167641,433,Eros,16.84,False"
    );
    // Unnamed NEO with unknown diameter: empty name and diameter cells
    assert_eq!(
        lines[4],
        "2020-07-08 03:12,0.0136595,7.46193,2010 PK9,,,True"
    );
}

#[test]
fn test_write_to_csv_empty_selection_keeps_header() {
    let db = test_database();
    let dir = tempfile::tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(dir.path().join("empty.csv")).unwrap();
    write_to_csv(&db, std::iter::empty(), &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        content.trim_end(),
        "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous"
    );
}

#[test]
fn test_write_rejects_unlinked_approach() {
    let db = test_database();
    let dangling = db
        .approaches()
        .iter()
        .find(|approach| approach.neo().is_none())
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(dir.path().join("dangling.csv")).unwrap();
    assert_eq!(
        write_to_csv(&db, [dangling], &out).unwrap_err(),
        NeoCadError::UnlinkedApproach("99942".to_string())
    );
}

#[test]
fn test_write_to_json() {
    let db = test_database();
    let linked: Vec<_> = db
        .approaches()
        .iter()
        .filter(|approach| approach.neo().is_some())
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let out = Utf8PathBuf::from_path_buf(dir.path().join("cad_out.json")).unwrap();
    write_to_json(&db, linked.iter().copied(), &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let records: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 4);

    let eros_2025 = &records[0];
    assert_eq!(eros_2025["datetime_utc"], "2025-11-30 02:18");
    assert_eq!(eros_2025["distance_au"], 0.397647483265833);
    assert_eq!(eros_2025["velocity_km_s"], 3.72885069167641);
    assert_eq!(eros_2025["neo"]["designation"], "433");
    assert_eq!(eros_2025["neo"]["name"], "Eros");
    assert_eq!(eros_2025["neo"]["diameter_km"], 16.84);
    assert_eq!(eros_2025["neo"]["potentially_hazardous"], false);

    // serde_json renders the NaN diameter as null in the file
    let pk9 = &records[3];
    assert_eq!(pk9["neo"]["name"], "");
    assert!(pk9["neo"]["diameter_km"].is_null());
    assert_eq!(pk9["neo"]["potentially_hazardous"], true);
}
