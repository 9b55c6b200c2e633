// tests/loader.rs
//
// CSV ingestion: schema enforcement, optional-column degradation, and the
// distinct failure kinds.
//
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use boxstats::loader::{self, LoadError};

const FULL_HEADER: &str = "Round,Boxer,Punches Thrown,Punches Landed,\
Significant Punches Thrown,Significant Punches Landed,\
Head Punches Landed,Body Punches Landed,Jabs Landed,Power Punches Landed,\
Ring Control %";

const REQUIRED_HEADER: &str = "Round,Boxer,Punches Thrown,Punches Landed,\
Significant Punches Thrown,Significant Punches Landed";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_full_schema() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "full.csv",
        &format!(
            "{}\n\
             1,Ali,50,20,30,12,8,4,8,12,55.0\n\
             1,Frazier,60,25,35,15,9,6,10,15,45.0\n",
            FULL_HEADER
        ),
    );

    let fight = loader::load(&path, "Test Fight").unwrap();
    assert_eq!(fight.label, "Test Fight");
    assert_eq!(fight.records.len(), 2);
    assert_eq!(fight.boxers(), vec!["Ali".to_string(), "Frazier".to_string()]);

    let ali = &fight.records[0];
    assert_eq!(ali.round, 1);
    assert_eq!(ali.punches_thrown, 50);
    assert_eq!(ali.punches_landed, 20);
    assert_eq!(ali.sig_punches_thrown, 30);
    assert_eq!(ali.sig_punches_landed, 12);
    assert_eq!(ali.head_punches_landed, 8);
    assert_eq!(ali.body_punches_landed, 4);
    assert_eq!(ali.jabs_landed, 8);
    assert_eq!(ali.power_punches_landed, 12);
    assert_eq!(ali.ring_control_pct, 55.0);

    assert!(fight.features.ring_control);
    assert!(fight.features.head_body);
    assert!(fight.features.jab_power);
}

#[test]
fn missing_optional_columns_zero_fill() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "min.csv",
        &format!(
            "{}\n\
             1,Ali,50,20,30,12\n\
             1,Frazier,60,25,35,15\n",
            REQUIRED_HEADER
        ),
    );

    let fight = loader::load(&path, "Minimal").unwrap();
    let r = &fight.records[0];
    assert_eq!(r.head_punches_landed, 0);
    assert_eq!(r.body_punches_landed, 0);
    assert_eq!(r.jabs_landed, 0);
    assert_eq!(r.power_punches_landed, 0);
    assert_eq!(r.ring_control_pct, 0.0);

    // Absent columns degrade the dependent features.
    assert!(!fight.features.ring_control);
    assert!(!fight.features.head_body);
    assert!(!fight.features.jab_power);
}

#[test]
fn all_zero_optional_column_counts_as_absent() {
    let dir = tempdir().unwrap();
    // Ring Control % exists but is all zeros; head/body actually carry data.
    let path = write(
        dir.path(),
        "zeros.csv",
        &format!(
            "{}\n\
             1,Ali,50,20,30,12,8,4,0,0,0\n\
             1,Frazier,60,25,35,15,9,6,0,0,0\n",
            FULL_HEADER
        ),
    );

    let fight = loader::load(&path, "Zeroed").unwrap();
    assert!(!fight.features.ring_control);
    assert!(fight.features.head_body);
    assert!(!fight.features.jab_power);
}

#[test]
fn missing_required_columns_all_named() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "short.csv",
        "Round,Boxer,Punches Thrown,Punches Landed\n1,Ali,50,20\n",
    );

    match loader::load(&path, "Short") {
        Err(LoadError::MissingColumns(cols)) => {
            assert_eq!(
                cols,
                vec![
                    "Significant Punches Thrown".to_string(),
                    "Significant Punches Landed".to_string(),
                ]
            );
        }
        other => panic!("expected MissingColumns, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn header_match_is_case_insensitive_and_trimmed() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "case.csv",
        "round, BOXER ,punches thrown,Punches Landed,\
         significant punches thrown,SIGNIFICANT PUNCHES LANDED\n\
         1,Ali,50,20,30,12\n\
         1,Frazier,60,25,35,15\n",
    );
    assert!(loader::load(&path, "Case").is_ok());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(matches!(
        loader::load(&path, "Missing"),
        Err(LoadError::NotFound(_))
    ));
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "empty.csv", &format!("{}\n", REQUIRED_HEADER));
    assert!(matches!(
        loader::load(&path, "Empty"),
        Err(LoadError::Empty(_))
    ));
}

#[test]
fn bad_count_reports_line_number() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.csv",
        &format!(
            "{}\n\
             1,Ali,50,20,30,12\n\
             2,Ali,lots,20,30,12\n",
            REQUIRED_HEADER
        ),
    );

    match loader::load(&path, "Bad") {
        Err(LoadError::Malformed { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("lots"));
        }
        other => panic!("expected Malformed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn round_zero_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "r0.csv",
        &format!("{}\n0,Ali,50,20,30,12\n", REQUIRED_HEADER),
    );
    assert!(matches!(
        loader::load(&path, "RoundZero"),
        Err(LoadError::Malformed { line: 2, .. })
    ));
}

#[test]
fn empty_boxer_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "noname.csv",
        &format!("{}\n1, ,50,20,30,12\n", REQUIRED_HEADER),
    );
    assert!(matches!(
        loader::load(&path, "NoName"),
        Err(LoadError::Malformed { line: 2, .. })
    ));
}

#[test]
fn ring_control_out_of_range_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "pct.csv",
        &format!("{}\n1,Ali,50,20,30,12,8,4,8,12,140.0\n", FULL_HEADER),
    );
    assert!(matches!(
        loader::load(&path, "Pct"),
        Err(LoadError::Malformed { line: 2, .. })
    ));
}

#[test]
fn landed_above_thrown_passes_through() {
    let dir = tempdir().unwrap();
    // Source sheets sometimes disagree with themselves; we keep the numbers.
    let path = write(
        dir.path(),
        "odd.csv",
        &format!("{}\n1,Ali,50,60,30,12\n1,Frazier,60,25,35,15\n", REQUIRED_HEADER),
    );
    let fight = loader::load(&path, "Odd").unwrap();
    assert_eq!(fight.records[0].punches_landed, 60);
}

#[test]
fn empty_optional_cells_read_as_zero() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "blank.csv",
        &format!(
            "{}\n\
             1,Ali,50,20,30,12,,,,,\n\
             1,Frazier,60,25,35,15,9,6,10,15,45.0\n",
            FULL_HEADER
        ),
    );
    let fight = loader::load(&path, "Blanks").unwrap();
    assert_eq!(fight.records[0].head_punches_landed, 0);
    assert_eq!(fight.records[0].ring_control_pct, 0.0);
    // Frazier's row still carries data, so the features stay on.
    assert!(fight.features.ring_control);
    assert!(fight.features.head_body);
}
