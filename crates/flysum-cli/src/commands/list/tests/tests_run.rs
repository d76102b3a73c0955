//! Tests for the list command

#![allow(clippy::expect_used)]

use crate::commands::{list, SelectionArgs};
use flysum_core::{ChecksumRecord, FileReference};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_format_record() {
    let file = FileReference::new("/repo/db/migration/V1__init.java", "V1__init.java");
    let record = ChecksumRecord::new("V1__init", -42);

    assert_eq!(
        list::format_record(&file, &record),
        "V1__init\t-42\t/repo/db/migration/V1__init.java"
    );
}

#[test]
fn test_list_returns_records_without_writing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("sql");
    fs::create_dir_all(&dir).expect("Failed to create dir");
    fs::write(dir.join("V1__init.sql"), "123456789").expect("Failed to write file");
    fs::write(dir.join("V2__skip.java"), "ignored").expect("Failed to write file");

    let args = SelectionArgs {
        roots: vec![temp_dir.path().to_path_buf()],
        location: Some("/sql".to_string()),
        extensions: vec![".sql".to_string()],
        ..SelectionArgs::default()
    };

    let records = list::run(&args).expect("List failed");

    assert_eq!(records, vec![ChecksumRecord::new("V1__init", -873_187_034)]);
    assert_eq!(
        fs::read_dir(temp_dir.path()).expect("Failed to read dir").count(),
        1
    );
}

#[test]
fn test_list_locations_take_precedence() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for location in ["a", "b", "c"] {
        let dir = temp_dir.path().join(location);
        fs::create_dir_all(&dir).expect("Failed to create dir");
        fs::write(dir.join(format!("V_{location}.java")), location).expect("Failed to write file");
    }

    let args = SelectionArgs {
        roots: vec![temp_dir.path().to_path_buf()],
        location: Some("/c".to_string()),
        locations: vec!["/b".to_string(), "/a".to_string()],
        ..SelectionArgs::default()
    };

    let records = list::run(&args).expect("List failed");
    let identifiers: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();

    assert_eq!(identifiers, vec!["V_b", "V_a"]);
}
