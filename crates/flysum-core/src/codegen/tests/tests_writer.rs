//! Tests for the artifact writer

#![allow(clippy::expect_used)]

use crate::codegen::{write_artifact, RenderedArtifact};
use crate::error::FlysumError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn artifact(source: &str) -> RenderedArtifact {
    RenderedArtifact {
        relative_path: PathBuf::from("io/github/agileek/flyway/JavaMigrationChecksums.java"),
        source: source.to_string(),
    }
}

#[test]
fn test_write_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("generated-sources");

    let written = write_artifact(&output, &artifact("enum A {}")).expect("Failed to write");

    assert!(written.changed);
    assert_eq!(
        written.path,
        output.join("io/github/agileek/flyway/JavaMigrationChecksums.java")
    );
    assert_eq!(
        fs::read_to_string(&written.path).expect("Failed to read artifact"),
        "enum A {}"
    );
}

#[test]
fn test_write_skips_identical_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let first = write_artifact(temp_dir.path(), &artifact("enum A {}")).expect("Failed to write");
    let second = write_artifact(temp_dir.path(), &artifact("enum A {}")).expect("Failed to write");

    assert!(first.changed);
    assert!(!second.changed);
    assert_eq!(first.path, second.path);
}

#[test]
fn test_write_replaces_changed_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    write_artifact(temp_dir.path(), &artifact("enum A {}")).expect("Failed to write");
    let written = write_artifact(temp_dir.path(), &artifact("enum B {}")).expect("Failed to write");

    assert!(written.changed);
    assert_eq!(
        fs::read_to_string(&written.path).expect("Failed to read artifact"),
        "enum B {}"
    );
}

#[test]
fn test_write_fails_when_output_is_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("generated-sources");
    fs::write(&blocker, "not a directory").expect("Failed to write file");

    let err = write_artifact(&blocker, &artifact("enum A {}")).expect_err("Write should fail");

    assert!(matches!(err, FlysumError::OutputWrite { .. }));
}
