//! Tests for identifier rules

use crate::codegen::{is_java_identifier, is_rust_identifier, to_snake_case};
use rstest::rstest;

#[rstest]
#[case("V1__init", true)]
#[case("V2_1__add_col", true)]
#[case("_private", true)]
#[case("$dollar", true)]
#[case("Migración", true)]
#[case("", false)]
#[case("1__init", false)]
#[case("V1-init", false)]
#[case("V1 init", false)]
#[case("class", false)]
#[case("null", false)]
#[case("_", false)]
fn test_is_java_identifier(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_java_identifier(name), expected, "{name}");
}

#[rstest]
#[case("V1__init", true)]
#[case("_private", true)]
#[case("", false)]
#[case("$dollar", false)]
#[case("1__init", false)]
#[case("V1-init", false)]
#[case("match", false)]
#[case("Self", false)]
#[case("_", false)]
fn test_is_rust_identifier(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_rust_identifier(name), expected, "{name}");
}

#[test]
fn test_to_snake_case() {
    assert_eq!(to_snake_case("getChecksum"), "get_checksum");
    assert_eq!(to_snake_case("JavaMigrationChecksums"), "java_migration_checksums");
    assert_eq!(to_snake_case("checksum"), "checksum");
}
