use std::fs;

use namecheck::{canonicalize_or_current, load_config_or_default, sha256_file};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(canonicalize_or_current(".").expect("canonicalize"), cwd);
}

#[test]
fn canonicalize_or_current_resolves_existing_path() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("graph.json");
    fs::write(&file, "{}").expect("write");
    let result = canonicalize_or_current(file.to_str().expect("utf8")).expect("canonicalize");
    assert_eq!(result, file.canonicalize().expect("canonicalize file"));
}

#[test]
fn canonicalize_or_current_keeps_missing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("not-yet.yaml");
    let result = canonicalize_or_current(missing.to_str().expect("utf8")).expect("canonicalize");
    assert_eq!(result, missing);
}

#[test]
fn sha256_file_matches_known_hash() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("abc.txt");
    fs::write(&file, b"abc").expect("write");
    assert_eq!(
        sha256_file(&file).expect("hash"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_file_reports_missing_input() {
    let tmp = tempdir().expect("tempdir");
    let err = sha256_file(&tmp.path().join("missing")).expect_err("missing");
    assert!(err.to_string().contains("Failed to open input for hashing"));
}

#[test]
fn missing_config_argument_yields_defaults() {
    let config = load_config_or_default(None).expect("defaults");
    assert_eq!(config.config_version, "0.1.0");
    assert_eq!(config.export.class_prefix, None);
}
