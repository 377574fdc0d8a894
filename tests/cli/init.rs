//! Tests for `keyfob init` command.

use crate::support::*;
use std::fs;

#[test]
fn test_init_creates_key_properties() {
    let t = Test::new();

    let output = t.init_default();
    assert_success(&output);
    assert_stdout_contains(&output, "wrote");

    let path = t.properties_path();
    assert!(path.exists(), "key.properties should exist");

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("storeFile=release.jks"));
    assert!(contents.contains("keyAlias=upload"));
}

#[test]
fn test_init_in_already_initialized_dir_fails() {
    let t = Test::initialized();

    let output = t.init_default();
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::initialized();

    let output = t
        .cmd()
        .args([
            "init",
            "--force",
            "--store-file",
            "other.jks",
            "--store-password",
            "pw1",
            "--key-alias",
            "upload",
            "--key-password",
            "pw2",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let contents = fs::read_to_string(t.properties_path()).unwrap();
    assert!(contents.contains("storeFile=other.jks"));
}

#[test]
fn test_init_missing_flag_fails_without_terminal() {
    let t = Test::new();

    // No terminal attached in tests, so a missing flag cannot be prompted
    let output = t
        .cmd()
        .args(["init", "--store-file", "release.jks"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "non-interactive");
    assert!(!t.properties_path().exists());
}

#[test]
fn test_init_creates_gitignore_entries() {
    let t = Test::new();

    let output = t.init_default();
    assert_success(&output);

    let gitignore = fs::read_to_string(t.dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("key.properties"));
    assert!(gitignore.contains("*.jks"));
}

#[test]
fn test_init_keeps_existing_gitignore_lines() {
    let t = Test::new();
    fs::write(t.dir.path().join(".gitignore"), "/build\n").unwrap();

    let output = t.init_default();
    assert_success(&output);

    let gitignore = fs::read_to_string(t.dir.path().join(".gitignore")).unwrap();
    assert!(gitignore.contains("/build"));
    assert!(gitignore.contains("key.properties"));
}

#[test]
fn test_init_written_file_validates() {
    let t = Test::initialized();

    assert_valid_config(&t);
}

#[test]
fn test_init_values_survive_roundtrip() {
    let t = Test::new();

    // Passwords with spaces and separators must come back verbatim
    let output = t.init_cmd("keys/release.jks", "p w=1:x", "upload", "pw2 ");
    assert_success(&output);

    let output = t.show_reveal_json();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["storeFile"], "keys/release.jks");
    assert_eq!(json["storePassword"], "p w=1:x");
    assert_eq!(json["keyPassword"], "pw2 ");
}

#[test]
fn test_init_empty_value_fails() {
    let t = Test::new();

    let output = t.init_cmd("release.jks", "", "upload", "pw2");
    assert_failure(&output);
    assert_stderr_contains(&output, "storePassword missing");
    assert!(!t.properties_path().exists(), "bad init must not write");
}

#[cfg(unix)]
#[test]
fn test_init_writes_restrictive_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::initialized();

    let mode = fs::metadata(t.properties_path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
