//! CLI integration tests for Formwork.
//!
//! These tests exercise the full CLI surface: profile validation, country
//! filtering from a local fixture, and image conversion.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the formwork binary command.
fn formwork() -> Command {
    Command::cargo_bin("formwork").unwrap()
}

/// Create a temporary directory for test fixtures.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const VALID_PROFILE_TOML: &str = r#"
name = "John"
age = 25
email = "john@x.com"
password = "StrongPass123!"
confirmPassword = "StrongPass123!"
gender = "male"
terms = true
country = "United States"
"#;

const COUNTRIES_JSON: &str = r#"[
  {"name": "United States", "alpha2Code": "US", "alpha3Code": "USA", "region": "Americas"},
  {"name": "Canada", "alpha2Code": "CA", "alpha3Code": "CAN", "region": "Americas"},
  {"name": "Australia", "alpha2Code": "AU", "alpha3Code": "AUS", "region": "Oceania"},
  {"name": "Japan", "alpha2Code": "JP", "alpha3Code": "JPN", "region": "Asia"}
]"#;

// ============================================================================
// formwork check
// ============================================================================

#[test]
fn test_check_accepts_valid_toml_profile() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, VALID_PROFILE_TOML).unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("profile is valid (controlled variant)"));
}

#[test]
fn test_check_accepts_valid_profile_as_uncontrolled() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, VALID_PROFILE_TOML).unwrap();

    formwork()
        .args([
            "check",
            profile.to_str().unwrap(),
            "--variant",
            "uncontrolled",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("uncontrolled variant"));
}

#[test]
fn test_check_accepts_json_profile() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.json");
    fs::write(
        &profile,
        r#"{
            "name": "John",
            "age": 25,
            "email": "john@x.com",
            "password": "StrongPass123!",
            "confirmPassword": "StrongPass123!",
            "gender": "male",
            "terms": true,
            "country": "United States"
        }"#,
    )
    .unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_check_rejects_empty_profile_with_field_messages() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, "").unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name is required"))
        .stderr(predicate::str::contains("Email is required"))
        .stderr(predicate::str::contains("You must accept the terms"));
}

#[test]
fn test_check_reports_weak_password_as_complexity() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(
        &profile,
        VALID_PROFILE_TOML
            .replace("StrongPass123!", "weak"),
    )
    .unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uppercase"));
}

#[test]
fn test_check_rejects_mismatched_confirmation() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(
        &profile,
        VALID_PROFILE_TOML.replace(
            "confirmPassword = \"StrongPass123!\"",
            "confirmPassword = \"OtherPass123!\"",
        ),
    )
    .unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Passwords must match"));
}

#[test]
fn test_check_fails_on_unparseable_profile() {
    let tmp = temp_dir();
    let profile = tmp.path().join("profile.toml");
    fs::write(&profile, "name = [broken").unwrap();

    formwork()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read profile"));
}

#[test]
fn test_check_fails_on_missing_file() {
    formwork()
        .args(["check", "/nonexistent/profile.toml"])
        .assert()
        .failure();
}

// ============================================================================
// formwork countries
// ============================================================================

#[test]
fn test_countries_filters_local_fixture() {
    let tmp = temp_dir();
    let fixture = tmp.path().join("countries.json");
    fs::write(&fixture, COUNTRIES_JSON).unwrap();

    formwork()
        .args([
            "countries",
            "--file",
            fixture.to_str().unwrap(),
            "--term",
            "US",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("United States (US)"))
        .stdout(predicate::str::contains("Canada").not());
}

#[test]
fn test_countries_empty_term_lists_fixture_in_order() {
    let tmp = temp_dir();
    let fixture = tmp.path().join("countries.json");
    fs::write(&fixture, COUNTRIES_JSON).unwrap();

    formwork()
        .args(["countries", "--file", fixture.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("United States (US)"))
        .stdout(predicate::str::contains("Japan (JP)"));
}

#[test]
fn test_countries_reports_no_matches() {
    let tmp = temp_dir();
    let fixture = tmp.path().join("countries.json");
    fs::write(&fixture, COUNTRIES_JSON).unwrap();

    formwork()
        .args([
            "countries",
            "--file",
            fixture.to_str().unwrap(),
            "--term",
            "zzzz",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no countries match"));
}

#[test]
fn test_countries_missing_fixture_fails_with_hint() {
    formwork()
        .args(["countries", "--file", "/nonexistent/countries.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("country list unavailable"));
}

// ============================================================================
// formwork image
// ============================================================================

#[test]
fn test_image_emits_data_uri() {
    let tmp = temp_dir();
    let path = tmp.path().join("avatar.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\nfake").unwrap();

    formwork()
        .args(["image", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("data:image/png;base64,"));
}

#[test]
fn test_image_summary_prints_media_type() {
    let tmp = temp_dir();
    let path = tmp.path().join("avatar.svg");
    fs::write(&path, b"<svg/>").unwrap();

    formwork()
        .args(["image", path.to_str().unwrap(), "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("media type: image/svg+xml"));
}

#[test]
fn test_image_rejects_unsupported_extension() {
    let tmp = temp_dir();
    let path = tmp.path().join("notes.txt");
    fs::write(&path, b"hello").unwrap();

    formwork()
        .args(["image", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported image type"));
}

#[test]
fn test_image_rejects_oversized_file() {
    let tmp = temp_dir();
    let path = tmp.path().join("huge.png");
    fs::write(&path, vec![0u8; 6 * 1024 * 1024]).unwrap();

    formwork()
        .args(["image", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ============================================================================
// formwork demo
// ============================================================================

#[test]
fn test_demo_walks_both_variants() {
    formwork()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== controlled variant ==="))
        .stdout(predicate::str::contains("=== uncontrolled variant ==="))
        .stdout(predicate::str::contains("submitted: John <john@x.com>"));
}

#[test]
fn test_demo_single_variant() {
    formwork()
        .args(["demo", "--variant", "uncontrolled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== uncontrolled variant ==="))
        .stdout(predicate::str::contains("controlled variant").count(1));
}

// ============================================================================
// formwork completions
// ============================================================================

#[test]
fn test_completions_generates_bash_script() {
    formwork()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formwork"));
}
