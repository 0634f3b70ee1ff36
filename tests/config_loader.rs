use regform::config::{Config, ConfigError};
use regform::form::CancelPolicy;
use std::path::Path;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.school.name, "R.R International High School");
    assert_eq!(config.school.title, "Higher Secondary Registration Form");
    assert_eq!(
        config.form.courses,
        vec!["Biology", "Computer Science", "Commerce", "Humanities"]
    );
    assert!(config.form.clear_errors_on_cancel);
    assert_eq!(config.form.cancel_policy(), CancelPolicy::ClearErrors);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("regform/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/regform/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_named_missing_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("typo.toml");
    match Config::load_existing(&path).unwrap_err() {
        ConfigError::ReadError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ReadError, got {other:?}"),
    }
}

#[test]
fn test_named_existing_file_loads() {
    let (_dir, path) = write_config("[school]\nname = \"Named\"\n");
    assert_eq!(Config::load_existing(&path).unwrap().school.name, "Named");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[form]
clear_errors_on_cancel = false

[logging]
level = "debug"
file = "/tmp/regform-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.form.cancel_policy(), CancelPolicy::KeepErrors);
    assert_eq!(config.form.courses.len(), 4);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(Path::new("/tmp/regform-test.log"))
    );
    assert_eq!(config.school.name, "R.R International High School");
}

#[test]
fn test_custom_courses() {
    let (_dir, path) = write_config(
        r#"
[school]
name = "Test School"

[form]
courses = ["Physics", "Arts"]
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.school.name, "Test School");
    assert_eq!(config.school.title, "Higher Secondary Registration Form");
    assert_eq!(config.form.courses, vec!["Physics", "Arts"]);
}

#[test]
fn test_parse_error_names_the_file() {
    let (_dir, path) = write_config("[form\ncourses = 3");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_empty_courses() {
    let (_dir, path) = write_config("[form]\ncourses = []\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("At least one course"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_duplicate_course() {
    let mut config = Config::default();
    config.form.courses.push("Biology".to_string());
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("'Biology' is listed more than once"));
}

#[test]
fn test_validation_fails_blank_course() {
    let mut config = Config::default();
    config.form.courses.push("  ".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_zero_tick_rate() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_read_error_for_directory() {
    let temp_dir = TempDir::new().unwrap();
    match Config::load_from(temp_dir.path()).unwrap_err() {
        ConfigError::ReadError { .. } => {}
        other => panic!("Expected ReadError, got {other:?}"),
    }
}
