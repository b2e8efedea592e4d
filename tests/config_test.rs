//! Tests for layered settings loading

use tempfile::TempDir;

use dayplan::config::{local_config_path, Settings};

#[test]
fn given_no_config_files_when_loading_then_returns_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load(Some(temp.path())).unwrap();

    assert_eq!(settings.days, 100);
    assert_eq!(settings.days_dir, "days");
    assert_eq!(settings.readme_name, "README.md");
}

#[test]
fn given_local_config_when_loading_then_local_values_override_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = local_config_path(temp.path());
    std::fs::write(
        &config_path,
        r#"
course_title = "30 Days of Rust"
days = 30
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(temp.path())).unwrap();

    // Assert
    assert_eq!(settings.course_title, "30 Days of Rust");
    assert_eq!(settings.days, 30);
    // Unspecified fields keep their defaults
    assert_eq!(settings.days_dir, "days");
    assert_eq!(settings.readme_name, "README.md");
}

#[test]
fn given_invalid_local_config_when_loading_then_fails_with_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = local_config_path(temp.path());
    std::fs::write(&config_path, "days = \"not a number\"").unwrap();

    // Act
    let result = Settings::load(Some(temp.path()));

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_effective_settings_when_serializing_then_round_trips_through_toml() {
    let settings = Settings::default();

    let toml_str = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&toml_str).unwrap();

    assert_eq!(parsed, settings);
}
