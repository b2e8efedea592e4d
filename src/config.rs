//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dayplan/dayplan.toml`
//! 3. Local config: `<root>/.dayplan.toml`
//! 4. Environment variables: `DAYPLAN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for dayplan.
///
/// Immutable once loaded; services receive it by value or reference instead
/// of reading module-level constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Course title used in the brief, the README, and log output
    pub course_title: String,
    /// Number of days in the plan
    pub days: u32,
    /// Name of the directory holding the per-day folders (default: "days")
    pub days_dir: String,
    /// Filename of the aggregate README (default: "README.md")
    pub readme_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            course_title: "100 Days of Code - Python (Udemy)".to_string(),
            days: 100,
            days_dir: "days".to_string(),
            readme_name: "README.md".to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (all fields Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub course_title: Option<String>,
    pub days: Option<u32>,
    pub days_dir: Option<String>,
    pub readme_name: Option<String>,
}

/// Get the XDG config directory for dayplan.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dayplan").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dayplan.toml"))
}

/// Get the path to the local config file in a working root.
pub fn local_config_path(root: &Path) -> PathBuf {
    root.join(".dayplan.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            course_title: overlay
                .course_title
                .clone()
                .unwrap_or_else(|| self.course_title.clone()),
            days: overlay.days.unwrap_or(self.days),
            days_dir: overlay
                .days_dir
                .clone()
                .unwrap_or_else(|| self.days_dir.clone()),
            readme_name: overlay
                .readme_name
                .clone()
                .unwrap_or_else(|| self.readme_name.clone()),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        self.days_dir = expand_env_vars(&self.days_dir);
        self.readme_name = expand_env_vars(&self.readme_name);
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `root` - Optional working root for the local config file
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/dayplan/dayplan.toml`
    /// 3. Local config: `<root>/.dayplan.toml`
    /// 4. Environment variables: `DAYPLAN_*` prefix (explicit override)
    pub fn load(root: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config in the working root
        if let Some(root) = root {
            let local_path = local_config_path(root);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply DAYPLAN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder =
            Config::builder().add_source(Environment::with_prefix("DAYPLAN").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("course_title") {
            settings.course_title = val;
        }
        if let Ok(val) = config.get_int("days") {
            settings.days = u32::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("DAYPLAN_DAYS out of range: {}", val),
            })?;
        }
        if let Ok(val) = config.get_string("days_dir") {
            settings.days_dir = val;
        }
        if let Ok(val) = config.get_string("readme_name") {
            settings.readme_name = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# dayplan configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/dayplan/dayplan.toml
#   Local:  <root>/.dayplan.toml
#   Env:    DAYPLAN_* environment variables (explicit overrides)

# Course title shown in the brief and the README
# course_title = "100 Days of Code - Python (Udemy)"

# Number of days in the plan
# days = 100

# Directory holding the per-day folders
# days_dir = "days"

# Filename of the aggregate README
# readme_name = "README.md"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load(None).expect("load defaults");
        assert_eq!(settings.days, 100);
        assert_eq!(settings.days_dir, "days");
        assert_eq!(settings.readme_name, "README.md");
        assert!(settings.course_title.contains("100 Days"));
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_where_specified() {
        let base = Settings::default();
        let overlay = RawSettings {
            course_title: Some("30 Days of Rust".to_string()),
            days: Some(30),
            days_dir: None,
            readme_name: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.course_title, "30 Days of Rust");
        assert_eq!(merged.days, 30);
        assert_eq!(merged.days_dir, "days");
        assert_eq!(merged.readme_name, "README.md");
    }

    #[test]
    fn given_env_var_in_days_dir_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            days_dir: "$HOME/notes/days".to_string(),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.days_dir.starts_with(&home),
            "days_dir should expand $HOME: {}",
            settings.days_dir
        );
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let template = Settings::template();
        let parsed: Result<RawSettings, _> = toml::from_str(&template);
        assert!(parsed.is_ok(), "template must parse as TOML");
    }
}
