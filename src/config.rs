//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/kinship/kinship.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `KINSHIP_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DuplicatePolicy;

/// Unified configuration for kinship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Family file used when none is given on the command line
    pub family_file: Option<PathBuf>,
    /// Handling of names registered twice
    pub duplicates: DuplicatePolicy,
    /// Render cousin degrees as words ("first cousin") instead of numbers
    pub ordinals: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            family_file: None,
            duplicates: DuplicatePolicy::Reject,
            ordinals: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → field not specified, inherit from base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub family_file: Option<PathBuf>,
    pub duplicates: Option<DuplicatePolicy>,
    pub ordinals: Option<bool>,
}

/// Get the XDG config directory for kinship.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "kinship").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("kinship.toml"))
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

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Parse a duplicate policy name as used in config files and env vars.
pub fn parse_duplicate_policy(value: &str) -> Result<DuplicatePolicy, ApplicationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reject" => Ok(DuplicatePolicy::Reject),
        "replace" => Ok(DuplicatePolicy::Replace),
        other => Err(ApplicationError::Config {
            message: format!("unknown duplicates policy '{}' (expected reject|replace)", other),
        }),
    }
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some, otherwise keep base.
    ///
    /// A relative `family_file` is resolved against `base_dir` (the directory of the
    /// config file that named it).
    fn merge_with(&self, overlay: &RawSettings, base_dir: Option<&Path>) -> Self {
        let family_file = overlay
            .family_file
            .as_ref()
            .map(|file| match base_dir {
                Some(dir) if file.is_relative() => dir.join(file),
                _ => file.clone(),
            })
            .or_else(|| self.family_file.clone());
        Self {
            family_file,
            duplicates: overlay.duplicates.unwrap_or(self.duplicates),
            ordinals: overlay.ordinals.unwrap_or(self.ordinals),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist when given
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/kinship/kinship.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `KINSHIP_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw, global_path.parent());
            }
        }

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw, path.parent());
        }

        Self::apply_env_overrides(current)
    }

    /// Apply KINSHIP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("KINSHIP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("family_file") {
            settings.family_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("duplicates") {
            settings.duplicates = parse_duplicate_policy(&val)?;
        }
        if let Ok(val) = config.get_bool("ordinals") {
            settings.ordinals = val;
        }

        Ok(settings)
    }

    /// Serialize the effective settings as TOML (for `kinship config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_rejects_duplicates_and_uses_ordinals() {
        let settings = Settings::default();
        assert_eq!(settings.family_file, None);
        assert_eq!(settings.duplicates, DuplicatePolicy::Reject);
        assert!(settings.ordinals);
    }

    #[test]
    fn given_overlay_when_merging_then_only_specified_fields_change() {
        let overlay = RawSettings {
            ordinals: Some(false),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay, None);
        assert!(!merged.ordinals);
        assert_eq!(merged.duplicates, DuplicatePolicy::Reject);
    }

    #[test]
    fn given_relative_family_file_when_merging_then_resolved_against_config_dir() {
        let overlay = RawSettings {
            family_file: Some(PathBuf::from("family.toml")),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay, Some(Path::new("/etc/kinship")));
        assert_eq!(
            merged.family_file,
            Some(PathBuf::from("/etc/kinship/family.toml"))
        );
    }

    #[test]
    fn given_policy_names_when_parsing_then_case_insensitive() {
        assert_eq!(parse_duplicate_policy("Replace").unwrap(), DuplicatePolicy::Replace);
        assert_eq!(parse_duplicate_policy(" reject ").unwrap(), DuplicatePolicy::Reject);
        assert!(parse_duplicate_policy("merge").is_err());
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_policy_name() {
        let settings = Settings {
            duplicates: DuplicatePolicy::Replace,
            ..Settings::default()
        };
        let rendered = settings.to_toml().unwrap();
        assert!(rendered.contains("duplicates = \"replace\""));
    }
}
