//! Kinship service
//!
//! Loads a family definition from disk according to the settings and renders
//! query results.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{FamilyBuilder, FamilyTree, Kinship};

/// Service for loading families and presenting kinship results.
#[derive(Debug, Clone)]
pub struct KinshipService {
    settings: Settings,
}

impl KinshipService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Pick the family file: explicit argument first, then `family_file` from settings.
    pub fn family_path(&self, explicit: Option<&Path>) -> ApplicationResult<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.settings.family_file.clone())
            .ok_or(ApplicationError::NoFamilyFile)
    }

    /// Read and build the family tree, applying the configured duplicate policy.
    #[instrument(level = "debug", skip(self))]
    pub fn load_family(&self, explicit: Option<&Path>) -> ApplicationResult<FamilyTree> {
        let path = self.family_path(explicit)?;
        debug!("load_family: path={}", path.display());
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ApplicationError::io("read family file", &path, e))?;
        let tree = FamilyBuilder::new()
            .duplicates(self.settings.duplicates)
            .build_from_str(&content)?;
        debug!(
            "loaded {} members, duplicates={:?}",
            tree.len(),
            tree.duplicate_policy()
        );
        Ok(tree)
    }

    pub fn describe(&self, kinship: &Kinship) -> String {
        kinship.describe(self.settings.ordinals)
    }
}
