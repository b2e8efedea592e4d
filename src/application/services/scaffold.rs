//! Day-template scaffolding service
//!
//! Creates `<root>/<days_dir>/day_XXX/day_XXX.md` for a single day or for the
//! whole plan. Directory creation is idempotent; file writes overwrite
//! unconditionally.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::content::render_day;
use crate::domain::DayIndex;
use crate::infrastructure::traits::FileSystem;

/// Scaffolding service for per-day template files.
pub struct ScaffoldService {
    fs: Arc<dyn FileSystem>,
    settings: Settings,
}

impl ScaffoldService {
    /// Create a new scaffold service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Settings) -> Self {
        Self { fs, settings }
    }

    /// The base folder holding the per-day directories: `<root>/<days_dir>`.
    pub fn base_folder(&self, root: &Path) -> PathBuf {
        root.join(&self.settings.days_dir)
    }

    /// Create the markdown template for a given day.
    ///
    /// Validates `1 <= day <= settings.days`, ensures the day's directory
    /// exists, and writes the template file, replacing any previous content.
    /// Returns the path of the written file.
    pub fn create_day_template(&self, day: u32, root: &Path) -> ApplicationResult<PathBuf> {
        let day = DayIndex::new(day, self.settings.days)?;

        let day_folder = self.base_folder(root).join(day.dirname());
        self.fs
            .create_dir_all(&day_folder)
            .with_path_context("create day folder", &day_folder)?;

        let file = day_folder.join(day.filename());
        self.fs
            .write(&file, &render_day(day))
            .with_path_context("write day template", &file)?;

        debug!("created template: {}", file.display());
        Ok(file)
    }

    /// Create folders and templates for all days, `1..=days` ascending.
    ///
    /// The first failing day aborts the whole run; files written for earlier
    /// days are left in place.
    pub fn scaffold(&self, days: u32, root: &Path) -> ApplicationResult<PathBuf> {
        for day in 1..=days {
            self.create_day_template(day, root)?;
        }
        Ok(self.base_folder(root))
    }
}
