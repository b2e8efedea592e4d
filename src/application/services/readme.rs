//! README assembly service

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::content::render_readme;
use crate::infrastructure::traits::FileSystem;

/// Assembles and writes the aggregate README document.
pub struct ReadmeService {
    fs: Arc<dyn FileSystem>,
    settings: Settings,
}

impl ReadmeService {
    /// Create a new README service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Settings) -> Self {
        Self { fs, settings }
    }

    /// Default destination: `<root>/README.md` (per `settings.readme_name`).
    pub fn default_destination(&self, root: &Path) -> PathBuf {
        root.join(&self.settings.readme_name)
    }

    /// Write the README to `destination`, overwriting unconditionally.
    ///
    /// The document is assembled in memory and written in one call, never
    /// appended incrementally. Returns the destination path.
    pub fn generate(&self, destination: &Path) -> ApplicationResult<PathBuf> {
        let content = render_readme(
            &self.settings.course_title,
            self.settings.days,
            &self.settings.days_dir,
        );
        self.fs
            .ensure_parent(destination)
            .with_path_context("create parent directory", destination)?;
        self.fs
            .write(destination, &content)
            .with_path_context("write README", destination)?;

        debug!("generated README: {}", destination.display());
        Ok(destination.to_path_buf())
    }
}
