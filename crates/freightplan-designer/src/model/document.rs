//! File metadata of a plan.

use chrono::{DateTime, Utc};
use freightplan_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backing file and modification state of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    file_path: PathBuf,
    /// Set when modified since the last save
    last_modified: Option<DateTime<Utc>>,
    last_saved: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            last_modified: None,
            last_saved: None,
        }
    }

    /// Display name: the file name without its extension.
    pub fn name(&self) -> String {
        self.file_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The backing path made absolute against the working directory.
    pub fn absolute_file_path(&self) -> PathBuf {
        std::path::absolute(&self.file_path).unwrap_or_else(|_| self.file_path.clone())
    }

    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = path.into();
    }

    /// Whether there are changes since the last save.
    pub fn modified(&self) -> bool {
        self.last_modified.is_some()
    }

    /// Record a modification now.
    pub fn touch(&mut self) {
        self.last_modified = Some(Utc::now());
    }

    /// Record a successful save now.
    pub fn mark_saved(&mut self) {
        self.last_saved = Some(Utc::now());
        self.last_modified = None;
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Write the plan to `path`.
    ///
    /// No on-disk format exists yet, so this always fails with
    /// `Unsupported` and leaves the modification state untouched.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        tracing::warn!("Saving to {} is not supported", path.display());
        Err(Error::unsupported("Document::save"))
    }

    /// Read a plan from `path`. Always fails with `Unsupported`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        tracing::warn!("Loading from {} is not supported", path.display());
        Err(Error::unsupported("Document::load"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let doc = Document::new("decks/Hauler Mk2.fpl");
        assert_eq!(doc.name(), "Hauler Mk2");
        assert_eq!(doc.file_name(), "Hauler Mk2.fpl");
        assert!(doc.absolute_file_path().is_absolute());
    }

    #[test]
    fn test_modified_tracks_touch_and_save() {
        let mut doc = Document::new("New Plan 1");
        assert!(!doc.modified());

        doc.touch();
        assert!(doc.modified());
        assert!(doc.last_modified().is_some());

        doc.mark_saved();
        assert!(!doc.modified());
        assert!(doc.last_saved().is_some());
    }

    #[test]
    fn test_save_is_unsupported() {
        let mut doc = Document::new("a.fpl");
        doc.touch();
        let err = doc.save(Path::new("a.fpl")).unwrap_err();
        assert!(err.is_unsupported());
        assert!(doc.modified());
    }
}
