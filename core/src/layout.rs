//! Subject directory layout
//!
//! A subject root holds processed images in a `summary` folder and raw
//! sources in `unprocessed/NIFTI`.

use crate::error::{QcError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Preferred summary folder name
pub const SUMMARY_V2_DIR: &str = "summary_FNL_preproc_v2";

/// Paths of interest under a subject root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectLayout {
    pub root: PathBuf,
    /// Folder holding processed summary images
    pub images_dir: PathBuf,
    /// Folder holding raw NIfTI sources
    pub data_dir: PathBuf,
}

impl SubjectLayout {
    /// Resolves the layout of a subject root
    ///
    /// The images folder is [`SUMMARY_V2_DIR`] when present, otherwise the
    /// first child directory (by name) whose name contains `summary`.
    ///
    /// # Errors
    ///
    /// - [`QcError::PathNotFound`] if `root` does not exist
    /// - [`QcError::MissingSummary`] if no summary folder is found
    pub fn resolve(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(QcError::PathNotFound(root.to_path_buf()));
        }
        debug!("subject path is {}", root.display());

        let v2 = root.join(SUMMARY_V2_DIR);
        let images_dir = if v2.is_dir() {
            v2
        } else {
            find_summary_dir(root)?.ok_or_else(|| QcError::MissingSummary(root.to_path_buf()))?
        };
        debug!("images in: {}", images_dir.display());

        let data_dir = root.join("unprocessed").join("NIFTI");
        debug!("data are in: {}", data_dir.display());

        Ok(Self {
            root: root.to_path_buf(),
            images_dir,
            data_dir,
        })
    }
}

fn find_summary_dir(root: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let is_summary = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains("summary"));
        if is_summary && path.is_dir() {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_v2() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("summary")).unwrap();
        fs::create_dir(root.join(SUMMARY_V2_DIR)).unwrap();

        let layout = SubjectLayout::resolve(root).unwrap();
        assert_eq!(layout.images_dir, root.join(SUMMARY_V2_DIR));
        assert_eq!(layout.data_dir, root.join("unprocessed/NIFTI"));
    }

    #[test]
    fn test_resolve_falls_back_to_any_summary() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("b_summary")).unwrap();
        fs::create_dir(root.join("a_summary")).unwrap();
        fs::write(root.join("summary.txt"), "").unwrap();

        let layout = SubjectLayout::resolve(root).unwrap();
        assert_eq!(layout.images_dir, root.join("a_summary"));
    }

    #[test]
    fn test_resolve_missing_summary() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            SubjectLayout::resolve(temp_dir.path()),
            Err(QcError::MissingSummary(_))
        ));
    }

    #[test]
    fn test_resolve_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            SubjectLayout::resolve(&temp_dir.path().join("nope")),
            Err(QcError::PathNotFound(_))
        ));
    }
}
