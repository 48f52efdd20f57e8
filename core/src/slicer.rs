//! Adapter for the FSL `slicer` tool

use crate::error::Result;
use crate::exec::{quote_path, CommandRunner};
use crate::types::Plane;
use std::path::{Path, PathBuf};

/// Issues slice image requests to `slicer`
#[derive(Debug, Clone)]
pub struct Slicer<R> {
    runner: R,
}

impl<R: CommandRunner> Slicer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Writes an orthogonal row of mid-volume slices to `dst`
    pub fn ortho_row(&self, input: &Path, dst: &Path) -> Result<PathBuf> {
        let cmd = format!("slicer {} -u -a {}", quote_path(input)?, quote_path(dst)?);
        self.runner.run(&cmd)?;
        Ok(dst.to_path_buf())
    }

    /// Writes slice `index` along `plane` to `dst`
    ///
    /// The index is passed negated, which `slicer` reads as an absolute
    /// slice number rather than a fraction of the volume.
    pub fn single_plane(&self, input: &Path, plane: Plane, index: i32, dst: &Path) -> Result<PathBuf> {
        let cmd = format!(
            "slicer {} -u -{} -{} {}",
            quote_path(input)?,
            plane,
            index,
            quote_path(dst)?
        );
        self.runner.run(&cmd)?;
        Ok(dst.to_path_buf())
    }
}
