use std::path::Path;

/// Recognized NIfTI file extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NiftiExtension {
    Nii,
    NiiGz,
}

impl NiftiExtension {
    /// Returns the suffix including the leading dot
    pub fn suffix(&self) -> &'static str {
        match self {
            NiftiExtension::Nii => ".nii",
            NiftiExtension::NiiGz => ".nii.gz",
        }
    }

    /// Detects the extension of a filename
    pub fn of(filename: &str) -> Option<Self> {
        if filename.ends_with(".nii.gz") {
            Some(NiftiExtension::NiiGz)
        } else if filename.ends_with(".nii") {
            Some(NiftiExtension::Nii)
        } else {
            None
        }
    }
}

/// Strips a recognized extension, returning the stem
///
/// Only the exact suffix is removed, so stems ending in `n`, `i`, `g` or
/// `z` survive intact.
pub fn strip_nifti_extension(filename: &str) -> Option<&str> {
    NiftiExtension::of(filename).and_then(|ext| filename.strip_suffix(ext.suffix()))
}

/// Checks whether a path names a NIfTI file
pub fn is_nifti(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(NiftiExtension::of)
        .is_some()
}
