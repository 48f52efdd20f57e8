//! Filename-derived identity classification
//!
//! Two classifiers turn a scan filename into a [`SubjectSeriesIdentity`]:
//! - [`classify`]: positional rules dispatched on the underscore token count
//! - [`classify_by_pattern`]: regex catalogue of known modality names
//!
//! [`identify`] combines both and is what triage and slicing resolve files
//! with.
//!
//! [`SubjectSeriesIdentity`]: crate::types::SubjectSeriesIdentity

pub mod extension;
pub mod pattern;
pub mod tokens;

pub use extension::{is_nifti, strip_nifti_extension, NiftiExtension};
pub use pattern::classify_by_pattern;
pub use tokens::{classify, classify_stem, FilenameShape};

use crate::error::Result;
use crate::types::{SubjectSeriesIdentity, STRUCTURAL_MARKERS, UNKNOWN_FIELD};
use log::debug;
use std::path::Path;

/// Resolves the identity of a NIfTI path
///
/// The catalogue classifier runs first. When it finds no modality, the
/// token-count classifier is tried on the file name and its identity is used
/// if it resolves a modality. A catalogue match on a structural modality
/// (`T1w`, `T2w`) gets its series number appended, so `HCP01_T1w_MPR2`
/// resolves to `T1w2` like the token classifier's four-part rule.
///
/// # Errors
///
/// Propagates the errors of [`classify_by_pattern`].
pub fn identify(path: &Path) -> Result<SubjectSeriesIdentity> {
    let mut identity = classify_by_pattern(path)?;

    if !identity.has_modality() {
        if let Ok(by_tokens) = classify(&path.to_string_lossy()) {
            if by_tokens.has_modality() {
                debug!("{}: resolved by filename tokens", path.display());
                return Ok(by_tokens);
            }
        }
        return Ok(identity);
    }

    if STRUCTURAL_MARKERS.contains(&identity.modality.as_str()) && identity.series != UNKNOWN_FIELD {
        identity.modality.push_str(&identity.series);
    }
    Ok(identity)
}
