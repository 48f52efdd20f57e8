use crate::error::{QcError, Result};
use crate::types::{SubjectSeriesIdentity, SBREF_MARKER};
use log::{debug, warn};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Modality token that marks a reference image named after its directory
const SCOUT: &str = "Scout";

fn subject_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([A-Za-z0-9]+)_").expect("Failed to compile regex"))
}

fn modality_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"rfMRI_REST\d+|ffMRI_REST\d+|tfMRI_MID\d+|tfMRI_nBack\d+|tfMRI_SST\d+",
            r"|T1w|T2w|FieldMap_Magnitude|FieldMap_Phase",
            r"|SpinEchoPhaseEncodePositive|SpinEchoPhaseEncodeNegative",
            r"|ReversePhaseEncodeEPI|Scout",
        ))
        .expect("Failed to compile regex")
    })
}

fn series_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+$").expect("Failed to compile regex"))
}

/// Classifies a NIfTI path against the catalogue of known modality names
///
/// # Algorithm
///
/// 1. Strip the `.nii` / `.nii.gz` extension from the file name
/// 2. Subject code: leading alphanumeric run before the first underscore
/// 3. Modality: first catalogue match (REST/MID/nBack/SST series, T1w, T2w,
///    field maps, spin-echo phase encodes, Scout), underscores removed
/// 4. Series: trailing digits of the stem
/// 5. A `Scout` modality is replaced by `SBRef_<a>_<b>`, where `<a>_<b>` are
///    the last two underscore components of the parent directory name; the
///    replacement is used for both modality and series
///
/// Unmatched fields are `"Unknown"`.
///
/// # Errors
///
/// - [`QcError::UnrecognizedFileType`] for a non-NIfTI extension
/// - [`QcError::Classification`] for a Scout image whose parent directory
///   name has fewer than two underscore components
pub fn classify_by_pattern(path: &Path) -> Result<SubjectSeriesIdentity> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let stem = super::strip_nifti_extension(name)
        .ok_or_else(|| QcError::UnrecognizedFileType(name.to_string()))?;

    let mut identity = SubjectSeriesIdentity::unknown();

    if let Some(caps) = subject_regex().captures(stem) {
        identity.subject_code = caps[1].to_string();
    }

    if let Some(m) = modality_regex().find(stem) {
        let modality = m.as_str().replace('_', "");
        if modality == SCOUT {
            let sbref = sbref_from_parent(path)?;
            identity.modality = sbref.clone();
            identity.series = sbref;
            debug!("{}: Scout image resolved to {}", name, identity.modality);
            return Ok(identity);
        }
        identity.modality = modality;
    }

    if let Some(m) = series_regex().find(stem) {
        identity.series = m.as_str().to_string();
    }

    debug!("{}: {}", name, identity);
    Ok(identity)
}

/// Derives `SBRef_<a>_<b>` from the last two components of the parent directory
fn sbref_from_parent(path: &Path) -> Result<String> {
    let dirname = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let parts: Vec<&str> = dirname.split('_').collect();
    match parts.as_slice() {
        [.., a, b] => Ok(format!("{}_{}_{}", SBREF_MARKER, a, b)),
        _ => {
            warn!(
                "Scout image {} sits in {:?}, which has no series suffix",
                path.display(),
                dirname
            );
            Err(format!("cannot derive SBRef series from directory {:?}", dirname).into())
        }
    }
}
