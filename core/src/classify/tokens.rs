use crate::error::{QcError, Result};
use crate::types::{SubjectSeriesIdentity, SBREF_MARKER, STRUCTURAL_MARKERS};
use log::{debug, warn};
use std::path::Path;

const DELIMITER: char = '_';

/// Shape of an underscore-delimited filename stem
///
/// Each shape maps its tokens to an identity with fixed positional rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameShape {
    /// Two tokens or fewer; not enough parts to classify
    TooShort(usize),
    /// `prefix_subject_modality`
    Triple,
    /// `prefix_subject_series_base` with an SBRef marker
    SbRefQuad,
    /// `prefix_subject_modality_series`
    Quad,
    /// `prefix_subject_x_modality_series`
    Quint,
    /// More than five tokens
    Unsupported(usize),
}

impl FilenameShape {
    /// Determines the shape of a tokenized stem
    pub fn of(tokens: &[&str]) -> Self {
        match tokens.len() {
            n if n <= 2 => FilenameShape::TooShort(n),
            3 => FilenameShape::Triple,
            4 if tokens.iter().any(|t| t.contains(SBREF_MARKER)) => FilenameShape::SbRefQuad,
            4 => FilenameShape::Quad,
            5 => FilenameShape::Quint,
            n => FilenameShape::Unsupported(n),
        }
    }

    /// Returns whether the shape resolves to an identity
    pub fn is_supported(&self) -> bool {
        !matches!(
            self,
            FilenameShape::TooShort(_) | FilenameShape::Unsupported(_)
        )
    }

    /// Applies the positional rules of this shape
    ///
    /// `tokens` must be the sequence the shape was computed from.
    fn identity(&self, tokens: &[&str]) -> SubjectSeriesIdentity {
        match *self {
            FilenameShape::Triple => {
                SubjectSeriesIdentity::new(tokens[1], tokens[2], tokens[2])
            }
            FilenameShape::SbRefQuad => {
                let series = tokens[2];
                SubjectSeriesIdentity::new(tokens[1], format!("{}{}", tokens[3], series), series)
            }
            FilenameShape::Quad => {
                let series = tokens[3];
                let mut modality = tokens[2].to_string();
                if STRUCTURAL_MARKERS.contains(&tokens[2]) {
                    modality.push_str(series);
                }
                SubjectSeriesIdentity::new(tokens[1], modality, series)
            }
            FilenameShape::Quint => SubjectSeriesIdentity::new(tokens[1], tokens[3], tokens[4]),
            FilenameShape::TooShort(_) | FilenameShape::Unsupported(_) => {
                SubjectSeriesIdentity::default()
            }
        }
    }
}

/// Classifies an extension-free stem
///
/// Returns the detected shape alongside the identity so callers can tell an
/// empty identity from a resolved one. Unsupported shapes yield an empty
/// identity and a warning; they never fail.
pub fn classify_stem(stem: &str) -> (FilenameShape, SubjectSeriesIdentity) {
    let tokens: Vec<&str> = stem.split(DELIMITER).collect();
    let shape = FilenameShape::of(&tokens);

    match shape {
        FilenameShape::TooShort(n) => {
            warn!("{}: not enough parts ({}) to classify", stem, n);
        }
        FilenameShape::Unsupported(n) => {
            warn!("{}: {} parts is not a supported filename shape", stem, n);
        }
        _ => debug!("{}: classified as {:?}", stem, shape),
    }

    (shape, shape.identity(&tokens))
}

/// Classifies a NIfTI filename by its underscore-delimited tokens
///
/// Directory components are ignored; only the file name is tokenized.
///
/// # Errors
///
/// Returns [`QcError::UnrecognizedFileType`] when the name ends in neither
/// `.nii` nor `.nii.gz`. Callers are expected to skip such files.
///
/// # Example
///
/// ```
/// use qcslice_core::classify;
///
/// let id = classify("HCP_S01_T1w_2.nii.gz").unwrap();
/// assert_eq!(id.subject_code, "S01");
/// assert_eq!(id.modality, "T1w2");
/// assert_eq!(id.series, "2");
/// ```
pub fn classify(filename: &str) -> Result<SubjectSeriesIdentity> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    let stem = super::strip_nifti_extension(name).ok_or_else(|| {
        warn!("{} is neither .nii nor .nii.gz", name);
        QcError::UnrecognizedFileType(name.to_string())
    })?;

    Ok(classify_stem(stem).1)
}
