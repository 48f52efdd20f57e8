//! Parameter-extraction probe
//!
//! Reads voxel dimensions and timing parameters of a NIfTI file through
//! `fslval` and `mri_info`. Only the modality field drives triage and
//! slicing; the numeric fields feed the parameter table.

use crate::classify::{identify, is_nifti};
use crate::error::{QcError, Result};
use crate::exec::{quote_path, quote_word, CommandRunner};
use crate::types::{ParamRecord, SubjectSeriesIdentity};
use log::{debug, error, info};
use std::path::Path;

/// Modality reported when the identity carries none
pub const UNKNOWN_MODALITY: &str = "UnknownModality";

/// Source of acquisition parameters for a scan file
pub trait ParameterSource {
    /// Probes `path`, reusing `identity` when the caller already has one
    fn probe(&self, path: &Path, identity: Option<&SubjectSeriesIdentity>) -> Result<ParamRecord>;
}

/// Probe backed by `fslval` and `mri_info` invocations
#[derive(Debug, Clone)]
pub struct ParameterProbe<R> {
    runner: R,
}

impl<R: CommandRunner> ParameterProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Builds the composite command echoing `modality` and seven parameters
    ///
    /// The path and modality are shell-quoted.
    pub fn command(path: &Path, modality: &str) -> Result<String> {
        let p = quote_path(path)?;
        let modality = quote_word(modality)
            .map_err(|_| QcError::Classification(format!("unquotable modality {:?}", modality)))?;
        Ok([
            format!("echo {},", modality),
            format!("`fslval {} pixdim1`,", p),
            format!("`fslval {} pixdim2`,", p),
            format!("`fslval {} pixdim3`,", p),
            format!("`mri_info {} | grep TE | awk '{{print $5}}'`,", p),
            format!("`mri_info {} | grep TR | awk '{{print $2}}'`,", p),
            format!("`fslval {} dim4`,", p),
            format!("`mri_info {} | grep TI | awk '{{print $8}}'`", p),
        ]
        .concat())
    }
}

impl<R: CommandRunner> ParameterSource for ParameterProbe<R> {
    fn probe(&self, path: &Path, identity: Option<&SubjectSeriesIdentity>) -> Result<ParamRecord> {
        if !is_nifti(path) {
            error!("wrong file type: {}", path.display());
            return Err(QcError::UnrecognizedFileType(path.display().to_string()));
        }

        info!("getting params on {}", path.display());

        let identity = match identity {
            Some(id) => id.clone(),
            None => identify(path)?,
        };
        debug!("data-info is: {}", identity);

        let modality = if identity.modality.is_empty() {
            UNKNOWN_MODALITY
        } else {
            identity.modality.as_str()
        };

        let reply = self.runner.run(&Self::command(path, modality)?)?;
        Ok(ParamRecord::from_reply(&reply))
    }
}
