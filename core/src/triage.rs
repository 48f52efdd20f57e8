//! Corpus triage
//!
//! Walks a directory tree and buckets NIfTI files into t1/t2/epi groups by
//! the modality the parameter probe reports for them.

use crate::classify::is_nifti;
use crate::error::{QcError, Result};
use crate::probe::ParameterSource;
use crate::types::{is_sbref, CorpusBucket, DataCorpus, TriageConfig};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File the probe could not classify
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ProbeFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one triage pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct CorpusTriage {
    /// Bucketed paths
    pub corpus: DataCorpus,

    /// Files skipped because probing failed
    pub failures: Vec<ProbeFailure>,

    /// Whether the last epi entry is an SBRef image
    pub sbref_present: bool,
}

/// Walks `root` and buckets every qualifying NIfTI file
///
/// # Algorithm
///
/// 1. Visit every regular file below `root`, in file-name order per directory
/// 2. Skip files without a `.nii` / `.nii.gz` extension
/// 3. Skip files whose absolute path matches an exclusion in `config`
/// 4. Probe the file; a failed probe is logged, recorded and skipped
/// 5. Bucket by the reported modality ([`CorpusBucket::for_modality`])
/// 6. Check that the last epi entry is an SBRef image; log when it is not
///
/// # Errors
///
/// Returns [`QcError::PathNotFound`] if `root` does not exist. Unreadable
/// entries below `root` are logged and skipped.
pub fn collect_corpus(
    root: &Path,
    source: &dyn ParameterSource,
    config: &TriageConfig,
) -> Result<CorpusTriage> {
    let root = root
        .canonicalize()
        .map_err(|_| QcError::PathNotFound(root.to_path_buf()))?;

    info!("getting list of data in {}", root.display());

    let mut triage = CorpusTriage::default();
    let mut last_epi_modality: Option<String> = None;

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error accessing entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_nifti(path) {
            continue;
        }
        if config.is_excluded(&path.to_string_lossy()) {
            debug!("excluded: {}", path.display());
            continue;
        }

        info!("processing nifti file: {}", path.display());

        let modality = match source.probe(path, None) {
            Ok(record) => record.modality,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                triage.failures.push(ProbeFailure {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        debug!("modality = {}", modality);

        match CorpusBucket::for_modality(&modality) {
            Some(bucket) => {
                if bucket == CorpusBucket::Epi {
                    last_epi_modality = Some(modality);
                }
                triage.corpus.push(bucket, path.to_path_buf());
            }
            None => debug!("{}: modality {:?} fits no bucket", path.display(), modality),
        }
    }

    triage.sbref_present = last_epi_modality.as_deref().is_some_and(is_sbref);
    if !triage.sbref_present {
        info!("no SBRef data in epi-data list");
    }

    debug!("data lists: {:?}", triage.corpus);
    Ok(triage)
}
