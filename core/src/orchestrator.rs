//! Slice orchestration
//!
//! Resolves an identity for each file and requests an orthogonal composite
//! image plus, optionally, one image per plane at the policy's slice index.

use crate::classify::identify;
use crate::error::Result;
use crate::exec::CommandRunner;
use crate::policy::select_slice_positions;
use crate::slicer::Slicer;
use crate::types::{Plane, SubjectSeriesIdentity};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Caller-supplied identity fields that skip per-file classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceOverrides {
    pub subject_code: Option<String>,
    pub modality: Option<String>,
}

impl SliceOverrides {
    /// Builder: fix the subject code
    pub fn with_subject_code(mut self, subject_code: impl Into<String>) -> Self {
        self.subject_code = Some(subject_code.into());
        self
    }

    /// Builder: fix the modality
    pub fn with_modality(mut self, modality: impl Into<String>) -> Self {
        self.modality = Some(modality.into());
        self
    }

    fn is_complete(&self) -> bool {
        self.subject_code.is_some() && self.modality.is_some()
    }
}

/// Slicing request that did not produce an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceFailure {
    pub input: PathBuf,
    pub reason: String,
}

/// Images written and requests that failed during one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<SliceFailure>,
}

impl SliceSummary {
    fn record(&mut self, input: &Path, outcome: Result<PathBuf>) {
        match outcome {
            Ok(dst) => {
                info!("wrote {}", dst.display());
                self.written.push(dst);
            }
            Err(e) => {
                error!("{}: {}", input.display(), e);
                self.failures.push(SliceFailure {
                    input: input.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Resolves the identity of `path`, preferring the overrides
fn resolve_identity(path: &Path, overrides: &SliceOverrides) -> Result<SubjectSeriesIdentity> {
    let mut identity = if overrides.is_complete() {
        SubjectSeriesIdentity::default()
    } else {
        identify(path)?
    };

    if let Some(subject_code) = &overrides.subject_code {
        identity.subject_code = subject_code.clone();
    }
    if let Some(modality) = &overrides.modality {
        identity.modality = modality.clone();
    }
    Ok(identity)
}

/// Chooses the name stem of the composite image
///
/// An explicit modality wins, then an explicit subject code, then the
/// resolved modality, then the input file name.
fn image_label(path: &Path, identity: &SubjectSeriesIdentity, overrides: &SliceOverrides) -> String {
    if overrides.modality.is_some() {
        identity.modality.clone()
    } else if overrides.subject_code.is_some() {
        identity.subject_code.clone()
    } else if identity.has_modality() {
        identity.modality.clone()
    } else {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(crate::classify::strip_nifti_extension)
            .unwrap_or("image")
            .to_string()
    }
}

/// Per-plane image path: `<label>_<plane>-<index>.png`
pub fn plane_image_path(dest_dir: &Path, label: &str, plane: Plane, index: i32) -> PathBuf {
    dest_dir.join(format!("{}_{}-{}.png", label, plane, index))
}

/// Slices every file in `files` into `dest_dir`
///
/// Files are processed sequentially. A file whose identity cannot be
/// resolved, or whose slicing request fails, is recorded in the summary and
/// the pass continues with the next request.
///
/// # Errors
///
/// Returns an error only when `dest_dir` cannot be created.
pub fn slice_all<R: CommandRunner>(
    files: &[PathBuf],
    dest_dir: &Path,
    also_per_plane: bool,
    overrides: &SliceOverrides,
    slicer: &Slicer<R>,
) -> Result<SliceSummary> {
    fs::create_dir_all(dest_dir)?;

    let mut summary = SliceSummary::default();

    for path in files {
        info!("slicing {}", path.display());

        let identity = match resolve_identity(path, overrides) {
            Ok(identity) => identity,
            Err(e) => {
                summary.record(path, Err(e));
                continue;
            }
        };

        let label = image_label(path, &identity, overrides);
        let ortho = dest_dir.join(format!("{}.png", label));
        summary.record(path, slicer.ortho_row(path, &ortho));

        if also_per_plane {
            let positions = select_slice_positions(&identity.modality);
            for (plane, index) in positions.iter() {
                let dst = plane_image_path(dest_dir, &label, plane, index);
                summary.record(path, slicer.single_plane(path, plane, index, &dst));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QcError;
    use crate::exec::quote_path;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Runner that records commands and fails those containing `fail_on`
    struct RecordingRunner {
        commands: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl RecordingRunner {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                commands: RefCell::new(Vec::new()),
                fail_on,
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str) -> Result<String> {
            self.commands.borrow_mut().push(command.to_string());
            match self.fail_on {
                Some(marker) if command.contains(marker) => Err(QcError::CommandFailed {
                    command: command.to_string(),
                    stderr: "slicer: cannot open".to_string(),
                }),
                _ => Ok(String::new()),
            }
        }
    }

    #[test]
    fn test_slice_all_ortho_only() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("img");
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        let files = vec![
            PathBuf::from("/d/HCP01_T1w_MPR1.nii.gz"),
            PathBuf::from("/d/HCP01_rfMRI_REST1.nii.gz"),
        ];
        let summary = slice_all(&files, &dest, false, &SliceOverrides::default(), &slicer).unwrap();

        assert!(dest.is_dir());
        assert_eq!(
            summary.written,
            vec![dest.join("T1w1.png"), dest.join("rfMRIREST1.png")]
        );
        assert!(summary.failures.is_empty());
        assert_eq!(runner.commands.borrow().len(), 2);
    }

    #[test]
    fn test_slice_all_per_plane() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        let files = vec![PathBuf::from("/d/HCP01_rfMRI_REST1.nii.gz")];
        let summary = slice_all(&files, &dest, true, &SliceOverrides::default(), &slicer).unwrap();

        assert_eq!(
            summary.written,
            vec![
                dest.join("rfMRIREST1.png"),
                dest.join("rfMRIREST1_x-65.png"),
                dest.join("rfMRIREST1_y-55.png"),
                dest.join("rfMRIREST1_z-45.png"),
            ]
        );
        assert_eq!(
            runner.commands.borrow()[1],
            format!(
                "slicer /d/HCP01_rfMRI_REST1.nii.gz -u -x -65 {}",
                quote_path(&dest.join("rfMRIREST1_x-65.png")).unwrap()
            )
        );
    }

    #[test]
    fn test_slice_all_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        // Unclassifiable name; the overrides supply everything
        let files = vec![PathBuf::from("/d/brain.nii")];
        let overrides = SliceOverrides::default()
            .with_subject_code("S01")
            .with_modality("T2w");
        let summary = slice_all(&files, &dest, true, &overrides, &slicer).unwrap();

        assert_eq!(summary.written[0], dest.join("T2w.png"));
        assert_eq!(summary.written[3], dest.join("T2w_z-145.png"));

        let overrides = SliceOverrides::default().with_subject_code("S01");
        let summary = slice_all(&files, &dest, false, &overrides, &slicer).unwrap();
        assert_eq!(summary.written, vec![dest.join("S01.png")]);
    }

    #[test]
    fn test_slice_all_continues_after_failure() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(Some("broken_T1w"));
        let slicer = Slicer::new(&runner);

        let files = vec![
            PathBuf::from("/d/broken_T1w_MPR1.nii"),
            PathBuf::from("/d/notes.txt"),
            PathBuf::from("/d/HCP01_T2w_SPC1.nii"),
        ];
        let summary = slice_all(&files, &dest, false, &SliceOverrides::default(), &slicer).unwrap();

        assert_eq!(summary.written, vec![dest.join("T2w1.png")]);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[1].input, PathBuf::from("/d/notes.txt"));
    }

    #[test]
    fn test_unknown_modality_falls_back_to_file_stem() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        let files = vec![PathBuf::from("/d/HCP01_DWI_dir95_AP_run_01.nii.gz")];
        let summary = slice_all(&files, &dest, true, &SliceOverrides::default(), &slicer).unwrap();

        assert_eq!(summary.written[0], dest.join("HCP01_DWI_dir95_AP_run_01.png"));
        // No standard modality: T1 table
        assert_eq!(
            summary.written[1],
            dest.join("HCP01_DWI_dir95_AP_run_01_x-55.png")
        );
    }

    #[test]
    fn test_structural_series_get_distinct_images() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        let files = vec![
            PathBuf::from("/d/HCP01_T1w_MPR1.nii.gz"),
            PathBuf::from("/d/HCP01_T1w_MPR2.nii.gz"),
        ];
        let summary = slice_all(&files, &dest, true, &SliceOverrides::default(), &slicer).unwrap();

        assert_eq!(summary.written.len(), 8);
        assert_eq!(summary.written[0], dest.join("T1w1.png"));
        assert_eq!(summary.written[4], dest.join("T1w2.png"));
        assert_eq!(summary.written[5], dest.join("T1w2_x-55.png"));

        // Same names in reverse order
        let reversed: Vec<PathBuf> = files.iter().rev().cloned().collect();
        let again = slice_all(&reversed, &dest, true, &SliceOverrides::default(), &slicer).unwrap();
        let mut first = summary.written.clone();
        let mut second = again.written.clone();
        first.sort();
        second.sort();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filename_tokens_resolve_unlisted_modality() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().to_path_buf();
        let runner = RecordingRunner::new(None);
        let slicer = Slicer::new(&runner);

        let files = vec![PathBuf::from("/d/PPMI_3551_REST1.nii")];
        let summary = slice_all(&files, &dest, true, &SliceOverrides::default(), &slicer).unwrap();

        assert_eq!(summary.written[0], dest.join("REST1.png"));
        // Functional series: EPI table
        assert_eq!(summary.written[1], dest.join("REST1_x-65.png"));
    }
}
