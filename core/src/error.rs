use std::path::PathBuf;
use thiserror::Error;

/// Result type for qcslice operations
pub type Result<T> = std::result::Result<T, QcError>;

/// Error types for qcslice operations
#[derive(Error, Debug)]
pub enum QcError {
    /// File does not carry a recognized NIfTI extension
    #[error("{0} is neither .nii nor .nii.gz")]
    UnrecognizedFileType(String),

    /// Path given on input does not exist
    #[error("Path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Subject root has no summary folder
    #[error("No summary folder within subject path: {}", .0.display())]
    MissingSummary(PathBuf),

    /// Path cannot be quoted for a shell command line
    #[error("Cannot quote path for the shell: {}", .0.display())]
    UnquotablePath(PathBuf),

    /// External tool wrote to its error stream
    #[error("Command `{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// Generic classification error
    #[error("Classification error: {0}")]
    Classification(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Directory traversal error
    #[error("Walk error: {0}")]
    WalkError(#[from] walkdir::Error),
}

// Helper conversions
impl From<String> for QcError {
    fn from(s: String) -> Self {
        QcError::Classification(s)
    }
}

impl From<&str> for QcError {
    fn from(s: &str) -> Self {
        QcError::Classification(s.to_string())
    }
}
