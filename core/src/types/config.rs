/// Substrings that exclude a path from corpus triage by default
pub const DEFAULT_EXCLUSIONS: &[&str] = &["unused", "cortex", "FieldMap"];

/// Configuration for corpus triage
///
/// A file whose absolute path contains any of `exclude_substrings` is
/// skipped before it is probed.
///
/// # Example
///
/// ```
/// use qcslice_core::TriageConfig;
///
/// let config = TriageConfig::default().exclude("scratch");
/// assert!(config.is_excluded("/data/scratch/T1w.nii.gz"));
/// assert!(config.is_excluded("/data/unused/T1w.nii.gz"));
/// assert!(!TriageConfig::permissive().is_excluded("/data/unused/T1w.nii.gz"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct TriageConfig {
    /// Path substrings that reject a file
    pub exclude_substrings: Vec<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            exclude_substrings: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TriageConfig {
    /// Creates a TriageConfig with no exclusions
    pub fn permissive() -> Self {
        Self {
            exclude_substrings: Vec::new(),
        }
    }

    /// Builder: add an exclusion substring
    pub fn exclude(mut self, substring: impl Into<String>) -> Self {
        self.exclude_substrings.push(substring.into());
        self
    }

    /// Returns whether a path matches an exclusion rule
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_substrings
            .iter()
            .any(|s| path.contains(s.as_str()))
    }
}
