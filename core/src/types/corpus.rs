use super::modality::{is_functional, is_sbref};
use std::fmt;
use std::path::{Path, PathBuf};

/// Modality bucket a scan file is triaged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum CorpusBucket {
    T1,
    T2,
    Epi,
}

/// Buckets in report order
pub const CORPUS_BUCKETS: [CorpusBucket; 3] = [CorpusBucket::T1, CorpusBucket::T2, CorpusBucket::Epi];

impl CorpusBucket {
    /// Returns the bucket key used in reports
    pub fn key(&self) -> &'static str {
        match self {
            CorpusBucket::T1 => "t1-data",
            CorpusBucket::T2 => "t2-data",
            CorpusBucket::Epi => "epi-data",
        }
    }

    /// Picks the bucket for a modality string
    ///
    /// First match wins: T1 (contains "T1w" or is exactly "T1"), then T2
    /// likewise, then SBRef or any functional marker. Anything else is
    /// discarded. A bare "T1" substring is not enough since "REST1" holds one.
    pub fn for_modality(modality: &str) -> Option<Self> {
        if modality.contains("T1w") || modality == "T1" {
            Some(CorpusBucket::T1)
        } else if modality.contains("T2w") || modality == "T2" {
            Some(CorpusBucket::T2)
        } else if is_sbref(modality) || is_functional(modality) {
            Some(CorpusBucket::Epi)
        } else {
            None
        }
    }
}

impl fmt::Display for CorpusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Scan paths bucketed by modality, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DataCorpus {
    #[cfg_attr(feature = "json", serde(rename = "t1-data"))]
    pub t1: Vec<PathBuf>,
    #[cfg_attr(feature = "json", serde(rename = "t2-data"))]
    pub t2: Vec<PathBuf>,
    #[cfg_attr(feature = "json", serde(rename = "epi-data"))]
    pub epi: Vec<PathBuf>,
}

impl DataCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path to a bucket
    pub fn push(&mut self, bucket: CorpusBucket, path: PathBuf) {
        self.bucket_mut(bucket).push(path);
    }

    /// Returns the paths in a bucket
    pub fn bucket(&self, bucket: CorpusBucket) -> &[PathBuf] {
        match bucket {
            CorpusBucket::T1 => &self.t1,
            CorpusBucket::T2 => &self.t2,
            CorpusBucket::Epi => &self.epi,
        }
    }

    fn bucket_mut(&mut self, bucket: CorpusBucket) -> &mut Vec<PathBuf> {
        match bucket {
            CorpusBucket::T1 => &mut self.t1,
            CorpusBucket::T2 => &mut self.t2,
            CorpusBucket::Epi => &mut self.epi,
        }
    }

    /// Total number of bucketed paths
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len() + self.epi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bucket holding a path, if any
    pub fn bucket_of(&self, path: &Path) -> Option<CorpusBucket> {
        CORPUS_BUCKETS
            .iter()
            .copied()
            .find(|&b| self.bucket(b).iter().any(|p| p == path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_for_modality() {
        assert_eq!(CorpusBucket::for_modality("T1w"), Some(CorpusBucket::T1));
        assert_eq!(CorpusBucket::for_modality("T2w1"), Some(CorpusBucket::T2));
        assert_eq!(
            CorpusBucket::for_modality("rfMRIREST1"),
            Some(CorpusBucket::Epi)
        );
        assert_eq!(
            CorpusBucket::for_modality("SBRef_task_REST1"),
            Some(CorpusBucket::Epi)
        );
        assert_eq!(CorpusBucket::for_modality("FieldMapPhase"), None);
        assert_eq!(CorpusBucket::for_modality("Unknown"), None);
    }

    #[test]
    fn test_bucket_precedence() {
        // T1 wins over a functional marker in the same string
        assert_eq!(
            CorpusBucket::for_modality("T1w_REST"),
            Some(CorpusBucket::T1)
        );
        assert_eq!(CorpusBucket::for_modality("T2w_MID"), Some(CorpusBucket::T2));
        assert_eq!(CorpusBucket::for_modality("T1"), Some(CorpusBucket::T1));
        // "REST1" carries a T1 substring but is functional
        assert_eq!(
            CorpusBucket::for_modality("SBRef_task_REST1"),
            Some(CorpusBucket::Epi)
        );
    }

    #[test]
    fn test_corpus_push_and_lookup() {
        let mut corpus = DataCorpus::new();
        assert!(corpus.is_empty());

        corpus.push(CorpusBucket::Epi, PathBuf::from("a.nii.gz"));
        corpus.push(CorpusBucket::T1, PathBuf::from("b.nii"));

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.bucket(CorpusBucket::Epi).len(), 1);
        assert_eq!(
            corpus.bucket_of(Path::new("b.nii")),
            Some(CorpusBucket::T1)
        );
        assert_eq!(corpus.bucket_of(Path::new("c.nii")), None);
    }
}
