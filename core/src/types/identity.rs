use super::modality::UNKNOWN_FIELD;
use std::fmt;

/// Subject/series identity derived from a scan filename
///
/// Every field defaults to the empty string when the filename could not be
/// resolved. The pattern classifier uses [`SubjectSeriesIdentity::unknown`]
/// as its starting point instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SubjectSeriesIdentity {
    pub subject_code: String,
    pub modality: String,
    pub series: String,
}

impl SubjectSeriesIdentity {
    /// Creates a new identity
    pub fn new(
        subject_code: impl Into<String>,
        modality: impl Into<String>,
        series: impl Into<String>,
    ) -> Self {
        Self {
            subject_code: subject_code.into(),
            modality: modality.into(),
            series: series.into(),
        }
    }

    /// Identity with every field set to `"Unknown"`
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FIELD, UNKNOWN_FIELD, UNKNOWN_FIELD)
    }

    /// Returns whether no field was resolved
    pub fn is_empty(&self) -> bool {
        self.subject_code.is_empty() && self.modality.is_empty() && self.series.is_empty()
    }

    /// Returns whether the modality carries a usable value
    pub fn has_modality(&self) -> bool {
        !self.modality.is_empty() && self.modality != UNKNOWN_FIELD
    }
}

impl fmt::Display for SubjectSeriesIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subject={} modality={} series={}",
            self.subject_code, self.modality, self.series
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let id = SubjectSeriesIdentity::default();
        assert!(id.is_empty());
        assert!(!id.has_modality());
    }

    #[test]
    fn test_unknown() {
        let id = SubjectSeriesIdentity::unknown();
        assert!(!id.is_empty());
        assert!(!id.has_modality());
        assert_eq!(id.series, "Unknown");
    }

    #[test]
    fn test_display() {
        let id = SubjectSeriesIdentity::new("S", "T1w1", "1");
        assert_eq!(id.to_string(), "subject=S modality=T1w1 series=1");
    }
}
