/// Marker carried by single-band reference acquisitions
pub const SBREF_MARKER: &str = "SBRef";

/// Markers of functional (EPI) series
pub const FUNCTIONAL_MARKERS: &[&str] = &["REST", "MID", "SST", "nBack"];

/// Structural modalities whose series number is folded into the modality
pub const STRUCTURAL_MARKERS: &[&str] = &["T1w", "T2w"];

/// Placeholder for identity fields the pattern classifier could not resolve
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Returns whether the modality names a single-band reference image
pub fn is_sbref(modality: &str) -> bool {
    modality.contains(SBREF_MARKER)
}

/// Returns whether the modality contains any functional series marker
pub fn is_functional(modality: &str) -> bool {
    FUNCTIONAL_MARKERS.iter().any(|m| modality.contains(m))
}
