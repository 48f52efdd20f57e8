//! Slice-position policy
//!
//! Maps a modality string to one of four fixed slice tables. Selection is a
//! pure lookup; identical input always yields the identical map.

use crate::types::{is_functional, is_sbref, SlicePositionMap, SubjectSeriesIdentity};
use log::warn;
use std::fmt;

/// Slices for structural T1 volumes
pub const T1_SLICES: SlicePositionMap = SlicePositionMap::new(55, 115, 145);

/// Slices for structural T2 volumes
pub const T2_SLICES: SlicePositionMap = SlicePositionMap::new(55, 115, 145);

/// Slices for raw functional (REST/MID/SST/nBack) series
pub const EPI_SLICES: SlicePositionMap = SlicePositionMap::new(65, 55, 45);

/// Slices for single-band reference images
pub const SBREF_SLICES: SlicePositionMap = SlicePositionMap::new(65, 55, 45);

/// Named slice table selected for a modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SliceProfile {
    SbRef,
    Epi,
    T2,
    T1,
}

impl SliceProfile {
    /// Selects the profile for a modality, first match wins
    ///
    /// 1. contains "SBRef" → SbRef (reference images also carry "REST")
    /// 2. contains REST, MID, SST or nBack → Epi
    /// 3. contains "T2" → T2
    /// 4. contains "T1" → T1
    ///
    /// Returns `None` when nothing matches.
    pub fn for_modality(modality: &str) -> Option<Self> {
        if is_sbref(modality) {
            Some(SliceProfile::SbRef)
        } else if is_functional(modality) {
            Some(SliceProfile::Epi)
        } else if modality.contains("T2") {
            Some(SliceProfile::T2)
        } else if modality.contains("T1") {
            Some(SliceProfile::T1)
        } else {
            None
        }
    }

    /// Returns the fixed slice table of this profile
    pub fn positions(&self) -> SlicePositionMap {
        match self {
            SliceProfile::SbRef => SBREF_SLICES,
            SliceProfile::Epi => EPI_SLICES,
            SliceProfile::T2 => T2_SLICES,
            SliceProfile::T1 => T1_SLICES,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SliceProfile::SbRef => "sbref",
            SliceProfile::Epi => "epi",
            SliceProfile::T2 => "t2",
            SliceProfile::T1 => "t1",
        }
    }
}

impl fmt::Display for SliceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Selects slice positions for a modality
///
/// Falls back to the T1 table with a warning when no standard modality
/// matches.
///
/// # Example
///
/// ```
/// use qcslice_core::policy::{select_slice_positions, EPI_SLICES, SBREF_SLICES};
///
/// assert_eq!(select_slice_positions("rfMRIREST1"), EPI_SLICES);
/// assert_eq!(select_slice_positions("SBRef_task_REST1"), SBREF_SLICES);
/// ```
pub fn select_slice_positions(modality: &str) -> SlicePositionMap {
    match SliceProfile::for_modality(modality) {
        Some(profile) => profile.positions(),
        None => {
            warn!(
                "{:?} is not in the standard set of slices, defaulting to T1 slices",
                modality
            );
            T1_SLICES
        }
    }
}

/// Selects slice positions for a resolved identity
pub fn slice_positions_for(identity: &SubjectSeriesIdentity) -> SlicePositionMap {
    select_slice_positions(&identity.modality)
}
