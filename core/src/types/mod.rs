//! Core type definitions for scan classification and slicing
//!
//! This module provides the value types passed between the classifier, the
//! slice-position policy, corpus triage and the slice orchestrator:
//! - [`SubjectSeriesIdentity`]: subject code, modality and series of a file
//! - [`Plane`] / [`SlicePositionMap`]: fixed x/y/z slice indices
//! - [`CorpusBucket`] / [`DataCorpus`]: scan paths bucketed by modality
//! - [`ParamRecord`]: acquisition parameters reported by the probe
//! - [`TriageConfig`]: exclusion rules applied during corpus triage

mod config;
mod corpus;
mod identity;
mod modality;
mod params;
mod slices;

pub use config::TriageConfig;
pub use corpus::{CorpusBucket, DataCorpus, CORPUS_BUCKETS};
pub use identity::SubjectSeriesIdentity;
pub use modality::{
    is_functional, is_sbref, FUNCTIONAL_MARKERS, SBREF_MARKER, STRUCTURAL_MARKERS,
    UNKNOWN_FIELD,
};
pub use params::{ParamRecord, NOT_FOUND, PARAMS_HEADER};
pub use slices::{Plane, SlicePositionMap, ALL_PLANES};
