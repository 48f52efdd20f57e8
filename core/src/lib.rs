pub mod classify;
pub mod cli;
pub mod error;
pub mod exec;
pub mod layout;
pub mod orchestrator;
pub mod policy;
pub mod probe;
pub mod slicer;
pub mod triage;
pub mod types;

pub use classify::{classify, classify_by_pattern, identify};
pub use cli::report::{write_params_csv, CorpusReport};
pub use error::{QcError, Result};
pub use exec::{CommandRunner, ShellRunner};
pub use layout::SubjectLayout;
pub use orchestrator::{slice_all, SliceOverrides, SliceSummary};
pub use policy::{select_slice_positions, SliceProfile};
pub use probe::{ParameterProbe, ParameterSource};
pub use slicer::Slicer;
pub use triage::{collect_corpus, CorpusTriage};
pub use types::*;
