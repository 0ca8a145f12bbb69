#![forbid(unsafe_code)]
//! Data model for the kable web UI.
//!
//! Everything here is an immutable, literal record with structural equality
//! only. There is no persistence and no identity beyond the fields
//! themselves; fixture accessors hand out owned values per call.

mod concept;
mod repository;

pub use concept::{
    ConceptDetail, ConceptSummary, InputField, InputSchema, InputType, Maintainer, MaturityCounts,
    PackagingType, RepositoryRef,
};
pub use repository::{count_visibility, Repository, VisibilityCounts};

pub const CRATE_NAME: &str = "kable-ui-model";
