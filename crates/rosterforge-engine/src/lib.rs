//! The Roster Synthesis Engine.
//!
//! Turns sparse, partially-specified requests into fully-populated,
//! schema-valid wrestler and company record sets: coherent dates,
//! clamped byte attributes, sampled skills, expanded popularity
//! vectors, and cross-referenced contracts. Execution is sequential;
//! one entity's synthesis completes before the next begins.

pub mod contract;
pub mod engine;
pub mod errors;
pub mod ids;
pub mod model;
pub mod popularity;
pub mod prompts;
pub mod skills;
pub mod synthesizer;
pub mod temporal;

pub use engine::RosterEngine;
pub use errors::SynthesisError;
pub use ids::IdAllocator;
pub use model::{
    CompanyRequest, EngineOptions, RecordSet, RunReport, RunRequest, RunWarning, WrestlerRequest,
};
