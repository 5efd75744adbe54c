use thiserror::Error;

/// Errors that abort a synthesis run before or during orchestration.
///
/// Transient generation-service failures never appear here; they
/// degrade to documented defaults inside the synthesizer.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Core(#[from] rosterforge_core::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}
