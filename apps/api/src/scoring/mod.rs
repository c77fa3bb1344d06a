//! Relevance scoring between a candidate's résumé profile and a job posting,
//! plus the job-independent completeness score.
//!
//! All scoring functions are pure and synchronous. `cache` and `handlers`
//! connect them to persistence and HTTP.

use thiserror::Error;

pub mod boost;
pub mod cache;
pub mod completeness;
pub mod engine;
pub mod fallback;
pub mod flatten;
pub mod handlers;
pub mod similarity;
pub mod text;
pub mod vectorizer;

/// Errors surfaced by the public scoring entry points.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons the statistical signal is unavailable. Never escapes the engine;
/// both variants route to the keyword fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("degenerate vocabulary: no usable terms after preprocessing")]
    DegenerateVocabulary,

    #[error("similarity computation failed: {0}")]
    Computation(String),
}
