//! Résumé to job match scoring and résumé completeness, served over HTTP by the
//! `match-api` binary.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;

pub use scoring::completeness::{compute_completeness_score, compute_completeness_score_from_json};
pub use scoring::engine::{compute_match_score, compute_match_score_from_json};
