use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeProfile;
use crate::scoring::cache::{
    backfill_missing, recompute_job, recompute_match, score_for_match, CachedScore,
    RecomputeSummary,
};
use crate::scoring::completeness::{compute_completeness_report, CompletenessReport};
use crate::scoring::engine::{explain_match_score_from_json, MatchScore};
use crate::scoring::flatten::summarize_profile;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchScoreRequest {
    pub resume: Value,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

/// POST /api/v1/scores/match
pub async fn handle_match_score(
    Json(req): Json<MatchScoreRequest>,
) -> Result<Json<MatchScore>, AppError> {
    let explained = explain_match_score_from_json(
        &req.resume,
        req.description.as_deref(),
        req.requirements.as_deref(),
    )?;
    Ok(Json(explained))
}

#[derive(Serialize)]
pub struct ProfileQualityResponse {
    pub completeness: CompletenessReport,
    pub profile_summary: String,
}

/// POST /api/v1/scores/completeness
pub async fn handle_completeness(
    Json(extracted): Json<Value>,
) -> Result<Json<ProfileQualityResponse>, AppError> {
    let resume = ResumeProfile::from_value(&extracted)?;
    let name = extracted
        .pointer("/personal_details/name")
        .and_then(Value::as_str);
    Ok(Json(ProfileQualityResponse {
        completeness: compute_completeness_report(&resume),
        profile_summary: summarize_profile(&resume, name),
    }))
}

/// GET /api/v1/matches/:id/score
pub async fn handle_get_match_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CachedScore>, AppError> {
    Ok(Json(score_for_match(state.store.as_ref(), id).await?))
}

/// POST /api/v1/matches/:id/recompute
pub async fn handle_recompute_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CachedScore>, AppError> {
    Ok(Json(recompute_match(state.store.as_ref(), id).await?))
}

/// POST /api/v1/jobs/:id/recompute
pub async fn handle_recompute_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecomputeSummary>, AppError> {
    Ok(Json(recompute_job(state.store.as_ref(), id).await?))
}

/// POST /api/v1/matches/backfill
pub async fn handle_backfill(
    State(state): State<AppState>,
) -> Result<Json<RecomputeSummary>, AppError> {
    Ok(Json(backfill_missing(state.store.as_ref()).await?))
}
