//! Cache-aside contract between the scoring engine and match persistence.
//!
//! A stored score is reused until a recompute is requested. A null score means
//! "never computed" and triggers computation; a stored 0 is a real score.
//! Racing first computations are harmless: the engine is deterministic and the
//! last write wins.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobText;
use crate::models::matches::MatchPair;
use crate::models::resume::ResumeProfile;
use crate::scoring::engine::compute_match_score;

/// Storage the cache contract runs against. `PgMatchScoreStore` in production.
#[async_trait]
pub trait MatchScoreStore: Send + Sync {
    async fn find_match(&self, match_id: Uuid) -> Result<Option<MatchPair>>;
    async fn matches_for_job(&self, job_id: Uuid) -> Result<Vec<MatchPair>>;
    async fn unscored_matches(&self) -> Result<Vec<MatchPair>>;
    async fn resume_profile(&self, user_id: Uuid) -> Result<Option<ResumeProfile>>;
    async fn job_text(&self, job_id: Uuid) -> Result<Option<JobText>>;
    async fn store_score(&self, match_id: Uuid, score: u32) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedScore {
    pub match_id: Uuid,
    pub score: u32,
    /// True when served from the store without recomputation.
    pub cached: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecomputeSummary {
    pub total: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}

enum PairOutcome {
    Scored(u32),
    MissingResume,
    MissingJob,
}

/// Returns the stored score, computing and storing it first if there is none.
pub async fn score_for_match(
    store: &dyn MatchScoreStore,
    match_id: Uuid,
) -> Result<CachedScore, AppError> {
    let pair = find_pair(store, match_id).await?;

    if let Some(score) = pair.match_score {
        return Ok(CachedScore {
            match_id,
            score: score.clamp(0, 100) as u32,
            cached: true,
        });
    }

    let score = score_pair_or_not_found(store, &pair).await?;
    Ok(CachedScore {
        match_id,
        score,
        cached: false,
    })
}

/// Computes a fresh score for one match and overwrites whatever was stored.
pub async fn recompute_match(
    store: &dyn MatchScoreStore,
    match_id: Uuid,
) -> Result<CachedScore, AppError> {
    let pair = find_pair(store, match_id).await?;
    let score = score_pair_or_not_found(store, &pair).await?;
    info!(%match_id, score, "Recomputed match score");
    Ok(CachedScore {
        match_id,
        score,
        cached: false,
    })
}

/// Recomputes every match for a job. Per-pair failures are logged and counted.
pub async fn recompute_job(
    store: &dyn MatchScoreStore,
    job_id: Uuid,
) -> Result<RecomputeSummary, AppError> {
    let pairs = store.matches_for_job(job_id).await?;
    let summary = recompute_pairs(store, &pairs).await;
    info!(
        %job_id,
        total = summary.total,
        updated = summary.updated,
        skipped = summary.skipped,
        failed = summary.failed,
        "Recomputed match scores for job"
    );
    Ok(summary)
}

/// Scores every match that has never been scored.
pub async fn backfill_missing(store: &dyn MatchScoreStore) -> Result<RecomputeSummary, AppError> {
    let pairs = store.unscored_matches().await?;
    info!("Found {} matches with missing score", pairs.len());
    let summary = recompute_pairs(store, &pairs).await;
    info!(
        total = summary.total,
        updated = summary.updated,
        skipped = summary.skipped,
        failed = summary.failed,
        "Backfilled match scores"
    );
    Ok(summary)
}

async fn find_pair(store: &dyn MatchScoreStore, match_id: Uuid) -> Result<MatchPair, AppError> {
    store
        .find_match(match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {match_id} not found")))
}

async fn score_pair_or_not_found(
    store: &dyn MatchScoreStore,
    pair: &MatchPair,
) -> Result<u32, AppError> {
    match score_pair(store, pair).await? {
        PairOutcome::Scored(score) => Ok(score),
        PairOutcome::MissingResume => Err(AppError::NotFound(format!(
            "No resume on file for user {}",
            pair.user_id
        ))),
        PairOutcome::MissingJob => Err(AppError::NotFound(format!(
            "Job {} not found",
            pair.job_id
        ))),
    }
}

async fn score_pair(store: &dyn MatchScoreStore, pair: &MatchPair) -> Result<PairOutcome> {
    let Some(resume) = store.resume_profile(pair.user_id).await? else {
        return Ok(PairOutcome::MissingResume);
    };
    let Some(job) = store.job_text(pair.job_id).await? else {
        return Ok(PairOutcome::MissingJob);
    };

    let score = compute_match_score(&resume, &job);
    store.store_score(pair.id, score).await?;
    Ok(PairOutcome::Scored(score))
}

async fn recompute_pairs(store: &dyn MatchScoreStore, pairs: &[MatchPair]) -> RecomputeSummary {
    let mut summary = RecomputeSummary {
        total: pairs.len(),
        ..Default::default()
    };

    for pair in pairs {
        match score_pair(store, pair).await {
            Ok(PairOutcome::Scored(_)) => summary.updated += 1,
            Ok(PairOutcome::MissingResume | PairOutcome::MissingJob) => {
                debug!(match_id = %pair.id, "Skipping match without resume or job");
                summary.skipped += 1;
            }
            Err(e) => {
                warn!(match_id = %pair.id, error = %e, "Failed to score match");
                summary.failed += 1;
            }
        }
    }

    summary
}
