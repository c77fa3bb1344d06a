use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::job::{JobRow, JobText};
use crate::models::resume::ResumeProfile;
use crate::scoring::cache::MatchScoreStore;

/// A (candidate, job) swipe record and its cached score. `None` means never scored.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MatchPair {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub match_score: Option<i32>,
}

/// Postgres implementation of the cache-aside store.
pub struct PgMatchScoreStore {
    pool: PgPool,
}

impl PgMatchScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchScoreStore for PgMatchScoreStore {
    async fn find_match(&self, match_id: Uuid) -> Result<Option<MatchPair>> {
        Ok(sqlx::query_as::<_, MatchPair>(
            "SELECT id, user_id, job_id, match_score FROM matches WHERE id = $1",
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn matches_for_job(&self, job_id: Uuid) -> Result<Vec<MatchPair>> {
        Ok(sqlx::query_as::<_, MatchPair>(
            "SELECT id, user_id, job_id, match_score FROM matches WHERE job_id = $1 ORDER BY created_at",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn unscored_matches(&self) -> Result<Vec<MatchPair>> {
        Ok(sqlx::query_as::<_, MatchPair>(
            "SELECT id, user_id, job_id, match_score FROM matches WHERE match_score IS NULL ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn resume_profile(&self, user_id: Uuid) -> Result<Option<ResumeProfile>> {
        let extracted: Option<Option<Value>> = sqlx::query_scalar(
            "SELECT extracted_json FROM resume_analyses WHERE user_id = $1 LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match extracted.flatten() {
            Some(value) => {
                let profile = ResumeProfile::from_value(&value)
                    .with_context(|| format!("Stored resume for user {user_id} is malformed"))?;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    async fn job_text(&self, job_id: Uuid) -> Result<Option<JobText>> {
        let row: Option<JobRow> =
            sqlx::query_as("SELECT description_text, requirements FROM jobs WHERE id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(JobText::from))
    }

    async fn store_score(&self, match_id: Uuid, score: u32) -> Result<()> {
        // Plain overwrite: racing first computations write the same value.
        sqlx::query("UPDATE matches SET match_score = $1, updated_at = NOW() WHERE id = $2")
            .bind(score as i32)
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
