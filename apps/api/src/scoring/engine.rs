//! Match Score Engine: flatten, vectorise, score, boost, or fall back.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::job::JobText;
use crate::models::resume::ResumeProfile;
use crate::scoring::boost::skill_boost;
use crate::scoring::fallback::fallback_score;
use crate::scoring::flatten::flatten_profile;
use crate::scoring::similarity::{base_score, cosine_similarity};
use crate::scoring::vectorizer::{build_vector_space, MAX_FEATURES};
use crate::scoring::{PipelineError, ScoringError};

const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    DegenerateVocabulary,
    ComputationError,
}

impl From<&PipelineError> for FallbackReason {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::DegenerateVocabulary => FallbackReason::DegenerateVocabulary,
            PipelineError::Computation(_) => FallbackReason::ComputationError,
        }
    }
}

/// Which branch produced a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringPath {
    /// Both documents were empty.
    Empty,
    Statistical { base: u32, boost: u32 },
    Fallback { reason: FallbackReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: u32,
    pub path: ScoringPath,
}

/// Relevance of a résumé to a job posting, 0–100.
pub fn compute_match_score(resume: &ResumeProfile, job: &JobText) -> u32 {
    explain_match_score(resume, job).score
}

/// Same as `compute_match_score`, starting from raw extractor output.
/// Rejects résumé data that cannot be coerced into a profile.
pub fn compute_match_score_from_json(
    resume_data: &Value,
    job_description: Option<&str>,
    job_requirements: Option<&str>,
) -> Result<u32, ScoringError> {
    explain_match_score_from_json(resume_data, job_description, job_requirements)
        .map(|explained| explained.score)
}

/// `explain_match_score` over raw extractor output and nullable job columns.
pub fn explain_match_score_from_json(
    resume_data: &Value,
    job_description: Option<&str>,
    job_requirements: Option<&str>,
) -> Result<MatchScore, ScoringError> {
    let resume = ResumeProfile::from_value(resume_data)?;
    let job = JobText::new(
        job_description.unwrap_or_default(),
        job_requirements.unwrap_or_default(),
    );
    Ok(explain_match_score(&resume, &job))
}

pub fn explain_match_score(resume: &ResumeProfile, job: &JobText) -> MatchScore {
    let resume_text = flatten_profile(resume);
    let job_text = job.combined();

    if resume_text.is_empty() && job_text.is_empty() {
        return MatchScore {
            score: 0,
            path: ScoringPath::Empty,
        };
    }

    let skills = resume.skills.items();

    match statistical_base(&resume_text, &job_text) {
        Ok(base) => {
            let boost = skill_boost(skills, &job_text);
            let score = (base + boost).min(MAX_SCORE);
            debug!(base, boost, score, "statistical match score");
            MatchScore {
                score,
                path: ScoringPath::Statistical { base, boost },
            }
        }
        Err(err) => {
            let score = fallback_score(skills, &job_text);
            warn!(error = %err, score, "statistical match unavailable, using keyword fallback");
            MatchScore {
                score,
                path: ScoringPath::Fallback {
                    reason: FallbackReason::from(&err),
                },
            }
        }
    }
}

fn statistical_base(resume_text: &str, job_text: &str) -> Result<u32, PipelineError> {
    let space = build_vector_space(resume_text, job_text, MAX_FEATURES)?;
    base_score(cosine_similarity(&space.resume, &space.job))
}
