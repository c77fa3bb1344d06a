//! Vector Space Builder: tf-idf over exactly two documents.
//!
//! Terms are unigrams and bigrams from `text::analyze`. The vocabulary keeps the
//! `max_features` most frequent terms across both documents (ties broken
//! alphabetically). Weights are raw counts times the smoothed idf
//! `ln((1 + n) / (1 + df)) + 1`, and each row is L2-normalised.

use std::collections::BTreeMap;

use crate::scoring::text::analyze;
use crate::scoring::PipelineError;

pub const MAX_FEATURES: usize = 500;

const N_DOCUMENTS: f64 = 2.0;

/// Weighted term vectors for the résumé and job documents over a shared vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpace {
    pub vocabulary: Vec<String>,
    pub resume: Vec<f64>,
    pub job: Vec<f64>,
}

pub fn build_vector_space(
    resume_text: &str,
    job_text: &str,
    max_features: usize,
) -> Result<VectorSpace, PipelineError> {
    let resume_counts = term_counts(resume_text);
    let job_counts = term_counts(job_text);

    // term -> (corpus frequency, document frequency)
    let mut corpus: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for counts in [&resume_counts, &job_counts] {
        for (term, n) in counts {
            let entry = corpus.entry(term.as_str()).or_default();
            entry.0 += n;
            entry.1 += 1;
        }
    }

    if corpus.is_empty() || max_features == 0 {
        return Err(PipelineError::DegenerateVocabulary);
    }

    let mut ranked: Vec<(&str, usize, usize)> =
        corpus.into_iter().map(|(t, (tf, df))| (t, tf, df)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_features);
    ranked.sort_by(|a, b| a.0.cmp(b.0));

    let idf: Vec<f64> = ranked
        .iter()
        .map(|(_, _, df)| ((1.0 + N_DOCUMENTS) / (1.0 + *df as f64)).ln() + 1.0)
        .collect();
    let vocabulary: Vec<String> = ranked.iter().map(|(t, _, _)| t.to_string()).collect();

    Ok(VectorSpace {
        resume: weigh(&resume_counts, &vocabulary, &idf),
        job: weigh(&job_counts, &vocabulary, &idf),
        vocabulary,
    })
}

fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in analyze(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

fn weigh(counts: &BTreeMap<String, usize>, vocabulary: &[String], idf: &[f64]) -> Vec<f64> {
    let mut row: Vec<f64> = vocabulary
        .iter()
        .zip(idf)
        .map(|(term, w)| counts.get(term).copied().unwrap_or(0) as f64 * w)
        .collect();

    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|x| *x /= norm);
    }
    row
}
