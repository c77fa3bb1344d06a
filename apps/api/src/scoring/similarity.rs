use crate::scoring::PipelineError;

/// Cosine similarity. 0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Truncates `similarity * 100` into the 0–100 base score.
pub fn base_score(similarity: f64) -> Result<u32, PipelineError> {
    if !similarity.is_finite() {
        return Err(PipelineError::Computation(format!(
            "similarity is not finite: {similarity}"
        )));
    }
    Ok((similarity.clamp(0.0, 1.0) * 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.3, 0.4]), 0.0);
    }

    #[test]
    fn test_parallel_vectors() {
        let s = cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_base_score_truncates() {
        assert_eq!(base_score(0.379).unwrap(), 37);
        assert_eq!(base_score(0.999).unwrap(), 99);
        assert_eq!(base_score(1.0).unwrap(), 100);
        assert_eq!(base_score(0.0).unwrap(), 0);
    }

    #[test]
    fn test_base_score_rejects_nan() {
        assert!(matches!(
            base_score(f64::NAN),
            Err(PipelineError::Computation(_))
        ));
    }
}
