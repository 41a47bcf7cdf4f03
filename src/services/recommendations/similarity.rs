use super::RecommendError;
use crate::models::MovieId;

/// Failure of a single cosine computation
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("cosine similarity is undefined for a zero-magnitude vector")]
    ZeroMagnitude,

    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Cosine similarity `dot(a, b) / (|a| * |b|)`.
///
/// Fails instead of producing NaN when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(SimilarityError::ZeroMagnitude);
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scores every candidate against the target, index-aligned with `candidates`.
///
/// A zero-magnitude target aborts with [`RecommendError::DegenerateVector`].
/// A zero-magnitude candidate scores 0.0 and is logged.
pub fn score_candidates(
    target_id: MovieId,
    target: &[f64],
    candidates: &[(MovieId, &[f64])],
) -> Result<Vec<f64>, RecommendError> {
    if magnitude(target) == 0.0 {
        return Err(RecommendError::DegenerateVector {
            movie_id: target_id,
        });
    }

    candidates
        .iter()
        .map(|(candidate_id, vector)| match cosine_similarity(target, vector) {
            Ok(score) => Ok(score),
            Err(SimilarityError::ZeroMagnitude) => {
                tracing::warn!(
                    target_id,
                    candidate_id,
                    "Candidate has a zero-magnitude feature vector, scoring 0.0"
                );
                Ok(0.0)
            }
            Err(SimilarityError::LengthMismatch { left, right }) => {
                Err(RecommendError::DimensionMismatch {
                    expected: left,
                    found: right,
                })
            }
        })
        .collect()
}
