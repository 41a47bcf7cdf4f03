use std::cmp::Ordering;

use crate::models::{MovieId, MovieProfile};

/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A candidate paired with its similarity to the target
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub movie: &'a MovieProfile,
    pub score: f64,
}

/// Orders candidates for presentation.
///
/// Drops the target itself, sorts by descending score, breaks ties by
/// ascending id, and keeps at most `limit` entries.
pub fn rank<'a>(
    scored: impl IntoIterator<Item = ScoredCandidate<'a>>,
    target_id: MovieId,
    limit: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = scored
        .into_iter()
        .filter(|c| c.movie.id != target_id)
        .collect();

    ranked.sort_by(by_score_then_id);
    ranked.truncate(limit);
    ranked
}

fn by_score_then_id(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.movie.id.cmp(&b.movie.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId) -> MovieProfile {
        MovieProfile {
            id,
            title: format!("Movie {}", id),
            genres: vec![],
            vote_average: 5.0,
            belly_score: 5.0,
        }
    }

    fn ids(ranked: &[ScoredCandidate<'_>]) -> Vec<MovieId> {
        ranked.iter().map(|c| c.movie.id).collect()
    }

    #[test]
    fn test_target_is_excluded() {
        let movies: Vec<_> = (1..=3).map(movie).collect();
        let scored = movies.iter().map(|m| ScoredCandidate { movie: m, score: 1.0 });

        let ranked = rank(scored, 2, MAX_RECOMMENDATIONS);
        assert_eq!(ids(&ranked), vec![1, 3]);
    }

    #[test]
    fn test_sorted_by_descending_score() {
        let movies: Vec<_> = (1..=4).map(movie).collect();
        let scores = [0.2, 0.9, 0.5, 0.7];
        let scored = movies
            .iter()
            .zip(scores)
            .map(|(m, s)| ScoredCandidate { movie: m, score: s });

        let ranked = rank(scored, 99, MAX_RECOMMENDATIONS);
        assert_eq!(ids(&ranked), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let movies: Vec<_> = [7, 3, 5, 1].into_iter().map(movie).collect();
        let scored: Vec<_> = movies
            .iter()
            .map(|m| ScoredCandidate { movie: m, score: 0.5 })
            .collect();

        let first = ids(&rank(scored.clone(), 99, MAX_RECOMMENDATIONS));
        let mut reversed = scored;
        reversed.reverse();
        let second = ids(&rank(reversed, 99, MAX_RECOMMENDATIONS));

        assert_eq!(first, vec![1, 3, 5, 7]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncated_to_limit() {
        let movies: Vec<_> = (1..=10).map(movie).collect();
        let scored = movies.iter().map(|m| ScoredCandidate {
            movie: m,
            score: m.id as f64 / 10.0,
        });

        let ranked = rank(scored, 10, MAX_RECOMMENDATIONS);
        assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
        assert_eq!(ids(&ranked), vec![9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_only_target_yields_empty() {
        let movies = vec![movie(1)];
        let scored = movies.iter().map(|m| ScoredCandidate { movie: m, score: 1.0 });
        assert!(rank(scored, 1, MAX_RECOMMENDATIONS).is_empty());
    }
}
