/// Content-based movie recommendations
///
/// Every movie in the candidate pool is encoded as a feature vector (genres,
/// rating, belly score, optional mood), compared against the target with
/// cosine similarity, ranked, and annotated with a short reason.
use std::sync::Arc;

use tracing::instrument;

use crate::{
    db::MovieRepository,
    error::AppResult,
    models::{Movie, MovieId, MovieProfile, RecommendedMovie},
};

pub mod ranker;
pub mod reasons;
pub mod similarity;
pub mod vectorizer;

pub use ranker::{ScoredCandidate, MAX_RECOMMENDATIONS};
pub use similarity::{cosine_similarity, SimilarityError};
pub use vectorizer::{FeatureVector, GenreIndex, MoodTable};

/// Errors raised while computing recommendations
#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    #[error("Movie {movie_id} not found")]
    MovieNotFound { movie_id: MovieId },

    #[error("Movie {movie_id} has no usable features to compare against")]
    DegenerateVector { movie_id: MovieId },

    #[error("Feature vector length mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Recommendation engine over an in-memory candidate pool
///
/// The genre index and mood table are fixed at construction and never
/// mutated, so one instance can be shared across requests.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    genres: GenreIndex,
    moods: MoodTable,
}

impl Recommender {
    pub fn new(genres: GenreIndex, moods: MoodTable) -> Self {
        Self { genres, moods }
    }

    /// Recommends up to [`MAX_RECOMMENDATIONS`] movies similar to `target_id`.
    ///
    /// An unrecognised `mood` is treated as no mood at all.
    pub fn recommend(
        &self,
        target_id: MovieId,
        pool: &[Movie],
        mood: Option<&str>,
    ) -> Result<Vec<RecommendedMovie>, RecommendError> {
        let mood_vector = self.moods.resolve(mood);
        if mood.is_some() && mood_vector.is_none() {
            tracing::debug!(mood = ?mood, "Unrecognised mood, ignoring");
        }

        let profiles: Vec<MovieProfile> = pool.iter().map(Movie::normalize).collect();
        let target = profiles
            .iter()
            .find(|m| m.id == target_id)
            .ok_or(RecommendError::MovieNotFound {
                movie_id: target_id,
            })?;

        // Target and candidates share one genre index and one mood vector
        let target_vector = vectorizer::vectorize(target, &self.genres, mood_vector);
        let vectors: Vec<FeatureVector> = profiles
            .iter()
            .map(|m| vectorizer::vectorize(m, &self.genres, mood_vector))
            .collect();

        let candidates: Vec<(MovieId, &[f64])> = profiles
            .iter()
            .zip(&vectors)
            .map(|(m, v)| (m.id, v.as_slice()))
            .collect();
        let scores = similarity::score_candidates(target_id, &target_vector, &candidates)?;

        let scored = profiles
            .iter()
            .zip(scores)
            .map(|(movie, score)| ScoredCandidate { movie, score });

        let recommendations = ranker::rank(scored, target_id, MAX_RECOMMENDATIONS)
            .into_iter()
            .map(|c| RecommendedMovie {
                id: c.movie.id,
                title: c.movie.title.clone(),
                score: c.score,
                reason: reasons::explain(target, c.movie, &self.genres),
            })
            .collect();

        Ok(recommendations)
    }
}

/// Loads the candidate pool and recommends movies similar to `movie_id`
///
/// Storage failures propagate unchanged; they are never turned into an empty list.
#[instrument(skip(repository, recommender))]
pub async fn get_recommendations(
    repository: Arc<dyn MovieRepository>,
    recommender: Arc<Recommender>,
    movie_id: MovieId,
    mood: Option<String>,
) -> AppResult<Vec<RecommendedMovie>> {
    let pool = repository.all_movies().await?;

    tracing::debug!(pool_size = pool.len(), "Candidate pool loaded");

    let recommendations = recommender.recommend(movie_id, &pool, mood.as_deref())?;

    tracing::info!(
        movie_id,
        results = recommendations.len(),
        "Recommendations computed"
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::MockMovieRepository, error::AppError};
    use tokio_test::{assert_err, assert_ok};

    fn movie(id: MovieId, genres: &[&str], vote_average: f64, belly_score: f64) -> Movie {
        Movie {
            id,
            title: Some(format!("Movie {}", id)),
            genres: Some(genres.iter().map(|g| g.to_string()).collect()),
            vote_average: Some(vote_average),
            belly_score: Some(belly_score),
        }
    }

    fn sample_pool() -> Vec<Movie> {
        vec![
            movie(1, &["Action"], 8.0, 9.0),
            movie(2, &["Action", "Drama"], 7.0, 4.0),
            movie(3, &["Comedy"], 5.0, 5.0),
        ]
    }

    #[test]
    fn test_three_movie_scenario() {
        let recommender = Recommender::default();
        let recs = recommender.recommend(1, &sample_pool(), None).unwrap();

        let ids: Vec<MovieId> = recs.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(recs[0].score > recs[1].score);
        assert!(recs.iter().all(|r| !r.reason.is_empty()));
        assert_eq!(recs[0].reason, "Shared genres: Action");
        assert_eq!(recs[1].reason, "Similar profile");
    }

    #[test]
    fn test_unknown_target_is_not_found() {
        let recommender = Recommender::default();
        let err = recommender.recommend(42, &sample_pool(), None).unwrap_err();
        assert!(matches!(err, RecommendError::MovieNotFound { movie_id: 42 }));
    }

    #[test]
    fn test_unrecognised_mood_matches_no_mood() {
        let recommender = Recommender::default();
        let plain = recommender.recommend(1, &sample_pool(), None).unwrap();
        let gibberish = recommender
            .recommend(1, &sample_pool(), Some("gibberish"))
            .unwrap();
        assert_eq!(plain, gibberish);
    }

    #[test]
    fn test_mood_applies_to_every_vector() {
        let recommender = Recommender::default();
        let plain = recommender.recommend(1, &sample_pool(), None).unwrap();
        let chill = recommender
            .recommend(1, &sample_pool(), Some("Chill"))
            .unwrap();

        assert_eq!(plain.len(), chill.len());
        // The shared mood component pulls every candidate closer to the target
        for (p, c) in plain.iter().zip(&chill) {
            assert_eq!(p.id, c.id);
            assert!(c.score > p.score);
        }
    }

    #[test]
    fn test_zero_magnitude_target_aborts() {
        let recommender = Recommender::default();
        let pool = vec![movie(1, &[], 0.0, 0.0), movie(2, &["Drama"], 6.0, 5.0)];
        let err = recommender.recommend(1, &pool, None).unwrap_err();
        assert!(matches!(err, RecommendError::DegenerateVector { movie_id: 1 }));
    }

    #[test]
    fn test_zero_magnitude_candidate_scores_zero() {
        let recommender = Recommender::default();
        let pool = vec![movie(1, &["Drama"], 6.0, 5.0), movie(2, &[], 0.0, 0.0)];
        let recs = recommender.recommend(1, &pool, None).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].score, 0.0);
    }

    #[test]
    fn test_results_capped_and_deterministic() {
        let recommender = Recommender::default();
        let mut pool = vec![movie(100, &["Horror"], 6.0, 6.0)];
        // Identical candidates tie on score
        pool.extend((1..=8).rev().map(|id| movie(id, &["Horror"], 6.0, 6.0)));

        let first = recommender.recommend(100, &pool, None).unwrap();
        pool.reverse();
        let second = recommender.recommend(100, &pool, None).unwrap();

        assert_eq!(first.len(), MAX_RECOMMENDATIONS);
        let ids: Vec<MovieId> = first.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let recommender = Recommender::default();
        let pool = vec![
            movie(1, &["Romance"], 6.0, 5.0),
            Movie {
                id: 2,
                title: None,
                genres: None,
                vote_average: None,
                belly_score: None,
            },
        ];

        let recs = recommender.recommend(1, &pool, None).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "");
        assert!(recs[0].score > 0.0);
    }

    #[tokio::test]
    async fn test_service_loads_pool_from_repository() {
        let mut repository = MockMovieRepository::new();
        repository
            .expect_all_movies()
            .times(1)
            .returning(|| Ok(sample_pool()));

        let result = get_recommendations(
            Arc::new(repository),
            Arc::new(Recommender::default()),
            1,
            None,
        )
        .await;

        let recs = assert_ok!(result);
        assert_eq!(recs.len(), 2);
    }

    #[tokio::test]
    async fn test_service_propagates_repository_failure() {
        let mut repository = MockMovieRepository::new();
        repository
            .expect_all_movies()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let result = get_recommendations(
            Arc::new(repository),
            Arc::new(Recommender::default()),
            1,
            None,
        )
        .await;

        let err = assert_err!(result);
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_service_reports_missing_movie() {
        let mut repository = MockMovieRepository::new();
        repository.expect_all_movies().returning(|| Ok(vec![]));

        let result = get_recommendations(
            Arc::new(repository),
            Arc::new(Recommender::default()),
            5,
            Some("dark".to_string()),
        )
        .await;

        let err = assert_err!(result);
        assert!(matches!(
            err,
            AppError::Recommendation(RecommendError::MovieNotFound { movie_id: 5 })
        ));
    }
}
