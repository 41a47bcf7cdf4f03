use std::collections::BTreeSet;

use super::vectorizer::GenreIndex;
use crate::models::MovieProfile;

const HIGH_BELLY_SCORE: f64 = 8.0;
const ACCLAIMED_VOTE_AVERAGE: f64 = 7.5;
const FALLBACK_REASON: &str = "Similar profile";

/// Explains why `candidate` was recommended for `target`.
///
/// Shared genres are listed in genre index order, followed by any shared
/// genres the index does not know, alphabetically.
pub fn explain(target: &MovieProfile, candidate: &MovieProfile, genres: &GenreIndex) -> String {
    let mut reasons = Vec::new();

    let shared = shared_genres(target, candidate, genres);
    if !shared.is_empty() {
        reasons.push(format!("Shared genres: {}", shared.join(", ")));
    }
    if candidate.belly_score > HIGH_BELLY_SCORE {
        reasons.push("High belly score".to_string());
    }
    if candidate.vote_average > ACCLAIMED_VOTE_AVERAGE {
        reasons.push("Critically acclaimed".to_string());
    }

    if reasons.is_empty() {
        FALLBACK_REASON.to_string()
    } else {
        reasons.join(", ")
    }
}

fn shared_genres<'a>(
    target: &MovieProfile,
    candidate: &'a MovieProfile,
    genres: &GenreIndex,
) -> Vec<&'a str> {
    let common: BTreeSet<&str> = candidate
        .genres
        .iter()
        .map(String::as_str)
        .filter(|g| target.has_genre(g))
        .collect();

    let mut ordered: Vec<&str> = common.into_iter().collect();
    // BTreeSet already gave lexical order; a stable sort on slot keeps it for unknowns
    ordered.sort_by_key(|g| genres.position(g).unwrap_or(usize::MAX));
    ordered
}
