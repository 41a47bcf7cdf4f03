use serde::{Deserialize, Serialize};

/// Identifier of a movie, matching the `movies.id` column
pub type MovieId = i32;

/// Rating assumed when a movie has no vote average
pub const DEFAULT_VOTE_AVERAGE: f64 = 0.0;

/// Belly score assumed when none has been recorded.
///
/// This is the neutral midpoint of the 0-10 scale, not an "unknown" marker.
pub const DEFAULT_BELLY_SCORE: f64 = 5.0;

/// A movie row as stored, with every column nullable except the id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub belly_score: Option<f64>,
}

impl Movie {
    /// Fills in documented defaults for every missing field
    pub fn normalize(&self) -> MovieProfile {
        MovieProfile {
            id: self.id,
            title: self.title.clone().unwrap_or_default(),
            genres: self.genres.clone().unwrap_or_default(),
            vote_average: finite_or(self.vote_average, DEFAULT_VOTE_AVERAGE),
            belly_score: finite_or(self.belly_score, DEFAULT_BELLY_SCORE),
        }
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

/// A movie with no missing fields, ready for feature extraction
#[derive(Debug, Clone, PartialEq)]
pub struct MovieProfile {
    pub id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    pub vote_average: f64,
    pub belly_score: f64,
}

impl MovieProfile {
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
