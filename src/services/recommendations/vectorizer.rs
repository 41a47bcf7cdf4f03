/// Feature extraction for the recommender
///
/// A feature vector is laid out as one slot per known genre (in genre index
/// order), then `vote_average / 10`, then `belly_score / 10`, then the mood
/// vector's components when a mood was requested.
use std::collections::HashMap;

use crate::models::MovieProfile;

pub type FeatureVector = Vec<f64>;

/// Ratings and belly scores are on a 0-10 scale
const SCORE_SCALE: f64 = 10.0;

/// Number of quality slots (rating + belly score) after the genre segment
const QUALITY_SLOTS: usize = 2;

/// Fixed genre name → vector slot mapping
#[derive(Debug, Clone, PartialEq)]
pub struct GenreIndex {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl GenreIndex {
    /// Builds an index from genre names in slot order.
    ///
    /// Duplicates keep their first position. Returns `None` for an empty list.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self {
            names: Vec::new(),
            positions: HashMap::new(),
        };

        for name in names {
            let name = name.into();
            if !index.positions.contains_key(&name) {
                index.positions.insert(name.clone(), index.names.len());
                index.names.push(name);
            }
        }

        if index.names.is_empty() {
            None
        } else {
            Some(index)
        }
    }

    pub fn position(&self, genre: &str) -> Option<usize> {
        self.positions.get(genre).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for GenreIndex {
    fn default() -> Self {
        Self {
            names: DEFAULT_GENRES.iter().map(|g| g.to_string()).collect(),
            positions: DEFAULT_GENRES
                .iter()
                .enumerate()
                .map(|(i, g)| (g.to_string(), i))
                .collect(),
        }
    }
}

const DEFAULT_GENRES: [&str; 6] = ["Action", "Romance", "Comedy", "Horror", "Drama", "Sci-Fi"];

/// Static mood keyword → embedding table
#[derive(Debug, Clone, PartialEq)]
pub struct MoodTable {
    moods: HashMap<String, Vec<f64>>,
}

impl MoodTable {
    /// Builds a table from `(keyword, vector)` pairs; keywords are stored lowercased
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: AsRef<str>,
    {
        Self {
            moods: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v))
                .collect(),
        }
    }

    /// Case-insensitive lookup. Blank or unknown keywords resolve to `None`.
    pub fn resolve(&self, keyword: Option<&str>) -> Option<&[f64]> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty())?;
        self.moods.get(&keyword.to_lowercase()).map(Vec::as_slice)
    }
}

impl Default for MoodTable {
    fn default() -> Self {
        Self::new([
            ("chill", vec![0.2, 0.8, 0.0, 0.0, 0.0]),
            ("heartbreak", vec![0.9, 0.1, 0.0, 0.7, 0.1]),
            ("thrilling", vec![0.0, 0.0, 0.8, 0.5, 0.3]),
            ("dark", vec![0.0, 0.0, 0.6, 0.7, 0.5]),
        ])
    }
}

/// Encodes a normalized movie as a feature vector.
///
/// Genres missing from the index contribute nothing.
pub fn vectorize(movie: &MovieProfile, genres: &GenreIndex, mood: Option<&[f64]>) -> FeatureVector {
    let mood = mood.unwrap_or(&[]);
    let mut vector = vec![0.0; genres.len()];
    vector.reserve(QUALITY_SLOTS + mood.len());

    for genre in &movie.genres {
        if let Some(slot) = genres.position(genre) {
            vector[slot] = 1.0;
        }
    }

    vector.push(movie.vote_average / SCORE_SCALE);
    vector.push(movie.belly_score / SCORE_SCALE);
    vector.extend_from_slice(mood);

    vector
}
