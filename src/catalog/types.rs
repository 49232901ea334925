use std::fmt;

use serde::{Deserialize, Serialize};

/// Home-listing category offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Trending,
        Category::Popular,
        Category::TopRated,
        Category::NowPlaying,
        Category::Upcoming,
    ];

    /// Wire value used as the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn next(&self) -> Category {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Category {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record of a search or home-listing response.
///
/// `tmdb_id` is required for the record to be renderable; the adapter
/// drops records without it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingRecord {
    pub tmdb_id: Option<u64>,
    pub title: Option<String>,
    pub poster_url: Option<String>,
}

/// Detail payload for a single movie.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_url: Option<String>,
}

/// Recommendation bundle returned by the title-based lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationBundle {
    #[serde(default)]
    pub tfidf_recommendations: Vec<RecommendationItem>,
}

/// One TF-IDF recommendation; the renderable data lives in the nested
/// `tmdb` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationItem {
    pub tmdb: Option<TmdbRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TmdbRef {
    pub tmdb_id: Option<u64>,
    pub title: Option<String>,
    pub poster_url: Option<String>,
}
