//! Frontend Models
//!
//! Data structures matching OMDb payloads.

use serde::{Deserialize, Serialize};

/// Placeholder OMDb uses for missing values
pub const NOT_AVAILABLE: &str = "N/A";

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// One search hit (`?s=` endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
}

/// Envelope of the `?s=` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<MovieSummary>>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

/// Full record (`?i=` endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,
    #[serde(rename = "Plot", default = "not_available")]
    pub plot: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
    #[serde(rename = "Awards", default = "not_available")]
    pub awards: String,
    #[serde(rename = "BoxOffice", default = "not_available")]
    pub box_office: String,
    #[serde(rename = "Metascore", default = "not_available")]
    pub metascore: String,
    #[serde(rename = "imdbRating", default = "not_available")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default = "not_available")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
}

/// Envelope of the `?i=` endpoint; errors come back with status 200
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DetailResponse {
    Failure {
        #[serde(rename = "Error")]
        error: String,
    },
    Found(MovieDetail),
}

/// Which half of the comparison a search box feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
