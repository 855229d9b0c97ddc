//! OMDb Client
//!
//! Typed wrappers over the two OMDb endpoints the app uses.

mod transport;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::{DetailResponse, MovieDetail, MovieSummary, SearchResponse};

// RFC 3986 unreserved characters stay as-is
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OmdbClient {
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.omdb_base_url.clone(),
            api_key: config.omdb_api_key.clone(),
        }
    }

    pub fn search_url(&self, term: &str) -> String {
        format!("{}?apikey={}&s={}", self.base_url, encode(&self.api_key), encode(term))
    }

    pub fn detail_url(&self, imdb_id: &str) -> String {
        format!("{}?apikey={}&i={}", self.base_url, encode(&self.api_key), encode(imdb_id))
    }

    /// Search hits for `term`; blank terms never hit the network
    pub async fn search(&self, term: &str) -> Result<Vec<MovieSummary>, FetchError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }
        let response: SearchResponse = transport::get_json(&self.search_url(term)).await?;
        Ok(search_hits(response))
    }

    pub async fn movie_detail(&self, imdb_id: &str) -> Result<MovieDetail, FetchError> {
        let response: DetailResponse = transport::get_json(&self.detail_url(imdb_id)).await?;
        detail_from(response)
    }
}

/// "Movie not found!" and similar API errors mean no suggestions
pub fn search_hits(response: SearchResponse) -> Vec<MovieSummary> {
    if let Some(error) = response.error {
        log::debug!(target: "omdb", "search returned no hits: {}", error);
        return Vec::new();
    }
    response.search.unwrap_or_default()
}

pub fn detail_from(response: DetailResponse) -> Result<MovieDetail, FetchError> {
    match response {
        DetailResponse::Found(detail) => Ok(detail),
        DetailResponse::Failure { error } => Err(FetchError::Api(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        OmdbClient::new(&AppConfig {
            omdb_base_url: "https://www.omdbapi.com/".to_string(),
            omdb_api_key: "abc123".to_string(),
            ..AppConfig::default()
        })
    }

    #[test]
    fn test_urls_are_encoded() {
        let client = client();
        assert_eq!(
            client.search_url("the dark knight"),
            "https://www.omdbapi.com/?apikey=abc123&s=the%20dark%20knight"
        );
        assert_eq!(
            client.search_url("amélie & co"),
            "https://www.omdbapi.com/?apikey=abc123&s=am%C3%A9lie%20%26%20co"
        );
        assert_eq!(
            client.detail_url("tt0468569"),
            "https://www.omdbapi.com/?apikey=abc123&i=tt0468569"
        );
    }

    #[test]
    fn test_blank_search_skips_request() {
        let hits = futures::executor::block_on(client().search("   ")).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_hits() {
        let not_found: SearchResponse =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();
        assert!(search_hits(not_found).is_empty());

        let found: SearchResponse = serde_json::from_str(
            r#"{"Search": [{"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "N/A"}], "totalResults": "1", "Response": "True"}"#,
        )
        .unwrap();
        let hits = search_hits(found);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alien");
    }

    #[test]
    fn test_detail_failure_is_an_error() {
        let response = DetailResponse::Failure {
            error: "Incorrect IMDb ID.".to_string(),
        };
        assert_eq!(
            detail_from(response),
            Err(FetchError::Api("Incorrect IMDb ID.".to_string()))
        );
    }
}
