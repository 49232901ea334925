use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::cache::CacheKey;
use crate::api::{ApiError, ResponseCache};
use crate::catalog::{Category, ListingRecord, MovieDetail, RecommendationBundle};
use crate::config::ApiConfig;

/// Blocking client for the recommendation backend.
///
/// Every request is read-only and runs on the render thread; a render
/// pass blocks on its requests (up to the configured timeout) before the
/// frame is drawn.
pub struct ApiClient {
    http: Client,
    base_url: String,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        cache_ttl: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::transport)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: ResponseCache::new(cache_ttl),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
            Duration::from_secs(config.cache_ttl_seconds),
        )
    }

    /// Issues `GET base + path` with the given query parameters.
    ///
    /// Outcomes, failures included, are memoized per (path, sorted
    /// params) for the cache TTL; within that window an identical request
    /// is answered without touching the network.
    pub fn get_json(
        &mut self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let key = CacheKey::new(path, params);
        if let Some(outcome) = self.cache.lookup(&key) {
            tracing::debug!(path, "cache hit");
            return outcome;
        }

        let outcome = self.fetch(path, params);
        if let Err(err) = &outcome {
            tracing::debug!(path, %err, "request failed");
        }
        self.cache.store(key, outcome.clone());
        outcome
    }

    fn fetch(&self, path: &str, params: &[(String, String)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .map_err(ApiError::transport)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(ApiError::transport)?;
        if status >= 400 {
            return Err(ApiError::http(status, &body));
        }
        serde_json::from_str(&body).map_err(ApiError::transport)
    }

    pub fn search_listings(&mut self, query: &str) -> Result<Vec<ListingRecord>, ApiError> {
        let params = [("query".to_string(), query.to_string())];
        self.get_json("/tmdb/search", &params).and_then(decode)
    }

    pub fn home_listings(
        &mut self,
        category: Category,
        limit: u32,
    ) -> Result<Vec<ListingRecord>, ApiError> {
        let params = [
            ("category".to_string(), category.as_str().to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        self.get_json("/home", &params).and_then(decode)
    }

    pub fn movie_detail(&mut self, tmdb_id: u64) -> Result<MovieDetail, ApiError> {
        let path = format!("/movie/id/{tmdb_id}");
        self.get_json(&path, &[]).and_then(decode)
    }

    pub fn recommendation_bundle(
        &mut self,
        title: &str,
    ) -> Result<RecommendationBundle, ApiError> {
        let params = [("query".to_string(), title.to_string())];
        self.get_json("/movie/search", &params).and_then(decode)
    }
}

/// A response body that does not match the expected shape is a transport
/// failure, same as a malformed one.
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::transport)
}
