//! API client for the club data REST backend.
//!
//! This module provides the `ApiClient` struct, a thin JSON layer over
//! reqwest that maps each `Record` type onto its collection endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::models::{decode_list, Record, RecordId};

use super::{ApiError, RemoteStore};

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API client for the Remote Store.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_secs(config.request_timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// `{base}/{endpoint}/{id}`, with the id encoded as a single path segment.
    fn record_url(&self, endpoint: &str, id: &RecordId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            endpoint,
            urlencoding::encode(id.as_str())
        )
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn parse_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &str,
    ) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse JSON response from {}: {}", url, e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(method = "GET", url = url, "Sending request");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::parse_json(response, url).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(method = %method, url = url, "Sending request");
        // .json() sets Content-Type: application/json
        let response = self
            .client
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        Self::parse_json(response, url).await
    }

    async fn send_delete(&self, url: &str) -> Result<(), ApiError> {
        debug!(method = "DELETE", url = url, "Sending request");
        let response = self.client.delete(url).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for ApiClient {
    async fn list<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.collection_url(R::ENDPOINT);
        let values: Vec<serde_json::Value> = self.get(&url).await?;
        let received = values.len();
        let records: Vec<R> = decode_list(values);
        debug!(
            collection = R::COLLECTION,
            count = records.len(),
            skipped = received - records.len(),
            "Fetched collection"
        );
        Ok(records)
    }

    async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let url = self.collection_url(R::ENDPOINT);
        self.send_json(reqwest::Method::POST, &url, draft).await
    }

    async fn update<R: Record>(&self, id: &RecordId, draft: &R::Draft) -> Result<R, ApiError> {
        let url = self.record_url(R::ENDPOINT, id);
        self.send_json(reqwest::Method::PUT, &url, draft).await
    }

    async fn delete<R: Record>(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = self.record_url(R::ENDPOINT, id);
        self.send_delete(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, Place, Player};

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            ApiClient::new("localhost:5000", Duration::from_secs(5)),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("not a url", Duration::from_secs(5)),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_collection_urls() {
        let c = client();
        assert_eq!(c.collection_url(Player::ENDPOINT), "http://localhost:5000/players");
        assert_eq!(c.collection_url(Place::ENDPOINT), "http://localhost:5000/map");
        assert_eq!(c.collection_url(Event::ENDPOINT), "http://localhost:5000/event");
    }

    #[test]
    fn test_record_url_uses_path_segment() {
        let c = client();
        let id = RecordId::new("65f1c0ffee");
        assert_eq!(c.record_url(Place::ENDPOINT, &id), "http://localhost:5000/map/65f1c0ffee");
        let odd = RecordId::new("a/b c");
        assert_eq!(c.record_url(Player::ENDPOINT, &odd), "http://localhost:5000/players/a%2Fb%20c");
    }
}
