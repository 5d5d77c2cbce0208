//! Thin HTTP wrapper around the API under test
//!
//! Every call is one round trip: send, await the response, decode the body
//! as JSON. Status codes are not inspected, since the DELETE cases assert
//! on JSON-bodied error responses. No timeouts and no retries.

use serde_json::Value;
use tracing::debug;

use crate::common::{Error, Result};

/// Query parameters as name/value pairs, in request order
pub type Query<'a> = [(&'a str, &'a str)];

/// Client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and decode the response body as JSON
    pub async fn get_json(&self, path: &str, query: &Query<'_>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::http(&url, e))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| Error::body_decode(&url, e))
    }

    /// DELETE a path and decode the response body as JSON
    pub async fn delete_json(&self, path: &str, query: &Query<'_>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "DELETE");
        let response = self
            .http
            .delete(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::http(&url, e))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| Error::body_decode(&url, e))
    }
}
