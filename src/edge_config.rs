//! Client for the remote edge-config key-value store.
//!
//! The site's runtime behavior (currently just the maintenance flag) lives in
//! a Vercel Edge Config store. Updates go through a single PATCH to the items
//! endpoint; there is no retry or backoff, a failed request is surfaced
//! as-is.

use crate::config::EdgeConfig;
use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.vercel.com";

/// One key update within an items PATCH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    /// Always `"update"`; the items API also supports create/delete, which
    /// this tool never issues.
    pub operation: String,
    pub key: String,
    pub value: String,
}

/// Body of an items PATCH request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub items: Vec<UpdateItem>,
}

/// Build an update request body from key/value pairs.
pub fn update_request(props: &[(&str, &str)]) -> UpdateRequest {
    UpdateRequest {
        items: props
            .iter()
            .map(|(key, value)| UpdateItem {
                operation: "update".to_string(),
                key: (*key).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
    }
}

/// Blocking HTTP client bound to one edge-config store.
pub struct EdgeConfigClient {
    base_url: String,
    config: EdgeConfig,
    http: reqwest::blocking::Client,
}

impl EdgeConfigClient {
    /// Client against the production API.
    pub fn new(config: EdgeConfig) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Client against an arbitrary base URL (tests point this at a local
    /// server).
    pub fn with_base_url(config: EdgeConfig, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            config,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// URL of the items endpoint for this store.
    pub fn items_url(&self) -> String {
        format!(
            "{}/v1/edge-config/{}/items?teamId={}",
            self.base_url, self.config.config_id, self.config.team_id
        )
    }

    /// PATCH the given updates to the store.
    ///
    /// Returns the raw JSON response body on success. A transport failure or
    /// a non-2xx status is [`SiteError::Api`], carrying the status and
    /// whatever body the server sent back.
    pub fn update_items(&self, request: &UpdateRequest) -> Result<serde_json::Value> {
        let url = self.items_url();

        let response = self
            .http
            .patch(&url)
            .bearer_auth(&self.config.access_token)
            .json(request)
            .send()
            .map_err(|e| SiteError::Api(format!("PATCH {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SiteError::Api(format!("failed to read response body: {}", e)))?;

        if status.is_success() {
            Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::Null))
        } else {
            Err(SiteError::Api(format!(
                "server responded {}: {}",
                status, body
            )))
        }
    }
}
