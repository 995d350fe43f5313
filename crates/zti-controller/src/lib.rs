//! # zti-controller
//!
//! Read-only HTTP client for a ZeroTier network controller, plus the
//! sequential pipeline that turns one network into an Ansible inventory.
//!
//! Endpoints used:
//! - `GET /api/status` (liveness)
//! - `GET /api/v1/network/{id}` (tag schema, from `tagsByName`)
//! - `GET /api/v1/network/{id}/member` (members)

pub mod pipeline;

mod error;
mod http;

pub use error::{ControllerError, FetchOutcome};
pub use pipeline::{InventoryRun, run};

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use zti_config::ControllerConfig;
use zti_core::{Member, TagSchema};

use crate::http::{check_network_response, check_response, read_json};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one controller and API key.
pub struct ControllerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ControllerClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ControllerError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("zti/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from a validated controller config section.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Config`] if the section is incomplete, or
    /// [`ControllerError::Http`] if the client fails to build.
    pub fn from_config(config: &ControllerConfig) -> Result<Self, ControllerError> {
        config.validate()?;
        Self::new(
            config.base_url(),
            &config.api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the controller's status endpoint answers with a 2xx.
    ///
    /// Transport failures count as "not up".
    pub async fn check_liveness(&self) -> bool {
        let url = format!("{}/api/status", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::warn!(%url, %e, "controller status check failed");
                false
            }
        }
    }

    /// Fetch the network descriptor and normalize its tag schema.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Forbidden`], [`ControllerError::NotFound`]
    /// or [`ControllerError::Unknown`] for non-200 statuses,
    /// [`ControllerError::Schema`] if `tagsByName` is malformed, and
    /// [`ControllerError::Http`]/[`ControllerError::Parse`] for transport or
    /// decoding failures.
    pub async fn fetch_tag_schema(&self, network_id: &str) -> Result<TagSchema, ControllerError> {
        let url = format!(
            "{}/api/v1/network/{}",
            self.base_url,
            urlencoding::encode(network_id)
        );
        let resp = self.authorized_get(&url).send().await?;
        let resp = check_network_response(resp, network_id)?;

        let descriptor: serde_json::Value = read_json(resp).await?;
        let schema = TagSchema::from_network(&descriptor)?;
        tracing::debug!(network = %network_id, tags = schema.len(), "fetched tag schema");
        Ok(schema)
    }

    /// Fetch every member record of the network.
    ///
    /// Records that do not decode as a member are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Api`] for non-success statuses, and
    /// [`ControllerError::Http`]/[`ControllerError::Parse`] for transport or
    /// decoding failures.
    pub async fn fetch_members(&self, network_id: &str) -> Result<Vec<Member>, ControllerError> {
        let url = format!(
            "{}/api/v1/network/{}/member",
            self.base_url,
            urlencoding::encode(network_id)
        );
        let resp = check_response(self.authorized_get(&url).send().await?).await?;

        let records: Vec<serde_json::Value> = read_json(resp).await?;
        let members = Member::from_records(records);
        tracing::debug!(network = %network_id, members = members.len(), "fetched members");
        Ok(members)
    }

    fn authorized_get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(AUTHORIZATION, format!("bearer {}", self.api_key))
    }
}
