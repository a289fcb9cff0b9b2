use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::Config;
use crate::models::{Identifier, LookupResult};

/// Client for the remote mobile-details lookup service.
///
/// Holds a single `reqwest::Client` with the timeout and static headers
/// preset, so every fetch goes out with the same request shape. Constructed
/// once and passed to the runner; no ambient/global session state.
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    api_url: String,
}

impl LookupClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("Failed to create lookup client")?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Issues one GET for the identifier and maps every outcome to a
    /// [`LookupResult`].
    ///
    /// This never returns an error: transport and decoding problems become
    /// `Failure` values with the exact user-facing message for each case.
    /// Each failure is terminal for the request; there are no retries.
    pub async fn fetch(&self, id: &Identifier) -> LookupResult {
        // Encode the identifier as a query parameter rather than splicing
        // it into the URL string.
        let url =
            match reqwest::Url::parse_with_params(&self.api_url, &[("mobile", id.as_str())]) {
                Ok(url) => url,
                Err(e) => return LookupResult::Failure(format!("Network error: {}", e)),
            };

        tracing::debug!("Fetching mobile details: GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Lookup request for {} failed: {}", id, e);
                return LookupResult::Failure(describe_transport_error(&e));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Lookup for {} returned HTTP {}", id, status.as_u16());
            return LookupResult::Failure(format!("API Error: HTTP {}", status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return LookupResult::Failure(describe_transport_error(&e)),
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(fields)) => {
                tracing::info!("Lookup for {} returned {} field(s)", id, fields.len());
                LookupResult::Success(fields)
            }
            _ => LookupResult::Failure("Invalid response format from server".to_string()),
        }
    }
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timeout - Server took too long to respond (40s)".to_string()
    } else if err.is_connect() {
        "Connection failed - Check your internet connection".to_string()
    } else {
        format!("Network error: {}", err)
    }
}
