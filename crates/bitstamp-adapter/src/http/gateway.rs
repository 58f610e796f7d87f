/*
[INPUT]:  HTTP configuration (base URL, timeouts) and raw API responses
[OUTPUT]: Endpoint URNs, decoded JSON values and typed models
[POS]:    HTTP layer - transport gateway and response mapping
[UPDATE]: When changing URN building, decoding or the mapping convention
*/

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::http::error::{BitstampError, Result};

/// Base URL for the Bitstamp v2 API
const API_URL: &str = "https://www.bitstamp.net/api/v2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Transport gateway for the Bitstamp API.
///
/// Builds endpoint URNs, performs HTTP calls through the owned reqwest
/// client and decodes JSON bodies. All model mapping goes through
/// [`Gateway::map_to_model`] so the wire naming convention is defined
/// exactly once.
#[derive(Debug)]
pub struct Gateway {
    http_client: Client,
    base_url: Url,
}

impl Gateway {
    /// Create a gateway with default configuration against the live API
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a gateway with custom configuration against the live API
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_URL)
    }

    /// Create a gateway against an explicit base URL (tests point this
    /// at a mock server)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// The configured base API address
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build a full endpoint URN from path segments.
    ///
    /// Segments are trimmed of surrounding separators, joined with `/`
    /// and terminated with a trailing `/` after the base address.
    /// Pure and deterministic: equal segments yield equal URNs.
    pub fn urn(&self, segments: &[&str]) -> String {
        let path = segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .collect::<Vec<_>>()
            .join("/");

        format!("{}/{}/", self.base_url(), path)
    }

    /// Build a GET request for the given URN
    pub(crate) fn get(&self, urn: &str) -> RequestBuilder {
        self.http_client.get(urn)
    }

    /// Build a POST request for the given URN
    pub(crate) fn post(&self, urn: &str) -> RequestBuilder {
        self.http_client.post(urn)
    }

    /// Send a request and decode the JSON body.
    ///
    /// Transport failures surface as [`BitstampError::Http`] without
    /// retries or status-code interpretation. The decoded body is
    /// inspected for an embedded exchange error regardless of HTTP
    /// status, since the API reports rejections inside 200 responses.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "bitstamp response received");

        self.decode(&body)
    }

    /// Decode a response body into a JSON value.
    ///
    /// Fails with [`BitstampError::Decode`] unless the body is a JSON
    /// object or array, and with [`BitstampError::RemoteRejection`] if
    /// the exchange embedded an error indicator.
    pub fn decode(&self, body: &str) -> Result<Value> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| BitstampError::decode(e.to_string()))?;

        if !value.is_object() && !value.is_array() {
            return Err(BitstampError::decode(format!(
                "expected a JSON object or array, got: {value}"
            )));
        }

        check_remote_rejection(&value)?;

        Ok(value)
    }

    /// Convert a decoded JSON value into a typed model.
    ///
    /// Unknown keys are ignored; a missing required field fails with
    /// [`BitstampError::Mapping`].
    pub fn map_to_model<T: DeserializeOwned>(&self, item: Value) -> Result<T> {
        serde_json::from_value(item).map_err(|e| BitstampError::mapping(e.to_string()))
    }

    /// Convert a sequence of JSON values element-wise, preserving order.
    /// Empty input yields an empty vec.
    pub fn map_many_to_model<T: DeserializeOwned>(&self, items: Vec<Value>) -> Result<Vec<T>> {
        items
            .into_iter()
            .map(|item| self.map_to_model(item))
            .collect()
    }
}

/// The exchange reports rejections as `{"status": "error", "reason": ..,
/// "code": ..}` on private endpoints and `{"error": ..}` on some public
/// ones, often with HTTP 200.
fn check_remote_rejection(value: &Value) -> Result<()> {
    let Some(map) = value.as_object() else {
        return Ok(());
    };

    if map.get("status").and_then(Value::as_str) == Some("error") {
        let reason = map
            .get("reason")
            .map(describe)
            .unwrap_or_else(|| "unspecified error".to_string());
        let code = map
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string);

        return Err(BitstampError::RemoteRejection { code, reason });
    }

    if let Some(error) = map.get("error") {
        return Err(BitstampError::RemoteRejection {
            code: None,
            reason: describe(error),
        });
    }

    Ok(())
}

fn describe(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
