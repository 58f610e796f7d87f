/*
[INPUT]:  Credentials and gateway configuration
[OUTPUT]: Configured API client ready for public and signed calls
[POS]:    HTTP layer - client composition over the gateway
[UPDATE]: When changing construction options or the request protocol
*/

use serde_json::Value;
use tracing::debug;

use crate::http::error::Result;
use crate::http::gateway::{ClientConfig, Gateway};
use crate::http::signature::RequestSigner;

/// Credential triple for authenticated requests.
/// Supplied once at construction, never mutated.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub customer_id: String,
    pub api_key: String,
    pub secret: String,
}

/// Main API client for the Bitstamp exchange.
///
/// One method per exchange operation; public market-data endpoints in
/// `http::public`, signed account endpoints in `http::private`.
#[derive(Debug)]
pub struct BitstampClient {
    gateway: Gateway,
    signer: RequestSigner,
}

impl BitstampClient {
    /// Create a client with default configuration against the live API
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration against the live API
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self::with_gateway(credentials, Gateway::with_config(config)?))
    }

    /// Create a client over an explicitly constructed gateway
    pub fn with_gateway(credentials: Credentials, gateway: Gateway) -> Self {
        Self {
            gateway,
            signer: RequestSigner::new(
                credentials.customer_id,
                credentials.api_key,
                credentials.secret,
            ),
        }
    }

    /// The underlying transport gateway
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Issue an unsigned GET against the given path segments
    pub(crate) async fn send_public(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Value> {
        let urn = self.gateway.urn(segments);
        debug!(urn = %urn, "sending public request");

        let mut builder = self.gateway.get(&urn);
        if !query.is_empty() {
            builder = builder.query(query);
        }

        self.gateway.send(builder).await
    }

    /// Issue a signed POST against the given path segments.
    ///
    /// Draws a fresh nonce and attaches `key`, `nonce`, `signature`
    /// as form fields alongside any operation parameters.
    pub(crate) async fn send_signed(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<Value> {
        let urn = self.gateway.urn(segments);
        debug!(urn = %urn, "sending signed request");

        let mut form: Vec<(&str, String)> = self.signer.auth_fields().to_vec();
        form.extend(params.iter().map(|(k, v)| (*k, v.clone())));

        let builder = self.gateway.post(&urn).form(&form);
        self.gateway.send(builder).await
    }
}
