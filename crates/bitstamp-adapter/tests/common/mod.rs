/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitstamp-adapter tests

use bitstamp_adapter::{BitstampClient, ClientConfig, Credentials, Gateway};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing.
///
/// Uses the builder so the server is standalone rather than pooled:
/// dropping it actually closes the listener, which the transport
/// failure test relies on.
pub async fn setup_mock_server() -> MockServer {
    MockServer::builder().start().await
}

/// Fixed credential triple for deterministic signing in tests
pub fn test_credentials() -> Credentials {
    Credentials {
        customer_id: "123".to_string(),
        api_key: "abc".to_string(),
        secret: "s3cr3t".to_string(),
    }
}

/// Build a client whose gateway points at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> BitstampClient {
    let gateway = Gateway::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("gateway init");

    BitstampClient::with_gateway(test_credentials(), gateway)
}
