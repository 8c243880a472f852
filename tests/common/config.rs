//! Test configuration pointing the pipeline at a mock search server

use etsi_deliverables::Config;
use wiremock::MockServer;

/// Default configuration with the endpoint replaced by the mock server
pub fn mock_config(server: &MockServer) -> Config {
    Config {
        endpoint: format!("{}/", server.uri()),
        ..Config::default()
    }
}
