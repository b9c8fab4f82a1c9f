//! Shared test setup: client construction and authenticated token retrieval

use fakestore_client::{ApiClient, ClientConfig, Credentials};
use tracing::debug;

use crate::error::{E2eError, E2eResult};

/// Account accepted by the Fake Store API
pub const VALID_USERNAME: &str = "mor_2314";
pub const VALID_PASSWORD: &str = "83r5^_";

/// Account the Fake Store API rejects
pub const INVALID_USERNAME: &str = "pepito";
pub const INVALID_PASSWORD: &str = "wrong_password";

/// Exact body the service sends back for rejected credentials
pub const INVALID_LOGIN_MESSAGE: &str = "username or password is incorrect";

/// Credentials the token fixture logs in with
pub fn valid_credentials() -> Credentials {
    Credentials::new(VALID_USERNAME, VALID_PASSWORD)
}

pub fn invalid_credentials() -> Credentials {
    Credentials::new(INVALID_USERNAME, INVALID_PASSWORD)
}

/// A fresh client for one test
pub fn api_client(config: &ClientConfig) -> E2eResult<ApiClient> {
    Ok(ApiClient::new(config.clone())?)
}

/// Log in and return the bearer token
///
/// Fails fast unless the login answers `201` with a non-empty `token`.
pub async fn auth_token(client: &ApiClient, credentials: &Credentials) -> E2eResult<String> {
    let response = client.login(&credentials.username, &credentials.password).await?;

    if response.status() != 201 {
        return Err(E2eError::Fixture(format!(
            "Failed to log in. Status: {}",
            response.status()
        )));
    }

    let body = response
        .json_value()
        .map_err(|e| E2eError::Fixture(format!("Login response is not JSON: {}", e)))?;

    match body.get("token").and_then(|t| t.as_str()) {
        Some(token) if !token.is_empty() => {
            debug!("Obtained token for {}", credentials.username);
            Ok(token.to_string())
        }
        _ => Err(E2eError::Fixture("Login response missing 'token'".to_string())),
    }
}
