//! Fake Store HTTP client

use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::response::ApiResponse;
use crate::types::{Credentials, NewProduct};

/// Client for the Fake Store API
///
/// Each method issues one request and returns the response untouched.
/// There are no retries and no status checks here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let config = config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in and return the raw response
    ///
    /// Success is `201` with `{"token": ...}`; bad credentials give `401`
    /// with a plain-text message.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<ApiResponse> {
        let credentials = Credentials::new(username, password);
        self.post_json("/auth/login", &credentials, None).await
    }

    /// Fetch a single product by its ID
    pub async fn get_single_product(&self, product_id: u64) -> ClientResult<ApiResponse> {
        self.get(&format!("/products/{}", product_id)).await
    }

    /// Fetch all products
    pub async fn get_all_products(&self) -> ClientResult<ApiResponse> {
        self.get("/products").await
    }

    /// Create a product, authenticating with a bearer token
    pub async fn create_product(&self, product: &NewProduct, token: &str) -> ClientResult<ApiResponse> {
        self.post_json("/products", product, Some(token)).await
    }

    async fn get(&self, path: &str) -> ClientResult<ApiResponse> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let response = ApiResponse::read(response).await?;

        debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> ClientResult<ApiResponse> {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = ApiResponse::read(request.send().await?).await?;

        debug!("POST {} -> {}", url, response.status());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_rejects_schemeless_base_url() {
        let err = ApiClient::new(ClientConfig::with_base_url("fakestoreapi.com")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn test_url_join_has_single_slash() {
        let client = ApiClient::new(ClientConfig::with_base_url("https://fakestoreapi.com/")).unwrap();
        assert_eq!(client.url("/products/1"), "https://fakestoreapi.com/products/1");
    }
}
