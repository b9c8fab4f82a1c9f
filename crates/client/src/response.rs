//! Response envelope returned by every client call

use serde::de::DeserializeOwned;

use crate::error::ClientResult;

/// Status, URL and fully-read body of one HTTP response
///
/// The body is buffered as text so it can be inspected both as plain text
/// (the login endpoint answers failures with a bare string) and as JSON.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    url: String,
    content_type: Option<String>,
    body: String,
}

impl ApiResponse {
    /// Build a response from its parts
    pub fn from_parts(status: u16, url: impl Into<String>, content_type: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            content_type,
            body: body.into(),
        }
    }

    /// Drain a reqwest response into an envelope
    pub(crate) async fn read(response: reqwest::Response) -> ClientResult<Self> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        Ok(Self {
            status,
            url,
            content_type,
            body,
        })
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Raw body text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserialize the body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Parse the body as untyped JSON
    pub fn json_value(&self) -> ClientResult<serde_json::Value> {
        self.json()
    }
}
