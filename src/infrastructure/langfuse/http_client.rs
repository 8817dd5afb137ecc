use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError>;

    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn handle_response(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, DomainError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::service(status, error_body));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("Failed to parse response: {}", e)))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        Self::handle_response(response).await
    }

    async fn get_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
    ) -> Result<serde_json::Value, DomainError> {
        let mut request = self.client.get(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("Request failed: {}", e)))?;

        Self::handle_response(response).await
    }
}
