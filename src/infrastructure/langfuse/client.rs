use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, PromptDetails, PromptSeed, PublishReceipt};

/// Client for the Langfuse public prompt API
///
/// Authenticates every request with HTTP Basic auth built from the project's
/// public/secret key pair.
#[derive(Debug)]
pub struct LangfuseClient<C: HttpClientTrait> {
    client: C,
    base_url: String,
    basic_auth: String,
}

impl<C: HttpClientTrait> LangfuseClient<C> {
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        public_key: impl AsRef<str>,
        secret_key: impl AsRef<str>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let credentials = format!("{}:{}", public_key.as_ref(), secret_key.as_ref());
        let basic_auth = format!("Basic {}", BASE64.encode(credentials));

        Self {
            client,
            base_url,
            basic_auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn prompts_url(&self) -> String {
        format!("{}/api/public/v2/prompts", self.base_url)
    }

    fn prompt_url(&self, name: &str, label: &str) -> String {
        format!(
            "{}/api/public/v2/prompts/{}?label={}",
            self.base_url, name, label
        )
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.basic_auth.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_create_body(&self, seed: &PromptSeed) -> serde_json::Value {
        serde_json::json!({
            "type": seed.prompt_type(),
            "name": seed.name().as_str(),
            "prompt": seed.body(),
            "labels": seed.labels(),
            "config": seed.config(),
        })
    }

    /// Create (or add a new version of) a prompt
    ///
    /// Re-posting an existing name is not an error; the service assigns the
    /// next version number and moves the labels to it.
    pub async fn create_prompt(&self, seed: &PromptSeed) -> Result<PublishReceipt, DomainError> {
        let url = self.prompts_url();
        let body = self.build_create_body(seed);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        serde_json::from_value(response)
            .map_err(|e| DomainError::transport(format!("Failed to parse create response: {}", e)))
    }

    /// Fetch a prompt by name and label
    pub async fn get_prompt(
        &self,
        name: &str,
        label: &str,
    ) -> Result<PromptDetails, DomainError> {
        let url = self.prompt_url(name, label);
        let response = self
            .client
            .get_json(&url, self.headers())
            .await
            .map_err(|e| match e.status() {
                Some(404) => DomainError::not_found(format!(
                    "Prompt '{}' with label '{}' not found",
                    name, label
                )),
                _ => e,
            })?;

        serde_json::from_value(response)
            .map_err(|e| DomainError::transport(format!("Failed to parse prompt response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::http_client::mock::MockHttpClient;
    use super::*;
    use crate::domain::{PromptConfig, PromptName};

    fn test_seed() -> PromptSeed {
        PromptSeed::new(
            PromptName::new("test-prompt").unwrap(),
            "You are a test assistant.",
            PromptConfig::new("gemini-2.0-flash-exp", 0.7, 8192),
        )
        .with_label("production")
    }

    fn created_response(version: u32) -> serde_json::Value {
        serde_json::json!({
            "name": "test-prompt",
            "version": version,
            "type": "text",
            "prompt": "You are a test assistant.",
            "labels": ["production"],
            "config": {"model": "gemini-2.0-flash-exp", "temperature": 0.7, "max_tokens": 8192}
        })
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = LangfuseClient::new(MockHttpClient::new(), "http://localhost:3000/", "pk", "sk");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.prompts_url(),
            "http://localhost:3000/api/public/v2/prompts"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        let client = LangfuseClient::new(MockHttpClient::new(), "http://localhost:3000", "pk", "sk");
        let headers = client.headers();

        // base64("pk:sk") == "cGs6c2s="
        assert!(headers.contains(&("Authorization", "Basic cGs6c2s=")));
        assert!(headers.contains(&("Content-Type", "application/json")));
    }

    #[test]
    fn test_create_body_shape() {
        let client = LangfuseClient::new(MockHttpClient::new(), "http://localhost:3000", "pk", "sk");
        let body = client.build_create_body(&test_seed());

        assert_eq!(
            body,
            serde_json::json!({
                "type": "text",
                "name": "test-prompt",
                "prompt": "You are a test assistant.",
                "labels": ["production"],
                "config": {"model": "gemini-2.0-flash-exp", "temperature": 0.7, "max_tokens": 8192}
            })
        );
    }

    #[tokio::test]
    async fn test_create_prompt_returns_receipt() {
        let http = MockHttpClient::new().with_response(
            "http://localhost:3000/api/public/v2/prompts",
            created_response(1),
        );
        let client = LangfuseClient::new(http, "http://localhost:3000", "pk", "sk");

        let receipt = client.create_prompt(&test_seed()).await.unwrap();
        assert_eq!(receipt.name, "test-prompt");
        assert_eq!(receipt.version, 1);
    }

    #[tokio::test]
    async fn test_get_prompt_by_name_and_label() {
        let http = MockHttpClient::new().with_response(
            "http://localhost:3000/api/public/v2/prompts/test-prompt?label=production",
            created_response(2),
        );
        let client = LangfuseClient::new(http, "http://localhost:3000", "pk", "sk");

        let details = client.get_prompt("test-prompt", "production").await.unwrap();
        assert_eq!(details.version, 2);
        assert_eq!(details.prompt, "You are a test assistant.");
        assert_eq!(details.labels, vec!["production"]);
    }

    #[tokio::test]
    async fn test_get_prompt_missing_maps_to_not_found() {
        let http = MockHttpClient::new().with_service_error(
            "http://localhost:3000/api/public/v2/prompts/test-prompt?label=production",
            404,
            "{\"message\":\"Prompt not found\"}",
        );
        let client = LangfuseClient::new(http, "http://localhost:3000", "pk", "sk");

        let error = client
            .get_prompt("test-prompt", "production")
            .await
            .unwrap_err();
        assert!(matches!(error, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_rejected_create_surfaces_service_error() {
        let http = MockHttpClient::new().with_service_error(
            "http://localhost:3000/api/public/v2/prompts",
            401,
            "{\"message\":\"Invalid credentials\"}",
        );
        let client = LangfuseClient::new(http, "http://localhost:3000", "pk", "sk");

        let error = client.create_prompt(&test_seed()).await.unwrap_err();
        assert_eq!(error.status(), Some(401));
    }
}
