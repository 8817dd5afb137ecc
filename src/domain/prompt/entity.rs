//! Prompt entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_max_tokens, validate_prompt_name, validate_temperature, PromptValidationError,
};

/// Prompt name - the unique identifier a prompt is stored under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptName(String);

impl PromptName {
    /// Create a new PromptName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, PromptValidationError> {
        let name = name.into();
        validate_prompt_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PromptName {
    type Error = PromptValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PromptName> for String {
    fn from(name: PromptName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PromptName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prompt type tag as stored by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptType {
    #[default]
    Text,
    Chat,
}

/// Scalar model settings published alongside a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl PromptConfig {
    pub fn new(model: impl Into<String>, temperature: f32, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_tokens,
        }
    }

    /// Validate the config scalars
    pub fn validate(&self) -> Result<(), PromptValidationError> {
        if self.model.is_empty() {
            return Err(PromptValidationError::EmptyModel);
        }

        validate_temperature(self.temperature)?;
        validate_max_tokens(self.max_tokens)?;

        Ok(())
    }
}

/// A compiled-in prompt to be published to the remote store
///
/// The body is trimmed of surrounding whitespace at construction so the
/// published text and the reported lengths always refer to the same string.
#[derive(Debug, Clone)]
pub struct PromptSeed {
    name: PromptName,
    prompt_type: PromptType,
    body: String,
    labels: Vec<String>,
    config: PromptConfig,
}

impl PromptSeed {
    /// Create a new seed with the given name, body and config
    pub fn new(name: PromptName, body: impl Into<String>, config: PromptConfig) -> Self {
        Self {
            name,
            prompt_type: PromptType::Text,
            body: body.into().trim().to_string(),
            labels: Vec::new(),
            config,
        }
    }

    pub fn with_type(mut self, prompt_type: PromptType) -> Self {
        self.prompt_type = prompt_type;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    // Getters

    pub fn name(&self) -> &PromptName {
        &self.name
    }

    pub fn prompt_type(&self) -> PromptType {
        self.prompt_type
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Number of characters in the published body
    pub fn char_count(&self) -> usize {
        self.body.chars().count()
    }

    /// Number of lines in the published body
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}

/// Result of a create call - the version the service assigned and the
/// echoed config, used only for confirmation output
#[derive(Debug, Clone, Deserialize)]
pub struct PublishReceipt {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// A prompt record read back from the remote service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDetails {
    pub name: String,
    pub version: u32,
    #[serde(rename = "type", default)]
    pub prompt_type: PromptType,
    pub prompt: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
