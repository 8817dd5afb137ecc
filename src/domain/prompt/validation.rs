//! Prompt validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for prompt names
pub const MAX_PROMPT_NAME_LENGTH: usize = 100;

/// Regex pattern for valid prompt names (alphanumeric + hyphens)
static PROMPT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap());

/// Prompt validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum PromptValidationError {
    /// Prompt name is empty
    EmptyName,
    /// Prompt name exceeds maximum length
    NameTooLong { length: usize, max: usize },
    /// Prompt name contains invalid characters
    InvalidNameFormat { name: String },
    /// Temperature out of valid range
    InvalidTemperature { value: f32, min: f32, max: f32 },
    /// Max tokens is zero
    InvalidMaxTokens,
    /// Model identifier is empty
    EmptyModel,
}

impl fmt::Display for PromptValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Prompt name cannot be empty"),
            Self::NameTooLong { length, max } => {
                write!(
                    f,
                    "Prompt name too long: {} characters (max {})",
                    length, max
                )
            }
            Self::InvalidNameFormat { name } => {
                write!(
                    f,
                    "Invalid prompt name format '{}': must be alphanumeric with hyphens, cannot start or end with hyphen",
                    name
                )
            }
            Self::InvalidTemperature { value, min, max } => {
                write!(
                    f,
                    "Invalid temperature {}: must be between {} and {}",
                    value, min, max
                )
            }
            Self::InvalidMaxTokens => write!(f, "max_tokens must be greater than 0"),
            Self::EmptyModel => write!(f, "Model identifier cannot be empty"),
        }
    }
}

impl std::error::Error for PromptValidationError {}

/// Validate a prompt name
pub fn validate_prompt_name(name: &str) -> Result<(), PromptValidationError> {
    if name.is_empty() {
        return Err(PromptValidationError::EmptyName);
    }

    if name.len() > MAX_PROMPT_NAME_LENGTH {
        return Err(PromptValidationError::NameTooLong {
            length: name.len(),
            max: MAX_PROMPT_NAME_LENGTH,
        });
    }

    if !PROMPT_NAME_PATTERN.is_match(name) {
        return Err(PromptValidationError::InvalidNameFormat {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validate a temperature value
pub fn validate_temperature(temp: f32) -> Result<(), PromptValidationError> {
    const MIN: f32 = 0.0;
    const MAX: f32 = 2.0;

    if !(MIN..=MAX).contains(&temp) {
        return Err(PromptValidationError::InvalidTemperature {
            value: temp,
            min: MIN,
            max: MAX,
        });
    }

    Ok(())
}

/// Validate a max_tokens value
pub fn validate_max_tokens(max_tokens: u32) -> Result<(), PromptValidationError> {
    if max_tokens == 0 {
        return Err(PromptValidationError::InvalidMaxTokens);
    }

    Ok(())
}
