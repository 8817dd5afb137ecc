//! Domain layer - Core entities and validation

pub mod error;
pub mod prompt;

pub use error::DomainError;
pub use prompt::{
    validate_max_tokens, validate_prompt_name, validate_temperature, PromptConfig, PromptDetails,
    PromptName, PromptSeed, PromptType, PromptValidationError, PublishReceipt,
    MAX_PROMPT_NAME_LENGTH,
};
