//! Prompt domain - the records this tool publishes and reads back

mod entity;
mod validation;

pub use entity::{
    PromptConfig, PromptDetails, PromptName, PromptSeed, PromptType, PublishReceipt,
};
pub use validation::{
    validate_max_tokens, validate_prompt_name, validate_temperature, PromptValidationError,
    MAX_PROMPT_NAME_LENGTH,
};
