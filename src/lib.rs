//! Nodus Prompt Sync
//!
//! Maintenance CLI that seeds the Langfuse prompt store with the prompts the
//! Nodus agent runtime expects to find there:
//! - Authenticates with the project's public/secret key pair
//! - Upserts each compiled-in seed prompt (body, labels, model config)
//! - Reads every prompt back by name and label to confirm the write

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod prompts;

pub use config::AppConfig;

use infrastructure::langfuse::{HttpClient, LangfuseClient};
use infrastructure::services::PromptPublisher;

/// Build the reqwest-backed publisher for the configured prompt store
pub fn create_publisher(config: &AppConfig) -> PromptPublisher<HttpClient> {
    let client = LangfuseClient::new(
        HttpClient::new(),
        config.langfuse.host.as_str(),
        &config.langfuse.public_key,
        &config.langfuse.secret_key,
    );

    PromptPublisher::new(client, prompts::seeds())
}
