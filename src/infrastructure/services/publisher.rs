//! Prompt publisher - pushes the seed catalog, then reads every prompt back

use tracing::{debug, info};

use crate::domain::{DomainError, PromptSeed};
use crate::infrastructure::langfuse::{HttpClientTrait, LangfuseClient};

/// Publishes seed prompts to the prompt store and verifies the writes
#[derive(Debug)]
pub struct PromptPublisher<C: HttpClientTrait> {
    client: LangfuseClient<C>,
    seeds: Vec<PromptSeed>,
}

impl<C: HttpClientTrait> PromptPublisher<C> {
    pub fn new(client: LangfuseClient<C>, seeds: Vec<PromptSeed>) -> Self {
        Self { client, seeds }
    }

    pub fn seeds(&self) -> &[PromptSeed] {
        &self.seeds
    }

    /// Push every seed to the store
    ///
    /// Re-running is safe: the store assigns a fresh version to an existing
    /// name instead of rejecting the write.
    pub async fn publish(&self) -> Result<(), DomainError> {
        info!(
            "Publishing {} prompt(s) to {}",
            self.seeds.len(),
            self.client.base_url()
        );

        for seed in &self.seeds {
            info!(prompt = %seed.name(), "Creating prompt");

            let receipt = self.client.create_prompt(seed).await?;

            info!(
                prompt = %seed.name(),
                version = receipt.version,
                characters = seed.char_count(),
                lines = seed.line_count(),
                "Prompt published"
            );
        }

        Ok(())
    }

    /// Read every seed back by name and label and check the stored record
    pub async fn verify(&self) -> Result<(), DomainError> {
        for seed in &self.seeds {
            let label = seed.labels().first().ok_or_else(|| {
                DomainError::validation(format!(
                    "Prompt '{}' has no label to verify against",
                    seed.name()
                ))
            })?;

            debug!(prompt = %seed.name(), label = %label, "Reading prompt back");

            let details = self.client.get_prompt(seed.name().as_str(), label).await?;

            if details.prompt != seed.body() {
                return Err(DomainError::verification(format!(
                    "Prompt '{}' read back with a different body: {} characters, expected {}",
                    seed.name(),
                    details.prompt.chars().count(),
                    seed.char_count()
                )));
            }

            if !details.labels.iter().any(|l| l == label) {
                return Err(DomainError::verification(format!(
                    "Prompt '{}' read back without label '{}' (labels: {:?})",
                    seed.name(),
                    label,
                    details.labels
                )));
            }

            info!(
                prompt = %seed.name(),
                version = details.version,
                config = %details.config,
                "Prompt verified"
            );
        }

        Ok(())
    }

    /// Publish everything, then verify everything
    pub async fn run(&self) -> Result<(), DomainError> {
        self.publish().await?;
        self.verify().await?;

        info!("All prompts published and verified");

        Ok(())
    }
}
