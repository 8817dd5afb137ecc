//! Seed prompt catalog
//!
//! Every prompt the agent runtime expects to find in the prompt store is
//! defined here and pushed by the publisher. The bodies live as literal
//! constants so the runtime's fallback copies and the published copies can be
//! compared line for line.

mod root_agent;

pub use root_agent::ROOT_AGENT_INSTRUCTION;

use crate::domain::{PromptConfig, PromptName, PromptSeed};

/// Name the root agent instruction is stored under
pub const ROOT_AGENT_PROMPT_NAME: &str = "nodus-root-agent-instruction";

/// Label selecting the active prompt version in the agent runtime
pub const PRODUCTION_LABEL: &str = "production";

/// All seed prompts, in publish order
pub fn seeds() -> Vec<PromptSeed> {
    vec![PromptSeed::new(
        PromptName::new(ROOT_AGENT_PROMPT_NAME).unwrap(),
        ROOT_AGENT_INSTRUCTION,
        PromptConfig::new("gemini-2.0-flash-exp", 0.7, 8192),
    )
    .with_label(PRODUCTION_LABEL)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_are_valid() {
        let seeds = seeds();
        assert_eq!(seeds.len(), 1);

        for seed in &seeds {
            assert!(!seed.body().is_empty());
            assert!(!seed.labels().is_empty());
            seed.config().validate().unwrap();
        }
    }

    #[test]
    fn test_root_agent_seed() {
        let seeds = seeds();
        let seed = &seeds[0];

        assert_eq!(seed.name().as_str(), ROOT_AGENT_PROMPT_NAME);
        assert_eq!(seed.labels(), &[PRODUCTION_LABEL]);
        assert_eq!(seed.config().model, "gemini-2.0-flash-exp");
        assert_eq!(seed.config().temperature, 0.7);
        assert_eq!(seed.config().max_tokens, 8192);
    }

    #[test]
    fn test_reported_counts_match_literal() {
        let seeds = seeds();
        let seed = &seeds[0];

        assert_eq!(seed.char_count(), ROOT_AGENT_INSTRUCTION.trim().chars().count());
        assert_eq!(seed.line_count(), ROOT_AGENT_INSTRUCTION.trim().lines().count());
    }

    #[test]
    fn test_instruction_mentions_runtime_tools() {
        // The body is data, but a few anchors guard against accidental edits.
        assert!(ROOT_AGENT_INSTRUCTION.contains("load_memory"));
        assert!(ROOT_AGENT_INSTRUCTION.contains("query_knowledge_base"));
        assert!(ROOT_AGENT_INSTRUCTION.contains("hitl_math_agent"));
    }
}
