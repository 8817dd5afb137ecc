//! CLI module for nodus-prompt-sync
//!
//! Provides subcommands for the publish/verify cycle:
//! - `sync`: publish all seed prompts, then verify them (default)
//! - `publish`: publish only
//! - `verify`: verify only

pub mod publish;
pub mod sync;
pub mod verify;

use clap::{Parser, Subcommand};

/// Nodus Prompt Sync - seeds the Langfuse prompt store for the agent runtime
#[derive(Parser)]
#[command(name = "nodus-prompt-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Publish all seed prompts, then verify them (default)
    Sync,

    /// Publish all seed prompts without verifying
    Publish,

    /// Verify previously published prompts
    Verify,
}
