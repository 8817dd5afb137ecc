//! Infrastructure services

mod publisher;

pub use publisher::PromptPublisher;
