//! Langfuse prompt store integration

mod client;
mod http_client;

pub use client::LangfuseClient;
pub use http_client::{HttpClient, HttpClientTrait};

#[cfg(test)]
pub use http_client::mock;
