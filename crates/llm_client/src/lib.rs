//! llm_client - Ollama text-generation client behind a provider trait
//!
//! The receptionist talks to the model through [`LlmProvider`], so engines
//! and tests can swap in scripted providers without touching HTTP.

mod ollama;
mod provider;

pub use ollama::OllamaClient;
pub use provider::{LlmError, LlmProvider, LlmResult};
