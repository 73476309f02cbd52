use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error: {0}")]
    Api(String),
}

pub type LlmResult<T> = Result<T, LlmError>;

/// A text-generation backend.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete a single prompt and return the full response text.
    async fn generate(&self, prompt: &str) -> LlmResult<String>;
}
