//! Upstream text-generation backends

pub mod openai;

pub use openai::OpenAiBackend;

use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;

/// The single capability this service needs from an upstream model:
/// prompt in, generated text out.
///
/// Constructed once at startup and shared read-only across requests; tests
/// substitute a stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ApiError>;
}

/// Shared handle injected into the endpoint handlers.
pub type SharedGenerator = Arc<dyn TextGenerator>;
