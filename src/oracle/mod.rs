//! Text-generation oracle client.
//!
//! The oracle is a black box from prompt text to response text with no
//! structural guarantee on the output. Both pipeline stages go through the
//! [`TextOracle`] seam; tests script it with [`MockOracle`].

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::OracleError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockOracle;

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};

/// Prompt-in, free-text-out collaborator.
#[async_trait]
pub trait TextOracle: Send + Sync {
    /// Sends one system + user prompt pair and returns the raw response
    /// text. Callers own cleaning and validation of the result.
    async fn complete(&self, system: &str, user: &str) -> Result<String, OracleError>;
}

/// Production oracle backed by the `genai` multi-provider client.
///
/// Provider credentials come from the environment (`GEMINI_API_KEY`,
/// `OPENAI_API_KEY`, ...) per `genai`'s own resolution rules; the model id
/// decides which provider is hit.
#[derive(Clone)]
pub struct GenaiOracle {
    client: Client,
    model: String,
}

impl GenaiOracle {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextOracle for GenaiOracle {
    async fn complete(&self, system: &str, user: &str) -> Result<String, OracleError> {
        let request = ChatRequest::new(vec![ChatMessage::system(system), ChatMessage::user(user)]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| OracleError::Request(e.to_string()))?;

        let text = response.first_text().ok_or(OracleError::EmptyResponse)?;
        Ok(text.to_string())
    }
}
