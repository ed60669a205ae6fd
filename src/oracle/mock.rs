//! Scripted in-memory oracle for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::error::OracleError;
use super::TextOracle;

/// Replays a scripted queue of responses and records every prompt it was
/// given, so tests can assert on both sides of the conversation.
///
/// An exhausted script yields [`OracleError::EmptyResponse`].
#[derive(Clone, Default)]
pub struct MockOracle {
    replies: Arc<Mutex<VecDeque<Result<String, OracleError>>>>,
    prompts: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn push_reply(&self, text: impl Into<String>) {
        self.replies
            .lock()
            .expect("mock oracle lock poisoned")
            .push_back(Ok(text.into()));
    }

    /// Queues a request-level failure.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .expect("mock oracle lock poisoned")
            .push_back(Err(OracleError::Request(message.into())));
    }

    /// Returns every `(system, user)` prompt pair seen so far.
    pub fn recorded_prompts(&self) -> Vec<(String, String)> {
        self.prompts
            .lock()
            .expect("mock oracle lock poisoned")
            .clone()
    }

    /// Number of calls made against this oracle.
    pub fn call_count(&self) -> usize {
        self.prompts
            .lock()
            .expect("mock oracle lock poisoned")
            .len()
    }
}

#[async_trait]
impl TextOracle for MockOracle {
    async fn complete(&self, system: &str, user: &str) -> Result<String, OracleError> {
        self.prompts
            .lock()
            .expect("mock oracle lock poisoned")
            .push((system.to_string(), user.to_string()));

        self.replies
            .lock()
            .expect("mock oracle lock poisoned")
            .pop_front()
            .unwrap_or(Err(OracleError::EmptyResponse))
    }
}
