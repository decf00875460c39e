//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the finder
//! library without making real model or network calls.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{FinderError, Result};
use crate::traits::locator::Coordinate;
use crate::traits::model::{GroundedModel, GroundedReply};

/// A mock grounded model for testing.
///
/// Returns deterministic, configurable replies. Clones share state, so
/// a test can keep a handle for assertions after moving the mock into a
/// `Finder`.
#[derive(Clone, Default)]
pub struct MockModel {
    /// Predefined replies by exact prompt
    replies: Arc<RwLock<HashMap<String, GroundedReply>>>,

    /// Reply used when no prompt-specific reply is registered
    fallback: Arc<RwLock<Option<GroundedReply>>>,

    /// When set, every call fails with this message
    failure: Arc<RwLock<Option<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone, PartialEq)]
pub struct MockModelCall {
    /// The formatted prompt the pipeline sent
    pub prompt: String,

    /// The coordinate bias, if any
    pub bias: Option<Coordinate>,
}

impl MockModel {
    /// Create a new mock model with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined reply for an exact prompt.
    pub fn with_reply_for(self, prompt: impl Into<String>, reply: GroundedReply) -> Self {
        self.replies.write().unwrap().insert(prompt.into(), reply);
        self
    }

    /// Set the reply used for any prompt without a specific one.
    pub fn with_reply(self, reply: GroundedReply) -> Self {
        *self.fallback.write().unwrap() = Some(reply);
        self
    }

    /// Make every call fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl GroundedModel for MockModel {
    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinate>,
    ) -> Result<GroundedReply> {
        self.calls.write().unwrap().push(MockModelCall {
            prompt: prompt.to_string(),
            bias,
        });

        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(FinderError::Service(message.into()));
        }

        // Prompt-specific reply, then the fallback, then an empty reply.
        Ok(self
            .replies
            .read()
            .unwrap()
            .get(prompt)
            .cloned()
            .or_else(|| self.fallback.read().unwrap().clone())
            .unwrap_or_default())
    }
}
