//! Gemini-backed grounded model.

use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateContentRequest};
use tracing::debug;

use crate::error::{FinderError, Result};
use crate::traits::locator::Coordinate;
use crate::traits::model::{GroundedModel, GroundedReply};
use crate::types::profile::MapReference;

/// Default Gemini model id.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Grounded model backed by the Gemini API with Google Maps grounding.
pub struct GeminiModel {
    client: GeminiClient,
    model: String,
}

impl GeminiModel {
    /// Create a model over an existing client.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a model from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let client = GeminiClient::from_env().map_err(|e| FinderError::Config(Box::new(e)))?;
        Ok(Self::new(client))
    }

    /// Use a different Gemini model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl GroundedModel for GeminiModel {
    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinate>,
    ) -> Result<GroundedReply> {
        let mut request = GenerateContentRequest::new(&self.model, prompt).with_maps_grounding();
        if let Some(coordinate) = bias {
            request = request.with_location_bias(coordinate.lat, coordinate.lng);
        }

        let response = self
            .client
            .generate_content(&request)
            .await
            .map_err(|e| FinderError::Service(Box::new(e)))?;

        let text = response.text();
        // Every wire chunk keeps its slot, with or without a maps
        // payload, so positional map attachment lines up downstream.
        let chunks = response
            .grounding_chunks()
            .iter()
            .map(|chunk| MapReference {
                uri: chunk.maps.as_ref().and_then(|m| m.uri.clone()),
                title: chunk.maps.as_ref().and_then(|m| m.title.clone()),
            })
            .collect();

        debug!(model = %self.model, reply_len = text.len(), "gemini reply received");

        Ok(GroundedReply { text, chunks })
    }
}
