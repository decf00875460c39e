//! Grounded model trait for business search.

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::locator::Coordinate;
use crate::types::profile::MapReference;

/// One reply from a grounded generation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundedReply {
    /// Free-text model output
    pub text: String,

    /// Maps evidence returned alongside the text, in provider order
    pub chunks: Vec<MapReference>,
}

impl GroundedReply {
    /// Create a reply with text and no evidence.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chunks: Vec::new(),
        }
    }
}

/// Model trait for maps-grounded text generation.
///
/// Implementations wrap a specific provider and its wire protocol; the
/// pipeline only sees free text plus map evidence. Provider failures
/// surface as `FinderError::Service` with the upstream error attached
/// as the source.
#[async_trait]
pub trait GroundedModel: Send + Sync {
    /// Generate a reply for `prompt` with maps grounding enabled.
    ///
    /// When `bias` is given, grounding retrieval is steered toward that
    /// coordinate.
    async fn generate_grounded(
        &self,
        prompt: &str,
        bias: Option<Coordinate>,
    ) -> Result<GroundedReply>;
}
