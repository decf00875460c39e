//! Search orchestration: prompt, grounded model call, parse.

use tracing::{debug, info};

use crate::error::Result;
use crate::parser::parse_reply;
use crate::pipeline::prompts::format_search_prompt;
use crate::traits::locator::Coordinate;
use crate::traits::model::GroundedModel;
use crate::types::profile::BusinessProfile;

/// Result of one completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Parsed business profiles, in reply order
    pub profiles: Vec<BusinessProfile>,

    /// Raw model reply text, kept for display and debugging
    pub raw_text: String,
}

/// Business search engine over a grounded model.
///
/// Owns no shared state: one call produces one outcome, and the caller
/// applies it to its own state.
pub struct Finder<M: GroundedModel> {
    model: M,
}

impl<M: GroundedModel> Finder<M> {
    /// Create a finder over a model.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Run one search for top-rated `category` businesses in `region`.
    ///
    /// One in-flight model call, no retry, no timeout at this layer;
    /// `bias` steers grounding retrieval when given. Model failures
    /// propagate as `FinderError::Service` with no partial results. A
    /// reply that parses to zero records is a success with an empty
    /// list.
    pub async fn search(
        &self,
        category: &str,
        region: &str,
        bias: Option<Coordinate>,
    ) -> Result<SearchOutcome> {
        let prompt = format_search_prompt(category, region);
        debug!(
            category,
            region,
            biased = bias.is_some(),
            "dispatching grounded search"
        );

        let reply = self.model.generate_grounded(&prompt, bias).await?;
        let profiles = parse_reply(&reply.text, &reply.chunks);

        info!(
            category,
            region,
            profiles = profiles.len(),
            chunks = reply.chunks.len(),
            "search complete"
        );

        Ok(SearchOutcome {
            profiles,
            raw_text: reply.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinderError;
    use crate::testing::MockModel;
    use crate::traits::model::GroundedReply;
    use crate::types::profile::MapReference;

    #[tokio::test]
    async fn test_search_parses_model_reply() {
        let reply = GroundedReply {
            text: "1. **Joe's Pizza**\nAddress: 123 Main St\nRating: 4.2".to_string(),
            chunks: vec![MapReference::new(
                "https://maps.example/joe",
                "Joe's Pizza - Google Maps",
            )],
        };
        let model = MockModel::new().with_reply(reply);
        let finder = Finder::new(model);

        let outcome = finder.search("Restaurants", "Portland", None).await.unwrap();

        assert_eq!(outcome.profiles.len(), 1);
        assert_eq!(outcome.profiles[0].name, "Joe's Pizza");
        assert_eq!(
            outcome.profiles[0].map_url.as_deref(),
            Some("https://maps.example/joe")
        );
        assert!(outcome.raw_text.starts_with("1. **Joe's Pizza**"));
    }

    #[tokio::test]
    async fn test_search_formats_prompt_and_passes_bias() {
        let model = MockModel::new();
        let finder = Finder::new(model);

        let bias = Coordinate::new(45.52, -122.68);
        finder
            .search("Coffee Shops", "Portland, OR", Some(bias))
            .await
            .unwrap();

        let calls = finder.model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0]
            .prompt
            .starts_with("Find top-rated Coffee Shops in Portland, OR."));
        assert_eq!(calls[0].bias, Some(bias));
    }

    #[tokio::test]
    async fn test_search_empty_reply_is_success() {
        let finder = Finder::new(MockModel::new());

        let outcome = finder.search("Restaurants", "Nowhere", None).await.unwrap();

        assert!(outcome.profiles.is_empty());
        assert!(outcome.raw_text.is_empty());
    }

    #[tokio::test]
    async fn test_search_propagates_model_failure() {
        let model = MockModel::new().with_failure("quota exhausted");
        let finder = Finder::new(model);

        let result = finder.search("Restaurants", "Portland", None).await;

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, FinderError::Service(_)));
        assert!(err.to_string().contains("quota exhausted"));
    }
}
