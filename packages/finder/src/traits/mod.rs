//! Trait seams for the search pipeline.
//!
//! The pipeline depends on these abstractions rather than concrete
//! providers, so tests run against mocks and providers can be swapped
//! without touching orchestration code.

pub mod locator;
pub mod model;

pub use locator::{Coordinate, FixedLocator, Locator, NominatimLocator, NullLocator};
pub use model::{GroundedModel, GroundedReply};
