//! Grounded Business Search Library
//!
//! Query-driven local business discovery: one prompt to a maps-grounded
//! model, one parse of the loosely formatted reply, structured records
//! out. The library handles mechanics (prompting, parsing, export
//! encoding, state transitions); the app decides presentation.
//!
//! # Design Philosophy
//!
//! - The model's free-text reply is the source of truth; parsing is
//!   forgiving, line-oriented, and never fails
//! - Grounding evidence (Google Maps chunks) enriches records but is
//!   never required
//! - Pure functions at the edges: export encoders take a snapshot,
//!   the state reducer takes an event
//!
//! # Usage
//!
//! ```rust,ignore
//! use finder::ai::GeminiModel;
//! use finder::{Finder, SearchEvent, SearchState};
//!
//! let model = GeminiModel::from_env()?;
//! let finder = Finder::new(model);
//!
//! let mut state = SearchState::new("Coffee Shops", "Portland, OR");
//! state = state.apply(SearchEvent::Started {
//!     category: "Coffee Shops".into(),
//!     region: "Portland, OR".into(),
//! });
//!
//! state = match finder.search("Coffee Shops", "Portland, OR", None).await {
//!     Ok(outcome) => state.apply(SearchEvent::Succeeded {
//!         profiles: outcome.profiles,
//!     }),
//!     Err(e) => state.apply(SearchEvent::Failed {
//!         detail: e.to_string(),
//!     }),
//! };
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (GroundedModel, Locator)
//! - [`types`] - Business profile, map reference, and search state types
//! - [`pipeline`] - Prompt templates and the search orchestrator
//! - [`parser`] - Line-oriented reply parsing
//! - [`export`] - CSV and JSON export encoders
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod export;
pub mod parser;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "gemini")]
pub mod ai;

// Re-export core types at crate root
pub use error::{FinderError, Result};
pub use parser::parse_reply;
pub use pipeline::{Finder, SearchOutcome};
pub use traits::{
    locator::{Coordinate, FixedLocator, Locator, NominatimLocator, NullLocator},
    model::{GroundedModel, GroundedReply},
};
pub use types::{
    profile::{BusinessProfile, MapReference},
    state::{SearchEvent, SearchState, EMPTY_RESULTS_NOTICE, FETCH_FAILED_NOTICE},
};
