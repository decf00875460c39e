//! Search pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Prompt construction (category + region into the search template)
//! - The grounded model call, with an optional coordinate bias
//! - Reply parsing into business profiles with map links attached

pub mod prompts;
pub mod search;

pub use prompts::{format_search_prompt, SEARCH_PROMPT};
pub use search::{Finder, SearchOutcome};
