//! Search session state and its transition function.
//!
//! The pipeline never mutates shared state. The application owns one
//! `SearchState` and folds `SearchEvent`s into it around each search, so
//! every presentation layer sees the same session rules.

use tracing::warn;

use crate::types::profile::BusinessProfile;

/// Notice shown when a search succeeds but nothing could be extracted.
pub const EMPTY_RESULTS_NOTICE: &str =
    "No specific business profiles could be extracted. Try refining your search.";

/// Notice shown when the upstream call fails.
pub const FETCH_FAILED_NOTICE: &str =
    "Failed to fetch data. Please check your connection or try again later.";

/// One search session's state.
///
/// Single-writer: only the event fold updates it. `results` is replaced
/// wholesale by a successful search, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Category of the current or last submitted search
    pub category: String,

    /// Region of the current or last submitted search
    pub region: String,

    /// A search is in flight
    pub loading: bool,

    /// Results of the last completed search
    pub results: Vec<BusinessProfile>,

    /// Hard-failure or empty-result notice
    pub error: Option<String>,
}

impl SearchState {
    /// Initial state for the given form values.
    pub fn new(category: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            region: region.into(),
            loading: false,
            results: Vec::new(),
            error: None,
        }
    }

    /// Fold one event into the state.
    ///
    /// Starting a search records the query, raises the loading flag, and
    /// clears any notice while keeping stale results visible. Success
    /// replaces the results and raises the empty-result notice when
    /// nothing was extracted. Failure keeps prior results and raises the
    /// fetch-failure notice; the underlying detail goes to the log only.
    pub fn apply(self, event: SearchEvent) -> SearchState {
        match event {
            SearchEvent::Started { category, region } => SearchState {
                category,
                region,
                loading: true,
                error: None,
                ..self
            },
            SearchEvent::Succeeded { profiles } => {
                let error = if profiles.is_empty() {
                    Some(EMPTY_RESULTS_NOTICE.to_string())
                } else {
                    None
                };
                SearchState {
                    loading: false,
                    results: profiles,
                    error,
                    ..self
                }
            }
            SearchEvent::Failed { detail } => {
                warn!(error = %detail, "search failed");
                SearchState {
                    loading: false,
                    error: Some(FETCH_FAILED_NOTICE.to_string()),
                    ..self
                }
            }
        }
    }
}

/// Events produced around one search invocation.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// A search was submitted with these form values.
    Started { category: String, region: String },

    /// The model call and parse completed.
    Succeeded { profiles: Vec<BusinessProfile> },

    /// The model call failed; `detail` is the underlying error text.
    Failed { detail: String },
}
