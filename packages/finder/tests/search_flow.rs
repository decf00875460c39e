//! Integration tests for the search flow.
//!
//! These tests drive the full path an application takes:
//! 1. Format the prompt and call the (mocked) grounded model
//! 2. Parse the reply into business profiles
//! 3. Fold the outcome into `SearchState`
//! 4. Export the results

use finder::testing::MockModel;
use finder::{
    export, Coordinate, Finder, GroundedReply, MapReference, SearchEvent, SearchState,
    EMPTY_RESULTS_NOTICE, FETCH_FAILED_NOTICE,
};

/// The reply shape the search prompt asks the model for.
const TWO_BUSINESS_REPLY: &str = "\
1. **Joe's Pizza**
Address: 123 Main St
Rating: 4.2
2. **Bella's Cafe**
Phone: 555-1234";

fn finder_with_reply(reply: GroundedReply) -> Finder<MockModel> {
    Finder::new(MockModel::new().with_reply(reply))
}

#[tokio::test]
async fn test_search_yields_expected_records_for_two_business_reply() {
    let finder = finder_with_reply(GroundedReply::text_only(TWO_BUSINESS_REPLY));

    let outcome = finder
        .search("Restaurants", "San Francisco, CA", None)
        .await
        .unwrap();

    assert_eq!(outcome.profiles.len(), 2);

    let joe = &outcome.profiles[0];
    assert_eq!(joe.name, "Joe's Pizza");
    assert_eq!(joe.address.as_deref(), Some("123 Main St"));
    assert_eq!(joe.rating, Some(4.2));
    assert!(joe.map_url.is_none());

    let bella = &outcome.profiles[1];
    assert_eq!(bella.name, "Bella's Cafe");
    assert_eq!(bella.phone.as_deref(), Some("555-1234"));
    assert!(bella.rating.is_none());
    assert!(bella.map_url.is_none());

    assert_ne!(joe.id, bella.id);
    assert_eq!(outcome.raw_text, TWO_BUSINESS_REPLY);
}

#[tokio::test]
async fn test_search_attaches_map_links_from_grounding_chunks() {
    let reply = GroundedReply {
        text: TWO_BUSINESS_REPLY.to_string(),
        chunks: vec![
            MapReference::new("https://maps.example/bella", "Bella's Cafe on Google Maps"),
            MapReference::untitled("https://maps.example/positional"),
        ],
    };
    let finder = finder_with_reply(reply);

    let outcome = finder
        .search("Restaurants", "San Francisco, CA", None)
        .await
        .unwrap();

    // Joe's Pizza matches no title, so it falls back to the chunk at
    // its own position; Bella's Cafe wins its title match.
    assert_eq!(
        outcome.profiles[0].map_url.as_deref(),
        Some("https://maps.example/bella")
    );
    assert_eq!(
        outcome.profiles[1].map_url.as_deref(),
        Some("https://maps.example/bella")
    );
}

#[tokio::test]
async fn test_search_sends_bias_and_formatted_prompt_to_model() {
    let model = MockModel::new();
    let finder = Finder::new(model.clone());

    let bias = Coordinate::new(37.77, -122.42);
    finder
        .search("Coffee Shops", "San Francisco, CA", Some(bias))
        .await
        .unwrap();

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0]
        .prompt
        .starts_with("Find top-rated Coffee Shops in San Francisco, CA."));
    assert!(calls[0].prompt.contains("labels for each field"));
    assert_eq!(calls[0].bias, Some(bias));
}

#[tokio::test]
async fn test_successful_search_flows_into_state_and_exports() {
    let finder = finder_with_reply(GroundedReply::text_only(TWO_BUSINESS_REPLY));

    let state = SearchState::new("Restaurants", "San Francisco, CA").apply(SearchEvent::Started {
        category: "Restaurants".to_string(),
        region: "San Francisco, CA".to_string(),
    });
    assert!(state.loading);

    let outcome = finder
        .search(&state.category, &state.region, None)
        .await
        .unwrap();
    let state = state.apply(SearchEvent::Succeeded {
        profiles: outcome.profiles,
    });

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.results.len(), 2);

    let csv = export::to_csv(&state.results);
    let json = export::to_json(&state.results).unwrap();
    assert!(!csv.is_empty());
    assert!(!json.is_empty());
    assert_eq!(
        export::export_filename(&state.category, &state.region, "csv"),
        "businesses_Restaurants_San_Francisco,_CA.csv"
    );
}

#[tokio::test]
async fn test_empty_reply_surfaces_refine_notice_not_error() {
    let finder = finder_with_reply(GroundedReply::text_only(
        "I could not find any businesses matching that description.",
    ));

    let outcome = finder
        .search("Submarine Bases", "Kansas", None)
        .await
        .unwrap();
    let state =
        SearchState::new("Submarine Bases", "Kansas").apply(SearchEvent::Succeeded {
            profiles: outcome.profiles,
        });

    assert_eq!(state.error.as_deref(), Some(EMPTY_RESULTS_NOTICE));
    assert!(state.results.is_empty());
    assert!(export::to_csv(&state.results).is_empty());
}

#[tokio::test]
async fn test_model_failure_surfaces_fetch_notice_and_keeps_prior_results() {
    let healthy = finder_with_reply(GroundedReply::text_only(TWO_BUSINESS_REPLY));
    let outcome = healthy
        .search("Restaurants", "San Francisco, CA", None)
        .await
        .unwrap();
    let state = SearchState::new("Restaurants", "San Francisco, CA").apply(
        SearchEvent::Succeeded {
            profiles: outcome.profiles,
        },
    );

    let failing = Finder::new(MockModel::new().with_failure("quota exhausted"));
    let result = failing.search(&state.category, &state.region, None).await;
    assert!(result.is_err());

    let state = state.apply(SearchEvent::Failed {
        detail: result.unwrap_err().to_string(),
    });

    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_NOTICE));
    assert_eq!(state.results.len(), 2);
}
