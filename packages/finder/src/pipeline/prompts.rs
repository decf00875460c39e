//! Prompt templates for grounded business search.
//!
//! The wording steers the model toward the labeled block format the
//! reply parser understands: one marker line per business, one
//! `Label: value` line per field.

/// Prompt for one business search.
pub const SEARCH_PROMPT: &str = r#"Find top-rated {category} in {region}. For each business, extract:
      1. Name
      2. Full Address
      3. Phone Number (if available)
      4. Official Website URL (if available)
      5. Rating and Number of Reviews
      6. About (A short summary of the business)
      7. Owner/Manager details (if available)
      8. Contact Email (if available)

      Format the list clearly with labels for each field (e.g., Name:, Address:, About:, Owner:, Email:)."#;

/// Fill the search prompt with the requested category and region.
pub fn format_search_prompt(category: &str, region: &str) -> String {
    SEARCH_PROMPT
        .replace("{category}", category)
        .replace("{region}", region)
}
