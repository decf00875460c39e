//! Line-oriented parsing of model replies into business profiles.
//!
//! The grounded model returns a loosely formatted list: one marker line
//! per business followed by labeled attribute lines. Classification of
//! single lines lives in [`line`]; this module folds the resulting
//! tokens into [`BusinessProfile`] records and attaches map links from
//! the grounding references afterwards.

pub mod line;

use uuid::Uuid;

use crate::types::profile::{BusinessProfile, MapReference};
use line::{FieldKind, LineClassifier, LineToken};

/// Accumulates field lines until a marker closes the block.
#[derive(Debug, Default)]
struct Draft {
    name: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    email: Option<String>,
    about: Option<String>,
    owner: Option<String>,
    rating: Option<f64>,
}

impl Draft {
    fn set(&mut self, kind: FieldKind, value: String) {
        match kind {
            FieldKind::Address => self.address = Some(value),
            FieldKind::Phone => self.phone = Some(value),
            FieldKind::Website => self.website = Some(value),
            FieldKind::About => self.about = Some(value),
            FieldKind::Owner => self.owner = Some(value),
            FieldKind::Email => self.email = Some(value),
            FieldKind::Rating => {
                if let Ok(rating) = value.parse::<f64>() {
                    self.rating = Some(rating);
                }
            }
        }
    }

    /// Close the current block.
    ///
    /// Yields a profile only when a name was seen. A nameless draft is
    /// left untouched, so fields collected before the first marker ride
    /// along into the first named record.
    fn finalize(&mut self) -> Option<BusinessProfile> {
        let name = self.name.take()?;
        let fields = std::mem::take(self);

        Some(BusinessProfile {
            id: Uuid::new_v4().to_string(),
            name,
            address: fields.address,
            phone: fields.phone,
            website: fields.website,
            email: fields.email,
            about: fields.about,
            owner: fields.owner,
            rating: fields.rating,
            reviews: None,
            map_url: None,
        })
    }
}

/// Parse a model reply into business profiles.
///
/// Records appear in reply order; each gets a fresh id. After parsing,
/// map links from `refs` are attached: a case-insensitive title match
/// wins, otherwise the reference sharing the record's position is used.
/// Replies with no marker lines yield an empty vector, never an error.
pub fn parse_reply(text: &str, refs: &[MapReference]) -> Vec<BusinessProfile> {
    let classifier = LineClassifier::new();
    let mut draft = Draft::default();
    let mut profiles = Vec::new();

    for raw in text.lines() {
        match classifier.classify(raw) {
            LineToken::Name(name) => {
                if let Some(profile) = draft.finalize() {
                    profiles.push(profile);
                }
                draft.name = Some(name);
            }
            LineToken::Field(kind, value) => draft.set(kind, value),
            LineToken::Other => {}
        }
    }

    if let Some(profile) = draft.finalize() {
        profiles.push(profile);
    }

    attach_map_urls(&mut profiles, refs);
    profiles
}

/// Attach map links to parsed profiles, in order.
///
/// A title match consumes the reference even when it carries no uri; the
/// positional fallback only runs when no title matched at all.
fn attach_map_urls(profiles: &mut [BusinessProfile], refs: &[MapReference]) {
    for (idx, profile) in profiles.iter_mut().enumerate() {
        let needle = profile.name.to_lowercase();
        let by_title = refs.iter().find(|r| {
            r.title
                .as_ref()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        });

        if let Some(reference) = by_title {
            profile.map_url = reference.uri.clone();
        } else if let Some(reference) = refs.get(idx) {
            profile.map_url = reference.uri.clone();
        }
    }
}
