//! Business records and the map evidence they are linked against.

use serde::{Deserialize, Serialize};

/// One extracted business record.
///
/// A profile appears in parser output only when its `name` was non-empty
/// at the time its block closed. Every other field is best-effort: the
/// model may omit it, and the parser leaves it unset rather than failing.
///
/// Unset fields are omitted when serialized, so exports carry only what
/// was actually extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Opaque unique token, generated at parse time
    pub id: String,

    /// Business name, never empty in parser output
    pub name: String,

    /// Full street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Official website URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Short summary of the business
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,

    /// Owner or manager details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Star rating, nominally 0.0 to 5.0, unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Review count; no parser rule populates this today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,

    /// Google Maps link attached in the post-parse pass
    #[serde(rename = "mapUrl", skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

impl BusinessProfile {
    /// Create a profile with only an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            phone: None,
            website: None,
            email: None,
            about: None,
            owner: None,
            rating: None,
            reviews: None,
            map_url: None,
        }
    }

    /// Set the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the website URL.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the about summary.
    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Set the owner details.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the map URL.
    pub fn with_map_url(mut self, map_url: impl Into<String>) -> Self {
        self.map_url = Some(map_url.into());
        self
    }
}

/// A Google Maps place returned as grounding evidence.
///
/// Read-only: consumed once during the map-URL attachment pass, in the
/// order the provider returned it. Either field may be missing; a
/// reference with no title can never win a title match but still holds
/// its position for the index fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapReference {
    /// Link to the place on Google Maps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Place title, usually the business name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MapReference {
    /// Create a reference with both link and title.
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            title: Some(title.into()),
        }
    }

    /// Create a reference with a link but no title.
    pub fn untitled(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = BusinessProfile::new("abc123", "Joe's Pizza")
            .with_address("123 Main St")
            .with_rating(4.2);

        assert_eq!(profile.id, "abc123");
        assert_eq!(profile.name, "Joe's Pizza");
        assert_eq!(profile.address.as_deref(), Some("123 Main St"));
        assert_eq!(profile.rating, Some(4.2));
        assert!(profile.phone.is_none());
        assert!(profile.map_url.is_none());
    }

    #[test]
    fn test_profile_serializes_camel_case_map_url() {
        let profile = BusinessProfile::new("abc123", "Joe's Pizza").with_map_url("https://maps.example/1");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["mapUrl"], "https://maps.example/1");
        assert!(json.get("map_url").is_none());
    }

    #[test]
    fn test_profile_omits_unset_fields() {
        let profile = BusinessProfile::new("abc123", "Joe's Pizza");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["name"], "Joe's Pizza");
        assert!(json.get("address").is_none());
        assert!(json.get("rating").is_none());
        assert!(json.get("reviews").is_none());
    }
}
