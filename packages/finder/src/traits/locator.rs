//! Location provider trait for search grounding.
//!
//! A coordinate bias improves grounding retrieval but a search works
//! fine without one, so coordinate sources are infallible by
//! construction: a provider that cannot answer logs the reason and
//! returns `None`. Resolution happens once, before the first search,
//! and is never retried.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Coordinate provider trait.
///
/// # Implementations
///
/// - `FixedLocator` - caller-supplied coordinates
/// - `NominatimLocator` - free-text place lookup via OpenStreetMap
/// - `NullLocator` - always `None`, for unbiased runs and tests
#[async_trait]
pub trait Locator: Send + Sync {
    /// Resolve a coordinate, or `None` when unavailable.
    async fn locate(&self) -> Option<Coordinate>;
}

/// Locator returning caller-supplied coordinates.
pub struct FixedLocator(pub Coordinate);

#[async_trait]
impl Locator for FixedLocator {
    async fn locate(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

/// Locator that never resolves.
#[derive(Default)]
pub struct NullLocator;

#[async_trait]
impl Locator for NullLocator {
    async fn locate(&self) -> Option<Coordinate> {
        None
    }
}

/// One Nominatim search result row.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Nominatim-backed locator for free-text place names.
///
/// Best-effort geocoding against the OpenStreetMap Nominatim API: one
/// request with a 10 second timeout, first result wins. Any failure is
/// logged and resolves to `None`.
pub struct NominatimLocator {
    place: String,
    client: reqwest::Client,
    base_url: String,
}

impl NominatimLocator {
    /// Create a locator for a place name (e.g. `"Portland, OR"`).
    pub fn new(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            client: reqwest::Client::new(),
            base_url: "https://nominatim.openstreetmap.org".to_string(),
        }
    }

    /// Override the API endpoint (tests, self-hosted instances).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Locator for NominatimLocator {
    async fn locate(&self) -> Option<Coordinate> {
        let url = format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(&self.place)
        );

        let response = match self
            .client
            .get(&url)
            .header("User-Agent", "MapPro/0.1 (business search CLI)")
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, place = %self.place, "geocoding request failed");
                return None;
            }
        };

        let places: Vec<NominatimPlace> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                warn!(error = %e, place = %self.place, "failed to parse geocoding response");
                return None;
            }
        };

        let place = match places.first() {
            Some(place) => place,
            None => {
                warn!(place = %self.place, "place not found by geocoding");
                return None;
            }
        };

        match (place.lat.parse::<f64>(), place.lon.parse::<f64>()) {
            (Ok(lat), Ok(lng)) => {
                debug!(lat, lng, place = %self.place, "geocoded place");
                Some(Coordinate { lat, lng })
            }
            _ => {
                warn!(place = %self.place, "geocoding returned unparsable coordinates");
                None
            }
        }
    }
}
