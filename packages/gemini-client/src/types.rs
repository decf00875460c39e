//! Gemini API request and response types.
//!
//! Wire names are camelCase throughout. Response fields are optional at
//! every level because the API omits whole subtrees (safety blocks, no
//! grounding, empty candidates).

use serde::{Deserialize, Serialize};

// =============================================================================
// Content Generation Request
// =============================================================================

/// Content generation request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Model to use (e.g., "gemini-2.5-flash"); sent in the URL, not the body
    #[serde(skip_serializing)]
    pub model: String,

    /// Conversation turns
    pub contents: Vec<Content>,

    /// Tools made available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    /// Tool configuration (retrieval location bias)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_config: Option<ToolConfig>,
}

impl GenerateContentRequest {
    /// Create a request with a single user turn of text.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            tools: None,
            tool_config: None,
        }
    }

    /// Enable the Google Maps grounding tool.
    pub fn with_maps_grounding(mut self) -> Self {
        self.tools.get_or_insert_with(Vec::new).push(Tool {
            google_maps: Some(GoogleMaps {}),
        });
        self
    }

    /// Bias grounding retrieval toward a coordinate.
    pub fn with_location_bias(mut self, latitude: f64, longitude: f64) -> Self {
        self.tool_config = Some(ToolConfig {
            retrieval_config: RetrievalConfig {
                lat_lng: LatLng {
                    latitude,
                    longitude,
                },
            },
        });
        self
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Text parts of the turn
    pub parts: Vec<Part>,
}

/// A text part of a turn.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    /// Part text
    pub text: String,
}

/// A tool made available to the model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Google Maps grounding; serializes as `{"googleMaps": {}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<GoogleMaps>,
}

/// Marker for the Google Maps grounding tool.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleMaps {}

/// Tool configuration carrying the retrieval bias.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Retrieval settings
    pub retrieval_config: RetrievalConfig,
}

/// Grounding retrieval settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalConfig {
    /// Coordinate the retrieval should favor
    pub lat_lng: LatLng,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

// =============================================================================
// Content Generation Response
// =============================================================================

/// Content generation response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// Missing candidates, content, or parts yield an empty string.
    pub fn text(&self) -> String {
        self.candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.as_ref())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Grounding chunks of the first candidate, empty when absent.
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .and_then(|metadata| metadata.grounding_chunks.as_deref())
            .unwrap_or_default()
    }
}

/// A single generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Generated content of a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<ResponsePart>>,
}

/// A part of generated content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Grounding evidence attached to a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// One grounding source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Google Maps place backing this chunk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps: Option<MapsSource>,
}

/// A Google Maps place reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsSource {
    /// Link to the place on Google Maps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Place title, usually the business name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = GenerateContentRequest::new("gemini-2.5-flash", "Find coffee shops")
            .with_maps_grounding()
            .with_location_bias(45.5152, -122.6784);

        assert_eq!(req.model, "gemini-2.5-flash");
        assert_eq!(req.contents.len(), 1);
        assert_eq!(req.contents[0].parts[0].text, "Find coffee shops");
        assert!(req.tools.is_some());
        assert!(req.tool_config.is_some());
    }

    #[test]
    fn test_request_wire_format() {
        let req = GenerateContentRequest::new("gemini-2.5-flash", "hi")
            .with_maps_grounding()
            .with_location_bias(44.98, -93.27);

        let body = serde_json::to_value(&req).unwrap();

        assert!(body.get("model").is_none());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["tools"][0]["googleMaps"], serde_json::json!({}));
        assert_eq!(
            body["toolConfig"]["retrievalConfig"]["latLng"]["latitude"],
            44.98
        );
        assert_eq!(
            body["toolConfig"]["retrievalConfig"]["latLng"]["longitude"],
            -93.27
        );
    }

    #[test]
    fn test_plain_request_omits_tools() {
        let req = GenerateContentRequest::new("gemini-2.5-flash", "hi");
        let body = serde_json::to_value(&req).unwrap();

        assert!(body.get("tools").is_none());
        assert!(body.get("toolConfig").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Hello " },
                        { "text": "world" }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.text(), "Hello world");
        assert!(response.grounding_chunks().is_empty());
    }

    #[test]
    fn test_response_tolerates_missing_levels() {
        let empty: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty.text(), "");
        assert!(empty.grounding_chunks().is_empty());

        let no_parts: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [{}] })).unwrap();
        assert_eq!(no_parts.text(), "");
        assert!(no_parts.grounding_chunks().is_empty());
    }

    #[test]
    fn test_grounding_chunks_parse() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "ok" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "maps": { "uri": "https://maps.google.com/?cid=1", "title": "Joe's Pizza" } },
                        { "maps": { "title": "No Link Cafe" } },
                        {}
                    ]
                }
            }]
        }))
        .unwrap();

        let chunks = response.grounding_chunks();
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks[0].maps.as_ref().unwrap().uri.as_deref(),
            Some("https://maps.google.com/?cid=1")
        );
        assert_eq!(
            chunks[1].maps.as_ref().unwrap().title.as_deref(),
            Some("No Link Cafe")
        );
        assert!(chunks[1].maps.as_ref().unwrap().uri.is_none());
        assert!(chunks[2].maps.is_none());
    }
}
