//! Wire types for the `generateContent` endpoint
//!
//! Request types serialize to exactly the body the endpoint expects.
//! Response types are lenient: every field is optional or defaulted, so a
//! response that is valid JSON but missing pieces still parses and the
//! orchestrator can tell "no text" apart from "not JSON".

use serde::{Deserialize, Serialize};

/// One prediction request: prompt, system instruction and grounding flag.
///
/// Built once per invocation and discarded after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    prompt: String,
    system_instruction: String,
    grounding: bool,
}

impl PredictionRequest {
    /// Create a request with search grounding enabled.
    pub fn new(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            grounding: true,
        }
    }

    /// Enable or disable Google Search grounding.
    pub fn with_grounding(mut self, grounding: bool) -> Self {
        self.grounding = grounding;
        self
    }

    /// The user prompt.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The system instruction.
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Whether grounding is requested.
    pub fn grounding(&self) -> bool {
        self.grounding
    }

    /// The JSON body for this request.
    pub fn to_body(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(&self.prompt)],
            tools: if self.grounding {
                vec![Tool::google_search()]
            } else {
                Vec::new()
            },
            system_instruction: Content::text(&self.system_instruction),
        }
    }
}

/// Request body of `generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns (one user turn here)
    pub contents: Vec<Content>,
    /// Tools the model may use
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    /// System instruction
    pub system_instruction: Content,
}

/// A tool declaration.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Google Search grounding; serialized as an empty object
    pub google_search: GoogleSearch,
}

impl Tool {
    /// The Google Search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

/// Marker for the Google Search tool.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

/// A content block made of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Parts, in order
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A content block holding a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// A single part of content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text of this part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// Citation sources of the first candidate, dropping incomplete entries.
    pub fn sources(&self) -> Vec<Source> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| {
                metadata
                    .grounding_attributions
                    .iter()
                    .filter_map(Source::from_attribution)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A candidate completion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Grounding information, when search grounding was used
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding information attached to a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Attributions linking the answer to web sources
    #[serde(default)]
    pub grounding_attributions: Vec<GroundingAttribution>,
}

/// One grounding attribution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingAttribution {
    /// The web source, if the attribution points at one
    #[serde(default)]
    pub web: Option<WebSource>,
}

/// A web reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebSource {
    /// Link target
    #[serde(default)]
    pub uri: Option<String>,
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
}

/// A citation source with both a link and a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Link target
    pub uri: String,
    /// Page title
    pub title: String,
}

impl Source {
    fn from_attribution(attribution: &GroundingAttribution) -> Option<Self> {
        let web = attribution.web.as_ref()?;
        let uri = web.uri.as_deref().filter(|s| !s.is_empty())?;
        let title = web.title.as_deref().filter(|s| !s.is_empty())?;
        Some(Self {
            uri: uri.to_string(),
            title: title.to_string(),
        })
    }
}

/// A successful prediction: the generated text and its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Generated text, verbatim
    pub text: String,
    /// Citation sources, in response order
    pub sources: Vec<Source>,
}
