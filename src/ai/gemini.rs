//! Gemini `generateContent` wire types and transport.
//!
//! The provider is treated as an opaque capability: given content parts (and
//! optionally a response schema), it returns text. Everything here serializes
//! with the provider's camelCase field names.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ProviderError;
use crate::types::{ChatTurn, FilePayload, Role};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A content block: one turn's worth of parts, attributed to a role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// History entry with the provider's role string for the turn's author.
    pub fn from_turn(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            Role::User => "user",
            Role::Model => "model",
        };
        Self {
            role: Some(role.to_string()),
            parts: vec![Part::text(&turn.text)],
        }
    }
}

/// Untagged union of text and inline media parts. Variant order matters for
/// `#[serde(untagged)]` decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_data(file: &FilePayload) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: file.mime_type.clone(),
                data: file.data.clone(),
            },
        }
    }
}

/// Base64 inline payload carrying the uploaded document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Constrains a call to return JSON matching a fixed schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Concatenated text parts of the first candidate, if any came back.
pub fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let mut text = String::new();
    for part in &candidate.content.parts {
        if let Part::Text { text: piece } = part {
            text.push_str(piece);
        }
    }
    if text.is_empty() { None } else { Some(text) }
}

fn api_base() -> String {
    env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

fn api_key() -> Result<String, ProviderError> {
    // API_KEY is the legacy name, kept as a fallback.
    env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("API_KEY"))
        .map_err(|_| ProviderError::MissingApiKey)
}

/// Single-attempt `generateContent` call. No retries, no timeout beyond
/// whatever the transport applies, no caching.
pub async fn generate(
    model: &str,
    request: &GenerateContentRequest,
) -> Result<String, ProviderError> {
    let key = api_key()?;
    let url = format!("{}/models/{}:generateContent", api_base(), model);

    let client = reqwest::Client::new();
    let res = client
        .post(url)
        .header("x-goog-api-key", key)
        .json(request)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(ProviderError::Status { status, body });
    }

    let parsed: GenerateContentResponse =
        serde_json::from_str(&body).map_err(|_| ProviderError::EmptyReply)?;
    response_text(&parsed).ok_or(ProviderError::EmptyReply)
}
