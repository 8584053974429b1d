//! Structured agenda generation.
//!
//! One schema-constrained `generateContent` call per upload: document parts
//! plus a fixed instruction in, JSON matching the agenda schema out. Identical
//! files re-uploaded trigger a fresh call every time.

use serde_json::json;
use std::env;

use crate::ai::gemini::{self, Content, GenerateContentRequest, GenerationConfig, Part};
use crate::error::GenerationError;
use crate::types::{Agenda, FilePayload};

const DEFAULT_AGENDA_MODEL: &str = "gemini-2.5-flash";

const AGENDA_INSTRUCTION: &str = "Analyze this document and create a comprehensive meeting agenda. \
Identify key stakeholders mentioned or implied. \
Break down the meeting into logical agenda items with estimated duration in minutes. \
If no duration is explicit, estimate based on complexity. \
Return the result in strict JSON format matching the schema.";

/// The fixed response schema. `date` is the only optional top-level field.
pub fn agenda_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "Title of the meeting" },
            "date": { "type": "STRING", "description": "Proposed date string if mentioned, else empty" },
            "overview": { "type": "STRING", "description": "A brief summary of the meeting goals" },
            "stakeholders": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "role": { "type": "STRING" }
                    }
                }
            },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "topic": { "type": "STRING" },
                        "durationMinutes": { "type": "NUMBER" },
                        "presenter": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            }
        },
        "required": ["title", "overview", "stakeholders", "items"]
    })
}

/// Build the structured-generation request: document first, instruction
/// second, schema pinned through the generation config.
pub fn build_agenda_request(file: &FilePayload) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![
            Part::inline_data(file),
            Part::text(AGENDA_INSTRUCTION),
        ])],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: agenda_schema(),
        }),
    }
}

/// Parse the raw reply text into a typed agenda. Invalid JSON or a missing
/// required field fails the whole call; no partial agenda is ever produced.
pub fn parse_agenda(text: &str) -> Result<Agenda, GenerationError> {
    Ok(serde_json::from_str(text)?)
}

fn agenda_model() -> String {
    env::var("AGENDA_MODEL").unwrap_or_else(|_| DEFAULT_AGENDA_MODEL.to_string())
}

/// Generate an agenda from an uploaded document. Single attempt, atomic:
/// either a complete agenda or a `GenerationError`.
pub async fn generate_agenda(file: &FilePayload) -> Result<Agenda, GenerationError> {
    let request = build_agenda_request(file);
    let text = gemini::generate(&agenda_model(), &request).await?;
    let agenda = parse_agenda(&text)?;
    tracing::debug!(
        items = agenda.items.len(),
        stakeholders = agenda.stakeholders.len(),
        "agenda generated"
    );
    Ok(agenda)
}
