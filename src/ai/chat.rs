//! Conversational adapter.
//!
//! Every call rebuilds the session from the full prior transcript (a linear
//! per-turn cost, kept deliberately; the request building is centralized here
//! so a session-reuse strategy could slot in without changing the contract).
//! The uploaded document rides along exactly once: on the first user message,
//! when the history is still empty. Later turns never resend it, even in long
//! conversations about the document.

use std::env;

use crate::ai::gemini::{self, Content, GenerateContentRequest, Part, SystemInstruction};
use crate::error::ChatError;
use crate::types::{ChatTurn, FilePayload};

const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

const SYSTEM_INSTRUCTION: &str = "You are a helpful AI meeting assistant. \
You answer questions about the uploaded document and the generated agenda. \
Be concise and professional.";

const CONTEXT_LEAD_IN: &str = "Here is the document context for our conversation:";

/// Shown verbatim when the provider returns success but no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I couldn't generate a response.";

/// Shown verbatim whenever the call fails; the chat UI never sees a raw error.
pub const APOLOGY: &str = "Sorry, I encountered an error processing your request.";

/// Build the conversational request: prior turns as history, then the new
/// user message. The context file (behind its fixed lead-in) is prepended to
/// the message parts iff `history` is empty at call time.
pub fn build_chat_request(
    history: &[ChatTurn],
    new_message: &str,
    context_file: Option<&FilePayload>,
) -> GenerateContentRequest {
    let mut parts = vec![Part::text(new_message)];

    if history.is_empty()
        && let Some(file) = context_file
    {
        parts.insert(0, Part::inline_data(file));
        parts.insert(0, Part::text(CONTEXT_LEAD_IN));
    }

    let mut contents: Vec<Content> = history.iter().map(Content::from_turn).collect();
    contents.push(Content::user(parts));

    GenerateContentRequest {
        contents,
        system_instruction: Some(SystemInstruction::text(SYSTEM_INSTRUCTION)),
        generation_config: None,
    }
}

fn chat_model() -> String {
    env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string())
}

/// Internal result-typed path, so tests can assert on failures the public
/// contract swallows.
pub async fn try_send_message(
    history: &[ChatTurn],
    new_message: &str,
    context_file: Option<&FilePayload>,
) -> Result<String, ChatError> {
    let request = build_chat_request(history, new_message, context_file);
    match gemini::generate(&chat_model(), &request).await {
        Ok(text) => Ok(text),
        Err(crate::error::ProviderError::EmptyReply) => Ok(EMPTY_REPLY_FALLBACK.to_string()),
        Err(err) => Err(err.into()),
    }
}

/// Public adapter contract: always resolves to displayable text. Failures are
/// logged and collapsed to the fixed apology string.
pub async fn send_message(
    history: &[ChatTurn],
    new_message: &str,
    context_file: Option<&FilePayload>,
) -> String {
    match try_send_message(history, new_message, context_file).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "chat call failed");
            APOLOGY.to_string()
        }
    }
}
