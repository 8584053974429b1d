//! Error taxonomy. Every failure degrades to a bounded UI state: agenda
//! errors become a banner, chat errors become an apology turn. Nothing is
//! retried and nothing is fatal to the process.

use thiserror::Error;

/// Reading or encoding the user-selected file failed locally.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("uploaded file is empty")]
    EmptyFile,
    #[error("could not read file: {0}")]
    Unreadable(String),
}

/// Talking to the provider failed before any text came back.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key configured; set GEMINI_API_KEY (or API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("provider returned no response text")]
    EmptyReply,
}

/// Agenda generation failed: the call itself, or a reply that does not parse
/// into the agenda shape. The caller discards any previous agenda before the
/// call, so a failure leaves "no agenda" rather than a stale one.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("reply did not match the agenda schema: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any failure in the conversational call. The adapter's public contract
/// collapses this to a fixed apology string; the type exists so the internal
/// failure path stays assertable.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
