//! The chat adapter's error boundary: failures are represented as a typed
//! `ChatError` internally but collapse to a fixed apology string at the
//! public contract. Agenda generation propagates instead.
//!
//! These run without a provider by clearing the API key, which fails the call
//! before any network activity.

use agendagenius::ai::agenda::generate_agenda;
use agendagenius::ai::chat::{APOLOGY, send_message, try_send_message};
use agendagenius::encoder::encode_file;
use agendagenius::error::{ChatError, GenerationError, ProviderError};

fn clear_api_keys() {
    // SAFETY: this test binary is the only writer of these variables.
    unsafe {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
    }
}

#[tokio::test]
async fn internal_chat_path_reports_a_typed_error() {
    clear_api_keys();
    let err = try_send_message(&[], "hello", None).await.unwrap_err();
    assert!(matches!(
        err,
        ChatError::Provider(ProviderError::MissingApiKey)
    ));
}

#[tokio::test]
async fn public_chat_contract_always_returns_text() {
    clear_api_keys();
    let reply = send_message(&[], "hello", None).await;
    assert_eq!(reply, APOLOGY);
}

#[tokio::test]
async fn agenda_generation_propagates_instead_of_swallowing() {
    clear_api_keys();
    let payload = encode_file("brief.txt", b"notes").unwrap();
    let err = generate_agenda(&payload).await.unwrap_err();
    assert!(matches!(
        err,
        GenerationError::Provider(ProviderError::MissingApiKey)
    ));
}
