/// AI module for AgendaGenius
///
/// Request/response shaping around the Gemini `generateContent` REST surface.
/// Two call shapes exist: schema-constrained agenda generation and free-text
/// chat. Request building and reply parsing are pure functions so tests never
/// need the network; only `gemini::generate` touches it.
///
/// - `gemini` - wire types and the HTTP transport
/// - `agenda` - structured agenda generation
/// - `chat` - conversational adapter with first-turn document context
pub mod agenda;
pub mod chat;
pub mod gemini;

pub use agenda::generate_agenda;
pub use chat::{send_message, try_send_message};
