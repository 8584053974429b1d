//! AgendaGenius - turn an uploaded document into a structured meeting agenda
//! and chat about it, backed by the Gemini `generateContent` API.
//!
//! The library half holds everything that does not need a renderer: the data
//! model, the file encoder, the start-time derivation, and the request/response
//! shaping around the provider. The Dioxus UI lives behind the `dioxus`
//! feature (enabled through `desktop`, `web`, or `mobile`).

pub mod ai;
pub mod encoder;
pub mod error;
pub mod schedule;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
