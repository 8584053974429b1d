use dioxus::prelude::*;

use crate::ai;
use crate::error::FileReadError;
use crate::types::{Agenda, FilePayload};
use crate::views::{AgendaView, ChatPanel, Sidebar};

const AGENDA_CSS: Asset = asset!("/assets/agenda.css");

/// Single user-facing message for every agenda-path failure, local or remote.
const GENERATION_FAILED: &str =
    "Failed to generate agenda. Please try again with a different file.";

#[component]
pub fn App() -> Element {
    let file = use_signal(|| Option::<FilePayload>::None);
    let agenda = use_signal(|| Option::<Agenda>::None);
    let processing = use_signal(|| false);
    let error = use_signal(|| Option::<String>::None);

    let handle_upload = {
        let mut file = file;
        let mut agenda = agenda;
        let mut processing = processing;
        let mut error = error;
        move |result: Result<FilePayload, FileReadError>| {
            // Any previous agenda is discarded before the call, so a failure
            // leaves "no agenda" rather than a stale one.
            agenda.set(None);
            error.set(None);

            let payload = match result {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::error!(error = %err, "file read failed");
                    error.set(Some(GENERATION_FAILED.to_string()));
                    return;
                }
            };

            file.set(Some(payload.clone()));
            processing.set(true);
            spawn(async move {
                match ai::generate_agenda(&payload).await {
                    Ok(generated) => agenda.set(Some(generated)),
                    Err(err) => {
                        tracing::error!(error = %err, "agenda generation failed");
                        error.set(Some(GENERATION_FAILED.to_string()));
                    }
                }
                processing.set(false);
            });
        }
    };

    let agenda_snapshot = agenda();

    rsx! {
        document::Link { rel: "stylesheet", href: AGENDA_CSS }
        div { class: "app-shell",
            Sidebar {
                on_upload: handle_upload,
                processing: processing(),
                uploaded_file: file(),
                error: error(),
            }
            main { class: "main-area",
                if processing() {
                    ProcessingSkeleton {}
                } else {
                    if let Some(agenda) = agenda_snapshot {
                        AgendaView { agenda }
                    } else {
                        EmptyState {}
                    }
                }
            }
            ChatPanel { context_file: file }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            h2 { "No Agenda Yet" }
            p { "Upload a document on the left to generate your smart meeting agenda." }
        }
    }
}

#[component]
fn ProcessingSkeleton() -> Element {
    rsx! {
        div { class: "skeleton",
            div { class: "skeleton-bar short" }
            div { class: "skeleton-bar" }
            div { class: "skeleton-block" }
            div { class: "skeleton-block" }
            div { class: "skeleton-block" }
        }
    }
}
