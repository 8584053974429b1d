use dioxus::prelude::*;

use crate::encoder::{ACCEPTED_EXTENSIONS, encode_file};
use crate::error::FileReadError;
use crate::types::FilePayload;

/// Left panel: branding, the upload zone, the error banner, and the status
/// card for the current file. The upload input is disabled while a generation
/// request is in flight, which is the only gate against concurrent uploads.
#[component]
pub fn Sidebar(
    on_upload: EventHandler<Result<FilePayload, FileReadError>>,
    processing: bool,
    uploaded_file: Option<FilePayload>,
    error: Option<String>,
) -> Element {
    let pick_file = move |ev: Event<FormData>| {
        let Some(engine) = ev.files() else { return };
        spawn(async move {
            let Some(name) = engine.files().first().cloned() else {
                return;
            };
            let result = match engine.read_file(&name).await {
                Some(bytes) => encode_file(&name, &bytes),
                None => Err(FileReadError::Unreadable(name)),
            };
            on_upload.call(result);
        });
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                h1 { span { class: "brand-mark", "AG" } " AgendaGenius" }
                p { class: "text-muted", "Turn your documents into structured meeting plans instantly." }
            }

            div { class: "sidebar-body",
                label { class: "field-label", "Upload Document" }
                div { class: format_args!("upload-zone {}", if processing { "disabled" } else { "" }),
                    input {
                        r#type: "file",
                        accept: ACCEPTED_EXTENSIONS,
                        disabled: processing,
                        onchange: pick_file,
                    }
                    p { class: "upload-hint",
                        if processing { "Analyzing…" } else { "Click to upload" }
                    }
                    p { class: "upload-formats", "PDF, TXT, MD, DOCX" }
                }

                if let Some(message) = error.as_ref() {
                    div { class: "error-banner", "{message}" }
                }

                if let Some(file) = uploaded_file.as_ref() {
                    if !processing && error.is_none() {
                        div { class: "file-card",
                            span { class: "file-card-check", "\u{2713}" }
                            div {
                                p { class: "file-card-name", "{file.name}" }
                                p { class: "file-card-status", "Successfully processed" }
                            }
                        }
                    }
                }

                div { class: "how-it-works",
                    h4 { "How it works" }
                    ol {
                        li { "Upload a project brief or notes." }
                        li { "AI extracts stakeholders & topics." }
                        li { "Review the generated timeline." }
                        li { "Chat with the AI to refine." }
                    }
                }
            }

            div { class: "sidebar-footer", "Powered by Gemini" }
        }
    }
}
