use dioxus::events::Key;
use dioxus::prelude::*;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::ai;
use crate::types::{ChatTurn, FilePayload, Role};
use crate::views::shared::markdown_to_html;

const GREETING: &str =
    "Hi! I can help you with questions about the meeting agenda or the uploaded document.";

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// A submission goes out only when there is text and no call is in flight.
/// Anything else is dropped, not queued.
fn can_submit(text: &str, pending: bool) -> bool {
    !text.trim().is_empty() && !pending
}

/// The transcript as the adapter sees it. The seeded greeting is a UI
/// affordance, not part of the conversation history, so the first user
/// message goes out with an empty history (which is also what triggers the
/// one-time document attachment).
fn api_history(transcript: &[ChatTurn]) -> Vec<ChatTurn> {
    transcript.iter().skip(1).cloned().collect()
}

fn format_turn_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Floating chat widget: closed, open-idle, or open-pending. The transcript
/// persists across open/close within the session; every completed submission
/// appends exactly one model turn, either the real reply or the apology.
#[component]
pub fn ChatPanel(context_file: Signal<Option<FilePayload>>) -> Element {
    let open = use_signal(|| false);
    let transcript = use_signal(|| vec![ChatTurn::model(GREETING)]);
    let mut input = use_signal(String::new);
    let pending = use_signal(|| false);

    let mut submit = {
        let mut transcript = transcript;
        let mut input_signal = input;
        let mut pending_signal = pending;
        let context_file = context_file;
        move |text: String| {
            let trimmed = text.trim().to_string();
            if !can_submit(&trimmed, pending_signal()) {
                return;
            }

            // History is snapshotted before the optimistic append.
            let history = transcript.with(|turns| api_history(turns));
            transcript.with_mut(|turns| turns.push(ChatTurn::user(trimmed.clone())));
            input_signal.set(String::new());
            pending_signal.set(true);

            let file = context_file();
            spawn(async move {
                let reply = ai::chat::send_message(&history, &trimmed, file.as_ref()).await;
                transcript.with_mut(|turns| turns.push(ChatTurn::model(reply)));
                pending_signal.set(false);
            });
        }
    };

    if !open() {
        let mut open = open;
        return rsx! {
            button {
                class: "chat-fab",
                r#type: "button",
                onclick: move |_| open.set(true),
                "\u{1F4AC}"
            }
        };
    }

    let turns_snapshot = transcript();
    let mut open_signal = open;

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-header",
                div {
                    h3 { "Agenda Assistant" }
                    p { class: "chat-subtitle", "Powered by Gemini" }
                }
                button {
                    class: "chat-close",
                    r#type: "button",
                    onclick: move |_| open_signal.set(false),
                    "\u{00D7}"
                }
            }

            div { class: "chat-list",
                for turn in turns_snapshot.iter() {
                    TurnRow { turn: turn.clone() }
                }
                if pending() {
                    div { class: "chat-row model",
                        div { class: "bubble model typing",
                            span { class: "dot" }
                            span { class: "dot" }
                            span { class: "dot" }
                        }
                    }
                }
            }

            form { class: "chat-composer", onsubmit: move |ev| ev.prevent_default(),
                input {
                    r#type: "text",
                    placeholder: "Ask a question...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            let text = input();
                            submit(text);
                        }
                    },
                }
                button {
                    class: "chat-send",
                    r#type: "button",
                    disabled: pending() || input().trim().is_empty(),
                    onclick: move |_| {
                        let text = input();
                        submit(text);
                    },
                    "Send"
                }
            }
        }
    }
}

#[component]
fn TurnRow(turn: ChatTurn) -> Element {
    let role_class = match turn.role {
        Role::User => "user",
        Role::Model => "model",
    };
    let timestamp = format_turn_timestamp(turn.created_at);
    let reply_html = matches!(turn.role, Role::Model).then(|| markdown_to_html(&turn.text));

    rsx! {
        div { class: "chat-row {role_class}",
            div { class: "chat-stack",
                div { class: "bubble {role_class}",
                    if let Some(html) = reply_html {
                        div { class: "md", dangerous_inner_html: "{html}" }
                    } else {
                        "{turn.text}"
                    }
                }
                if let Some(ts) = timestamp {
                    span { class: "chat-timestamp", "{ts}" }
                }
            }
        }
    }
}
