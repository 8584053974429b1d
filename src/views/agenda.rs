use dioxus::prelude::*;

use crate::schedule::{DEFAULT_SESSION_START, derive_start_times, total_duration_minutes};
use crate::types::{Agenda, AgendaItem, Stakeholder};

/// Pure rendering of a generated agenda: header, timeline with derived start
/// times, and the stakeholder panel. Recomputed from the current agenda on
/// every render; nothing here is stateful.
#[component]
pub fn AgendaView(agenda: Agenda) -> Element {
    let start_times = derive_start_times(
        agenda.items.iter().map(|item| item.duration_minutes),
        DEFAULT_SESSION_START,
    );
    let total_minutes =
        total_duration_minutes(agenda.items.iter().map(|item| item.duration_minutes));
    let date_label = agenda
        .date
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "Upcoming Meeting".to_string());
    let item_count = agenda.items.len();

    rsx! {
        div { class: "agenda",
            header { class: "agenda-header",
                p { class: "agenda-date", "{date_label}" }
                h1 { class: "agenda-title", "{agenda.title}" }
                p { class: "agenda-overview", "{agenda.overview}" }
            }

            div { class: "agenda-columns",
                section { class: "timeline",
                    div { class: "timeline-heading",
                        h2 { "Timeline" }
                        span { class: "timeline-total", "Total: {total_minutes} mins" }
                    }
                    for (i, item) in agenda.items.iter().enumerate() {
                        TimelineEntry {
                            item: item.clone(),
                            start_time: start_times.get(i).cloned().unwrap_or_default(),
                            is_last: i + 1 == item_count,
                        }
                    }
                }

                section { class: "stakeholders",
                    h2 { "Stakeholders" }
                    if agenda.stakeholders.is_empty() {
                        p { class: "stakeholders-empty", "No specific stakeholders identified." }
                    } else {
                        ul {
                            for person in agenda.stakeholders.iter() {
                                StakeholderRow { person: person.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StakeholderRow(person: Stakeholder) -> Element {
    let initial = person.name.chars().next().unwrap_or('?');
    rsx! {
        li { class: "stakeholder",
            span { class: "stakeholder-initial", "{initial}" }
            div {
                p { class: "stakeholder-name", "{person.name}" }
                p { class: "stakeholder-role", "{person.role}" }
            }
        }
    }
}

#[component]
fn TimelineEntry(item: AgendaItem, start_time: String, is_last: bool) -> Element {
    let presenter = item.presenter_label().to_string();
    rsx! {
        div { class: "timeline-entry",
            div { class: "timeline-time",
                span { class: "timeline-start", "{start_time}" }
                span { class: "timeline-duration", "{item.duration_minutes} min" }
            }
            div { class: "timeline-rail",
                div { class: "timeline-dot" }
                if !is_last { div { class: "timeline-line" } }
            }
            div { class: "timeline-card",
                h3 { "{item.topic}" }
                p { class: "timeline-description", "{item.description}" }
                div { class: "timeline-meta",
                    span { "{presenter}" }
                    span { "{item.duration_minutes} minutes" }
                }
            }
        }
    }
}
