use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Who authored a chat turn. Serialized lowercase to match the provider's
/// role strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message in the chat transcript. Append-only; turns are never edited
/// or reordered after creation, and they never leave the session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub created_at: OffsetDateTime,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// An uploaded document, base64-encoded for the provider. Immutable once
/// created; chat requests reference it for first-turn context only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilePayload {
    pub name: String,
    pub mime_type: String,
    /// Standard base64 of the raw file bytes.
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
}

/// A single agenda slot. Start times are derived from cumulative durations at
/// render time, never stored here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: String,
    pub topic: String,
    pub duration_minutes: u32,
    pub presenter: String,
    pub description: String,
}

impl AgendaItem {
    /// Display label for the presenter slot.
    pub fn presenter_label(&self) -> &str {
        if self.presenter.trim().is_empty() {
            "Unassigned"
        } else {
            &self.presenter
        }
    }
}

/// The structured output of a generation call. Replaced wholesale on every
/// successful generation; item order is whatever the model returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agenda {
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    pub overview: String,
    pub stakeholders: Vec<Stakeholder>,
    pub items: Vec<AgendaItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn presenter_label_falls_back_to_unassigned() {
        let mut item = AgendaItem {
            id: "1".into(),
            topic: "Kickoff".into(),
            duration_minutes: 15,
            presenter: String::new(),
            description: String::new(),
        };
        assert_eq!(item.presenter_label(), "Unassigned");
        item.presenter = "  ".into();
        assert_eq!(item.presenter_label(), "Unassigned");
        item.presenter = "Dana".into();
        assert_eq!(item.presenter_label(), "Dana");
    }

    #[test]
    fn agenda_item_uses_camel_case_on_the_wire() {
        let json = r#"{
            "id": "1",
            "topic": "Budget",
            "durationMinutes": 45,
            "presenter": "Sam",
            "description": "Q3 numbers"
        }"#;
        let item: AgendaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.duration_minutes, 45);
    }
}
