//! Integration tests for the agenda pipeline: file encoding, request
//! building, reply parsing, and start-time derivation.

use agendagenius::ai::agenda::{build_agenda_request, parse_agenda};
use agendagenius::ai::chat::build_chat_request;
use agendagenius::ai::gemini::Part;
use agendagenius::encoder::encode_file;
use agendagenius::error::FileReadError;
use agendagenius::schedule::{DEFAULT_SESSION_START, derive_start_times, total_duration_minutes};
use agendagenius::types::{Agenda, ChatTurn, FilePayload};

fn sample_payload() -> FilePayload {
    encode_file("project-brief.txt", b"Kickoff and budget review for Q3").unwrap()
}

const VALID_AGENDA_JSON: &str = r#"{
    "title": "Q3 Planning Kickoff",
    "date": "2026-09-03",
    "overview": "Align the team on Q3 goals and budget.",
    "stakeholders": [
        { "name": "Dana Reyes", "role": "Project Lead" }
    ],
    "items": [
        {
            "id": "1",
            "topic": "Kickoff",
            "durationMinutes": 15,
            "presenter": "Dana Reyes",
            "description": "Welcome and goals."
        },
        {
            "id": "2",
            "topic": "Budget",
            "durationMinutes": 45,
            "presenter": "",
            "description": "Q3 budget walkthrough."
        }
    ]
}"#;

mod parsing {
    use super::*;

    #[test]
    fn valid_reply_parses_into_typed_agenda() {
        let agenda: Agenda = parse_agenda(VALID_AGENDA_JSON).expect("valid agenda");
        assert_eq!(agenda.title, "Q3 Planning Kickoff");
        assert_eq!(agenda.date.as_deref(), Some("2026-09-03"));
        assert_eq!(agenda.items.len(), 2);
        assert_eq!(agenda.items[1].presenter_label(), "Unassigned");
    }

    #[test]
    fn item_order_is_preserved() {
        let agenda = parse_agenda(VALID_AGENDA_JSON).unwrap();
        let topics: Vec<&str> = agenda.items.iter().map(|i| i.topic.as_str()).collect();
        assert_eq!(topics, ["Kickoff", "Budget"]);
    }

    #[test]
    fn invalid_json_is_a_generation_error() {
        assert!(parse_agenda("not json at all").is_err());
        assert!(parse_agenda("").is_err());
    }

    #[test]
    fn missing_required_field_is_a_generation_error() {
        // No "items" field.
        let missing_items = r#"{
            "title": "T",
            "overview": "O",
            "stakeholders": []
        }"#;
        assert!(parse_agenda(missing_items).is_err());
    }

    #[test]
    fn date_is_optional() {
        let no_date = r#"{
            "title": "T",
            "overview": "O",
            "stakeholders": [],
            "items": []
        }"#;
        let agenda = parse_agenda(no_date).expect("date is optional");
        assert!(agenda.date.is_none());
        assert!(agenda.items.is_empty());
        assert!(agenda.stakeholders.is_empty());
    }
}

mod requests {
    use super::*;

    #[test]
    fn agenda_request_carries_document_and_schema() {
        let request = build_agenda_request(&sample_payload());
        let value = serde_json::to_value(&request).unwrap();

        let parts = value["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "text/plain");
        assert!(
            parts[1]["text"]
                .as_str()
                .unwrap()
                .contains("estimate based on complexity")
        );
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn chat_request_attaches_file_only_when_history_is_empty() {
        let payload = sample_payload();

        // Turn 1: empty history, file goes along.
        let first = build_chat_request(&[], "What is this meeting about?", Some(&payload));
        let has_inline = first.contents[0]
            .parts
            .iter()
            .any(|p| matches!(p, Part::InlineData { .. }));
        assert!(has_inline);

        // Turn 3: same file offered, never re-included.
        let history = vec![
            ChatTurn::user("What is this meeting about?"),
            ChatTurn::model("Q3 planning."),
        ];
        let third = build_chat_request(&history, "How long is it?", Some(&payload));
        let any_inline = third
            .contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .any(|p| matches!(p, Part::InlineData { .. }));
        assert!(!any_inline);
        assert_eq!(third.contents.len(), history.len() + 1);
    }
}

mod encoding {
    use super::*;

    #[test]
    fn empty_upload_fails_without_a_payload() {
        let err = encode_file("empty.pdf", &[]).unwrap_err();
        assert!(matches!(err, FileReadError::EmptyFile));
    }

    #[test]
    fn payload_round_trips_through_base64() {
        use base64::Engine;
        let payload = sample_payload();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&payload.data)
            .unwrap();
        assert_eq!(decoded, b"Kickoff and budget review for Q3");
    }
}

mod scheduling {
    use super::*;

    #[test]
    fn concrete_scenario_kickoff_then_budget() {
        let agenda = agenda_with_durations(&[15, 45]);
        let times = derive_start_times(
            agenda.items.iter().map(|i| i.duration_minutes),
            DEFAULT_SESSION_START,
        );
        assert_eq!(times, vec!["09:00".to_string(), "09:15".to_string()]);
        assert_eq!(
            total_duration_minutes(agenda.items.iter().map(|i| i.duration_minutes)),
            60
        );
    }

    #[test]
    fn derived_start_equals_session_start_plus_prefix_durations() {
        let durations = [10u32, 25, 5, 50];
        let times = derive_start_times(durations, DEFAULT_SESSION_START);
        assert_eq!(times[0], "09:00");
        assert_eq!(times[1], "09:10");
        assert_eq!(times[2], "09:35");
        assert_eq!(times[3], "09:40");
    }

    fn agenda_with_durations(durations: &[u32]) -> Agenda {
        let items = durations
            .iter()
            .enumerate()
            .map(|(i, &minutes)| {
                serde_json::from_value(serde_json::json!({
                    "id": (i + 1).to_string(),
                    "topic": if i == 0 { "Kickoff" } else { "Budget" },
                    "durationMinutes": minutes,
                    "presenter": "",
                    "description": ""
                }))
                .unwrap()
            })
            .collect();
        Agenda {
            title: "Test".into(),
            date: None,
            overview: String::new(),
            stakeholders: Vec::new(),
            items,
        }
    }
}
