use super::models::{Talk, TalkDetails};
use crate::components::google_calendar::CalendarEvent;
use tracing::debug;

/// Separator between the fields of an event description
pub const DESCRIPTION_DELIMITER: &str = " | ";

/// Decode a description of the form `title | type | description | instagram | bio | company`.
///
/// Fields are assigned purely by position. Missing trailing fields stay unset
/// and anything past the sixth segment is ignored.
pub fn parse_description(description: &str) -> TalkDetails {
    let mut details = TalkDetails::default();
    if description.is_empty() {
        return details;
    }

    let mut segments = description
        .split(DESCRIPTION_DELIMITER)
        .take(TalkDetails::FIELD_COUNT)
        .map(|segment| non_empty(segment.trim()));

    let slots = [
        &mut details.title,
        &mut details.talk_type,
        &mut details.description,
        &mut details.instagram,
        &mut details.bio,
        &mut details.company,
    ];
    for slot in slots {
        match segments.next() {
            Some(value) => *slot = value,
            None => break,
        }
    }

    details
}

/// Map a calendar event to a talk. Never fails; missing data leaves fields unset.
pub fn translate_event(event: &CalendarEvent) -> Talk {
    let details = event
        .description
        .as_deref()
        .map(parse_description)
        .unwrap_or_default();

    if details.is_empty() && event.description.as_deref().is_some_and(|d| !d.trim().is_empty()) {
        debug!("Description of event {} has no usable segments", event.id);
    }

    // All-day events only carry `date`, which is not a talk time
    Talk {
        id: event.id.clone(),
        speaker: event.summary.as_deref().and_then(non_empty),
        title: details.title,
        description: details.description,
        talk_type: details.talk_type,
        instagram: details.instagram,
        bio: details.bio,
        company: details.company,
        start: event.start.date_time.as_deref().and_then(non_empty),
        end: event.end.date_time.as_deref().and_then(non_empty),
        stage: event.location.as_deref().and_then(non_empty),
    }
}

/// Translate every event, keeping the provider's order
pub fn translate_events(events: &[CalendarEvent]) -> Vec<Talk> {
    events.iter().map(translate_event).collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::google_calendar::EventTime;

    fn event(id: &str, description: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            summary: Some("Ada Lovelace".to_string()),
            description: description.map(str::to_string),
            start: EventTime {
                date_time: Some("2024-11-09T10:00:00-03:00".to_string()),
                ..Default::default()
            },
            end: EventTime {
                date_time: Some("2024-11-09T10:40:00-03:00".to_string()),
                ..Default::default()
            },
            location: Some("Palco Genipabu".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_two_segments() {
        let details = parse_description("Title A | Lightning Talk");
        assert_eq!(details.title.as_deref(), Some("Title A"));
        assert_eq!(details.talk_type.as_deref(), Some("Lightning Talk"));
        assert_eq!(details.description, None);
        assert_eq!(details.instagram, None);
        assert_eq!(details.bio, None);
        assert_eq!(details.company, None);
    }

    #[test]
    fn test_all_six_segments() {
        let details = parse_description("T | Ty | D | @handle | Bio text | Acme");
        assert_eq!(
            details,
            TalkDetails {
                title: Some("T".to_string()),
                talk_type: Some("Ty".to_string()),
                description: Some("D".to_string()),
                instagram: Some("@handle".to_string()),
                bio: Some("Bio text".to_string()),
                company: Some("Acme".to_string()),
            }
        );
    }

    #[test]
    fn test_extra_segments_discarded() {
        let six = parse_description("T | Ty | D | @handle | Bio text | Acme");
        let seven = parse_description("T | Ty | D | @handle | Bio text | Acme | Extra | More");
        assert_eq!(six, seven);
    }

    #[test]
    fn test_segments_are_trimmed() {
        let details = parse_description("  Rust at scale   |  Keynote \n");
        assert_eq!(details.title.as_deref(), Some("Rust at scale"));
        assert_eq!(details.talk_type.as_deref(), Some("Keynote"));
    }

    #[test]
    fn test_no_delimiter_is_title_only() {
        let details = parse_description("Just a title|with a bare pipe");
        assert_eq!(details.title.as_deref(), Some("Just a title|with a bare pipe"));
        assert_eq!(details.talk_type, None);
    }

    #[test]
    fn test_blank_segment_is_unset() {
        let details = parse_description("Title |   | Description");
        assert_eq!(details.title.as_deref(), Some("Title"));
        assert_eq!(details.talk_type, None);
        assert_eq!(details.description.as_deref(), Some("Description"));
    }

    #[test]
    fn test_whitespace_description_has_no_details() {
        assert!(parse_description("   ").is_empty());
        assert!(!parse_description("Title").is_empty());

        let talk = translate_event(&event("evt-5", Some("  \n ")));
        assert_eq!(talk.id, "evt-5");
        assert_eq!(talk.title, None);
        assert_eq!(talk.stage.as_deref(), Some("Palco Genipabu"));
    }

    #[test]
    fn test_empty_description() {
        assert!(parse_description("").is_empty());

        let talk = translate_event(&event("evt-1", Some("")));
        assert_eq!(talk.id, "evt-1");
        assert_eq!(talk.speaker.as_deref(), Some("Ada Lovelace"));
        assert_eq!(talk.start.as_deref(), Some("2024-11-09T10:00:00-03:00"));
        assert_eq!(talk.end.as_deref(), Some("2024-11-09T10:40:00-03:00"));
        assert_eq!(talk.stage.as_deref(), Some("Palco Genipabu"));
        assert_eq!(talk.title, None);
        assert_eq!(talk.talk_type, None);
        assert_eq!(talk.description, None);
        assert_eq!(talk.instagram, None);
        assert_eq!(talk.bio, None);
        assert_eq!(talk.company, None);
    }

    #[test]
    fn test_translate_event_full() {
        let talk = translate_event(&event(
            "evt-2",
            Some("Async Rust | Talk | Futures explained | @ada | Mathematician | Analytical Engines"),
        ));
        assert_eq!(talk.title.as_deref(), Some("Async Rust"));
        assert_eq!(talk.talk_type.as_deref(), Some("Talk"));
        assert_eq!(talk.description.as_deref(), Some("Futures explained"));
        assert_eq!(talk.instagram.as_deref(), Some("@ada"));
        assert_eq!(talk.bio.as_deref(), Some("Mathematician"));
        assert_eq!(talk.company.as_deref(), Some("Analytical Engines"));
    }

    #[test]
    fn test_all_day_event_has_no_times() {
        let mut all_day = event("evt-3", None);
        all_day.start = EventTime {
            date: Some("2024-11-09".to_string()),
            ..Default::default()
        };
        all_day.end = EventTime {
            date: Some("2024-11-10".to_string()),
            ..Default::default()
        };

        let talk = translate_event(&all_day);
        assert_eq!(talk.start, None);
        assert_eq!(talk.end, None);
        assert_eq!(talk.speaker.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_translate_events_preserves_count_and_order() {
        let events = vec![
            event("a", Some("First | Talk")),
            event("b", None),
            event("c", Some("")),
            event("d", Some(" | | | | | | |")),
        ];
        let talks = translate_events(&events);
        assert_eq!(talks.len(), events.len());
        let ids: Vec<&str> = talks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);

        assert!(translate_events(&[]).is_empty());
    }

    #[test]
    fn test_talk_json_omits_unset_fields() {
        let talk = translate_event(&event("evt-4", Some("Title A | Lightning Talk")));
        let json = serde_json::to_value(&talk).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "evt-4",
                "speaker": "Ada Lovelace",
                "title": "Title A",
                "type": "Lightning Talk",
                "start": "2024-11-09T10:00:00-03:00",
                "end": "2024-11-09T10:40:00-03:00",
                "stage": "Palco Genipabu"
            })
        );
    }
}
