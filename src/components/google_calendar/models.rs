use serde::{Deserialize, Deserializer, Serialize};

/// Calendar event as returned by the events list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start: EventTime,
    #[serde(deserialize_with = "null_as_default")]
    pub end: EventTime,
    pub location: Option<String>,
    pub creator: Option<Person>,
    pub organizer: Option<Person>,
    #[serde(deserialize_with = "null_as_default")]
    pub attendees: Vec<Attendee>,
    pub status: Option<String>,
    pub html_link: Option<String>,
}

/// Start or end of an event. Timed events carry `date_time`, all-day events only `date`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EventTime {
    pub date_time: Option<String>,
    pub date: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Attendee {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub response_status: Option<String>,
}

/// Body of a successful events list response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CalendarEvent>,
}

/// Read an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
