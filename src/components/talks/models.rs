use serde::{Deserialize, Serialize};

/// Schedule entry for a single conference talk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Talk {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub talk_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
}

/// Fields carried in an event description, in the order they appear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkDetails {
    pub title: Option<String>,
    pub talk_type: Option<String>,
    pub description: Option<String>,
    pub instagram: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
}

impl TalkDetails {
    /// Number of fields a description can fill
    pub const FIELD_COUNT: usize = 6;

    /// True when no field was filled
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
