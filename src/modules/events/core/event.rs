use serde::{Deserialize, Serialize};

/// A stored event. Both fields are validated non-blank before an `Event` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl Event {
    pub fn new(name: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event_type: event_type.into(),
        }
    }
}

/// Wire shape of a create request. Absent and `null` fields both decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventCandidate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}
