use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::{Event, EventCandidate};

/// Validates a candidate against the current collection. Checks run in the
/// order name, type, uniqueness.
pub fn decide_create(existing: &[Event], candidate: EventCandidate) -> Result<Event, EventError> {
    let name = required(candidate.name, "name")?;
    let event_type = required(candidate.event_type, "type")?;

    if existing.iter().any(|event| event.name == name) {
        return Err(EventError::DuplicateName(name));
    }

    Ok(Event { name, event_type })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, EventError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EventError::missing_field(field)),
    }
}
