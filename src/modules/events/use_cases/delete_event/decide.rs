use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::Event;

/// Returns the position of the event to remove.
pub fn decide_delete(existing: &[Event], name: &str) -> Result<usize, EventError> {
    if name.is_empty() {
        return Err(EventError::missing_name_for_deletion());
    }

    existing
        .iter()
        .position(|event| event.name == name)
        .ok_or_else(|| EventError::NotFound(name.to_string()))
}
