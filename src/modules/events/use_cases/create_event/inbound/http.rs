use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::event::{Event, EventCandidate};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateEventResponse {
    #[serde(rename = "Message")]
    pub message: &'static str,
    pub data: Event,
}

// The body is decoded by hand so a missing content-type header is not a rejection.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
    let candidate = match decode_candidate(&body) {
        Ok(candidate) => candidate,
        Err(error) => {
            tracing::debug!(%error, "rejected malformed event body");
            return error.into_response();
        }
    };

    match state.events.create(candidate).await {
        Ok(event) => {
            tracing::info!(name = %event.name, event_type = %event.event_type, "event created");
            (
                StatusCode::CREATED,
                Json(CreateEventResponse {
                    message: "Successfully Created",
                    data: event,
                }),
            )
                .into_response()
        }
        Err(error @ EventError::Backend(_)) => {
            tracing::error!(%error, "failed to create event");
            error.into_response()
        }
        Err(error) => {
            tracing::debug!(%error, "event rejected");
            error.into_response()
        }
    }
}

/// Only a JSON object is a candidate; derived `Deserialize` would also accept an array.
fn decode_candidate(body: &[u8]) -> Result<EventCandidate, EventError> {
    let malformed = |error: serde_json::Error| EventError::MalformedBody(error.to_string());
    let value: serde_json::Value = serde_json::from_slice(body).map_err(malformed)?;
    if !value.is_object() {
        return Err(EventError::MalformedBody(format!(
            "expected a JSON object, found {value}"
        )));
    }
    serde_json::from_value(value).map_err(malformed)
}
