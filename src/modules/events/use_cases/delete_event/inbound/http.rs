use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::events::core::errors::EventError;
use crate::shell::query::first_value;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteEventResponse {
    pub message: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, EventError> {
    let name = first_value(&params, "name").unwrap_or_default();

    let removed = state.events.delete(name).await.inspect_err(|error| match error {
        EventError::Backend(_) => tracing::error!(%error, "failed to delete event"),
        _ => tracing::debug!(%error, "delete rejected"),
    })?;
    tracing::info!(name = %removed.name, "event deleted");

    Ok(Json(DeleteEventResponse {
        message: "Event deleted successfully",
    }))
}
