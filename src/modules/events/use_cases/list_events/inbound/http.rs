use std::num::NonZeroUsize;

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::events::core::errors::EventError;
use crate::modules::events::core::pagination::{DEFAULT_PAGE, PageRequest};
use crate::shell::query::first_value;
use crate::shell::state::AppState;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

// Raw pairs so a repeated `page` or `size` resolves to its first value.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, EventError> {
    let page = parse_positive(first_value(&params, "page"), "page")?.unwrap_or(DEFAULT_PAGE);
    let size = parse_positive(first_value(&params, "size"), "size")?
        .unwrap_or(state.default_page_size);

    let result = state
        .events
        .list(PageRequest::new(page, size))
        .await
        .inspect_err(|error| tracing::error!(%error, "failed to list events"))?;

    Ok((
        [(TOTAL_COUNT_HEADER, result.total.to_string())],
        Json(result.items),
    )
        .into_response())
}

/// An empty value counts as absent; anything else must be a positive integer.
fn parse_positive(
    raw: Option<&str>,
    param: &'static str,
) -> Result<Option<NonZeroUsize>, EventError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            tracing::debug!(param, value = raw, "rejected pagination parameter");
            EventError::InvalidParameter(param)
        }),
    }
}
