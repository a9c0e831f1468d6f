use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::events::core::errors::EventError;
use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/events",
            get(list_http::handle)
                .head(method_not_allowed)
                .post(create_http::handle)
                .delete(delete_http::handle)
                .fallback(method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> EventError {
    EventError::MethodNotAllowed
}
