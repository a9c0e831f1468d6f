use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::modules::events::core::pagination::DEFAULT_PAGE_SIZE;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn make_app() -> Router {
    router(AppState::new(
        Arc::new(InMemoryEventStore::new()),
        DEFAULT_PAGE_SIZE,
    ))
}

#[tokio::test]
async fn creates_rejects_lists_and_deletes_an_event() {
    let app = make_app();

    let (status, body) = send(&app, Method::POST, "/events", Some(r#"{"name":"A","type":"x"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["data"], json!({ "name": "A", "type": "x" }));
    assert_eq!(created["Message"], "Successfully Created");

    let (status, body) = send(&app, Method::POST, "/events", Some(r#"{"name":"A","type":"y"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "event with name 'A' already exists");

    let (status, body) = send(&app, Method::GET, "/events?page=1&size=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{ "name": "A", "type": "x" }])
    );

    let (status, body) = send(&app, Method::DELETE, "/events?name=A", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "message": "Event deleted successfully" })
    );

    let (status, body) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn lists_every_created_event_in_insertion_order() {
    let app = make_app();
    let names = ["delta", "alpha", "charlie", "bravo"];
    for name in names {
        let body = json!({ "name": name, "type": "meetup" }).to_string();
        let (status, _) = send(&app, Method::POST, "/events", Some(body.as_str())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/events?size=100", None).await;
    let listed: Vec<String> = serde_json::from_str::<Value>(&body).unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, names);

    let (_, first) = send(&app, Method::GET, "/events?page=2&size=2", None).await;
    let (_, second) = send(&app, Method::GET, "/events?page=2&size=2", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn rejects_unsupported_methods_with_405() {
    let app = make_app();
    for method in [Method::PUT, Method::PATCH, Method::OPTIONS] {
        let (status, body) = send(&app, method, "/events", Some(r#"{"name":"A","type":"x"}"#)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "Method not allowed");
    }

    // HEAD would otherwise be answered by the GET handler.
    let (status, _) = send(&app, Method::HEAD, "/events", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (_, body) = send(&app, Method::GET, "/events", None).await;
    assert_eq!(body, "[]");
}
