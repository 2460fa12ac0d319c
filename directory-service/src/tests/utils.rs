use axum::{http::StatusCode, Router};
use directory_shared::test_utils::{
    http_test_utils::{create_test_request, response_to_json, response_to_text},
    test_logging::init_test_logging,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{routes, state::AppState};

/// A router over fresh, empty in-memory stores
pub fn test_app() -> Router {
    init_test_logging();
    routes::create_router_with_state(AppState::in_memory(), "")
}

/// Sends one request and returns the status with the parsed JSON body
pub async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(create_test_request(method, path, body))
        .await
        .unwrap();
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        assert!(response_to_text(response).await.is_empty());
        return (status, Value::Null);
    }
    (status, response_to_json(response).await)
}

/// Creates a resource and returns its JSON read view
pub async fn create(app: &Router, path: &str, body: Value) -> Value {
    let (status, created) = send(app, "POST", path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", created);
    created
}

pub fn address_payload(city: &str, country: &str) -> Value {
    json!({
        "street": "116th St & Broadway",
        "city": city,
        "state": "NY",
        "postal_code": "10027",
        "country": country
    })
}

pub fn person_payload(uni: &str, addresses: Vec<Value>) -> Value {
    json!({
        "uni": uni,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": format!("{}@columbia.edu", uni),
        "phone": "+1-212-555-0199",
        "birth_date": "1815-12-10",
        "addresses": addresses
    })
}

pub fn event_payload(title: &str, start_time: &str, end_time: &str) -> Value {
    json!({
        "title": title,
        "description": "Detailed conversations about the impact of AI",
        "start_time": start_time,
        "end_time": end_time,
        "location": "Mudd Building Lobby"
    })
}

pub fn organization_payload(name: &str) -> Value {
    json!({
        "name": name,
        "org_type": "University",
        "description": "A top-tier computer science department.",
        "website": "https://www.cs.columbia.edu",
        "email": "info@cs.columbia.edu"
    })
}
