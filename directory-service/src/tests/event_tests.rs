use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use super::utils::{create, event_payload, send, test_app};

fn timestamp(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_create_then_get_event() {
    let app = test_app();
    let payload = event_payload(
        "Seminar of AI!",
        "2099-01-01T00:00:00Z",
        "2099-01-01T02:00:00Z",
    );

    let created = create(&app, "/events", payload.clone()).await;
    assert!(Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert_eq!(created["created_at"], created["updated_at"]);

    let (status, fetched) = send(
        &app,
        "GET",
        &format!("/events/{}", created["id"].as_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    for field in ["title", "description", "start_time", "end_time", "location"] {
        assert_eq!(fetched[field], payload[field], "field {}", field);
    }
}

#[tokio::test]
async fn test_end_before_start_is_accepted() {
    let app = test_app();
    create(
        &app,
        "/events",
        event_payload("Backwards", "2099-01-01T02:00:00Z", "2099-01-01T00:00:00Z"),
    )
    .await;
}

#[tokio::test]
async fn test_bad_start_time_is_unprocessable() {
    let app = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/events",
        Some(event_payload("Seminar", "tomorrow", "2099-01-01T02:00:00Z")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_upcoming_filter_checks_start_time_only() {
    let app = test_app();
    let future = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;

    // Started an hour ago, still running
    let start = Utc::now() - Duration::hours(1);
    let end = Utc::now() + Duration::hours(1);
    let running = create(
        &app,
        "/events",
        event_payload("Ongoing workshop", &start.to_rfc3339(), &end.to_rfc3339()),
    )
    .await;

    let (status, upcoming) = send(&app, "GET", "/events?upcoming=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(upcoming, json!([future.clone()]));

    let (_, everything) = send(&app, "GET", "/events?upcoming=false", None).await;
    assert_eq!(everything, json!([future.clone(), running.clone()]));

    let (_, default) = send(&app, "GET", "/events", None).await;
    assert_eq!(default, json!([future, running]));
}

#[tokio::test]
async fn test_title_filter_is_case_insensitive_substring() {
    let app = test_app();
    let seminar = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    create(
        &app,
        "/events",
        event_payload("Food Eating Competition", "2099-02-01T00:00:00Z", "2099-02-01T02:00:00Z"),
    )
    .await;

    let (_, found) = send(&app, "GET", "/events?title=seminar", None).await;
    assert_eq!(found, json!([seminar.clone()]));

    // Applying the same filter again yields the same set
    let (_, again) = send(&app, "GET", "/events?title=seminar&upcoming=true", None).await;
    assert_eq!(again, json!([seminar]));
}

#[tokio::test]
async fn test_upcoming_accepts_truthy_spellings() {
    let app = test_app();
    let future = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    let past = create(
        &app,
        "/events",
        event_payload("Old meetup", "2001-01-01T00:00:00Z", "2001-01-01T02:00:00Z"),
    )
    .await;

    for flag in ["1", "yes", "on", "TRUE"] {
        let (status, body) = send(&app, "GET", &format!("/events?upcoming={}", flag), None).await;
        assert_eq!(status, StatusCode::OK, "upcoming={}", flag);
        assert_eq!(body, json!([future.clone()]), "upcoming={}", flag);
    }

    for flag in ["0", "no", "off"] {
        let (status, body) = send(&app, "GET", &format!("/events?upcoming={}", flag), None).await;
        assert_eq!(status, StatusCode::OK, "upcoming={}", flag);
        assert_eq!(body, json!([future.clone(), past.clone()]), "upcoming={}", flag);
    }
}

#[tokio::test]
async fn test_invalid_upcoming_flag_is_unprocessable() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/events?upcoming=maybe", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "query");
}

#[tokio::test]
async fn test_empty_patch_only_advances_updated_at() {
    let app = test_app();
    let created = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    let path = format!("/events/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(&app, "PATCH", &path, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(timestamp(&updated["updated_at"]) >= timestamp(&created["updated_at"]));
    assert_eq!(updated["created_at"], created["created_at"]);

    let mut without_updated_at = updated.clone();
    without_updated_at["updated_at"] = created["updated_at"].clone();
    assert_eq!(without_updated_at, created);
}

#[tokio::test]
async fn test_patch_event_fields() {
    let app = test_app();
    let created = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    let path = format!("/events/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        "PATCH",
        &path,
        Some(json!({ "location": "Zoom", "end_time": "2099-01-01T03:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["location"], "Zoom");
    assert_eq!(updated["end_time"], "2099-01-01T03:00:00Z");
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["start_time"], created["start_time"]);
    assert_eq!(updated["id"], created["id"]);
}

#[tokio::test]
async fn test_patch_event_with_null_title_is_rejected() {
    let app = test_app();
    let created = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    let path = format!("/events/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "PATCH", &path, Some(json!({ "title": null }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["details"],
        json!([{ "field": "title", "message": "cannot be null" }])
    );

    let (_, fetched) = send(&app, "GET", &path, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_event_twice() {
    let app = test_app();
    let created = create(
        &app,
        "/events",
        event_payload("Seminar of AI!", "2099-01-01T00:00:00Z", "2099-01-01T02:00:00Z"),
    )
    .await;
    let path = format!("/events/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &path, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_event_is_not_found() {
    let app = test_app();
    let (status, body) = send(&app, "DELETE", &format!("/events/{}", Uuid::new_v4()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Event not found"));
}
