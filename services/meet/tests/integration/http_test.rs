use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::json;
use tower::ServiceExt;

use huddle_meet::domain::types::SessionClaims;

use crate::helpers::{TEST_APP_SECRET, post_json, post_raw, test_app};

fn rfc3339(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// ── /generate-code ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_generate_code_with_window() {
    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "", "meetingDateTime": "2025-01-01T10:00:30Z" }),
    )
    .await;
    // a blank client name counts as missing
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MISSING_FIELD");

    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Acme Corp", "meetingDateTime": "2025-01-01T10:00:30Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "59138760");
    assert_eq!(body["meetingStart"], "2025-01-01T10:00:00.000Z");
    assert_eq!(body["windowStart"], "2025-01-01T09:57:00.000Z");
    assert_eq!(body["windowEnd"], "2025-01-01T12:00:00.000Z");
    assert_eq!(body["encodedTimestamp"], "8760");
}

#[tokio::test]
async fn should_require_meeting_date_time() {
    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Acme" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "missing required field: meetingDateTime");
}

#[tokio::test]
async fn should_reject_unparseable_meeting_time() {
    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Acme", "meetingDateTime": "after lunch" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_MEETING_TIME");
}

#[tokio::test]
async fn should_reject_meeting_time_beyond_representable_window() {
    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "a", "meetingDateTime": "+262142-12-31T23:59" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_MEETING_TIME");
}

#[tokio::test]
async fn should_reject_mistyped_generate_fields_as_invalid_body() {
    let (status, body) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": 5, "meetingDateTime": "2025-01-01T10:00:00Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_BODY");
}

// ── /validate-code ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_code_for_current_meeting() {
    let meeting = Utc::now() - TimeDelta::minutes(10);
    let (_, generated) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Initech", "meetingDateTime": rfc3339(meeting) }),
    )
    .await;
    let code = generated["code"].as_str().unwrap().to_owned();

    let (status, body) = post_json(
        test_app(),
        "/validate-code",
        json!({ "code": code, "clientName": "INITECH" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["meetingStart"], generated["meetingStart"]);
    assert_eq!(body["windowEnd"], generated["windowEnd"]);
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn should_report_mismatch_for_other_client() {
    let meeting = Utc::now() - TimeDelta::minutes(10);
    let (_, generated) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Initech", "meetingDateTime": rfc3339(meeting) }),
    )
    .await;

    let (status, body) = post_json(
        test_app(),
        "/validate-code",
        json!({ "code": generated["code"], "clientName": "Initrode" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "CODE_MISMATCH");
    assert!(body.get("meetingStart").is_none());
}

#[tokio::test]
async fn should_return_invalid_format_as_ordinary_result() {
    let (status, body) = post_json(test_app(), "/validate-code", json!({ "code": "1234567" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "INVALID_FORMAT");
}

#[tokio::test]
async fn should_treat_non_string_code_as_invalid_format() {
    for code in [json!(45018760), json!(["45018760"]), json!(true)] {
        let (status, body) =
            post_json(test_app(), "/validate-code", json!({ "code": code })).await;
        assert_eq!(status, StatusCode::OK, "code {code}");
        assert_eq!(body["valid"], false, "code {code}");
        assert_eq!(body["reason"], "INVALID_FORMAT", "code {code}");
    }
}

#[tokio::test]
async fn should_treat_null_code_as_missing() {
    let (status, body) = post_json(test_app(), "/validate-code", json!({ "code": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MISSING_FIELD");
}

#[tokio::test]
async fn should_answer_malformed_json_with_error_body() {
    let (status, body) = post_raw(
        test_app(),
        "/validate-code",
        Some("application/json"),
        "{\"code\": ".to_owned(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_answer_missing_content_type_with_error_body() {
    let (status, body) = post_raw(
        test_app(),
        "/validate-code",
        None,
        json!({ "code": "45018760" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_report_outside_window_for_stale_code() {
    // scheduled a day ago: the only candidate with these digits is long closed
    let meeting = Utc::now() - TimeDelta::days(1);
    let (_, generated) = post_json(
        test_app(),
        "/generate-code",
        json!({ "clientName": "Hooli", "meetingDateTime": rfc3339(meeting) }),
    )
    .await;

    let (status, body) = post_json(
        test_app(),
        "/validate-code",
        json!({ "code": generated["code"], "clientName": "Hooli" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "OUTSIDE_WINDOW");
}

#[tokio::test]
async fn should_require_code_field() {
    let (status, body) = post_json(test_app(), "/validate-code", json!({ "clientName": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MISSING_FIELD");
}

// ── /token ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_over_http() {
    let (status, body) = post_json(
        test_app(),
        "/token",
        json!({ "name": "Ivy", "room": "weekly", "email": "ivy@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&["jitsi"]);
    let data = decode::<SessionClaims>(
        body["token"].as_str().unwrap(),
        &DecodingKey::from_secret(TEST_APP_SECRET.as_bytes()),
        &validation,
    )
    .unwrap();
    assert_eq!(data.claims.room, "weekly");
    assert_eq!(data.claims.context.user.email, "ivy@example.com");
}

// ── health + middleware ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_health_with_request_id() {
    let resp = test_app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}
