use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mockall::Sequence;
use serde_json::{json, Value};
use tower::ServiceExt;

use lusso_backend::api::email::{MockEmailSender, OutgoingEmail};
use lusso_backend::api::google_sheets::{MockSheetAppender, SheetAppender};
use lusso_backend::error::DeliveryError;
use lusso_backend::{api_router, AppState, EmailChannel};

const NOTIFY_TO: &str = "leads@lusso.com";

fn app(email: Option<MockEmailSender>, sheets: Option<MockSheetAppender>) -> Router {
    let state = AppState {
        email: email.map(|sender| EmailChannel {
            sender: Arc::new(sender),
            notify_to: NOTIFY_TO.to_string(),
        }),
        sheets: sheets.map(|appender| Arc::new(appender) as Arc<dyn SheetAppender>),
    };
    api_router(Arc::new(state))
}

async fn post_raw(app: Router, content_type: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/start-vision")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, "application/json", body.to_string()).await
}

fn asha() -> Value {
    json!({
        "name": "Asha",
        "contact": "asha@example.com",
        "city": "Pune",
        "kitchenVibe": "Island social",
        "finishes": ["Warm & natural"],
        "wardrobe": "Sliding minimalist",
        "shutters": "Balance light & privacy",
        "partitions": "Slim metal & glass",
        "website": ""
    })
}

fn silent_email() -> MockEmailSender {
    let mut email = MockEmailSender::new();
    email.expect_send().never();
    email
}

fn silent_sheets() -> MockSheetAppender {
    let mut sheets = MockSheetAppender::new();
    sheets.expect_append_row().never();
    sheets
}

#[tokio::test]
async fn honeypot_submission_succeeds_without_outbound_calls() {
    let mut body = asha();
    body["website"] = json!("http://cheap-pills.example");

    let (status, json) = post(app(Some(silent_email()), Some(silent_sheets())), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
}

#[tokio::test]
async fn whitespace_honeypot_is_discarded_like_any_other() {
    let body = json!({ "name": "Bot", "contact": "x", "website": " " });

    let (status, json) = post(app(Some(silent_email()), Some(silent_sheets())), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
}

#[tokio::test]
async fn missing_name_is_rejected_before_delivery() {
    let mut body = asha();
    body["name"] = json!("   ");

    let (status, json) = post(app(Some(silent_email()), Some(silent_sheets())), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], json!(false));
    assert!(json["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn missing_contact_is_rejected_before_delivery() {
    let body = json!({ "name": "Asha", "city": "Pune" });

    let (status, json) = post(app(Some(silent_email()), Some(silent_sheets())), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], json!(false));
    assert!(json["error"].as_str().unwrap().contains("contact"));
}

#[tokio::test]
async fn email_contact_gets_admin_notification_then_auto_reply() {
    let mut seq = Sequence::new();
    let mut email = MockEmailSender::new();
    email
        .expect_send()
        .withf(|e: &OutgoingEmail| e.to == NOTIFY_TO && e.subject == "New vision request from Asha")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    email
        .expect_send()
        .withf(|e: &OutgoingEmail| e.to == "asha@example.com")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let (status, json) = post(app(Some(email), None), asha()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], json!(true));
    assert_eq!(
        json["deliveries"],
        json!([
            { "channel": "admin_email", "status": "delivered" },
            { "channel": "auto_reply", "status": "delivered" }
        ])
    );
}

#[tokio::test]
async fn phone_contact_only_notifies_the_studio() {
    let mut email = MockEmailSender::new();
    email
        .expect_send()
        .withf(|e: &OutgoingEmail| e.to == NOTIFY_TO)
        .times(1)
        .returning(|_| Ok(()));

    let mut body = asha();
    body["contact"] = json!("+91 98200 12345");

    let (status, json) = post(app(Some(email), None), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deliveries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn full_submission_reaches_both_channels() {
    let mut email = MockEmailSender::new();
    email
        .expect_send()
        .withf(|e: &OutgoingEmail| e.to == NOTIFY_TO)
        .times(1)
        .returning(|_| Ok(()));
    email
        .expect_send()
        .withf(|e: &OutgoingEmail| e.to == "asha@example.com")
        .times(1)
        .returning(|_| Ok(()));

    let mut sheets = MockSheetAppender::new();
    sheets
        .expect_append_row()
        .withf(|row: &Vec<String>| {
            row.len() == 9
                && row[1] == "Asha"
                && row[2] == "asha@example.com"
                && row[3] == "Pune"
                && row[5] == "Warm & natural"
                && row[8] == "Slim metal & glass"
        })
        .times(1)
        .returning(|_| Ok(()));

    let (status, json) = post(app(Some(email), Some(sheets)), asha()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], json!(true));
    assert_eq!(json["deliveries"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn failed_email_still_appends_row_and_reports_channel() {
    let mut email = MockEmailSender::new();
    email
        .expect_send()
        .times(2)
        .returning(|_| Err(DeliveryError::Email("daily quota exceeded".into())));

    let mut sheets = MockSheetAppender::new();
    sheets.expect_append_row().times(1).returning(|_| Ok(()));

    let (status, json) = post(app(Some(email), Some(sheets)), asha()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], json!(false));
    assert!(json["error"].is_string());
    let deliveries = json["deliveries"].as_array().unwrap();
    assert_eq!(deliveries[0]["channel"], json!("admin_email"));
    assert_eq!(deliveries[0]["status"], json!("failed"));
    assert_eq!(deliveries[2], json!({ "channel": "spreadsheet", "status": "delivered" }));
}

#[tokio::test]
async fn spreadsheet_failure_turns_into_server_error() {
    let mut sheets = MockSheetAppender::new();
    sheets.expect_append_row().times(1).returning(|_| {
        Err(DeliveryError::Api {
            provider: "Google Sheets",
            status: 403,
            body: "The caller does not have permission".into(),
        })
    });

    let (status, json) = post(app(None, Some(sheets)), asha()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["deliveries"][0]["channel"], json!("spreadsheet"));
    assert!(json["deliveries"][0]["error"].as_str().unwrap().contains("403"));
}

#[tokio::test]
async fn no_configured_channel_still_answers_ok() {
    let (status, json) = post(app(None, None), asha()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true }));
}

#[tokio::test]
async fn malformed_body_is_a_server_error() {
    let (status, json) = post_raw(
        app(Some(silent_email()), Some(silent_sheets())),
        "application/json",
        "{ \"name\": ".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], json!(false));
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn health_check_answers_ok() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
    let response = app(None, None).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
