//! Record endpoints over the real router.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{body_json, records_app, send_empty, send_json};

fn entry(title: &str, acad_year: &str) -> Value {
    json!({
        "AccountID": 3,
        "ContactRole": "Lecturer",
        "StudentCount": 4,
        "AcadYear": acad_year,
        "Title": title,
        "CompanyName": "Acme Pte Ltd",
        "CompanyPOC": "J. Tan",
        "Description": "Capstone project entry"
    })
}

async fn titles(app: &axum::Router, uri: &str) -> Vec<String> {
    let response = send_empty(app, Method::GET, uri).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn create_stamps_date_and_assigns_id() {
    let app = records_app();

    let response = send_json(
        &app,
        Method::POST,
        "/api/records",
        &entry("Smart Campus Dashboard", "2023/2024"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let record = body_json(response).await;
    assert_eq!(record["ID"], 1);
    assert_eq!(record["AccountID"], 3);
    assert_eq!(record["IsDeleted"], false);
    assert!(!record["CreationDate"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn listing_without_filters_returns_all_live_records() {
    let app = records_app();

    send_json(&app, Method::POST, "/api/records", &entry("Dashboard", "2023/2024")).await;
    send_json(&app, Method::POST, "/api/records", &entry("Chatbot", "2024/2025")).await;

    assert_eq!(
        titles(&app, "/api/records").await,
        vec!["Dashboard", "Chatbot"]
    );
}

#[tokio::test]
async fn listing_filters_by_academic_year() {
    let app = records_app();

    send_json(&app, Method::POST, "/api/records", &entry("Dashboard", "2023/2024")).await;
    send_json(&app, Method::POST, "/api/records", &entry("Chatbot", "2024/2025")).await;

    assert_eq!(
        titles(&app, "/api/records?ay=2024%2F2025").await,
        vec!["Chatbot"]
    );
}

#[tokio::test]
async fn listing_filters_by_title_substring() {
    let app = records_app();

    send_json(&app, Method::POST, "/api/records", &entry("Smart Dashboard", "2023/2024")).await;
    send_json(&app, Method::POST, "/api/records", &entry("Chatbot", "2023/2024")).await;

    assert_eq!(
        titles(&app, "/api/records?title=Dash").await,
        vec!["Smart Dashboard"]
    );
}

#[tokio::test]
async fn listing_combines_filters_with_and() {
    let app = records_app();

    send_json(&app, Method::POST, "/api/records", &entry("Dashboard A", "2023/2024")).await;
    send_json(&app, Method::POST, "/api/records", &entry("Dashboard B", "2024/2025")).await;
    send_json(&app, Method::POST, "/api/records", &entry("Chatbot", "2024/2025")).await;

    assert_eq!(
        titles(&app, "/api/records?ay=2024%2F2025&title=Dashboard").await,
        vec!["Dashboard B"]
    );
}

#[tokio::test]
async fn empty_filter_values_are_ignored() {
    let app = records_app();

    send_json(&app, Method::POST, "/api/records", &entry("Dashboard", "2023/2024")).await;

    assert_eq!(
        titles(&app, "/api/records?ay=&title=").await,
        vec!["Dashboard"]
    );
}

#[tokio::test]
async fn deleted_records_never_appear_in_listings() {
    let app = records_app();

    let response =
        send_json(&app, Method::POST, "/api/records", &entry("Dashboard", "2023/2024")).await;
    let id = body_json(response).await["ID"].as_i64().unwrap();
    send_json(&app, Method::POST, "/api/records", &entry("Chatbot", "2023/2024")).await;

    let response = send_empty(&app, Method::DELETE, &format!("/api/records/{id}")).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    assert_eq!(titles(&app, "/api/records").await, vec!["Chatbot"]);
}

#[tokio::test]
async fn empty_listing_is_an_empty_array() {
    let app = records_app();

    let response = send_empty(&app, Method::GET, "/api/records").await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn update_rewrites_content_fields() {
    let app = records_app();

    let response =
        send_json(&app, Method::POST, "/api/records", &entry("Dashboard", "2023/2024")).await;
    let id = body_json(response).await["ID"].as_i64().unwrap();

    let response = send_json(
        &app,
        Method::PUT,
        &format!("/api/records/{id}"),
        &json!({
            "ContactRole": "Coordinator",
            "StudentCount": 6,
            "AcadYear": "2024/2025",
            "Title": "Dashboard v2",
            "CompanyName": "Acme Pte Ltd",
            "CompanyPOC": "K. Lim",
            "Description": "Second iteration"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let updated = body_json(response).await;
    assert_eq!(updated["Title"], "Dashboard v2");
    assert_eq!(updated["StudentCount"], 6);
    // Ownership does not change on update.
    assert_eq!(updated["AccountID"], 3);
}

#[tokio::test]
async fn update_of_unknown_record_is_not_found() {
    let app = records_app();

    let response = send_json(
        &app,
        Method::PUT,
        "/api/records/99",
        &json!({
            "ContactRole": "Coordinator",
            "StudentCount": 6,
            "AcadYear": "2024/2025",
            "Title": "Ghost",
            "CompanyName": "Acme Pte Ltd",
            "CompanyPOC": "K. Lim",
            "Description": "Missing"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = records_app();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/records")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("not json at all"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_empty(&app, Method::GET, "/api/records").await;
    assert_eq!(body_json(response).await, json!([]));
}
