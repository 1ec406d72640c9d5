use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{create_router, AppState};
use crate::config::AppConfig;

fn app() -> Router {
    create_router(AppState::default())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn scenario_invoice() -> Value {
    json!({
        "number": "F-2024-001",
        "date": "2024-01-15",
        "dueDate": "2024-02-15",
        "issuer": { "name": "Atelier Dupont", "address": "1 rue de Paris", "siret": "12345678900012" },
        "client": { "name": "Client SA", "address": "2 avenue de Lyon" },
        "items": [
            { "id": "1", "description": "Design", "quantity": 2, "unitPrice": 50 },
            { "id": "2", "description": "Hosting", "quantity": "1", "unitPrice": "19.99" }
        ],
        "currency": "EUR",
        "vatEnabled": true,
        "vatRate": 20,
        "type": "invoice",
        "language": "fr"
    })
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_totals_endpoint() {
    let response = app()
        .oneshot(post_json(
            "/api/totals",
            json!({
                "items": scenario_invoice()["items"],
                "vatEnabled": true,
                "vatRate": 20
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let totals = body_json(response).await;
    assert_eq!(totals["subtotal"].as_f64(), Some(119.99));
    assert_eq!(totals["vatAmount"].as_f64(), Some(24.0));
    assert_eq!(totals["total"].as_f64(), Some(143.99));
}

#[tokio::test]
async fn test_totals_of_empty_list_are_zero() {
    let response = app()
        .oneshot(post_json("/api/totals", json!({ "items": [] })))
        .await
        .unwrap();
    let totals = body_json(response).await;
    assert_eq!(totals["total"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_non_numeric_amount_is_unprocessable() {
    let response = app()
        .oneshot(post_json(
            "/api/totals",
            json!({ "items": [{ "description": "x", "quantity": "abc", "unitPrice": 1 }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_labels_endpoint_with_fallbacks() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/labels/quote/en")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["title"], "QUOTE");
    assert_eq!(body["labels"]["due_date"], "Valid until");

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/labels/bogus_type/xx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["docType"], "invoice");
    assert_eq!(body["language"], "fr");
    assert_eq!(body["title"], "FACTURE");
}

#[tokio::test]
async fn test_preview_endpoint() {
    let mut invoice = scenario_invoice();
    invoice["vatEnabled"] = json!(false);

    let response = app().oneshot(post_json("/api/preview", invoice)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("119.99 €"));
    assert!(html.contains("TVA non applicable, art. 293 B du CGI"));
}

#[tokio::test]
async fn test_pdf_endpoint() {
    let response = app()
        .oneshot(post_json("/api/pdf", scenario_invoice()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"facture-F-2024-001.pdf\""
    );
    assert!(body_bytes(response).await.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_validate_endpoint() {
    let response = app()
        .oneshot(post_json("/api/validate", scenario_invoice()))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], true);

    let response = app()
        .oneshot(post_json("/api/validate", json!({ "items": [] })))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], false);
    assert!(body["problems"].as_array().is_some_and(|p| !p.is_empty()));
}

#[tokio::test]
async fn test_history_csv_endpoint() {
    let mut entry = scenario_invoice();
    entry["status"] = json!("paid");

    let response = app()
        .oneshot(post_json("/api/history/export.csv", json!([entry])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let csv = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("F-2024-001,15/01/2024,15/02/2024,Client SA,,119.99,24.00,143.99,paid"));
}

#[tokio::test]
async fn test_history_stats_endpoint_counts_pending() {
    let mut entry = scenario_invoice();
    entry["status"] = json!("sent");

    let response = app()
        .oneshot(post_json("/api/history/stats", json!([entry])))
        .await
        .unwrap();
    let stats = body_json(response).await;
    assert_eq!(stats["pending"].as_f64(), Some(143.99));
    assert_eq!(stats["revenue"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_history_endpoints_reject_non_arrays() {
    let response = app()
        .oneshot(post_json("/api/history/stats", json!({ "number": "F-1" })))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_history_prune_uses_configured_retention() {
    let mut config = AppConfig::default();
    config.history.retention_days = 7;
    let app = create_router(AppState::new(config));

    let today = chrono::Utc::now().date_naive();
    let dated = |number: &str, days: i64| {
        let mut entry = scenario_invoice();
        entry["number"] = json!(number);
        entry["date"] = json!((today - chrono::Duration::days(days)).format("%Y-%m-%d").to_string());
        entry
    };

    let response = app
        .oneshot(post_json(
            "/api/history/prune",
            json!([dated("recent", 6), dated("expired", 7), dated("old", 40)]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let kept = body_json(response).await;
    let numbers: Vec<_> = kept
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["number"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(numbers, vec!["recent"]);
}

#[tokio::test]
async fn test_smart_data_suggest_matches_ignoring_case() {
    let body = json!({
        "clients": [
            { "name": "Dupont SA", "address": "1 rue de Paris" },
            { "name": "Martin", "address": "2 avenue de Lyon" }
        ],
        "items": [
            { "description": "Web design", "unitPrice": 50 },
            { "description": "Hosting", "unitPrice": "19.99" }
        ],
        "query": "DUP"
    });

    let response = app()
        .oneshot(post_json("/api/smart-data/suggest", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let found = body_json(response).await;
    assert_eq!(found["clients"].as_array().map(Vec::len), Some(1));
    assert_eq!(found["clients"][0]["name"], "Dupont SA");
    assert_eq!(found["items"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_smart_data_remember_puts_latest_first() {
    let body = json!({
        "clients": [{ "name": "client sa", "address": "old address" }],
        "items": [{ "description": "Other", "unitPrice": 5 }],
        "invoice": scenario_invoice()
    });

    let response = app()
        .oneshot(post_json("/api/smart-data/remember", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await;
    let clients = data["clients"].as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["address"], "2 avenue de Lyon");

    let items: Vec<_> = data["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["description"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(items, vec!["Hosting", "Design", "Other"]);
}
