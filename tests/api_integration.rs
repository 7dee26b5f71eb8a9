//! Integration tests for the trekdesk REST API.
//!
//! Each test spins up an Axum server on a random port and exercises the real
//! HTTP contract with reqwest.

use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use trekdesk::catalog::Catalog;
use trekdesk::inquiry::InquiryComposer;
use trekdesk::routes::{AppState, api_routes};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start an Axum server on a random port, return (port, state).
async fn start_server(catalog: Catalog, phone: &str) -> (u16, AppState) {
    let state = AppState::new(catalog, InquiryComposer::new(phone));
    let app = api_routes(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (port, state)
}

async fn post(port: u16, path: &str, body: Option<Value>) -> (u16, Value) {
    let client = reqwest::Client::new();
    let mut req = client.post(format!("http://127.0.0.1:{port}{path}"));
    if let Some(body) = body {
        req = req.json(&body);
    }
    let resp = req.send().await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

// ── Health / Catalog ─────────────────────────────────────────────────

#[tokio::test]
async fn rest_health_endpoint() {
    timeout(TEST_TIMEOUT, async {
        let (port, _state) = start_server(Catalog::builtin(), "918960186655").await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "trekdesk");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn custom_catalog_drives_itinerary_and_summary() {
    timeout(TEST_TIMEOUT, async {
        let catalog = Catalog::from_json_str(
            r#"{
                "destinations": [{"name": "Ziro Valley", "category": "national"}],
                "itineraries": {"Ziro Valley": [
                    {"day": 1, "title": "Itanagar → Ziro", "activities": ["Drive up"]},
                    {"day": 2, "title": "Apatani villages", "activities": ["Village walk", "Rice fields"]}
                ]},
                "summaries": {"Ziro Valley": {
                    "inclusions": ["Homestay"],
                    "exclusions": ["Inner line permit"],
                    "things_to_carry": ["Rain jacket"]
                }}
            }"#,
        )
        .unwrap();
        let (port, _state) = start_server(catalog, "918960186655").await;

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/api/destinations"))
            .await
            .unwrap();
        let body: Vec<Value> = resp.json().await.unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["duration_days"], 3);

        let (status, opened) =
            post(port, "/api/walks", Some(json!({"destination": "Ziro Valley"}))).await;
        assert_eq!(status, 201);
        assert_eq!(opened["view"]["title"], "Ziro Valley - 2 Day Journey");
        let id = opened["id"].as_str().unwrap().to_string();

        post(port, &format!("/api/walks/{id}/next"), None).await;
        let (_, view) = post(port, &format!("/api/walks/{id}/next"), None).await;
        assert_eq!(view["step"]["kind"], "summary");
        assert_eq!(view["summary"]["exclusions"], json!(["Inner line permit"]));
        assert_eq!(view["progress"], json!(["completed", "completed"]));
    })
    .await
    .expect("test timed out");
}

// ── Inquiries ────────────────────────────────────────────────────────

#[tokio::test]
async fn inquiry_submit_builds_link_for_configured_phone() {
    timeout(TEST_TIMEOUT, async {
        let (port, state) = start_server(Catalog::builtin(), "4915112345678").await;

        let (status, opened) = post(
            port,
            "/api/inquiries",
            Some(json!({"share_query": "?dest=Tawang%20Arunachal%20Pradesh&adults=3&kids=0&date=15-10-2025"})),
        )
        .await;
        assert_eq!(status, 201);
        let id = opened["id"].as_str().unwrap().to_string();
        assert_eq!(state.inquiries.len().await, 1);

        let (status, result) = post(port, &format!("/api/inquiries/{id}/submit"), None).await;
        assert_eq!(status, 200);
        let link = result["contact_link"].as_str().unwrap();
        assert!(link.starts_with("https://wa.me/+4915112345678?text="));

        let text = link.split_once("?text=").unwrap().1;
        assert_eq!(
            urlencoding::decode(text).unwrap(),
            "Hi, I'm interested in your 3-day trip to Tawang Arunachal Pradesh for 3 adults and 0 kids starting 15-10-2025. Please send details, cost and availability."
        );
        assert_eq!(
            result["share_query"],
            "?dest=Tawang%20Arunachal%20Pradesh&adults=3&kids=0&date=15-10-2025"
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn party_caps_hold_over_http() {
    timeout(TEST_TIMEOUT, async {
        let (port, _state) = start_server(Catalog::builtin(), "918960186655").await;

        let (_, opened) = post(port, "/api/inquiries", None).await;
        let id = opened["id"].as_str().unwrap().to_string();
        let party = format!("/api/inquiries/{id}/party");

        let mut view = Value::Null;
        for _ in 0..12 {
            (_, view) = post(port, &party, Some(json!({"action": "increment_kids"}))).await;
        }
        assert_eq!(view["adults"], 2);
        assert_eq!(view["kids"], 8);

        (_, view) = post(port, &party, Some(json!({"action": "increment_adults"}))).await;
        assert_eq!(view["adults"], 2);

        for _ in 0..3 {
            (_, view) = post(port, &party, Some(json!({"action": "decrement_adults"}))).await;
        }
        assert_eq!(view["adults"], 1);
        assert_eq!(view["guests"], 9);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn closed_inquiry_is_gone() {
    timeout(TEST_TIMEOUT, async {
        let (port, state) = start_server(Catalog::builtin(), "918960186655").await;

        let (_, opened) = post(port, "/api/inquiries", None).await;
        let id = opened["id"].as_str().unwrap().to_string();

        let client = reqwest::Client::new();
        let resp = client
            .delete(format!("http://127.0.0.1:{port}/api/inquiries/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert!(state.inquiries.is_empty().await);

        let (status, body) = post(port, &format!("/api/inquiries/{id}/submit"), None).await;
        assert_eq!(status, 404);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    })
    .await
    .expect("test timed out");
}
