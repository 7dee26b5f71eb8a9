//! REST endpoints for the catalog, itinerary walks, and inquiries.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::catalog::{Catalog, Category, ItineraryDay};
use crate::error::{InquiryError, SessionError};
use crate::inquiry::{InquiryComposer, InquiryState, PartyAction};
use crate::itinerary::{ItineraryWalker, resolve_itinerary};
use crate::sessions::SessionStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub composer: Arc<InquiryComposer>,
    pub walks: Arc<SessionStore<ItineraryWalker>>,
    pub inquiries: Arc<SessionStore<InquiryState>>,
}

impl AppState {
    pub fn new(catalog: Catalog, composer: InquiryComposer) -> Self {
        Self {
            catalog: Arc::new(catalog),
            composer: Arc::new(composer),
            walks: Arc::new(SessionStore::new("walk")),
            inquiries: Arc::new(SessionStore::new("inquiry")),
        }
    }
}

/// Build the Axum router with all REST routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/{name}/itinerary", get(destination_itinerary))
        .route("/api/walks", post(open_walk))
        .route("/api/walks/{id}", get(get_walk).delete(close_walk))
        .route("/api/walks/{id}/{action}", post(move_walk))
        .route("/api/inquiries", post(open_inquiry))
        .route("/api/inquiries/{id}", get(get_inquiry).delete(close_inquiry))
        .route("/api/inquiries/{id}/destination", post(select_destination))
        .route("/api/inquiries/{id}/date", post(select_date))
        .route("/api/inquiries/{id}/party", post(adjust_party))
        .route("/api/inquiries/{id}/submit", post(submit_inquiry))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn error_body(status: StatusCode, message: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    (status, Json(json!({"error": message.to_string()})))
}

fn parse_id(id: &str) -> Result<Uuid, (StatusCode, Json<Value>)> {
    Uuid::parse_str(id).map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid session ID"))
}

fn not_found(err: SessionError) -> (StatusCode, Json<Value>) {
    error_body(StatusCode::NOT_FOUND, err)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "trekdesk"
    }))
}

// ── Catalog ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DestinationFilter {
    category: Option<Category>,
}

async fn list_destinations(
    State(state): State<AppState>,
    Query(filter): Query<DestinationFilter>,
) -> impl IntoResponse {
    let entries: Vec<_> = state
        .catalog
        .destinations()
        .iter()
        .filter(|d| filter.category.is_none_or(|c| d.category == c))
        .cloned()
        .collect();
    Json(entries)
}

async fn destination_itinerary(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let has_own = state.catalog.itinerary_for(&name).is_some();
    let days = match resolve_itinerary(&state.catalog, &name, None) {
        Ok(days) => days,
        Err(e) => return error_body(StatusCode::INTERNAL_SERVER_ERROR, e),
    };
    (
        StatusCode::OK,
        Json(json!({
            "destination": name,
            "is_default": !has_own,
            "days": days,
            "summary": state.catalog.summary_for(&name),
        })),
    )
}

// ── Itinerary walks ─────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OpenWalkRequest {
    destination: String,
    #[serde(default)]
    itinerary: Option<Vec<ItineraryDay>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum WalkAction {
    Next,
    Previous,
    Reset,
}

async fn open_walk(
    State(state): State<AppState>,
    Json(body): Json<OpenWalkRequest>,
) -> impl IntoResponse {
    if body.destination.trim().is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Destination is required");
    }
    let walker = match ItineraryWalker::open(&state.catalog, &body.destination, body.itinerary) {
        Ok(walker) => walker,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
    };
    let view = walker.view();
    let id = state.walks.insert(walker).await;
    (StatusCode::CREATED, Json(json!({"id": id, "view": view})))
}

async fn get_walk(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.walks.get(id).await {
        Ok(walker) => (StatusCode::OK, Json(json!(walker.view()))),
        Err(e) => not_found(e),
    }
}

async fn move_walk(
    State(state): State<AppState>,
    Path((id, action)): Path<(String, WalkAction)>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let result = state
        .walks
        .update(id, |walker| {
            match action {
                WalkAction::Next => walker.next(),
                WalkAction::Previous => walker.previous(),
                WalkAction::Reset => walker.reset(),
            };
            walker.view()
        })
        .await;
    match result {
        Ok(view) => (StatusCode::OK, Json(json!(view))),
        Err(e) => not_found(e),
    }
}

async fn close_walk(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.walks.remove(id).await {
        Ok(walker) => {
            walker.close();
            (StatusCode::OK, Json(json!({"status": "closed"})))
        }
        Err(e) => not_found(e),
    }
}

// ── Inquiries ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
struct OpenInquiryRequest {
    #[serde(default)]
    share_query: Option<String>,
}

#[derive(Deserialize)]
struct DestinationRequest {
    name: String,
}

#[derive(Deserialize)]
struct DateRequest {
    date: NaiveDate,
}

#[derive(Deserialize)]
struct PartyRequest {
    action: PartyAction,
}

async fn open_inquiry(
    State(state): State<AppState>,
    body: Option<Json<OpenInquiryRequest>>,
) -> impl IntoResponse {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let inquiry = match body.share_query.as_deref() {
        Some(query) => match InquiryState::from_share_query(query) {
            Ok(inquiry) => inquiry,
            Err(e) => return error_body(StatusCode::BAD_REQUEST, e),
        },
        None => InquiryState::new(),
    };
    let view = inquiry.view();
    let id = state.inquiries.insert(inquiry).await;
    (StatusCode::CREATED, Json(json!({"id": id, "view": view})))
}

async fn get_inquiry(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.inquiries.get(id).await {
        Ok(inquiry) => (StatusCode::OK, Json(json!(inquiry.view()))),
        Err(e) => not_found(e),
    }
}

/// Apply `f` to one inquiry and respond with its updated view.
async fn update_inquiry(
    state: &AppState,
    id: &str,
    f: impl FnOnce(&mut InquiryState),
) -> (StatusCode, Json<Value>) {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state
        .inquiries
        .update(id, |inquiry| {
            f(inquiry);
            inquiry.view()
        })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(json!(view))),
        Err(e) => not_found(e),
    }
}

async fn select_destination(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DestinationRequest>,
) -> impl IntoResponse {
    if body.name.trim().is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "Destination is required");
    }
    update_inquiry(&state, &id, |inquiry| inquiry.select_destination(&body.name)).await
}

async fn select_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<DateRequest>,
) -> impl IntoResponse {
    update_inquiry(&state, &id, |inquiry| inquiry.select_date(body.date)).await
}

async fn adjust_party(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PartyRequest>,
) -> impl IntoResponse {
    update_inquiry(&state, &id, |inquiry| {
        inquiry.apply(body.action);
    })
    .await
}

async fn submit_inquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let inquiry = match state.inquiries.get(id).await {
        Ok(inquiry) => inquiry,
        Err(e) => return not_found(e),
    };
    match state.composer.submit(&inquiry) {
        Ok(result) => {
            info!(session_id = %id, "Inquiry submitted");
            (StatusCode::OK, Json(json!(result)))
        }
        Err(e @ InquiryError::Incomplete { .. }) => {
            let missing = inquiry.missing_fields();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"error": e.to_string(), "missing": missing})),
            )
        }
        Err(e) => error_body(StatusCode::BAD_REQUEST, e),
    }
}

async fn close_inquiry(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.inquiries.remove(id).await {
        Ok(_) => (StatusCode::OK, Json(json!({"status": "closed"}))),
        Err(e) => not_found(e),
    }
}
