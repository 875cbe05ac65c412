pub mod model;

use crate::AppState;
use crate::error::AppError;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use model::{CreatedUser, NewUser, STACK, StackItem, StatusReport, USERS, User};
use rand::Rng;
use serde_json::{Value, json};

pub const FRAMEWORK: &str = "Axum v0.8";
pub const TEMPLATE_ENGINE: &str = "Handlebars v6.3";

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status_handler))
        .route("/features", get(features_handler))
        .route("/stack", get(stack_handler))
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/users/{id}", get(get_user_handler))
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        status: "ok",
        timestamp: now_iso(),
        uptime: state.started_at.elapsed().as_secs(),
        memory: resident_memory_mb().await,
        framework: FRAMEWORK,
        template_engine: TEMPLATE_ENGINE,
        offline: true,
        framework_features: [
            "Async/Await Handlers",
            "Cascading Middleware",
            "Typed Extractors",
            "Error Handling",
        ],
    })
}

async fn features_handler() -> Json<Value> {
    Json(json!({
        "axum": [
            "Async/Await Support",
            "Cascading Middleware",
            "Request Extensions",
            "Error Handling",
        ],
        "handlebars": [
            "Logic-less Templates",
            "Partials & Layouts",
            "Custom Helpers",
            "Template Caching",
        ],
        "jquery": [
            "DOM Manipulation",
            "Event Handling",
            "AJAX Support",
            "Animations",
        ],
    }))
}

async fn stack_handler() -> Json<&'static [StackItem]> {
    Json(&STACK)
}

async fn list_users_handler() -> Json<&'static [User]> {
    Json(&USERS)
}

// an id that cannot even be decoded names no user either
async fn get_user_handler(
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, AppError> {
    id.ok()
        .and_then(|Path(id)| model::find_user(&id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_owned()))
}

// the body is optional; a missing or malformed one still creates a user
async fn create_user_handler(body: Bytes) -> (StatusCode, Json<CreatedUser>) {
    let new_user = serde_json::from_slice::<NewUser>(&body).unwrap_or_default();
    let id = rand::rng().random_range(0..1000);

    tracing::debug!(id, name = ?new_user.name, "Simulated user creation");

    (
        StatusCode::CREATED,
        Json(CreatedUser {
            id,
            name: new_user.name,
            role: "user",
            created_at: now_iso(),
        }),
    )
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resident set size in MB, read from procfs. `None` where procfs is unavailable.
async fn resident_memory_mb() -> Option<u64> {
    let status = tokio::fs::read_to_string("/proc/self/status").await.ok()?;
    parse_vm_rss_kb(&status).map(|kb| kb / 1024)
}

pub fn parse_vm_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}
