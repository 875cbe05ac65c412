use crate::AppState;
use crate::config::parse_flag;
use crate::error::AppError;
use crate::features::api::FRAMEWORK;
use crate::middleware::state::RequestState;
use axum::{
    Extension, Json, Router,
    extract::{ConnectInfo, Query, Request, State, rejection::QueryRejection},
    http::{HeaderName, HeaderValue, header},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;

pub fn demo_router() -> Router<AppState> {
    Router::new()
        .route("/framework-demo", get(framework_demo_handler))
        .route("/context-demo", get(context_demo_handler))
        .route("/error-demo", get(error_demo_handler))
}

async fn framework_demo_handler() -> Json<Value> {
    Json(json!({
        "framework": FRAMEWORK,
        "features": [
            "Async/Await Middleware",
            "Cascading Layers",
            "Typed Extractors",
            "Lightweight Core",
        ],
        "middleware": [
            "Request - method, uri, headers, extensions",
            "Response - status, headers, body",
            "Extensions - namespace for passing data",
            "IntoResponse errors - status-carrying failures",
        ],
    }))
}

/// Mirrors what a handler can see about the request, its response and the shared state.
async fn context_demo_handler(
    State(state): State<AppState>,
    Extension(request_state): Extension<RequestState>,
    request: Request,
) -> impl IntoResponse {
    let uri = request.uri();
    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned());
    let querystring = uri.query().unwrap_or_default().to_owned();
    let search = if querystring.is_empty() {
        String::new()
    } else {
        format!("?{}", querystring)
    };
    let query = Query::<HashMap<String, String>>::try_from_uri(uri)
        .map(|Query(q)| q)
        .unwrap_or_default();

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let hostname = host.split(':').next().unwrap_or_default().to_owned();
    let origin = format!("http://{}", host);

    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let headers: Map<String, Value> = request
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_owned(),
                Value::from(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    let body = json!({
        "request": {
            "method": request.method().as_str(),
            "url": url,
            "origin": origin,
            "href": format!("{}{}", origin, url),
            "path": uri.path(),
            "query": query,
            "querystring": querystring,
            "search": search,
            "host": host,
            "hostname": hostname,
            "idempotent": request.method().is_idempotent(),
            "socket": {
                "remoteAddress": remote.map(|addr| addr.ip().to_string()),
                "remotePort": remote.map(|addr| addr.port()),
            },
            "headers": headers,
        },
        "response": {
            "status": 200,
            "message": "OK",
            "type": "application/json",
        },
        "state": request_state,
        "app": {
            "env": state.config.mode,
            "name": state.config.app_name,
            "templateCache": state.renderer.caching(),
        },
    });

    (
        [(
            HeaderName::from_static("x-demo-context"),
            HeaderValue::from_static("Context Feature Demo"),
        )],
        Json(body),
    )
}

async fn error_demo_handler(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    // an empty value counts as absent; anything else except an explicit false triggers
    let throw = query.get("throw").filter(|raw| !raw.is_empty());
    if throw.is_some_and(|raw| !matches!(parse_flag(raw), Ok(false))) {
        return Err(AppError::BadRequest("This is a demo error".to_owned()));
    }

    Ok(Json(json!({
        "message": "Visit /error-demo?throw=true to see error handling",
        "features": [
            "AppError with status and message",
            "Automatic error propagation with ?",
            "Central error boundary",
        ],
    })))
}
