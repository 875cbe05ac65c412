use crate::AppState;
use crate::error::{AppError, ErrorReport};
use crate::middleware::state::RequestState;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

/// Router fallback for paths nothing matched. The status is all `not_found_fallback` needs.
pub async fn unmatched_route() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub async fn not_found_fallback(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let request_state = request.extensions().get::<RequestState>().cloned();

    let response = next.run(request).await;

    // a handler that signaled NotFound keeps its error; only unmatched routes get the page
    if response.status() != StatusCode::NOT_FOUND
        || response.extensions().get::<ErrorReport>().is_some()
    {
        return response;
    }

    let mut data = json!({
        "title": "404",
        "path": path,
    });
    if let Some(request_state) = &request_state {
        data = request_state.merge_into(data);
    }

    match state.renderer.render("404", &data).await {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}
