use crate::AppState;
use crate::error::ErrorReport;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use std::any::Any;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Outermost stage. Any response carrying an `ErrorReport` is rewritten into
/// `{"error": {"status", "message", "stack"?}}`; `stack` is withheld in production.
pub async fn error_boundary(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;
    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    tracing::error!(
        method = %method,
        path = %uri,
        status = report.status.as_u16(),
        error = %report.stack,
        "Request failed"
    );

    let body = ErrorBody {
        error: ErrorDetail {
            status: report.status.as_u16(),
            message: report.message,
            stack: (!state.config.mode.is_production()).then_some(report.stack),
        },
    };

    // keep headers set by inner stages, but the body and its framing are replaced
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);

    let mut rebuilt = (report.status, Json(body)).into_response();
    rebuilt.headers_mut().extend(parts.headers);
    rebuilt
}

/// Panics inside handlers become unclassified 500s that the boundary reports like any other error.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };

    ErrorReport::internal(format!("handler panicked: {}", detail)).into_response()
}
