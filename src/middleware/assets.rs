use crate::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;
use std::path::Path;
use tower::ServiceExt;
use tower_http::compression::Compression;
use tower_http::services::ServeDir;

pub type StaticFiles = Compression<ServeDir>;

/// Files under `dir`, gzip-compressed on the fly (or served from a sibling `.gz` when present).
pub fn static_files(dir: &Path) -> StaticFiles {
    Compression::new(
        ServeDir::new(dir)
            .precompressed_gzip()
            .append_index_html_on_directories(false),
    )
}

// serves a matching file and stops there; anything else continues down the pipeline
pub async fn serve_static(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if !matches!(*request.method(), Method::GET | Method::HEAD) {
        return next.run(request).await;
    }

    // ServeDir consumes its request, so probe with a body-less copy and keep the original for `next`
    let mut probe = Request::new(Body::empty());
    *probe.method_mut() = request.method().clone();
    *probe.uri_mut() = request.uri().clone();
    *probe.headers_mut() = request.headers().clone();

    let response = match state.static_files.clone().oneshot(probe).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        return next.run(request).await;
    }

    let mut response = response.map(Body::new);
    if response.status().is_success() || response.status() == StatusCode::NOT_MODIFIED {
        let cache_control = format!("public, max-age={}", state.config.static_max_age_secs);
        if let Ok(value) = HeaderValue::from_str(&cache_control) {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
    }

    tracing::trace!(path = %request.uri().path(), status = response.status().as_u16(), "Served static file");
    response
}
