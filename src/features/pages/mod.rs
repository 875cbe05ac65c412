use crate::AppState;
use crate::error::AppError;
use crate::middleware::state::RequestState;
use axum::{Extension, Router, extract::State, response::Html, routing::get};
use serde_json::{Value, json};

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/middleware-demo", get(middleware_handler))
}

async fn index_handler(
    State(state): State<AppState>,
    Extension(request_state): Extension<RequestState>,
) -> Result<Html<String>, AppError> {
    let data = json!({
        "title": "Home",
        "active": "home",
        "features": [
            { "name": "Axum Middleware", "icon": "bi-layer-forward" },
            { "name": "Handlebars Templates", "icon": "bi-file-code" },
            { "name": "Bootstrap UI", "icon": "bi-bootstrap" },
            { "name": "jQuery Interactivity", "icon": "bi-lightning" },
        ],
    });
    render_page(&state, &request_state, "index", data).await
}

async fn about_handler(
    State(state): State<AppState>,
    Extension(request_state): Extension<RequestState>,
) -> Result<Html<String>, AppError> {
    let data = json!({ "title": "About", "active": "about" });
    render_page(&state, &request_state, "about", data).await
}

async fn middleware_handler(
    State(state): State<AppState>,
    Extension(request_state): Extension<RequestState>,
) -> Result<Html<String>, AppError> {
    let data = json!({ "title": "Middleware", "active": "middleware" });
    render_page(&state, &request_state, "middleware", data).await
}

pub async fn render_page(
    state: &AppState,
    request_state: &RequestState,
    page: &str,
    data: Value,
) -> Result<Html<String>, AppError> {
    let data = request_state.merge_into(data);
    let html = state.renderer.render(page, &data).await?;
    Ok(Html(html))
}
