use crate::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Datelike, Local};
use serde::Serialize;
use serde_json::Value;

/// Per-request bag of process-wide constants, read by handlers through `Extension`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestState {
    pub year: i32,
    pub app_name: String,
}

impl RequestState {
    /// Adds `year` and `appName` to a render context without overwriting keys it already has.
    pub fn merge_into(&self, mut data: Value) -> Value {
        if let Value::Object(fields) = &mut data {
            fields
                .entry("year")
                .or_insert_with(|| Value::from(self.year));
            fields
                .entry("appName")
                .or_insert_with(|| Value::from(self.app_name.clone()));
        }
        data
    }
}

pub async fn inject_state(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(RequestState {
        year: Local::now().year(),
        app_name: state.config.app_name.clone(),
    });

    next.run(request).await
}
