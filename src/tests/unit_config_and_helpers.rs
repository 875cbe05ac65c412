use crate::config::{RuntimeMode, parse_flag};
use crate::error::{AppError, ErrorReport};
use crate::features::api::model::find_user;
use crate::features::api::parse_vm_rss_kb;
use crate::io::partial_name;
use crate::middleware::state::RequestState;
use crate::services::render::RenderError;
use crate::services::render::helpers::{capitalize_first, format_german_date};
use axum::http::StatusCode;
use serde_json::json;
use std::path::{Path, PathBuf};

#[test]
fn test_runtime_mode_parsing() {
    assert_eq!(RuntimeMode::parse("production").unwrap(), RuntimeMode::Production);
    assert_eq!(RuntimeMode::parse(" PROD ").unwrap(), RuntimeMode::Production);
    assert_eq!(RuntimeMode::parse("development").unwrap(), RuntimeMode::Development);
    assert_eq!(RuntimeMode::parse("test").unwrap(), RuntimeMode::Test);
    assert!(RuntimeMode::parse("staging").is_err());

    assert!(RuntimeMode::Production.is_production());
    assert!(!RuntimeMode::Development.is_production());
    assert_eq!(RuntimeMode::Development.to_string(), "development");
}

#[test]
fn test_flag_parsing() {
    for raw in ["true", "1", "yes", "ON"] {
        assert!(parse_flag(raw).unwrap(), "{raw}");
    }
    for raw in ["false", "0", "no", "off"] {
        assert!(!parse_flag(raw).unwrap(), "{raw}");
    }
    assert!(parse_flag("maybe").is_err());
    assert!(parse_flag("").is_err());
}

#[test]
fn test_german_dates() {
    assert_eq!(format_german_date("2026-10-07T12:00:00Z"), "7.10.2026");
    assert_eq!(format_german_date("2024-01-31"), "31.1.2024");
    assert_eq!(format_german_date("someday"), "someday");
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize_first("alice"), "Alice");
    assert_eq!(capitalize_first("über"), "Über");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn test_partial_names() {
    assert_eq!(partial_name(Path::new("/views/partials/nav.hbs")), Some("nav".to_owned()));
    assert_eq!(partial_name(Path::new("/views/partials/nav.html")), None);
    assert_eq!(partial_name(Path::new("/views/partials/.swap.hbs")), None);
}

#[test]
fn test_find_user() {
    assert_eq!(find_user("2").map(|u| u.name), Some("Bob"));
    assert!(find_user("4").is_none());
    assert!(find_user("-1").is_none());
    assert!(find_user("two").is_none());
}

#[test]
fn test_vm_rss_parsing() {
    let status = "Name:\tcascade\nVmPeak:\t  900 kB\nVmRSS:\t   20480 kB\nThreads:\t4\n";
    assert_eq!(parse_vm_rss_kb(status), Some(20480));
    assert_eq!(parse_vm_rss_kb("Name:\tcascade\n"), None);
}

#[test]
fn test_render_errors_map_to_statuses() {
    let missing = AppError::from(RenderError::NotFound {
        path: PathBuf::from("/views/pages/x.hbs"),
    });
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let io = AppError::from(RenderError::Io {
        path: PathBuf::from("/views/pages/x.hbs"),
        source: std::io::Error::other("disk on fire"),
    });
    assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let report = ErrorReport::from(&io);
    assert!(report.stack.contains("disk on fire"));
}

#[test]
fn test_request_state_does_not_override_page_data() {
    let state = RequestState {
        year: 2026,
        app_name: "Demo".into(),
    };

    let merged = state.merge_into(json!({ "title": "Home", "appName": "Custom" }));

    assert_eq!(merged["year"], 2026);
    assert_eq!(merged["appName"], "Custom");
    assert_eq!(merged["title"], "Home");
}
