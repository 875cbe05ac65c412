use chrono::{DateTime, NaiveDate};
use handlebars::{Handlebars, handlebars_helper};

// `eq` ships with handlebars itself, so only the custom helpers are registered here
handlebars_helper!(format_date: |date: str| format_german_date(date));
handlebars_helper!(json: |value: Json| serde_json::to_string_pretty(value).unwrap_or_default());
handlebars_helper!(capitalize: |text: str| capitalize_first(text));

pub fn register(registry: &mut Handlebars<'_>) {
    registry.register_helper("formatDate", Box::new(format_date));
    registry.register_helper("json", Box::new(json));
    registry.register_helper("capitalize", Box::new(capitalize));
}

/// `2026-10-07T12:00:00Z` -> `7.10.2026`. Unparseable input is echoed back.
pub fn format_german_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%-d.%-m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%-d.%-m.%Y").to_string();
    }
    raw.to_owned()
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
