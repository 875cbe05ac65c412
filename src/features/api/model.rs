use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
}

pub static USERS: [User; 3] = [
    User { id: 1, name: "Alice", role: "admin" },
    User { id: 2, name: "Bob", role: "user" },
    User { id: 3, name: "Charlie", role: "user" },
];

pub fn find_user(id: &str) -> Option<&'static User> {
    let id = id.parse::<u32>().ok()?;
    USERS.iter().find(|u| u.id == id)
}

#[derive(Deserialize, Default)]
pub struct NewUser {
    pub name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub id: u32,
    pub name: Option<String>,
    pub role: &'static str,
    pub created_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: u64,
    pub memory: Option<u64>,
    pub framework: &'static str,
    pub template_engine: &'static str,
    pub offline: bool,
    pub framework_features: [&'static str; 4],
}

#[derive(Serialize)]
pub struct StackItem {
    pub name: &'static str,
    pub version: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

pub static STACK: [StackItem; 6] = [
    StackItem { name: "Rust", version: "2021 edition", desc: "Systems Language", icon: "bi-diagram-3" },
    StackItem { name: "Tokio", version: "v1.48", desc: "Async Runtime", icon: "bi-cpu" },
    StackItem { name: "Axum", version: "v0.8", desc: "Web Framework", icon: "bi-lightning" },
    StackItem { name: "Handlebars", version: "v6.3", desc: "Template Engine", icon: "bi-file-code" },
    StackItem { name: "Bootstrap", version: "v5.3.3", desc: "CSS Framework", icon: "bi-bootstrap" },
    StackItem { name: "jQuery", version: "v3.7.1", desc: "JS Library", icon: "bi-gear" },
];
