use anyhow::{Context, Result, bail};
use derive_more::derive::Display;
use serde::Serialize;
use std::path::PathBuf;

/// Deployment flavour. Production caches compiled templates and hides error details.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[display("production")]
    Production,
    #[display("development")]
    Development,
    #[display("test")]
    Test,
}

impl RuntimeMode {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            other => bail!("unknown runtime mode '{}'", other),
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub mode: RuntimeMode,
    pub bind_address: String,
    pub views_dir: PathBuf,
    pub public_dir: PathBuf,
    pub static_max_age_secs: u64,
    pub app_name: String,
    pub template_cache: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mode = RuntimeMode::parse(&env_or("APP_ENV", "development"))
            .context("Failed to determine APP_ENV")?;

        let host = env_or("HOST", "0.0.0.0");
        let port = env_or("PORT", "8080")
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let views_dir = PathBuf::from(env_or("VIEWS_DIR", "./views"));
        let public_dir = PathBuf::from(env_or("PUBLIC_DIR", "./public"));

        let static_max_age_secs = env_or("STATIC_MAX_AGE_SECS", "86400")
            .parse::<u64>()
            .context("STATIC_MAX_AGE_SECS must be a whole number of seconds")?;

        let app_name = env_or("APP_NAME", "Axum + Handlebars");

        // caching follows the runtime mode unless explicitly overridden
        let template_cache = match std::env::var("TEMPLATE_CACHE") {
            Ok(raw) => parse_flag(&raw).context("TEMPLATE_CACHE must be true or false")?,
            Err(_) => mode.is_production(),
        };

        Ok(Self {
            mode,
            bind_address: format!("{}:{}", host, port),
            views_dir,
            public_dir,
            static_max_age_secs,
            app_name,
            template_cache,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{}' is not a boolean", other),
    }
}
