pub mod helpers;
pub mod renderer;
pub mod template_cache;

use std::path::PathBuf;
use thiserror::Error;

pub use renderer::TemplateRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The page, layout or a template it depends on is not on disk.
    #[error("Template not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Template syntax error in {name}")]
    Syntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render template {name}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    #[error("Failed to read template {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub(crate) fn syntax(name: impl Into<String>, source: handlebars::TemplateError) -> Self {
        Self::Syntax {
            name: name.into(),
            source: Box::new(source),
        }
    }

    pub(crate) fn render(name: &str, source: handlebars::RenderError) -> Self {
        Self::Render {
            name: name.to_owned(),
            source: Box::new(source),
        }
    }
}
