use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

pub mod local;

/// Where template text comes from. The renderer never touches the file system directly.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Missing files must surface as `io::ErrorKind::NotFound`.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
    async fn list_partials(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

pub const TEMPLATE_EXTENSION: &str = "hbs";

// partial names come from the file stem of `<dir>/<name>.hbs`
pub fn partial_name(path: &Path) -> Option<String> {
    if path.extension().and_then(|s| s.to_str()) != Some(TEMPLATE_EXTENSION) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && !s.starts_with('.'))
        .map(str::to_owned)
}
