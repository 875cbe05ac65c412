use crate::io::{TemplateSource, partial_name};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads templates straight from disk.
pub struct LocalTemplateSource;

#[async_trait]
impl TemplateSource for LocalTemplateSource {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn list_partials(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        // walkdir only reports a missing root once iteration starts, so check up front
        if !tokio::fs::metadata(dir).await?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", dir.display()),
            ));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && partial_name(entry.path()).is_some() {
                entries.push(entry.into_path());
            }
        }
        entries.sort();
        Ok(entries)
    }
}
