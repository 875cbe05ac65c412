use crate::io::{TEMPLATE_EXTENSION, TemplateSource, partial_name};
use crate::services::render::RenderError;
use crate::services::render::template_cache::{CompiledPage, PartialCache, TemplateCache};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Renders `<views>/pages/<name>.hbs` inside `<views>/layouts/main.hbs`.
///
/// Compiled pages are kept by name. With caching off every call goes back to the
/// source, so edits on disk show up on the next request.
pub struct TemplateRenderer {
    source: Box<dyn TemplateSource>,
    views_dir: PathBuf,
    caching: bool,
    templates: RwLock<TemplateCache>,
    partials: RwLock<PartialCache>,
}

impl TemplateRenderer {
    pub fn new(source: Box<dyn TemplateSource>, views_dir: impl Into<PathBuf>, caching: bool) -> Self {
        Self {
            source,
            views_dir: views_dir.into(),
            caching,
            templates: RwLock::new(TemplateCache::new()),
            partials: RwLock::new(PartialCache::new()),
        }
    }

    pub fn caching(&self) -> bool {
        self.caching
    }

    /// Reads every partial once. Later calls return the cached count without touching the source.
    pub async fn load_partials(&self) -> usize {
        {
            let partials = self.partials.read().await;
            if !partials.is_empty() {
                return partials.len();
            }
        }

        let dir = self.views_dir.join("partials");
        let files = match self.source.list_partials(&dir).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Partials could not be loaded");
                return 0;
            }
        };

        let mut loaded = PartialCache::new();
        for path in files {
            let Some(name) = partial_name(&path) else {
                continue;
            };
            match self.source.read_to_string(&path).await {
                Ok(source) => {
                    loaded.sources_by_name.insert(name, source);
                }
                Err(e) => {
                    tracing::warn!(partial = %path.display(), error = %e, "Skipping unreadable partial");
                }
            }
        }

        // a concurrent fill may have landed first; both read the same files so merging is harmless
        let mut partials = self.partials.write().await;
        partials.sources_by_name.extend(loaded.sources_by_name);
        tracing::debug!(count = partials.len(), "Partials loaded");
        partials.len()
    }

    pub async fn render(&self, page: &str, data: &Value) -> Result<String, RenderError> {
        self.load_partials().await;

        if self.caching {
            let cached = self.templates.read().await.get(page);
            if let Some(compiled) = cached {
                return compiled.render(data);
            }
        }

        let compiled = Arc::new(self.compile(page).await?);
        self.templates
            .write()
            .await
            .pages_by_name
            .insert(page.to_owned(), compiled.clone());

        compiled.render(data)
    }

    async fn compile(&self, page: &str) -> Result<CompiledPage, RenderError> {
        let page_path = self.page_path(page)?;
        let layout_path = self
            .views_dir
            .join("layouts")
            .join(format!("main.{}", TEMPLATE_EXTENSION));

        let (layout_source, page_source) =
            tokio::try_join!(self.read(&layout_path), self.read(&page_path))?;

        tracing::debug!(page, "Compiling template");
        let partials = self.partials.read().await;
        CompiledPage::compile(page, &page_source, &layout_source, &partials)
    }

    fn page_path(&self, page: &str) -> Result<PathBuf, RenderError> {
        let path = self
            .views_dir
            .join("pages")
            .join(format!("{}.{}", page, TEMPLATE_EXTENSION));

        // page names are bare file stems; anything that could climb out of pages/ is treated as absent
        if page.is_empty() || page.contains(['/', '\\']) || page.contains("..") {
            return Err(RenderError::NotFound { path });
        }
        Ok(path)
    }

    async fn read(&self, path: &Path) -> Result<String, RenderError> {
        self.source.read_to_string(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                RenderError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RenderError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }
}
