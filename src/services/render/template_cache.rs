use crate::services::render::RenderError;
use crate::services::render::helpers;
use handlebars::Handlebars;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

// registry names hold a '/', so no partial file stem can shadow them
const LAYOUT: &str = "layouts/main";

/// A page and the shared layout compiled together, ready to render.
pub struct CompiledPage {
    name: String,
    page_key: String,
    registry: Handlebars<'static>,
}

impl CompiledPage {
    pub fn compile(
        name: &str,
        page_source: &str,
        layout_source: &str,
        partials: &PartialCache,
    ) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        helpers::register(&mut registry);

        for (partial, source) in &partials.sources_by_name {
            registry
                .register_partial(partial, source)
                .map_err(|e| RenderError::syntax(format!("partials/{}", partial), e))?;
        }

        let page_key = format!("pages/{}", name);
        registry
            .register_template_string(&page_key, page_source)
            .map_err(|e| RenderError::syntax(page_key.clone(), e))?;
        registry
            .register_template_string(LAYOUT, layout_source)
            .map_err(|e| RenderError::syntax(LAYOUT, e))?;

        Ok(Self {
            name: name.to_owned(),
            page_key,
            registry,
        })
    }

    /// Renders the page first, then hands the result to the layout as `body`.
    pub fn render(&self, data: &Value) -> Result<String, RenderError> {
        let body = self
            .registry
            .render(&self.page_key, data)
            .map_err(|e| RenderError::render(&self.name, e))?;

        let mut layout_data = match data {
            Value::Object(fields) => fields.clone(),
            _ => Map::new(),
        };
        layout_data.insert("body".to_owned(), Value::String(body));

        self.registry
            .render(LAYOUT, &layout_data)
            .map_err(|e| RenderError::render(&self.name, e))
    }
}

// compiled pages by page name, only consulted when caching is on
pub struct TemplateCache {
    pub pages_by_name: HashMap<String, Arc<CompiledPage>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self {
            pages_by_name: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<CompiledPage>> {
        self.pages_by_name.get(name).cloned()
    }
}

// raw partial sources by partial name, filled once
pub struct PartialCache {
    pub sources_by_name: HashMap<String, String>,
}

impl PartialCache {
    pub fn new() -> Self {
        Self {
            sources_by_name: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources_by_name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources_by_name.len()
    }
}
