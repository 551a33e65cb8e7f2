use serde::{Deserialize, Serialize};

use crate::models::{ContentBlock, ModulePath, Notebook};

/// How a module's raw content is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    /// Course markup, parsed into [`ContentBlock`]s.
    #[default]
    #[serde(rename = "markdown")]
    Prose,
    /// A serialized notebook document, passed through untouched.
    #[serde(rename = "jupyter")]
    Notebook,
}

/// A node of the course outline.
///
/// Branches and leaves share one shape: any module may carry displayable
/// content and children at the same time. Child order is both display and
/// navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub title: String,
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
    #[serde(rename = "content", default)]
    pub raw_content: String,
    #[serde(default)]
    pub children: Vec<Module>,
}

/// A module's content after routing by [`ContentType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleBody {
    Blocks(Vec<ContentBlock>),
    Notebook(Notebook),
    /// The notebook payload did not deserialize; carries the reason.
    Unparseable(String),
}

impl Module {
    pub fn new(title: impl Into<String>, content_type: ContentType, raw_content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_type,
            raw_content: raw_content.into(),
            children: Vec::new(),
        }
    }

    /// A module whose content is course markup
    pub fn markdown(title: impl Into<String>, raw_content: impl Into<String>) -> Self {
        Self::new(title, ContentType::Prose, raw_content)
    }

    /// A module whose content is a notebook payload
    pub fn notebook(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::new(title, ContentType::Notebook, payload)
    }

    pub fn with_children(mut self, children: Vec<Module>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up the module at `path` below this one
    pub fn resolve(&self, path: &ModulePath) -> Option<&Module> {
        crate::navigation::resolve(self, path)
    }

    /// Number of modules in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Module::count).sum::<usize>()
    }

    /// Route the raw content by its declared type.
    pub fn body(&self) -> ModuleBody {
        match self.content_type {
            ContentType::Prose => ModuleBody::Blocks(crate::parsing::parse_markup(&self.raw_content)),
            ContentType::Notebook => match Notebook::from_json(&self.raw_content) {
                Ok(notebook) => ModuleBody::Notebook(notebook),
                Err(e) => {
                    log::debug!("Notebook module '{}' failed to parse: {e}", self.title);
                    ModuleBody::Unparseable(e.to_string())
                }
            },
        }
    }
}
