use serde::{Deserialize, Serialize};

use crate::models::{Module, ModulePath};

/// A loaded course: metadata plus the root of its module outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub root_module: Module,
}

impl Course {
    pub fn new(title: impl Into<String>, authors: Vec<String>, root_module: Module) -> Self {
        Self {
            title: title.into(),
            authors,
            root_module,
        }
    }

    /// The module addressed by `path`, or `None` when the path leaves the tree
    pub fn content_at(&self, path: &ModulePath) -> Option<&Module> {
        self.root_module.resolve(path)
    }

    /// Authors joined for display
    pub fn byline(&self) -> String {
        self.authors.join(", ")
    }
}
