//! Minimal view of a notebook (`.ipynb`) document.
//!
//! Only what the viewer shows is modelled: the cells, their type and their
//! source text. Everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("Invalid notebook payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<NotebookCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbformat: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookCell {
    pub cell_type: CellType,
    #[serde(default)]
    pub source: CellSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
    Raw,
    #[serde(other)]
    Other,
}

/// Cell source as stored on disk: one string, or a list of lines that
/// already carry their own line endings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl Notebook {
    pub fn from_json(payload: &str) -> Result<Self, NotebookError> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl NotebookCell {
    pub fn source_text(&self) -> String {
        match &self.source {
            CellSource::Text(text) => text.clone(),
            CellSource::Lines(lines) => lines.concat(),
        }
    }
}
