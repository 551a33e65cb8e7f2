pub mod content_block;
pub mod course;
pub mod module;
pub mod module_path;
pub mod notebook;

pub use content_block::{Answer, ContentBlock, QuestionKind};
pub use course::Course;
pub use module::{ContentType, Module, ModuleBody};
pub use module_path::{ModulePath, PathParseError};
pub use notebook::{CellType, Notebook, NotebookCell, NotebookError};
