//! Shared test helpers.

use crate::models::{Module, ModulePath};
use std::path::PathBuf;
use tempfile::TempDir;

/// Three-level outline used across navigation tests:
///
/// ```text
/// Course
/// ├─ 1
/// │  ├─ 1.1
/// │  └─ 1.2
/// │     └─ 1.2.1
/// └─ 2
/// ```
pub fn sample_course_tree() -> Module {
    Module::markdown("Course", "Welcome").with_children(vec![
        Module::markdown("1", "").with_children(vec![
            Module::markdown("1.1", "First lesson"),
            Module::markdown("1.2", "").with_children(vec![Module::markdown("1.2.1", "Deep")]),
        ]),
        Module::markdown("2", "Last lesson"),
    ])
}

/// Pre-order paths of [`sample_course_tree`]
pub fn sample_preorder() -> Vec<ModulePath> {
    vec![
        ModulePath::root(),
        ModulePath::from([0]),
        ModulePath::from([0, 0]),
        ModulePath::from([0, 1]),
        ModulePath::from([0, 1, 0]),
        ModulePath::from([1]),
    ]
}

pub fn create_test_course_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write `content` to `relative` inside `dir`, creating parent directories
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
