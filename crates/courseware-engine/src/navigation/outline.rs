use std::collections::HashSet;

use crate::models::{Module, ModulePath};

/// One visible row of the outline sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineItem {
    pub path: ModulePath,
    pub title: String,
    pub depth: usize,
    pub has_children: bool,
    pub is_expanded: bool,
    pub is_highlighted: bool,
}

/// Expansion state for displaying a course outline.
///
/// The module tree itself is read-only, so which branches are open is kept
/// here, keyed by module path.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    expanded: HashSet<ModulePath>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &ModulePath) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: &ModulePath) {
        self.expanded.insert(path.clone());
    }

    pub fn collapse(&mut self, path: &ModulePath) {
        self.expanded.remove(path);
    }

    /// Flip a branch open or closed. Returns the new state.
    pub fn toggle(&mut self, path: &ModulePath) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.clone());
            true
        }
    }

    /// Open every branch containing `path` so it is visible.
    pub fn reveal(&mut self, path: &ModulePath) {
        self.expanded.extend(path.ancestors());
    }

    /// Visible rows in pre-order. The root is always listed.
    pub fn items(&self, root: &Module, highlight: Option<&ModulePath>) -> Vec<OutlineItem> {
        let mut items = Vec::new();
        self.collect(root, ModulePath::root(), highlight, &mut items);
        items
    }

    fn collect(
        &self,
        module: &Module,
        path: ModulePath,
        highlight: Option<&ModulePath>,
        items: &mut Vec<OutlineItem>,
    ) {
        let is_expanded = self.is_expanded(&path);
        items.push(OutlineItem {
            title: module.title.clone(),
            depth: path.depth(),
            has_children: !module.is_leaf(),
            is_expanded,
            is_highlighted: highlight == Some(&path),
            path: path.clone(),
        });

        if is_expanded {
            for (index, child) in module.children.iter().enumerate() {
                self.collect(child, path.child(index), highlight, items);
            }
        }
    }
}
