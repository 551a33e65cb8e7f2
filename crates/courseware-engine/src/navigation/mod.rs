//! # Module Tree Navigation
//!
//! Path resolution and Next/Previous stepping over the course outline.
//!
//! Modules are visited in pre-order: a module, then each of its children
//! left to right, recursively. Branches take part like any other module, so
//! stepping from a branch with children goes to its first child.

pub mod outline;

use crate::models::{Module, ModulePath};

/// Which way to step through the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Walk `path` down from `root`; `None` if any step is out of range.
pub fn resolve<'a>(root: &'a Module, path: &ModulePath) -> Option<&'a Module> {
    path.indices()
        .iter()
        .try_fold(root, |module, &index| module.children.get(index))
}

/// Path of the module after `current` in pre-order.
///
/// `None` at the last module, or when `current` does not address a module.
pub fn next(root: &Module, current: &ModulePath) -> Option<ModulePath> {
    let module = resolve(root, current)?;
    if !module.children.is_empty() {
        return Some(current.child(0));
    }

    // Climb until some ancestor has a following sibling
    let mut path = current.clone();
    while let (Some(index), Some(parent)) = (path.last(), path.parent()) {
        let siblings = resolve(root, &parent).map_or(0, |p| p.children.len());
        if index + 1 < siblings {
            return Some(parent.child(index + 1));
        }
        path = parent;
    }
    None
}

/// Path of the module before `current` in pre-order.
///
/// `None` at the root, or when `current` does not address a module.
pub fn previous(root: &Module, current: &ModulePath) -> Option<ModulePath> {
    resolve(root, current)?;
    let index = current.last()?;
    let parent = current.parent()?;
    if index == 0 {
        return Some(parent);
    }

    // Deepest last descendant of the preceding sibling
    let mut path = parent.child(index - 1);
    let mut module = resolve(root, &path)?;
    while let Some(last) = module.children.len().checked_sub(1) {
        path = path.child(last);
        module = &module.children[last];
    }
    Some(path)
}

/// Step in `direction`, staying on `current` at either end of the outline.
pub fn navigate(root: &Module, current: &ModulePath, direction: Direction) -> ModulePath {
    let stepped = match direction {
        Direction::Next => next(root, current),
        Direction::Previous => previous(root, current),
    };
    stepped.unwrap_or_else(|| current.clone())
}
