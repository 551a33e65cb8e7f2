use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address of a module in the course outline.
///
/// Each index selects a child at that depth; the empty path is the root.
/// Whether a path is valid depends on the tree it is applied to, see
/// [`crate::navigation::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(Vec<usize>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid module path segment '{segment}' in '{input}'")]
pub struct PathParseError {
    pub input: String,
    pub segment: String,
}

impl ModulePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`-th child of this module
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the containing module, `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Index of this module within its parent, `None` for the root
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// True if `prefix` addresses this module or one of its ancestors
    pub fn starts_with(&self, prefix: &ModulePath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Every proper ancestor, root first.
    pub fn ancestors(&self) -> impl Iterator<Item = ModulePath> + '_ {
        (0..self.0.len()).map(|len| Self(self.0[..len].to_vec()))
    }
}

impl From<Vec<usize>> for ModulePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for ModulePath {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for ModulePath {
    fn from(indices: [usize; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl FromStr for ModulePath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::root());
        }

        trimmed
            .split('.')
            .map(|segment| {
                segment.parse::<usize>().map_err(|_| PathParseError {
                    input: s.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
