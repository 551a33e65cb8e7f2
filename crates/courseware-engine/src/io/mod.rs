use crate::models::{ContentType, Course, Module};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional course metadata at the course root
pub const MANIFEST_FILE: &str = "course.json";
/// File stem holding a directory module's own content
const INDEX_STEM: &str = "index";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid course directory: {0}")]
    InvalidCourseDir(String),
    #[error("Invalid course manifest at {path}: {source}")]
    InvalidManifest {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
}

/// Read a text file from disk
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Build a course from a directory tree.
///
/// Every directory is a module whose own content comes from `index.md` or
/// `index.ipynb`. Its children are its sub-directories and its other `.md`
/// and `.ipynb` files, in file name order.
pub fn load_course(course_root: &Path) -> Result<Course, IoError> {
    validate_course_dir(course_root)?;

    let manifest = read_manifest(course_root)?;
    let dir_title = course_root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "Course".to_string());
    let title = manifest.title.unwrap_or_else(|| dir_title.clone());

    let root_module = load_directory_module(course_root, title.clone())?;
    log::debug!(
        "Loaded course '{}' with {} modules from {}",
        title,
        root_module.count(),
        course_root.display()
    );

    Ok(Course::new(title, manifest.authors, root_module))
}

pub fn validate_course_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidCourseDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

fn read_manifest(course_root: &Path) -> Result<Manifest, IoError> {
    let path = course_root.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(Manifest::default());
    }
    let content = read_file(&path)?;
    serde_json::from_str(&content).map_err(|source| IoError::InvalidManifest { path, source })
}

fn load_directory_module(dir: &Path, title: String) -> Result<Module, IoError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let file_type = entry.file_type().map_err(IoError::Io)?;
        entries.push((entry.path(), file_type));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut module = Module::new(title, ContentType::Prose, "");
    let mut index_path: Option<PathBuf> = None;
    for (path, file_type) in entries {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        if name.starts_with('.') || name == MANIFEST_FILE {
            continue;
        }

        // Linked directories could point back up the tree
        if file_type.is_symlink() && path.is_dir() {
            log::warn!("Skipping symlinked directory {}", path.display());
            continue;
        }

        if file_type.is_dir() {
            let child = load_directory_module(&path, display_title(&name))?;
            module.children.push(child);
            continue;
        }

        let Some(content_type) = content_type_for(&path) else {
            log::warn!("Skipping unsupported course file {}", path.display());
            continue;
        };
        let content = read_file(&path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        if stem == INDEX_STEM {
            if let Some(previous) = &index_path {
                log::warn!(
                    "Both {} and {} hold content for {}; using {}",
                    previous.display(),
                    path.display(),
                    dir.display(),
                    path.display()
                );
            }
            module.content_type = content_type;
            module.raw_content = content;
            index_path = Some(path);
        } else {
            module
                .children
                .push(Module::new(display_title(&stem), content_type, content));
        }
    }

    Ok(module)
}

fn content_type_for(path: &Path) -> Option<ContentType> {
    match path.extension()?.to_str()? {
        "md" => Some(ContentType::Prose),
        "ipynb" => Some(ContentType::Notebook),
        _ => None,
    }
}

/// Module title from a file or directory name: a leading ordering prefix
/// such as `01-`, `2_` or `3 ` is dropped.
pub fn display_title(name: &str) -> String {
    let digits = name.len() - name.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0
        && let Some(rest) = name[digits..].strip_prefix(['-', '_', ' '])
        && !rest.is_empty()
    {
        return rest.to_string();
    }
    name.to_string()
}
