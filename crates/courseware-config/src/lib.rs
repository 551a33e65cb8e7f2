use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Viewer settings, kept at [`Config::config_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Course opened when none is given on the command line
    pub course_path: PathBuf,
}

impl Config {
    pub fn new(course_path: impl Into<PathBuf>) -> Self {
        Self {
            course_path: course_path.into(),
        }
    }

    /// `Ok(None)` when there is no file yet.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(expanded) = expand_path(&config.course_path) {
            config.course_path = expanded;
        }
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_error)
    }

    /// Write this config to `path` unless a file is already there.
    /// Returns whether it was written.
    pub fn save_if_missing<P: AsRef<Path>>(&self, path: P) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }
        self.save_to_path(path)?;
        Ok(true)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/courseware");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// `~` and `$VAR` expansion; `None` when a variable is undefined.
fn expand_path(path: &Path) -> Option<PathBuf> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .ok()
        .map(|expanded| PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/courseware/config.toml"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = expand_path(Path::new("~/courses/ml")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("courses/ml"));
    }

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        let absolute = PathBuf::from("/srv/courses");
        assert_eq!(expand_path(&absolute).unwrap(), absolute);

        let relative = PathBuf::from("courses/intro");
        assert_eq!(expand_path(&relative).unwrap(), relative);
    }

    #[test]
    fn test_expand_path_with_undefined_var_fails() {
        let path = PathBuf::from("$COURSEWARE_SURELY_UNDEFINED_VAR/x");
        assert!(expand_path(&path).is_none());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let config = Config::new("/tmp/test-course");

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_if_missing_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        assert!(Config::new("/first").save_if_missing(&config_file).unwrap());
        assert!(!Config::new("/second").save_if_missing(&config_file).unwrap());

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.course_path, PathBuf::from("/first"));
    }

    #[test]
    fn test_save_reports_write_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = Config::new("/x")
            .save_to_path(blocker.join("config.toml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Write { .. }));
        assert!(err.to_string().contains("not-a-dir"));
    }

    #[test]
    fn test_load_expands_env_var() {
        unsafe {
            env::set_var("COURSEWARE_TEST_ROOT", "/custom/courses");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "course_path = \"$COURSEWARE_TEST_ROOT/ml\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.course_path, PathBuf::from("/custom/courses/ml"));

        unsafe {
            env::remove_var("COURSEWARE_TEST_ROOT");
        }
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "course_path = [not toml").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
