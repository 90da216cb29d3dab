/// Resolved startup configuration.
///
/// The binary parses the command line; this module turns the raw values into
/// an [`AppConfig`], which is where a missing start path is detected.
use crate::error::{Result, TreeClipError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absolute, symlink-resolved scan root.
    pub root: PathBuf,
    /// Start with hidden files included.
    pub include_hidden: bool,
    pub log_level: Level,
}

impl AppConfig {
    /// Build the configuration. `path` defaults to the current directory.
    pub fn resolve(path: Option<&Path>, include_hidden: bool, debug: bool) -> Result<Self> {
        let raw = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::current_dir().map_err(|source| TreeClipError::Resolve {
                path: PathBuf::from("."),
                source,
            })?,
        };

        let root = resolve_root(&raw)?;
        Ok(Self {
            root,
            include_hidden,
            log_level: if debug { Level::DEBUG } else { Level::WARN },
        })
    }

    /// Folder name shown in the window title.
    pub fn root_label(&self) -> String {
        root_label(&self.root)
    }
}

/// Final path component of `root`, or the whole path when it has none.
pub fn root_label(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

/// Canonicalise `raw`, mapping "not found" to [`TreeClipError::PathNotFound`].
pub fn resolve_root(raw: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(raw).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TreeClipError::PathNotFound(
            std::path::absolute(raw).unwrap_or_else(|_| raw.to_path_buf()),
        ),
        _ => TreeClipError::Resolve {
            path: raw.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_directory_resolves() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::resolve(Some(tmp.path()), false, false).unwrap();
        assert!(cfg.root.is_absolute());
        assert_eq!(cfg.root, std::fs::canonicalize(tmp.path()).unwrap());
        assert_eq!(cfg.log_level, Level::WARN);
        assert!(!cfg.include_hidden);
    }

    #[test]
    fn missing_path_is_startup_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = AppConfig::resolve(Some(&missing), false, false).unwrap_err();
        assert!(matches!(err, TreeClipError::PathNotFound(_)));
        assert!(err.to_string().starts_with("The path "));
        assert!(err.to_string().ends_with("does not exist."));
    }

    #[test]
    fn debug_flag_raises_log_level() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::resolve(Some(tmp.path()), true, true).unwrap();
        assert_eq!(cfg.log_level, Level::DEBUG);
        assert!(cfg.include_hidden);
    }

    #[test]
    fn root_label_is_folder_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("project");
        std::fs::create_dir(&dir).unwrap();
        let cfg = AppConfig::resolve(Some(&dir), false, false).unwrap();
        assert_eq!(cfg.root_label(), "project");
    }
}
