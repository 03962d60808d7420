//! OS directory resolution for configuration, exports and logs.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during platform operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// An I/O error occurred (e.g., directory creation failed).
    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// OS-specific directory paths for the application.
///
/// Follows OS conventions (XDG on Linux, Known Folders on Windows, Library on
/// macOS).
#[derive(Debug, Clone)]
pub struct PlatformDirs {
    /// `config.ron` and custom body tables.
    pub config_dir: PathBuf,
    /// Default ephemerides export location.
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

pub const APP_NAME: &str = "tychos";

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        let app_config = config_base.join(APP_NAME);

        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| app_config.clone())
            .join(APP_NAME);

        Ok(Self {
            config_dir: app_config.join("config"),
            data_dir: data_dir.join("exports"),
            log_dir: app_config.join("logs"),
        })
    }

    /// Directories rooted under `root`, used when `--config` is given.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.join("exports"),
            log_dir: root.join("logs"),
        }
    }

    /// Resolve under `root` when given, otherwise from the OS, and create
    /// every directory.
    pub fn resolve_and_create(root: Option<&Path>) -> Result<Self, PlatformError> {
        let dirs = match root {
            Some(root) => Self::resolve_with_root(root),
            None => Self::resolve()?,
        };
        dirs.create_dirs()?;
        Ok(dirs)
    }

    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_dirs_resolve() {
        let Ok(dirs) = PlatformDirs::resolve() else {
            // Headless environments without a home directory.
            return;
        };
        assert!(dirs.config_dir.is_absolute());
        assert!(dirs.data_dir.is_absolute());
        assert!(dirs.log_dir.is_absolute());
        assert!(dirs.config_dir.components().any(|c| c.as_os_str() == APP_NAME));
    }

    #[test]
    fn test_directory_creation() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_with_root(&tmp.path().join("tychos-root"));
        dirs.create_dirs().expect("create_dirs failed for temp root");

        assert!(dirs.config_dir.exists());
        assert!(dirs.data_dir.exists());
        assert!(dirs.log_dir.exists());
    }

    #[test]
    fn test_resolve_and_create_with_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested").join("root");
        let dirs = PlatformDirs::resolve_and_create(Some(&root)).unwrap();
        assert_eq!(dirs.config_dir, root);
        assert!(dirs.data_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_create_fails_under_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();

        let err = PlatformDirs::resolve_and_create(Some(&file)).unwrap_err();
        assert!(matches!(err, PlatformError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());

        let app: crate::error::AppError = err.into();
        assert!(app.to_string().starts_with("platform I/O error"));
    }

    #[test]
    fn test_no_hardcoded_separators() {
        let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("could not find crates directory");

        let mut violations = Vec::new();
        scan_dir_for_separators(crates_dir, &mut violations);

        assert!(
            violations.is_empty(),
            "Found hardcoded path separators in source files:\n{}",
            violations.join("\n")
        );
    }

    fn scan_dir_for_separators(dir: &Path, violations: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if path.file_name().is_some_and(|n| n == "target") {
                    continue;
                }
                scan_dir_for_separators(&path, violations);
            } else if path.extension().is_some_and(|e| e == "rs") {
                let Ok(content) = std::fs::read_to_string(&path) else {
                    continue;
                };
                for (line_num, line) in content.lines().enumerate() {
                    let trimmed = line.trim();
                    if trimmed.starts_with("//") {
                        continue;
                    }
                    if (line.contains("format!") || line.contains("println!"))
                        && (line.contains(r#"{}\\{}"#) || line.contains("{}/{}/"))
                    {
                        violations.push(format!(
                            "  {}:{}: {}",
                            path.display(),
                            line_num + 1,
                            trimmed
                        ));
                    }
                }
            }
        }
    }
}
