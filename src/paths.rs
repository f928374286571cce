//! Application directory layout
//!
//! All file system locations used by webfold are derived once, up front, and
//! passed into the components that need them. Nothing reads the layout from
//! ambient global state, so tests can point the whole tool at a temporary
//! root through `WEBFOLD_CONFIG_DIR` or `--config-dir`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WebfoldError};

/// File system layout for a webfold installation
#[derive(Debug, Clone)]
pub struct AppDirs {
    /// Root config directory (`~/.config/webfold` by default)
    pub config_dir: PathBuf,
    /// Where nativefier output bundles live
    pub apps_dir: PathBuf,
    /// Where downloaded favicons live
    pub icons_dir: PathBuf,
    /// The JSON registry file
    pub registry_file: PathBuf,
    /// Where `.desktop` entries are written (`~/.local/share/applications`)
    pub desktop_dir: PathBuf,
}

impl AppDirs {
    /// Resolve the default layout, honoring an explicit config-dir override.
    pub fn resolve(config_dir: Option<PathBuf>) -> Result<Self> {
        let home = dirs::home_dir().ok_or(WebfoldError::NoHomeDir)?;
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => home.join(".config").join("webfold"),
        };
        let desktop_dir = home.join(".local").join("share").join("applications");
        Ok(Self::from_roots(config_dir, desktop_dir))
    }

    /// Build a layout from explicit roots. Used directly by tests.
    pub fn from_roots(config_dir: PathBuf, desktop_dir: PathBuf) -> Self {
        let apps_dir = config_dir.join("apps");
        let icons_dir = config_dir.join("icons");
        let registry_file = config_dir.join("config.json");
        Self {
            config_dir,
            apps_dir,
            icons_dir,
            registry_file,
            desktop_dir,
        }
    }

    /// Create all directories and seed an empty registry file if missing.
    pub fn ensure(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.apps_dir, &self.icons_dir] {
            create_dir_all(dir)?;
        }
        if !self.registry_file.exists() {
            crate::registry::Registry::default().save(&self.registry_file)?;
        }
        Ok(())
    }

    /// Path of the desktop entry for a given technical name
    pub fn desktop_entry_path(&self, name: &str) -> PathBuf {
        self.desktop_dir.join(format!("webfold-{name}.desktop"))
    }

    /// Path of the downloaded icon for a given technical name
    pub fn icon_path(&self, name: &str) -> PathBuf {
        self.icons_dir.join(format!("{name}.png"))
    }
}

fn create_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| WebfoldError::CreateDirFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dirs_in(temp: &TempDir) -> AppDirs {
        AppDirs::from_roots(
            temp.path().join("config"),
            temp.path().join("applications"),
        )
    }

    #[test]
    fn test_ensure_creates_layout() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);

        dirs.ensure().unwrap();

        assert!(dirs.apps_dir.is_dir());
        assert!(dirs.icons_dir.is_dir());
        assert!(dirs.registry_file.is_file());
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);

        dirs.ensure().unwrap();
        std::fs::write(&dirs.registry_file, r#"{"version":1,"apps":{}}"#).unwrap();
        dirs.ensure().unwrap();

        // A second ensure must not clobber an existing registry
        let content = std::fs::read_to_string(&dirs.registry_file).unwrap();
        assert_eq!(content, r#"{"version":1,"apps":{}}"#);
    }

    #[test]
    fn test_derived_paths() {
        let temp = TempDir::new().unwrap();
        let dirs = dirs_in(&temp);

        assert_eq!(
            dirs.desktop_entry_path("gmail"),
            temp.path().join("applications").join("webfold-gmail.desktop")
        );
        assert_eq!(
            dirs.icon_path("gmail"),
            temp.path().join("config").join("icons").join("gmail.png")
        );
    }
}
