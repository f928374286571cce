//! JSON registry of installed applications
//!
//! The registry is a single pretty-printed JSON document mapping technical
//! names to [`AppRecord`]s. Every operation loads the whole document, mutates
//! it, and writes it back; each CLI invocation is a fresh process so nothing
//! is cached in memory. There is deliberately no locking: two concurrent
//! invocations race and the last writer wins. That is a known limitation of
//! a single-user desktop tool, not something this module tries to hide.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WebfoldError};

/// Current registry schema version
const REGISTRY_VERSION: u32 = 1;

/// One installed application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub display_name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<PathBuf>,
    pub install_path: PathBuf,
    pub desktop_entry_path: PathBuf,
    pub created_at: DateTime<Utc>,
}

/// The on-disk registry document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub version: u32,
    pub apps: BTreeMap<String, AppRecord>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            version: REGISTRY_VERSION,
            apps: BTreeMap::new(),
        }
    }
}

impl Registry {
    /// Load the registry from disk, starting empty if the file is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| WebfoldError::RegistryReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| WebfoldError::RegistryParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the registry back to disk, pretty-printed
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| WebfoldError::RegistryWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        fs::write(path, content).map_err(|e| WebfoldError::RegistryWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Insert or overwrite the record for `name`
    pub fn add_app(&mut self, name: &str, record: AppRecord) {
        self.apps.insert(name.to_string(), record);
    }

    /// Remove the record for `name`, returning it if present
    pub fn remove_app(&mut self, name: &str) -> Option<AppRecord> {
        self.apps.remove(name)
    }

    /// All installed applications, keyed by technical name
    pub fn list_apps(&self) -> &BTreeMap<String, AppRecord> {
        &self.apps
    }
}

/// Load-modify-save convenience used by the add command
pub fn add_app(registry_file: &Path, name: &str, record: AppRecord) -> Result<()> {
    let mut registry = Registry::load(registry_file)?;
    registry.add_app(name, record);
    registry.save(registry_file)
}

/// Load-modify-save convenience used by the remove command. Returns the
/// removed record, or `None` without touching the file for unknown names.
pub fn remove_app(registry_file: &Path, name: &str) -> Result<Option<AppRecord>> {
    let mut registry = Registry::load(registry_file)?;
    match registry.remove_app(name) {
        Some(record) => {
            registry.save(registry_file)?;
            Ok(Some(record))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record(temp: &TempDir) -> AppRecord {
        AppRecord {
            display_name: "Gmail".to_string(),
            url: "https://mail.google.com".to_string(),
            icon_path: Some(temp.path().join("icons/gmail.png")),
            install_path: temp.path().join("apps/Gmail-linux-x64"),
            desktop_entry_path: temp.path().join("applications/webfold-gmail.desktop"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_then_list_contains_record() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        let record = sample_record(&temp);

        add_app(&file, "gmail", record.clone()).unwrap();

        let registry = Registry::load(&file).unwrap();
        assert_eq!(registry.list_apps().len(), 1);
        assert_eq!(registry.list_apps().get("gmail"), Some(&record));
    }

    #[test]
    fn test_add_overwrites_existing_name() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");

        add_app(&file, "gmail", sample_record(&temp)).unwrap();
        let mut updated = sample_record(&temp);
        updated.display_name = "Google Mail".to_string();
        add_app(&file, "gmail", updated).unwrap();

        let registry = Registry::load(&file).unwrap();
        assert_eq!(registry.list_apps().len(), 1);
        assert_eq!(
            registry.list_apps().get("gmail").unwrap().display_name,
            "Google Mail"
        );
    }

    #[test]
    fn test_remove_unknown_name_leaves_registry_unchanged() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        add_app(&file, "gmail", sample_record(&temp)).unwrap();
        let before = fs::read_to_string(&file).unwrap();

        let removed = remove_app(&file, "does-not-exist").unwrap();

        assert!(removed.is_none());
        assert_eq!(fs::read_to_string(&file).unwrap(), before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        add_app(&file, "gmail", sample_record(&temp)).unwrap();

        assert!(remove_app(&file, "gmail").unwrap().is_some());
        assert!(Registry::load(&file).unwrap().list_apps().is_empty());
        // Second removal reports not-found, no error
        assert!(remove_app(&file, "gmail").unwrap().is_none());
    }

    #[test]
    fn test_registry_is_pretty_printed_with_version() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        add_app(&file, "gmail", sample_record(&temp)).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("\"version\": 1"));
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_load_missing_file_yields_empty_registry() {
        let temp = TempDir::new().unwrap();
        let registry = Registry::load(&temp.path().join("nope.json")).unwrap();
        assert!(registry.list_apps().is_empty());
        assert_eq!(registry.version, 1);
    }

    #[test]
    fn test_load_corrupt_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("config.json");
        fs::write(&file, "not json at all").unwrap();

        let err = Registry::load(&file).unwrap_err();
        assert!(matches!(err, WebfoldError::RegistryParseFailed { .. }));
    }
}
