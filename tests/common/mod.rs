//! Common test utilities for webfold integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated config root for integration tests
pub struct TestConfig {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path used as WEBFOLD_CONFIG_DIR
    pub config_dir: PathBuf,
}

impl TestConfig {
    /// Create a new isolated config root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp.path().join("webfold");
        Self { temp, config_dir }
    }

    /// Path to the registry file inside the config root
    pub fn registry_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Seed the registry with a single installed app whose install dir,
    /// icon, and desktop entry all live inside the temp root.
    #[allow(dead_code)]
    pub fn seed_app(&self, name: &str, display_name: &str, url: &str) {
        let install_path = self.config_dir.join("apps").join(format!("{name}-linux-x64"));
        let icon_path = self.config_dir.join("icons").join(format!("{name}.png"));
        let desktop_entry_path = self
            .temp
            .path()
            .join("applications")
            .join(format!("webfold-{name}.desktop"));

        std::fs::create_dir_all(&install_path).expect("Failed to create install dir");
        std::fs::create_dir_all(icon_path.parent().unwrap()).expect("Failed to create icons dir");
        std::fs::write(&icon_path, b"png").expect("Failed to write icon");
        std::fs::create_dir_all(desktop_entry_path.parent().unwrap())
            .expect("Failed to create applications dir");
        std::fs::write(&desktop_entry_path, "[Desktop Entry]\n")
            .expect("Failed to write desktop entry");

        let record = serde_json::json!({
            "version": 1,
            "apps": {
                name: {
                    "displayName": display_name,
                    "url": url,
                    "iconPath": icon_path,
                    "installPath": install_path,
                    "desktopEntryPath": desktop_entry_path,
                    "createdAt": "2026-01-15T12:00:00Z"
                }
            }
        });

        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        std::fs::write(
            self.registry_file(),
            serde_json::to_string_pretty(&record).unwrap(),
        )
        .expect("Failed to write registry");
    }
}
