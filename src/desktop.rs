//! Desktop entry creation and removal
//!
//! Renders a freedesktop `.desktop` file into the applications directory so
//! the packaged app shows up in the desktop menu. The entry format is fixed;
//! only the name, exec path and icon vary.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WebfoldError};
use crate::paths::AppDirs;

/// Create the `.desktop` file for an application and mark it executable
pub fn create_desktop_entry(
    dirs: &AppDirs,
    name: &str,
    display_name: &str,
    exec_path: &Path,
    icon_path: Option<&Path>,
) -> Result<PathBuf> {
    fs::create_dir_all(&dirs.desktop_dir).map_err(|e| WebfoldError::CreateDirFailed {
        path: dirs.desktop_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let entry_path = dirs.desktop_entry_path(name);
    let content = render_entry(name, display_name, exec_path, icon_path);

    fs::write(&entry_path, content).map_err(|e| WebfoldError::FileWriteFailed {
        path: entry_path.display().to_string(),
        reason: e.to_string(),
    })?;
    set_executable(&entry_path)?;

    Ok(entry_path)
}

/// Remove a `.desktop` file. Returns `false` for an already-absent path.
pub fn remove_desktop_entry(path: &Path) -> bool {
    if path.exists() {
        fs::remove_file(path).is_ok()
    } else {
        false
    }
}

fn render_entry(
    name: &str,
    display_name: &str,
    exec_path: &Path,
    icon_path: Option<&Path>,
) -> String {
    let icon = icon_path.map(|p| p.display().to_string()).unwrap_or_default();
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={display_name}\n\
         Comment=Web application created with webfold\n\
         Exec=\"{exec}\"\n\
         Icon={icon}\n\
         Terminal=false\n\
         Categories=Network;WebBrowser;\n\
         StartupWMClass={name}\n",
        exec = exec_path.display(),
    )
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|e| {
        WebfoldError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
