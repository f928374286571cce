//! Executable resolution inside a discovered application directory
//!
//! On Linux the bundle layout varies between nativefier/electron versions,
//! so resolution walks a fallback chain: exact-name executable, then any
//! extensionless executable that is not the sandbox helper, then any
//! extensionless regular file, then an `linux-unpacked/` probe one level
//! down. `None` means the caller should fall back to the directory itself.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SANDBOX_HELPER: &str = "chrome-sandbox";
const UNPACKED_DIR: &str = "linux-unpacked";

/// Find the launchable file in `app_dir` for the given technical name
pub fn resolve_executable(app_dir: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    if cfg!(target_os = "macos") {
        find_with_suffix(app_dir, ".app")
    } else if cfg!(windows) {
        find_with_suffix(app_dir, ".exe")
    } else {
        resolve_linux(app_dir, name)
    }
}

/// Set the executable bit on the resolved file (no-op on Windows)
pub fn mark_executable(path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

fn resolve_linux(app_dir: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    let entries = sorted_entries(app_dir)?;

    // Exact technical-name match has highest priority
    for path in &entries {
        if path.file_name().is_some_and(|f| f == name)
            && path.is_file()
            && is_executable(path)?
        {
            return Ok(Some(path.clone()));
        }
    }

    // Any extensionless executable, skipping the sandbox helper binary
    for path in &entries {
        if is_extensionless(path)
            && path.file_name().is_none_or(|f| f != SANDBOX_HELPER)
            && path.is_file()
            && is_executable(path)?
        {
            return Ok(Some(path.clone()));
        }
    }

    // Any extensionless regular file, executable or not
    for path in &entries {
        if is_extensionless(path) && path.is_file() {
            return Ok(Some(path.clone()));
        }
    }

    // Electron-style layout keeps the binary one level down
    let unpacked = app_dir.join(UNPACKED_DIR);
    if unpacked.is_dir() {
        for path in sorted_entries(&unpacked)? {
            if is_extensionless(&path) {
                return Ok(Some(path));
            }
        }
    }

    Ok(None)
}

fn find_with_suffix(app_dir: &Path, suffix: &str) -> io::Result<Option<PathBuf>> {
    Ok(sorted_entries(app_dir)?
        .into_iter()
        .find(|path| {
            path.file_name()
                .is_some_and(|f| f.to_string_lossy().ends_with(suffix))
        }))
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn is_extensionless(path: &Path) -> bool {
    path.extension().is_none()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> io::Result<bool> {
    Ok(true)
}
