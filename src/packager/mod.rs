//! Packaging tool invocation
//!
//! Spawns `npx nativefier` to turn a URL into an application bundle, then
//! locates whatever the tool produced. Nativefier's output layout is not
//! contractually stable, so directory discovery ([`discovery`]) and
//! executable resolution ([`resolve`]) are both fallback chains rather than
//! single deterministic lookups.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::error::{Result, WebfoldError};
use crate::progress::Spinner;

pub mod discovery;
pub mod resolve;

use discovery::DiscoveryContext;

/// How long to wait after nativefier exits before probing the file system.
/// The tool has been observed to finish flushing its output asynchronously.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// One flag passed through to nativefier
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// `true` renders as a bare `--flag`, `false` is omitted entirely
    Bool(bool),
    /// Renders as a `--key value` pair
    Value(String),
}

/// Options for a nativefier invocation
#[derive(Debug, Clone)]
pub struct PackagerOptions {
    pub name: String,
    pub target_url: String,
    pub output_dir: PathBuf,
    pub icon: Option<PathBuf>,
    /// Extra flags in render order
    pub flags: Vec<(String, FlagValue)>,
}

impl PackagerOptions {
    /// Options matching the window and behavior defaults webfold ships with
    pub fn new(name: &str, target_url: &str, output_dir: PathBuf, icon: Option<PathBuf>) -> Self {
        let flags = vec![
            ("single-instance".to_string(), FlagValue::Bool(true)),
            ("disable-context-menu".to_string(), FlagValue::Bool(false)),
            ("disable-dev-tools".to_string(), FlagValue::Bool(true)),
            ("hide-window-frame".to_string(), FlagValue::Bool(false)),
            ("maximize".to_string(), FlagValue::Bool(false)),
            ("tray".to_string(), FlagValue::Bool(false)),
            ("width".to_string(), FlagValue::Value("1280".to_string())),
            ("height".to_string(), FlagValue::Value("800".to_string())),
            ("show-menu-bar".to_string(), FlagValue::Bool(false)),
        ];
        Self {
            name: name.to_string(),
            target_url: target_url.to_string(),
            output_dir,
            icon,
            flags,
        }
    }

    /// Render the flat argument vector handed to nativefier
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            self.target_url.clone(),
            "--name".to_string(),
            self.name.clone(),
            "--out".to_string(),
            self.output_dir.display().to_string(),
        ];
        if let Some(ref icon) = self.icon {
            args.push("--icon".to_string());
            args.push(icon.display().to_string());
        }
        for (key, value) in &self.flags {
            match value {
                FlagValue::Bool(true) => args.push(format!("--{key}")),
                FlagValue::Bool(false) => {}
                FlagValue::Value(v) => {
                    args.push(format!("--{key}"));
                    args.push(v.clone());
                }
            }
        }
        args
    }
}

/// What the packaging step hands back to the command layer
#[derive(Debug, Clone)]
pub struct PackagingResult {
    pub app_dir: PathBuf,
    pub executable: PathBuf,
}

/// Run nativefier and locate its output
pub fn run(options: &PackagerOptions, spinner: &Spinner) -> Result<PackagingResult> {
    fs::create_dir_all(&options.output_dir).map_err(|e| WebfoldError::CreateDirFailed {
        path: options.output_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let before = snapshot_entries(&options.output_dir)?;

    let mut child = Command::new("npx")
        .arg("nativefier")
        .args(options.to_args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| WebfoldError::PackagerSpawnFailed {
            reason: e.to_string(),
        })?;

    let stdout_buf = Arc::new(Mutex::new(String::new()));
    let stderr_buf = Arc::new(Mutex::new(String::new()));

    let stdout_handle = child
        .stdout
        .take()
        .map(|pipe| stream_output(pipe, Arc::clone(&stdout_buf), spinner.clone()));
    let stderr_handle = child
        .stderr
        .take()
        .map(|pipe| stream_output(pipe, Arc::clone(&stderr_buf), spinner.clone()));

    let status = child.wait().map_err(|e| WebfoldError::PackagerSpawnFailed {
        reason: e.to_string(),
    })?;

    for handle in [stdout_handle, stderr_handle].into_iter().flatten() {
        let _ = handle.join();
    }

    let stdout = lock_into_string(&stdout_buf);
    let stderr = lock_into_string(&stderr_buf);

    if !status.success() {
        return Err(WebfoldError::PackagerFailed {
            code: status.code().unwrap_or(-1),
            stderr,
        });
    }

    // Tolerate nativefier still flushing files after exit
    thread::sleep(SETTLE_DELAY);

    let work_dir = std::env::current_dir().map_err(|e| crate::error::io_error(e.to_string()))?;
    let ctx = DiscoveryContext {
        output_dir: &options.output_dir,
        before: &before,
        name: &options.name,
        work_dir: &work_dir,
    };

    let app_dir = match discovery::discover_app_dir(&ctx)
        .map_err(|e| crate::error::io_error(e.to_string()))?
    {
        Some(dir) => dir,
        None => {
            let listing = list_entries(&options.output_dir);
            eprintln!("Output directory content: {listing:?}");
            eprintln!("Stdout: {stdout}");
            eprintln!("Stderr: {stderr}");
            return Err(WebfoldError::AppDirNotFound {
                listing,
                stdout,
                stderr,
            });
        }
    };

    let executable = match resolve::resolve_executable(&app_dir, &options.name)
        .map_err(|e| crate::error::io_error(e.to_string()))?
    {
        Some(path) => {
            resolve::mark_executable(&path).map_err(|e| crate::error::io_error(e.to_string()))?;
            path
        }
        None => {
            spinner.warn("Could not find specific executable. Using application directory as target.");
            app_dir.clone()
        }
    };

    Ok(PackagingResult {
        app_dir,
        executable,
    })
}

fn snapshot_entries(dir: &std::path::Path) -> Result<BTreeSet<OsString>> {
    let entries = fs::read_dir(dir).map_err(|e| crate::error::io_error(format!(
        "Failed to read {}: {e}",
        dir.display()
    )))?;
    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| crate::error::io_error(e.to_string()))?;
        names.insert(entry.file_name());
    }
    Ok(names)
}

fn list_entries(dir: &std::path::Path) -> Vec<String> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

fn stream_output<R: Read + Send + 'static>(
    pipe: R,
    buffer: Arc<Mutex<String>>,
    spinner: Spinner,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let reader = BufReader::new(pipe);
        for line in reader.lines().map_while(|l| l.ok()) {
            if let Ok(mut buf) = buffer.lock() {
                buf.push_str(&line);
                buf.push('\n');
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                spinner.update(format!("Creating application... {trimmed}"));
            }
        }
    })
}

fn lock_into_string(buffer: &Arc<Mutex<String>>) -> String {
    buffer.lock().map(|b| b.clone()).unwrap_or_default()
}
