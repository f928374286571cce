//! Application directory discovery
//!
//! Nativefier does not guarantee where its output lands, so discovery is an
//! ordered list of strategies, each returning found/not-found, tried in
//! sequence until one hits:
//!
//! 1. a `<name>-linux-x64` directory dropped in the working directory
//!    instead of the output directory (moved into place when found),
//! 2. a diff of the output directory against the pre-invocation snapshot,
//! 3. a name-pattern match over the output directory, newest first.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Inputs shared by every discovery strategy
pub struct DiscoveryContext<'a> {
    pub output_dir: &'a Path,
    /// Output directory entries captured before nativefier ran
    pub before: &'a BTreeSet<OsString>,
    /// Technical app name
    pub name: &'a str,
    /// Directory the tool was invoked from
    pub work_dir: &'a Path,
}

type Strategy = fn(&DiscoveryContext) -> io::Result<Option<PathBuf>>;

const STRATEGIES: &[Strategy] = &[relocate_from_work_dir, diff_new_entry, newest_name_match];

/// Try each discovery strategy in order. `None` means all of them missed.
pub fn discover_app_dir(ctx: &DiscoveryContext) -> io::Result<Option<PathBuf>> {
    for strategy in STRATEGIES {
        if let Some(found) = strategy(ctx)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Nativefier sometimes ignores `--out` and writes `<name>-linux-x64` into
/// the current working directory. Move it where it belongs.
fn relocate_from_work_dir(ctx: &DiscoveryContext) -> io::Result<Option<PathBuf>> {
    let stray = ctx.work_dir.join(format!("{}-linux-x64", ctx.name));
    if !stray.exists() {
        return Ok(None);
    }

    eprintln!("App found in current directory instead of output directory");
    let target = match stray.file_name() {
        Some(file_name) => ctx.output_dir.join(file_name),
        None => return Ok(None),
    };
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    if target.exists() {
        fs::remove_dir_all(&target)?;
    }
    fs::rename(&stray, &target)?;
    Ok(Some(target))
}

/// Diff the output directory against the before-snapshot and take the first
/// new entry.
fn diff_new_entry(ctx: &DiscoveryContext) -> io::Result<Option<PathBuf>> {
    let mut new_entries: Vec<OsString> = fs::read_dir(ctx.output_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name())
        .filter(|name| !ctx.before.contains(name))
        .collect();
    new_entries.sort();
    Ok(new_entries
        .into_iter()
        .next()
        .map(|name| ctx.output_dir.join(name)))
}

/// Fall back to entries whose name contains the technical name, preferring
/// the most recently modified one.
fn newest_name_match(ctx: &DiscoveryContext) -> io::Result<Option<PathBuf>> {
    let mut matches: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(ctx.output_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if file_name.to_string_lossy().contains(ctx.name) {
            let modified = entry
                .metadata()?
                .modified()
                .unwrap_or(SystemTime::UNIX_EPOCH);
            matches.push((ctx.output_dir.join(file_name), modified));
        }
    }
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(matches.into_iter().next().map(|(path, _)| path))
}
