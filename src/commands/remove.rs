//! Remove command implementation
//!
//! Drops the registry record first, then best-effort deletes the install
//! directory, the downloaded icon, and the desktop entry. Already-missing
//! files are tolerated silently.

use std::fs;

use console::Style;

use crate::cli::RemoveArgs;
use crate::desktop;
use crate::error::{Result, WebfoldError};
use crate::paths::AppDirs;
use crate::registry;

/// Run remove command
pub fn run(dirs: &AppDirs, args: RemoveArgs) -> Result<()> {
    let record = registry::remove_app(&dirs.registry_file, &args.name)?.ok_or_else(|| {
        WebfoldError::AppNotFound {
            name: args.name.clone(),
        }
    })?;

    println!(
        "{}",
        Style::new().blue().apply_to(format!(
            "Removing application: {} ({})",
            record.display_name, args.name
        ))
    );

    if record.install_path.exists() {
        fs::remove_dir_all(&record.install_path).map_err(|e| crate::error::io_error(format!(
            "Failed to remove {}: {e}",
            record.install_path.display()
        )))?;
        println!(
            "{}",
            Style::new().green().apply_to(format!(
                "Application directory removed: {}",
                record.install_path.display()
            ))
        );
    }

    if let Some(ref icon) = record.icon_path {
        if icon.exists() {
            fs::remove_file(icon).map_err(|e| {
                crate::error::io_error(format!("Failed to remove {}: {e}", icon.display()))
            })?;
            println!(
                "{}",
                Style::new()
                    .green()
                    .apply_to(format!("Icon removed: {}", icon.display()))
            );
        }
    }

    if desktop::remove_desktop_entry(&record.desktop_entry_path) {
        println!(
            "{}",
            Style::new().green().apply_to(format!(
                "Desktop entry removed: {}",
                record.desktop_entry_path.display()
            ))
        );
    }

    println!(
        "\n{}",
        Style::new().green().apply_to(format!(
            "Application {} successfully removed!",
            record.display_name
        ))
    );

    Ok(())
}
