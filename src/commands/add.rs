//! Add command implementation
//!
//! Validates the inputs, fetches a favicon when no icon was supplied, runs
//! nativefier, writes the desktop entry, and records the application in the
//! registry. There is no rollback: a failure partway through leaves whatever
//! was already created on disk.

use chrono::Utc;
use console::Style;

use crate::cli::AddArgs;
use crate::commands::helpers::{validate_name, validate_url};
use crate::desktop;
use crate::error::Result;
use crate::favicon;
use crate::packager::{self, PackagerOptions};
use crate::paths::AppDirs;
use crate::progress::Spinner;
use crate::registry::{self, AppRecord};

/// Run add command
pub fn run(dirs: &AppDirs, args: AddArgs) -> Result<()> {
    validate_name(&args.name)?;
    validate_url(&args.url)?;

    println!(
        "{}",
        Style::new().blue().apply_to(format!(
            "Adding application: {} ({}) from {}",
            args.display_name, args.name, args.url
        ))
    );

    let icon_path = match args.icon {
        Some(icon) => Some(icon),
        None => {
            let spinner = Spinner::new("Getting favicon...");
            match favicon::fetch_favicon(dirs, &args.url, &args.name) {
                Some(path) => {
                    spinner.succeed(
                        Style::new()
                            .green()
                            .apply_to("Favicon retrieved successfully")
                            .to_string(),
                    );
                    Some(path)
                }
                None => {
                    spinner.warn(
                        Style::new()
                            .yellow()
                            .apply_to(
                                "Could not retrieve favicon, application will be created without an icon",
                            )
                            .to_string(),
                    );
                    None
                }
            }
        }
    };

    let options = PackagerOptions::new(
        &args.name,
        &args.url,
        dirs.apps_dir.clone(),
        icon_path.clone(),
    );

    let spinner = Spinner::new("Creating application...");
    let result = match packager::run(&options, &spinner) {
        Ok(result) => {
            spinner.succeed(
                Style::new()
                    .green()
                    .apply_to("Application created successfully")
                    .to_string(),
            );
            result
        }
        Err(e) => {
            spinner.fail(
                Style::new()
                    .red()
                    .apply_to("Failed to create application")
                    .to_string(),
            );
            return Err(e);
        }
    };

    let desktop_entry_path = desktop::create_desktop_entry(
        dirs,
        &args.name,
        &args.display_name,
        &result.executable,
        icon_path.as_deref(),
    )?;
    println!(
        "{}",
        Style::new().green().apply_to(format!(
            "Desktop entry created: {}",
            desktop_entry_path.display()
        ))
    );

    let record = AppRecord {
        display_name: args.display_name.clone(),
        url: args.url.clone(),
        icon_path,
        install_path: result.app_dir.clone(),
        desktop_entry_path,
        created_at: Utc::now(),
    };
    registry::add_app(&dirs.registry_file, &args.name, record)?;

    println!(
        "\n{}",
        Style::new().green().apply_to(format!(
            "Application {} created successfully!",
            args.display_name
        ))
    );
    println!("  Executable: {}", result.executable.display());
    println!("  Menu: The application is available in the applications menu");

    Ok(())
}
