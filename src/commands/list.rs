//! List command implementation

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::paths::AppDirs;
use crate::registry::Registry;

/// Run list command
pub fn run(dirs: &AppDirs, args: ListArgs) -> Result<()> {
    let registry = Registry::load(&dirs.registry_file)?;
    let apps = registry.list_apps();

    if apps.is_empty() {
        println!(
            "{}",
            Style::new().yellow().apply_to("No applications installed.")
        );
        println!(
            "Use {} to add an application.",
            Style::new()
                .cyan()
                .apply_to("webfold add -n [name] -d [display name] -u [url]")
        );
        return Ok(());
    }

    println!(
        "{}",
        Style::new()
            .blue()
            .apply_to(format!("Installed applications ({}):", apps.len()))
    );
    println!("{}", "─".repeat(50));

    for (name, app) in apps {
        println!(
            "{}",
            Style::new()
                .green()
                .apply_to(format!("{} ({})", app.display_name, name))
        );
        println!("  URL: {}", app.url);
        println!(
            "  Installed on: {}",
            app.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        if args.detailed {
            println!("  Install path: {}", app.install_path.display());
            println!("  Desktop entry: {}", app.desktop_entry_path.display());
            if let Some(ref icon) = app.icon_path {
                println!("  Icon: {}", icon.display());
            }
        }
        println!("{}", "─".repeat(50));
    }

    Ok(())
}
