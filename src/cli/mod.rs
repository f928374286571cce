//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - list: List command arguments
//! - remove: Remove command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod list;
pub mod remove;

pub use add::AddArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;

/// webfold - web application manager
///
/// Register websites as desktop applications using nativefier.
#[derive(Parser, Debug)]
#[command(
    name = "webfold",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Register websites as desktop applications",
    long_about = "webfold wraps the nativefier packaging tool: it turns a URL into a \
                  desktop application, fetches the site favicon, writes a desktop menu \
                  entry, and tracks everything in a small JSON registry.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  webfold add -n gmail -d Gmail -u https://mail.google.com  \x1b[90m# Install a web app\x1b[0m\n   \
                  webfold add -n wiki -d Wikipedia -u https://wikipedia.org -i ./wiki.png\n   \
                  webfold list                                              \x1b[90m# List installed apps\x1b[0m\n   \
                  webfold remove -n gmail                                   \x1b[90m# Remove an app\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Config directory (defaults to ~/.config/webfold)
    #[arg(long, global = true, env = "WEBFOLD_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new web application
    Add(AddArgs),

    /// List all installed applications
    List(ListArgs),

    /// Remove an application
    Remove(RemoveArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["webfold", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_add() {
        let cli = Cli::try_parse_from([
            "webfold", "add", "-n", "gmail", "-d", "Gmail", "-u", "https://mail.google.com",
        ])
        .unwrap();
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name, "gmail");
                assert_eq!(args.display_name, "Gmail");
                assert_eq!(args.url, "https://mail.google.com");
                assert_eq!(args.icon, None);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_cli_parsing_add_requires_url() {
        let result = Cli::try_parse_from(["webfold", "add", "-n", "gmail", "-d", "Gmail"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_remove() {
        let cli = Cli::try_parse_from(["webfold", "remove", "--name", "gmail"]).unwrap();
        match cli.command {
            Commands::Remove(args) => assert_eq!(args.name, "gmail"),
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_global_config_dir() {
        let cli =
            Cli::try_parse_from(["webfold", "--config-dir", "/tmp/webfold-test", "list"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/webfold-test")));
    }
}
