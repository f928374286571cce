use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add an application:\n    webfold add -n gmail -d Gmail -u https://mail.google.com\n\n\
                  Add with a custom icon:\n    webfold add -n wiki -d Wikipedia -u https://wikipedia.org -i ./wiki.png")]
pub struct AddArgs {
    /// Technical name of the application (lowercase letters, numbers, hyphens)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Display name of the application
    #[arg(long = "display-name", short = 'd')]
    pub display_name: String,

    /// Website URL
    #[arg(long, short = 'u')]
    pub url: String,

    /// Path to a custom icon file (optional)
    #[arg(long, short = 'i')]
    pub icon: Option<PathBuf>,
}
