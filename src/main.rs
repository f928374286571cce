//! webfold - web application manager
//!
//! A command-line tool that registers arbitrary websites as desktop
//! applications by wrapping the nativefier packaging tool, fetching site
//! favicons, writing desktop menu entries, and keeping a JSON registry of
//! everything it installed.

use clap::Parser;

mod cli;
mod commands;
mod desktop;
mod error;
mod favicon;
mod packager;
mod paths;
mod progress;
mod registry;

use cli::{Cli, Commands};
use paths::AppDirs;

fn main() {
    let cli = Cli::parse();

    let dirs = match AppDirs::resolve(cli.config_dir.clone()).and_then(|dirs| {
        dirs.ensure()?;
        Ok(dirs)
    }) {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(&dirs, args),
        Commands::List(args) => commands::list::run(&dirs, args),
        Commands::Remove(args) => commands::remove::run(&dirs, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
