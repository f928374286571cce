use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove an application:\n    webfold remove -n gmail")]
pub struct RemoveArgs {
    /// Technical name of the application to remove
    #[arg(long, short = 'n')]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_cli_parsing_remove_short_flag() {
        let cli = super::super::Cli::try_parse_from(["webfold", "remove", "-n", "gmail"]).unwrap();
        match cli.command {
            super::super::Commands::Remove(args) => assert_eq!(args.name, "gmail"),
            _ => panic!("Expected Remove command"),
        }
    }
}
