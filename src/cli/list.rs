use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show install paths and desktop entry locations
    #[arg(long)]
    pub detailed: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_cli_parsing_list_detailed() {
        let cli = super::super::Cli::try_parse_from(["webfold", "list", "--detailed"]).unwrap();
        match cli.command {
            super::super::Commands::List(args) => assert!(args.detailed),
            _ => panic!("Expected List command"),
        }
    }
}
