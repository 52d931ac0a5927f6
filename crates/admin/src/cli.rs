use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "openpress-admin")]
#[command(about = "Administrative commands for the OpenPress journal platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Backfill eScholarship ark records for articles imported from OJS
    AddArks(AddArksArgs),
}

#[derive(Args, Clone)]
pub struct AddArksArgs {
    /// `code` of the journal to add arks for
    pub journal_code: String,

    /// Path to an export file containing the OJS ids and arks
    pub import_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_arks_positional_args() {
        let cli = Cli::try_parse_from(["openpress-admin", "add-arks", "jcs", "/tmp/export.tsv"])
            .expect("parse");

        let Commands::AddArks(args) = cli.command;
        assert_eq!(args.journal_code, "jcs");
        assert_eq!(args.import_file, PathBuf::from("/tmp/export.tsv"));
    }

    #[test]
    fn test_add_arks_requires_both_args() {
        assert!(Cli::try_parse_from(["openpress-admin", "add-arks", "jcs"]).is_err());
    }
}
