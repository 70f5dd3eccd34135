//! Tests for the extensions subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_extensions() {
    match parse(&["shelf", "extensions", "repo.json"]) {
        CliCommand::Extensions { path } => {
            assert_eq!(path, std::path::PathBuf::from("repo.json"))
        }
        _ => panic!("expected Extensions"),
    }
}
