//! Command-line interface definitions.

use crate::config::{
    DB_PATH_ENV, DEFAULT_DB_FILE, DEFAULT_KEYWORD, DEFAULT_PAGE_SIZE, DEFAULT_PAGES,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Create the Users table, load the seed users and print paginated keyword searches.
#[derive(Parser, Debug)]
#[command(name = "testsql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file (opened read-write, created if missing).
    #[arg(long, env = DB_PATH_ENV, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    /// Substring matched against name or email.
    #[arg(short, long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,

    /// Pages to print (1-based, comma-separated).
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_PAGES.to_vec(),
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pages: Vec<u32>,

    /// Rows per page.
    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page_size: u32,

    /// Skip loading the seed users (search an existing database).
    #[arg(long)]
    pub no_seed: bool,

    /// Output format.
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable lines with a page header.
    #[default]
    Cli,
    /// JSON output.
    Json,
    /// CSV output.
    Csv,
    /// Markdown table.
    Md,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_default_run() {
        let cli = Cli::try_parse_from(["testsql", "--db", DEFAULT_DB_FILE]).unwrap();
        assert_eq!(cli.db, PathBuf::from(DEFAULT_DB_FILE));
        assert_eq!(cli.keyword, DEFAULT_KEYWORD);
        assert_eq!(cli.pages, DEFAULT_PAGES);
        assert_eq!(cli.page_size, DEFAULT_PAGE_SIZE);
        assert!(!cli.no_seed);
        assert_eq!(cli.format, OutputFormat::Cli);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "testsql",
            "--db",
            "other.db",
            "-k",
            "example",
            "-p",
            "3,1",
            "-s",
            "2",
            "--no-seed",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.db, PathBuf::from("other.db"));
        assert_eq!(cli.keyword, "example");
        assert_eq!(cli.pages, vec![3, 1]);
        assert_eq!(cli.page_size, 2);
        assert!(cli.no_seed);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_zero_page_and_size() {
        assert!(Cli::try_parse_from(["testsql", "--pages", "0"]).is_err());
        assert!(Cli::try_parse_from(["testsql", "--page-size", "0"]).is_err());
    }
}
