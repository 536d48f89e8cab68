//! Command-line interface definitions for News Search.
//!
//! Every argument is a search term; the terms are joined with single
//! spaces into the search phrase. Results always go to [`DEFAULT_OUTPUT`].

use clap::Parser;

/// Fixed location of the combined JSON output.
pub const DEFAULT_OUTPUT: &str = "./combined_news_items.json";

/// Command-line arguments for News Search.
///
/// # Examples
///
/// ```sh
/// news_search novi sad
/// news_search vremenska prognoza
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search terms, joined with spaces into one phrase
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub terms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_terms() {
        let cli = Cli::parse_from(["news_search", "novi", "sad"]);
        assert_eq!(cli.terms, vec!["novi", "sad"]);
    }

    #[test]
    fn test_cli_no_terms() {
        let cli = Cli::parse_from(["news_search"]);
        assert!(cli.terms.is_empty());
    }

    #[test]
    fn test_cli_leading_hyphen_terms_stay_in_phrase() {
        let cli = Cli::try_parse_from(["news_search", "-o", "x", "vesti"]).unwrap();
        assert_eq!(cli.terms, vec!["-o", "x", "vesti"]);

        let cli = Cli::try_parse_from(["news_search", "-o"]).unwrap();
        assert_eq!(cli.terms, vec!["-o"]);
    }

    #[test]
    fn test_cli_hyphenated_terms_after_first() {
        let cli = Cli::parse_from(["news_search", "covid", "-19"]);
        assert_eq!(cli.terms, vec!["covid", "-19"]);
    }
}
