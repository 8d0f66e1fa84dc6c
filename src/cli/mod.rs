//! Command-line parsing for the compmax offer tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the model/codec code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::EquityKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "compmax", version, about = "Salary vs. equity offer links")]
pub struct Cli {
    /// Verbose logging on stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an offer, validate it, and print its share link and summary.
    Link(LinkArgs),
    /// Decode an offer link and show the offer at a slider position.
    Open(OpenArgs),
    /// Decode an offer link and print the acceptance message for the granter.
    Accept(OpenArgs),
    /// Interactive slider for an offer link.
    ///
    /// Without a link the default offer is shown.
    Tui(TuiArgs),
}

/// Options for building an offer.
///
/// Every field is optional when `--offer` supplies a saved offer; flags given
/// on the command line override the file.
#[derive(Debug, Args, Clone, Default)]
pub struct LinkArgs {
    /// Saved offer JSON to start from (see `--export`).
    #[arg(long, value_name = "JSON")]
    pub offer: Option<PathBuf>,

    /// Company name.
    #[arg(long)]
    pub company: Option<String>,

    /// Your name (the granting party).
    #[arg(long)]
    pub sender: Option<String>,

    /// Your email address, used for acceptance notifications.
    #[arg(long)]
    pub email: Option<String>,

    /// Offer date (defaults to today, YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,

    /// Position under offer.
    #[arg(long)]
    pub title: Option<String>,

    /// Offeree name.
    #[arg(long)]
    pub name: Option<String>,

    /// Offeree email address.
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum salary (0 - 10,000,000).
    #[arg(long)]
    pub max_salary: Option<f64>,

    /// Equity representation.
    #[arg(long, value_enum)]
    pub equity_type: Option<EquityKind>,

    /// Maximum equity in percent (0 - 100).
    #[arg(long)]
    pub max_equity: Option<f64>,

    /// Maximum number of shares (0 - 100,000,000).
    #[arg(long)]
    pub max_shares: Option<u64>,

    /// Initial slider position (0 = all equity, 100 = all salary).
    #[arg(long, allow_negative_numbers = true)]
    pub slider: Option<i64>,

    /// Page that opens offer links (overrides COMPMAX_BASE_URL).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Save the offer to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Also print the offer message for the offeree.
    #[arg(long)]
    pub message: bool,
}

/// Options for reading an offer link.
#[derive(Debug, Args, Clone)]
pub struct OpenArgs {
    /// Offer link (full URL or query string).
    pub link: String,

    /// Slider position to evaluate (defaults to the one in the link).
    #[arg(long, allow_negative_numbers = true)]
    pub slider: Option<i64>,
}

/// Options for the interactive slider.
#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    /// Offer link (full URL or query string).
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_link_flags() {
        let cli = Cli::parse_from([
            "compmax",
            "link",
            "--company",
            "Acme",
            "--equity-type",
            "shares",
            "--max-shares",
            "40000",
            "--slider",
            "70",
        ]);
        let Command::Link(args) = cli.command else {
            panic!("expected link subcommand");
        };
        assert_eq!(args.company.as_deref(), Some("Acme"));
        assert_eq!(args.equity_type, Some(EquityKind::Shares));
        assert_eq!(args.max_shares, Some(40_000));
        assert_eq!(args.slider, Some(70));
    }

    #[test]
    fn parses_open_with_slider() {
        let cli = Cli::parse_from(["compmax", "-v", "open", "?name=Sam", "--slider", "10"]);
        assert!(cli.verbose);
        let Command::Open(args) = cli.command else {
            panic!("expected open subcommand");
        };
        assert_eq!(args.link, "?name=Sam");
        assert_eq!(args.slider, Some(10));
    }
}
