//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - builds offers from flags / saved offer files
//! - issues and opens links through the shared pipeline
//! - prints summaries and message drafts

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, LinkArgs, OpenArgs, TuiArgs};
use crate::config::Settings;
use crate::domain::{EquityKind, EquityMode, Offer, OfferBounds, TradeoffPosition};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `compmax` binary.
pub fn run() -> Result<(), AppError> {
    // `compmax` and `compmax <link>` behave like `compmax tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The TUI owns the terminal; log lines on stderr would corrupt the screen.
    if !matches!(cli.command, Command::Tui(_)) {
        init_logging(cli.verbose);
    }

    match cli.command {
        Command::Link(args) => handle_link(args),
        Command::Open(args) => handle_open(args),
        Command::Accept(args) => handle_accept(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_link(args: LinkArgs) -> Result<(), AppError> {
    let settings = Settings::from_env(args.base_url.as_deref())?;
    let (offer, position) = offer_from_args(&args)?;
    let issued = pipeline::issue_link(&offer, position, &settings.base_url)?;

    println!("{}", issued.url);
    println!();
    println!(
        "{}",
        crate::report::format_offer_summary(&offer, &issued.point, Some(&issued.url))
    );

    if args.message {
        let draft = crate::report::offer_message(&offer, &issued.url);
        println!("{}", crate::report::format_draft(&draft));
    }

    if let Some(path) = &args.export {
        crate::io::write_offer_json(path, &offer, position)?;
    }

    Ok(())
}

fn handle_open(args: OpenArgs) -> Result<(), AppError> {
    let opened = pipeline::open_link(&args.link, args.slider)?;

    let mode = if opened.decoded.recipient_mode {
        "recipient (read-only)"
    } else {
        "granting (incomplete link, defaults applied)"
    };
    println!("Mode: {mode}");
    println!();
    println!(
        "{}",
        crate::report::format_offer_summary(&opened.decoded.offer, &opened.point, None)
    );
    Ok(())
}

fn handle_accept(args: OpenArgs) -> Result<(), AppError> {
    let opened = pipeline::open_link(&args.link, args.slider)?;
    if !opened.decoded.recipient_mode {
        return Err(AppError::new(
            2,
            "This link does not carry a complete offer (needs name, maxSalary and maxEquity or maxShares).",
        ));
    }

    let draft = crate::report::acceptance_message(&opened.decoded.offer, &opened.point)?;
    println!("{}", crate::report::format_draft(&draft));
    Ok(())
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    crate::tui::run(args.link.as_deref())
}

/// Build the offer described by `args`, starting from `--offer` when given.
pub fn offer_from_args(args: &LinkArgs) -> Result<(Offer, TradeoffPosition), AppError> {
    let (mut offer, mut position) = match &args.offer {
        Some(path) => {
            let saved = crate::io::read_offer_json(path)?;
            debug!(path = %path.display(), "loaded offer file");
            (saved.offer, saved.position)
        }
        None => (Offer::default(), TradeoffPosition::default()),
    };

    let meta = &mut offer.metadata;
    let overrides = [
        (&mut meta.company, &args.company),
        (&mut meta.sender_name, &args.sender),
        (&mut meta.granter_email, &args.email),
        (&mut meta.date, &args.date),
        (&mut meta.position_title, &args.title),
        (&mut meta.recipient_name, &args.name),
        (&mut meta.recipient_email, &args.to),
    ];
    for (slot, value) in overrides {
        if let Some(value) = value {
            *slot = value.trim().to_string();
        }
    }
    if meta.date.is_empty() {
        meta.date = chrono::Local::now().format("%Y-%m-%d").to_string();
    }

    let current = offer.bounds.equity();
    let kind = args.equity_type.unwrap_or_else(|| {
        match (args.max_equity, args.max_shares) {
            (None, Some(_)) => EquityKind::Shares,
            (Some(_), None) => EquityKind::Percentage,
            _ => current.kind(),
        }
    });
    let equity = match kind {
        EquityKind::Percentage => match (args.max_equity, current) {
            (Some(p), _) => EquityMode::Percentage(p),
            (None, EquityMode::Percentage(p)) => EquityMode::Percentage(p),
            (None, EquityMode::Shares(_)) => EquityMode::default_for(EquityKind::Percentage),
        },
        EquityKind::Shares => match (args.max_shares, current) {
            (Some(n), _) => EquityMode::Shares(n),
            (None, EquityMode::Shares(n)) => EquityMode::Shares(n),
            (None, EquityMode::Percentage(_)) => EquityMode::default_for(EquityKind::Shares),
        },
    };
    let max_salary = args.max_salary.unwrap_or(offer.bounds.max_salary());
    offer.bounds = OfferBounds::new(max_salary, equity)?;

    if let Some(raw) = args.slider {
        position = TradeoffPosition::new(raw)?;
    }

    Ok((offer, position))
}

/// Rewrite argv so `compmax` defaults to `compmax tui`.
///
/// Rules:
/// - `compmax`                      -> `compmax tui`
/// - `compmax <link>`               -> `compmax tui <link>` (URL, `host/path?query`, `?query`, `a=b`)
/// - `compmax --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "link" | "open" | "accept" | "tui");
    if is_subcommand {
        return argv;
    }

    // A bare link opens the slider.
    let looks_like_link = arg1.contains("://")
        || arg1.contains('?')
        || (arg1.contains('=') && !arg1.starts_with('-'));
    if looks_like_link {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rewrite_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["compmax"])), argv(&["compmax", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["compmax", "https://x.example/?name=Sam"])),
            argv(&["compmax", "tui", "https://x.example/?name=Sam"])
        );
        assert_eq!(rewrite_args(argv(&["compmax", "--help"])), argv(&["compmax", "--help"]));
        assert_eq!(
            rewrite_args(argv(&["compmax", "name=Sam&maxSalary=1&maxEquity=2"])),
            argv(&["compmax", "tui", "name=Sam&maxSalary=1&maxEquity=2"])
        );
        assert_eq!(
            rewrite_args(argv(&["compmax", "compmax.example/offer?name=Sam"])),
            argv(&["compmax", "tui", "compmax.example/offer?name=Sam"])
        );
        assert_eq!(
            rewrite_args(argv(&["compmax", "--color=never"])),
            argv(&["compmax", "--color=never"])
        );
        assert_eq!(
            rewrite_args(argv(&["compmax", "open", "?name=Sam"])),
            argv(&["compmax", "open", "?name=Sam"])
        );
    }

    #[test]
    fn offer_from_flags_trims_and_defaults() {
        let args = LinkArgs {
            company: Some("  Acme ".to_string()),
            max_shares: Some(40_000),
            slider: Some(70),
            ..LinkArgs::default()
        };
        let (offer, position) = offer_from_args(&args).unwrap();
        assert_eq!(offer.metadata.company, "Acme");
        assert_eq!(offer.metadata.date.len(), 10);
        assert_eq!(offer.bounds.equity(), EquityMode::Shares(40_000));
        assert_eq!(offer.bounds.max_salary(), 150_000.0);
        assert_eq!(position.get(), 70);
    }

    #[test]
    fn explicit_equity_type_uses_kind_default() {
        let args = LinkArgs {
            equity_type: Some(EquityKind::Shares),
            ..LinkArgs::default()
        };
        let (offer, _) = offer_from_args(&args).unwrap();
        assert_eq!(offer.bounds.equity(), EquityMode::Shares(100_000));
    }

    #[test]
    fn out_of_range_flags_are_rejected() {
        let args = LinkArgs {
            max_salary: Some(20_000_000.0),
            ..LinkArgs::default()
        };
        assert_eq!(offer_from_args(&args).unwrap_err().exit_code(), 2);

        let args = LinkArgs {
            slider: Some(-5),
            ..LinkArgs::default()
        };
        assert!(offer_from_args(&args).is_err());
    }
}
