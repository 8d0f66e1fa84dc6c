//! Number formatting and the offer summary block.
//!
//! We keep formatting code in one place so the model and codec stay free of
//! presentation concerns.

use url::Url;

use crate::domain::{EquityMode, EquityValue, EvaluatedPoint, Offer};

/// `$` plus thousands separators, no decimals.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Two decimals plus `%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Whole number with thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(value)
}

pub fn format_equity_value(value: EquityValue) -> String {
    match value {
        EquityValue::Percentage(p) => format_percent(p),
        EquityValue::Shares(n) => format_count(n),
    }
}

pub fn format_equity_max(mode: EquityMode) -> String {
    match mode {
        EquityMode::Percentage(p) => format_percent(p),
        EquityMode::Shares(n) => format_count(n),
    }
}

/// "Equity" or "Shares", for labels.
pub fn equity_label(mode: EquityMode) -> &'static str {
    match mode {
        EquityMode::Percentage(_) => "Equity",
        EquityMode::Shares(_) => "Shares",
    }
}

/// Full offer details: parties, maxima, current selection and (optionally) the link.
pub fn format_offer_summary(offer: &Offer, point: &EvaluatedPoint, link: Option<&Url>) -> String {
    let meta = &offer.metadata;
    let equity = offer.bounds.equity();
    let label = equity_label(equity);

    let mut out = String::new();
    out.push_str("=== compmax - Compensation Offer Details ===\n");
    out.push_str(&format!("Company: {}\n", meta.company));
    out.push_str(&format!("From: {} <{}>\n", meta.sender_name, meta.granter_email));
    out.push_str(&format!("Offer Date: {}\n", meta.date));
    out.push_str(&format!("Position under Offer: {}\n", meta.position_title));
    out.push('\n');

    if meta.recipient_email.is_empty() {
        out.push_str(&format!("Offeree: {}\n", meta.recipient_name));
    } else {
        out.push_str(&format!("Offeree: {} <{}>\n", meta.recipient_name, meta.recipient_email));
    }
    out.push('\n');

    out.push_str(&format!(
        "Maximum Salary: {}\n",
        format_currency(offer.bounds.max_salary())
    ));
    out.push_str(&format!("Maximum {label}: {}\n", format_equity_max(equity)));
    out.push_str(&format!("Current Selection (slider {}/100):\n", point.position));
    out.push_str(&format!("- Salary: {}\n", format_currency(point.salary)));
    out.push_str(&format!("- {label}: {}\n", format_equity_value(point.equity)));

    if let Some(link) = link {
        out.push_str(&format!("\nLink to Share: {link}\n"));
    }

    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
