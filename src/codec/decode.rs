//! Link parameters → offer.
//!
//! Decoding never fails. Each numeric field degrades to its default on its own,
//! so a link with a mangled query string still opens a usable calculator.

use tracing::{debug, info};

use crate::codec::keys;
use crate::codec::params::LinkParams;
use crate::domain::{
    EquityKind, EquityMode, MAX_EQUITY_PERCENT, MAX_SALARY, MAX_SHARES, NumericField, Offer,
    OfferBounds, OfferMetadata, POSITION, TradeoffPosition, WireNumber,
};

/// Result of decoding a link.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLink {
    pub offer: Offer,
    pub position: TradeoffPosition,
    /// The link carries a complete offer and should open read-only.
    pub recipient_mode: bool,
}

/// A link opens in recipient (read-only) mode iff it names the recipient,
/// carries a maximum salary, and carries at least one equity maximum.
pub fn is_recipient_mode(params: &LinkParams) -> bool {
    params.contains(keys::RECIPIENT_NAME)
        && params.contains(keys::MAX_SALARY)
        && (params.contains(keys::MAX_EQUITY) || params.contains(keys::MAX_SHARES))
}

pub fn decode(params: &LinkParams) -> DecodedLink {
    let recipient_mode = is_recipient_mode(params);

    let max_salary = numeric(params, keys::MAX_SALARY, &MAX_SALARY);
    let kind = params
        .get(keys::EQUITY_TYPE)
        .and_then(EquityKind::from_wire)
        .unwrap_or_default();
    let equity = match kind {
        EquityKind::Shares => EquityMode::Shares(numeric(params, keys::MAX_SHARES, &MAX_SHARES)),
        EquityKind::Percentage => {
            EquityMode::Percentage(numeric(params, keys::MAX_EQUITY, &MAX_EQUITY_PERCENT))
        }
    };
    // Both values already passed their range checks.
    let bounds = OfferBounds::new(max_salary, equity).unwrap_or_default();

    let position = TradeoffPosition::new(numeric(params, keys::SLIDER_POSITION, &POSITION))
        .unwrap_or_default();

    let text = |key: &str| params.get(key).unwrap_or_default().to_string();
    let metadata = OfferMetadata {
        company: text(keys::COMPANY),
        sender_name: text(keys::SENDER_NAME),
        granter_email: text(keys::GRANTER_EMAIL),
        date: text(keys::DATE),
        position_title: text(keys::POSITION_TITLE),
        recipient_name: text(keys::RECIPIENT_NAME),
        recipient_email: String::new(),
    };

    if recipient_mode {
        info!(
            recipient = %metadata.recipient_name,
            equity_type = kind.as_str(),
            "opened offer link in recipient mode"
        );
    }

    DecodedLink {
        offer: Offer { bounds, metadata },
        position,
        recipient_mode,
    }
}

fn numeric<T: WireNumber>(params: &LinkParams, key: &str, field: &NumericField<T>) -> T {
    let raw = params.get(key);
    match field.parse(raw) {
        Some(value) => value,
        None => {
            if let Some(raw) = raw {
                debug!(key, raw, default = %field.default, "rejected link parameter, using default");
            }
            field.default
        }
    }
}
