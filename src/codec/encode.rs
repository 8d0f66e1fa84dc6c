//! Offer → link parameters.

use tracing::debug;

use crate::codec::keys;
use crate::codec::params::LinkParams;
use crate::codec::validate::validate_metadata;
use crate::domain::{EquityMode, Offer, TradeoffPosition};
use crate::error::OfferError;

/// Encode an offer and the granting party's slider position.
///
/// Metadata is validated first. Only the active equity key is emitted, so the
/// inactive representation is absent from the link rather than empty.
pub fn encode(offer: &Offer, position: TradeoffPosition) -> Result<LinkParams, OfferError> {
    validate_metadata(&offer.metadata)?;

    let meta = &offer.metadata;
    let bounds = &offer.bounds;
    let equity = bounds.equity();

    let mut params = LinkParams::new();
    params.push(keys::COMPANY, meta.company.as_str());
    params.push(keys::POSITION_TITLE, meta.position_title.as_str());
    params.push(keys::DATE, meta.date.as_str());
    params.push(keys::RECIPIENT_NAME, meta.recipient_name.as_str());
    params.push(keys::MAX_SALARY, bounds.max_salary().to_string());
    params.push(keys::EQUITY_TYPE, equity.kind().as_str());
    match equity {
        EquityMode::Percentage(max) => params.push(keys::MAX_EQUITY, max.to_string()),
        EquityMode::Shares(max) => params.push(keys::MAX_SHARES, max.to_string()),
    }
    params.push(keys::SLIDER_POSITION, position.to_string());
    params.push(keys::GRANTER_EMAIL, meta.granter_email.as_str());
    params.push(keys::SENDER_NAME, meta.sender_name.as_str());

    debug!(
        equity_type = equity.kind().as_str(),
        position = position.get(),
        "encoded offer link parameters"
    );
    Ok(params)
}
