//! Shared offer workflows used by both the CLI and the TUI.
//!
//! - issuing: offer -> encode -> share URL, plus the point at the granter's slider
//! - opening: link -> params -> decode -> point at the requested slider
//!
//! The front-ends only deal with presentation.

use tracing::info;
use url::Url;

use crate::codec::{self, DecodedLink, LinkParams};
use crate::domain::{EvaluatedPoint, Offer, TradeoffPosition};
use crate::error::OfferError;
use crate::model::OfferModel;

/// Output of issuing an offer link.
#[derive(Debug, Clone)]
pub struct IssuedLink {
    pub url: Url,
    pub params: LinkParams,
    pub point: EvaluatedPoint,
}

/// Output of opening an offer link.
#[derive(Debug, Clone)]
pub struct OpenedLink {
    pub decoded: DecodedLink,
    pub model: OfferModel,
    pub point: EvaluatedPoint,
}

/// Validate and encode an offer, and attach it to `base`.
pub fn issue_link(offer: &Offer, position: TradeoffPosition, base: &Url) -> Result<IssuedLink, OfferError> {
    let params = codec::encode(offer, position)?;
    let url = codec::share_url(base, &params);
    let point = OfferModel::from_bounds(offer.bounds).evaluate_at(position);

    info!(recipient = %offer.metadata.recipient_name, "issued offer link");
    Ok(IssuedLink { url, params, point })
}

/// Decode a link and evaluate it at `slider`, or at the link's own position.
pub fn open_link(link: &str, slider: Option<i64>) -> Result<OpenedLink, OfferError> {
    let params = codec::params_from_link(link)?;
    let decoded = codec::decode(&params);
    let model = OfferModel::from_bounds(decoded.offer.bounds);

    let point = match slider {
        Some(raw) => model.evaluate(raw)?,
        None => model.evaluate_at(decoded.position),
    };

    Ok(OpenedLink { decoded, model, point })
}
