//! Domain types shared by the model, the codec and the front-ends.
//!
//! This module defines:
//!
//! - the offer value objects (`OfferBounds`, `OfferMetadata`, `Offer`)
//! - the trade-off slider position (`TradeoffPosition`) and its evaluated point
//! - the numeric field limits and defaults (`fields`)

pub mod fields;
pub mod types;

pub use fields::*;
pub use types::*;
