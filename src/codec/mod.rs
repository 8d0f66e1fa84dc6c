//! Offer link codec.
//!
//! `encode` turns an offer plus slider position into an ordered parameter map;
//! `decode` turns any parameter map back into an offer, substituting defaults
//! field by field. Both sides share the numeric limits in `domain::fields`.

pub mod decode;
pub mod encode;
pub mod keys;
pub mod link;
pub mod params;
pub mod validate;

pub use decode::{DecodedLink, decode, is_recipient_mode};
pub use encode::encode;
pub use link::{params_from_link, share_url};
pub use params::LinkParams;
pub use validate::{is_valid_email, validate_metadata};
