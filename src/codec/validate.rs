//! Metadata validation applied before an offer is encoded.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{MetadataField, OfferMetadata};
use crate::error::OfferError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern compiles")
});

/// Basic syntactic email check (local part, `@`, dotted domain labels).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn missing_message(field: MetadataField) -> &'static str {
    match field {
        MetadataField::Company => "Please enter the company name.",
        MetadataField::SenderName => "Please enter your name.",
        MetadataField::GranterEmail => "Please enter your email address for notifications.",
        MetadataField::Date => "Please enter the offer date.",
        MetadataField::PositionTitle => "Please enter the position under offer.",
        MetadataField::RecipientName => {
            "Please enter an offeree name before generating a share link."
        }
        MetadataField::RecipientEmail => "Please enter an offeree email address.",
    }
}

/// Check required fields in `MetadataField::REQUIRED` order, then both emails.
///
/// The first failure is returned; whitespace-only values count as missing.
pub fn validate_metadata(metadata: &OfferMetadata) -> Result<(), OfferError> {
    for field in MetadataField::REQUIRED {
        if metadata.get(field).trim().is_empty() {
            return Err(OfferError::MissingRequiredField {
                field,
                message: missing_message(field),
            });
        }
    }

    if !is_valid_email(metadata.recipient_email.trim()) {
        return Err(OfferError::InvalidEmailFormat {
            field: MetadataField::RecipientEmail,
            message: "Please enter a valid offeree email address.",
        });
    }
    if !is_valid_email(metadata.granter_email.trim()) {
        return Err(OfferError::InvalidEmailFormat {
            field: MetadataField::GranterEmail,
            message: "Please enter a valid email address for notifications.",
        });
    }

    Ok(())
}
