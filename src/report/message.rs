//! Outbound message drafts.
//!
//! Drafts are plain strings (recipient address, subject, body). Sending them is
//! left to whatever mail client or service the caller uses.

use serde::Serialize;
use url::Url;

use crate::domain::{EquityMode, EvaluatedPoint, MetadataField, Offer};
use crate::error::OfferError;
use crate::report::format::{equity_label, format_currency, format_equity_max, format_equity_value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Message from the granting party inviting the recipient to pick a point.
pub fn offer_message(offer: &Offer, link: &Url) -> MessageDraft {
    let meta = &offer.metadata;
    let equity = offer.bounds.equity();

    let subject = format!(
        "Your Compensation Offer from {} for {} Position",
        meta.company, meta.position_title
    );
    let body = format!(
        "Hello {recipient},\n\n\
         You've received a compensation offer from {company} for the {title} position \
         as of {date} with the following parameters:\n\n\
         - Maximum Salary: {max_salary}\n\
         - Maximum {label}: {max_equity}\n\n\
         Please use the link below to choose your preferred combination of salary and equity:\n\
         {link}\n\n\
         Once you have made your selection and submitted your response, \
         formal contracts will be sent accordingly.\n\n\
         Yours sincerely,\n\
         {sender}\n",
        recipient = meta.recipient_name,
        company = meta.company,
        title = meta.position_title,
        date = meta.date,
        max_salary = format_currency(offer.bounds.max_salary()),
        label = equity_label(equity),
        max_equity = format_equity_max(equity),
        sender = meta.sender_name,
    );

    MessageDraft {
        to: meta.recipient_email.clone(),
        subject,
        body,
    }
}

/// Message from the recipient back to the granter confirming the chosen point.
pub fn acceptance_message(offer: &Offer, point: &EvaluatedPoint) -> Result<MessageDraft, OfferError> {
    let meta = &offer.metadata;
    if meta.granter_email.trim().is_empty() {
        return Err(OfferError::MissingRequiredField {
            field: MetadataField::GranterEmail,
            message: "Cannot send acceptance notification: employer email not found.",
        });
    }

    let equity = offer.bounds.equity();
    let label = equity_label(equity);
    let max_label = match equity {
        EquityMode::Percentage(_) => "maximum equity",
        EquityMode::Shares(_) => "maximum number of shares",
    };

    let subject = format!(
        "{} has accepted the compensation offer for {}",
        meta.recipient_name, meta.position_title
    );
    let body = format!(
        "Hello {sender},\n\n\
         {recipient} has accepted the following compensation package for the {title} \
         position at {company}:\n\n\
         - Salary: {salary}\n\
         - {label}: {equity_value}\n\n\
         This is based on the offer dated {date} with maximum salary of {max_salary} \
         and {max_label} of {max_equity}.\n\n\
         Please prepare the formal contracts accordingly.\n\n\
         Yours sincerely,\n\
         {recipient}\n",
        sender = meta.sender_name,
        recipient = meta.recipient_name,
        title = meta.position_title,
        company = meta.company,
        salary = format_currency(point.salary),
        equity_value = format_equity_value(point.equity),
        date = meta.date,
        max_salary = format_currency(offer.bounds.max_salary()),
        max_equity = format_equity_max(equity),
    );

    Ok(MessageDraft {
        to: meta.granter_email.clone(),
        subject,
        body,
    })
}

/// Render a draft for the terminal.
pub fn format_draft(draft: &MessageDraft) -> String {
    format!("To: {}\nSubject: {}\n\n{}", draft.to, draft.subject, draft.body)
}
