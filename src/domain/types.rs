//! Offer value types.
//!
//! Offers are plain immutable values: the granting session builds one, the link
//! carries a copy to the recipient, and nothing is shared between the two.

use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::fields::{DEFAULT_POSITION, MAX_EQUITY_PERCENT, MAX_SALARY, MAX_SHARES, POSITION};
use crate::error::OfferError;

/// Which equity representation an offer uses (the link's `equityType`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EquityKind {
    #[default]
    Percentage,
    Shares,
}

impl EquityKind {
    /// Wire literal used in links.
    pub fn as_str(self) -> &'static str {
        match self {
            EquityKind::Percentage => "percentage",
            EquityKind::Shares => "shares",
        }
    }

    /// Resolve a wire literal. Anything unrecognized is `None`.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "percentage" => Some(EquityKind::Percentage),
            "shares" => Some(EquityKind::Shares),
            _ => None,
        }
    }
}

/// Maximum equity on offer, in exactly one representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquityMode {
    /// Maximum equity in percent, `[0, 100]`.
    Percentage(f64),
    /// Maximum share count, `[0, 100_000_000]`.
    Shares(u64),
}

impl EquityMode {
    pub fn kind(self) -> EquityKind {
        match self {
            EquityMode::Percentage(_) => EquityKind::Percentage,
            EquityMode::Shares(_) => EquityKind::Shares,
        }
    }

    /// The default maximum for the given representation.
    pub fn default_for(kind: EquityKind) -> Self {
        match kind {
            EquityKind::Percentage => EquityMode::Percentage(MAX_EQUITY_PERCENT.default),
            EquityKind::Shares => EquityMode::Shares(MAX_SHARES.default),
        }
    }

    fn check(self) -> Result<Self, OfferError> {
        match self {
            EquityMode::Percentage(p) => MAX_EQUITY_PERCENT.check(p).map(EquityMode::Percentage),
            EquityMode::Shares(n) => MAX_SHARES.check(n).map(EquityMode::Shares),
        }
    }
}

impl Default for EquityMode {
    fn default() -> Self {
        EquityMode::default_for(EquityKind::Percentage)
    }
}

/// Validated offer bounds: maximum salary plus maximum equity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct OfferBounds {
    max_salary: f64,
    equity: EquityMode,
}

impl OfferBounds {
    pub fn new(max_salary: f64, equity: EquityMode) -> Result<Self, OfferError> {
        Ok(Self {
            max_salary: MAX_SALARY.check(max_salary)?,
            equity: equity.check()?,
        })
    }

    pub fn max_salary(&self) -> f64 {
        self.max_salary
    }

    pub fn equity(&self) -> EquityMode {
        self.equity
    }
}

impl Default for OfferBounds {
    fn default() -> Self {
        Self {
            max_salary: MAX_SALARY.default,
            equity: EquityMode::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawBounds {
    max_salary: f64,
    equity: EquityMode,
}

impl TryFrom<RawBounds> for OfferBounds {
    type Error = OfferError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        OfferBounds::new(raw.max_salary, raw.equity)
    }
}

/// Slider position in `[0, 100]`.
///
/// `0` is all equity and no salary, `100` is all salary and no equity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TradeoffPosition(u8);

impl TradeoffPosition {
    pub const MIN: TradeoffPosition = TradeoffPosition(0);
    pub const MAX: TradeoffPosition = TradeoffPosition(100);

    pub fn new(raw: i64) -> Result<Self, OfferError> {
        if POSITION.contains(raw) {
            Ok(Self(raw as u8))
        } else {
            Err(OfferError::InvalidPosition(raw))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Position as a fraction of the full slider travel.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Move by `delta`, saturating at both ends.
    pub fn step(self, delta: i64) -> Self {
        Self((i64::from(self.0) + delta).clamp(0, 100) as u8)
    }
}

impl Default for TradeoffPosition {
    fn default() -> Self {
        Self(DEFAULT_POSITION as u8)
    }
}

impl TryFrom<i64> for TradeoffPosition {
    type Error = OfferError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        TradeoffPosition::new(value)
    }
}

impl From<TradeoffPosition> for i64 {
    fn from(value: TradeoffPosition) -> Self {
        i64::from(value.0)
    }
}

impl fmt::Display for TradeoffPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Equity side of an evaluated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquityValue {
    Percentage(f64),
    Shares(u64),
}

impl EquityValue {
    pub fn as_f64(self) -> f64 {
        match self {
            EquityValue::Percentage(p) => p,
            EquityValue::Shares(n) => n as f64,
        }
    }
}

/// Salary and equity at one slider position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluatedPoint {
    pub position: TradeoffPosition,
    pub salary: f64,
    pub equity: EquityValue,
}

impl EvaluatedPoint {
    pub fn equity_or_shares(&self) -> f64 {
        self.equity.as_f64()
    }
}

/// Non-numeric offer fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferMetadata {
    pub company: String,
    pub sender_name: String,
    pub granter_email: String,
    pub date: String,
    pub position_title: String,
    pub recipient_name: String,
    pub recipient_email: String,
}

impl OfferMetadata {
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Company => &self.company,
            MetadataField::SenderName => &self.sender_name,
            MetadataField::GranterEmail => &self.granter_email,
            MetadataField::Date => &self.date,
            MetadataField::PositionTitle => &self.position_title,
            MetadataField::RecipientName => &self.recipient_name,
            MetadataField::RecipientEmail => &self.recipient_email,
        }
    }
}

/// Names a metadata field (used by validation errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Company,
    SenderName,
    GranterEmail,
    Date,
    PositionTitle,
    RecipientName,
    RecipientEmail,
}

impl MetadataField {
    /// Validation order used when an offer is encoded.
    pub const REQUIRED: [MetadataField; 7] = [
        MetadataField::Company,
        MetadataField::SenderName,
        MetadataField::GranterEmail,
        MetadataField::Date,
        MetadataField::PositionTitle,
        MetadataField::RecipientName,
        MetadataField::RecipientEmail,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Company => "company",
            MetadataField::SenderName => "sender name",
            MetadataField::GranterEmail => "granter email",
            MetadataField::Date => "offer date",
            MetadataField::PositionTitle => "position title",
            MetadataField::RecipientName => "recipient name",
            MetadataField::RecipientEmail => "recipient email",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One compensation proposal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub bounds: OfferBounds,
    pub metadata: OfferMetadata,
}

/// A saved offer (JSON), so a link can be re-issued later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferFile {
    pub tool: String,
    pub created_at: DateTime<Utc>,
    pub offer: Offer,
    #[serde(default)]
    pub position: TradeoffPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_reject_out_of_range_values() {
        assert!(OfferBounds::new(-1.0, EquityMode::Percentage(1.0)).is_err());
        assert!(OfferBounds::new(10_000_001.0, EquityMode::Percentage(1.0)).is_err());
        assert!(OfferBounds::new(f64::INFINITY, EquityMode::Percentage(1.0)).is_err());
        assert!(OfferBounds::new(100.0, EquityMode::Percentage(100.5)).is_err());
        assert!(OfferBounds::new(100.0, EquityMode::Shares(100_000_001)).is_err());
        assert!(OfferBounds::new(0.0, EquityMode::Shares(0)).is_ok());
    }

    #[test]
    fn default_bounds_use_the_defaults_table() {
        let bounds = OfferBounds::default();
        assert_eq!(bounds.max_salary(), 150_000.0);
        assert_eq!(bounds.equity(), EquityMode::Percentage(1.5));
        assert_eq!(EquityMode::default_for(EquityKind::Shares), EquityMode::Shares(100_000));
        assert_eq!(TradeoffPosition::default().get(), 50);
    }

    #[test]
    fn position_steps_saturate() {
        let p = TradeoffPosition::new(97).unwrap();
        assert_eq!(p.step(5), TradeoffPosition::MAX);
        assert_eq!(TradeoffPosition::new(3).unwrap().step(-5), TradeoffPosition::MIN);
        assert_eq!(TradeoffPosition::new(101), Err(OfferError::InvalidPosition(101)));
    }

    #[test]
    fn equity_kind_wire_literals() {
        assert_eq!(EquityKind::from_wire("shares"), Some(EquityKind::Shares));
        assert_eq!(EquityKind::from_wire("Shares"), None);
        assert_eq!(EquityKind::Percentage.as_str(), "percentage");
    }

    #[test]
    fn bounds_json_is_validated_on_load() {
        let ok: OfferBounds =
            serde_json::from_str(r#"{"max_salary":120000.0,"equity":{"shares":40000}}"#).unwrap();
        assert_eq!(ok.equity(), EquityMode::Shares(40_000));

        let bad = serde_json::from_str::<OfferBounds>(
            r#"{"max_salary":120000.0,"equity":{"percentage":250.0}}"#,
        );
        assert!(bad.is_err());
    }
}
