//! Numeric field limits, defaults, and the tolerant-default parser.
//!
//! Every numeric offer field is described once by a `NumericField`. The same
//! range predicate (`NumericField::check`) backs both:
//!
//! - strict validation when an offer is constructed, and
//! - field-by-field fallback when a link is decoded (`parse_with_default`).

use std::fmt::Display;
use std::str::FromStr;

use crate::error::OfferError;

/// Default maximum salary.
pub const DEFAULT_MAX_SALARY: f64 = 150_000.0;
/// Default maximum equity, in percent.
pub const DEFAULT_MAX_EQUITY_PERCENT: f64 = 1.5;
/// Default maximum share count.
pub const DEFAULT_MAX_SHARES: u64 = 100_000;
/// Default slider position (halfway).
pub const DEFAULT_POSITION: i64 = 50;

/// A number that can travel through a link parameter.
pub trait WireNumber: Copy + PartialOrd + FromStr + Display {
    fn is_finite_number(self) -> bool {
        true
    }

    /// Canonical form of an accepted value.
    fn normalized(self) -> Self {
        self
    }
}

impl WireNumber for f64 {
    fn is_finite_number(self) -> bool {
        self.is_finite()
    }

    // `-0` parses to negative zero, which would render as `-0.00%`.
    fn normalized(self) -> Self {
        self + 0.0
    }
}

impl WireNumber for u64 {}

impl WireNumber for i64 {}

/// Declared range and default of one numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub default: T,
}

pub const MAX_SALARY: NumericField<f64> = NumericField {
    name: "Maximum salary",
    min: 0.0,
    max: 10_000_000.0,
    default: DEFAULT_MAX_SALARY,
};

pub const MAX_EQUITY_PERCENT: NumericField<f64> = NumericField {
    name: "Maximum equity",
    min: 0.0,
    max: 100.0,
    default: DEFAULT_MAX_EQUITY_PERCENT,
};

pub const MAX_SHARES: NumericField<u64> = NumericField {
    name: "Maximum shares",
    min: 0,
    max: 100_000_000,
    default: DEFAULT_MAX_SHARES,
};

pub const POSITION: NumericField<i64> = NumericField {
    name: "Trade-off position",
    min: 0,
    max: 100,
    default: DEFAULT_POSITION,
};

impl<T: WireNumber> NumericField<T> {
    /// Whether `value` is finite and inside `[min, max]`.
    pub fn contains(&self, value: T) -> bool {
        value.is_finite_number() && value >= self.min && value <= self.max
    }

    /// Strict check used at construction time.
    pub fn check(&self, value: T) -> Result<T, OfferError> {
        if self.contains(value) {
            Ok(value.normalized())
        } else {
            Err(OfferError::InvalidBounds {
                field: self.name,
                value: value.to_string(),
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }

    /// Parse a raw parameter; `None` if it is absent, empty, non-numeric or out of range.
    pub fn parse(&self, raw: Option<&str>) -> Option<T> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<T>().ok())
            .filter(|v| self.contains(*v))
            .map(WireNumber::normalized)
    }

    /// Tolerant parse: anything `parse` rejects yields the default.
    pub fn parse_with_default(&self, raw: Option<&str>) -> T {
        self.parse(raw).unwrap_or(self.default)
    }
}
