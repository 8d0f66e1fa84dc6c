//! `OfferModel`: maps a slider position onto the salary/equity frontier.
//!
//! The frontier is linear:
//!
//! - `salary = max_salary * (position / 100)`
//! - `equity = max_equity * (1 - position / 100)`
//!
//! Share counts are rounded to the nearest whole share; percentages stay real.

use crate::domain::{EquityMode, EquityValue, EvaluatedPoint, OfferBounds, TradeoffPosition};
use crate::error::OfferError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OfferModel {
    bounds: OfferBounds,
}

impl OfferModel {
    /// Validate the bounds and build a model.
    pub fn construct(max_salary: f64, equity: EquityMode) -> Result<Self, OfferError> {
        Ok(Self {
            bounds: OfferBounds::new(max_salary, equity)?,
        })
    }

    pub fn from_bounds(bounds: OfferBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &OfferBounds {
        &self.bounds
    }

    /// Evaluate at a raw slider value; rejects anything outside `[0, 100]`.
    pub fn evaluate(&self, position: i64) -> Result<EvaluatedPoint, OfferError> {
        Ok(self.evaluate_at(TradeoffPosition::new(position)?))
    }

    pub fn evaluate_at(&self, position: TradeoffPosition) -> EvaluatedPoint {
        let f = position.fraction();
        let remaining = 1.0 - f;

        let equity = match self.bounds.equity() {
            EquityMode::Percentage(max) => EquityValue::Percentage(max * remaining),
            EquityMode::Shares(max) => EquityValue::Shares((max as f64 * remaining).round() as u64),
        };

        EvaluatedPoint {
            position,
            salary: self.bounds.max_salary() * f,
            equity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_offer_at_quarter_position() {
        let model = OfferModel::construct(200_000.0, EquityMode::Percentage(4.0)).unwrap();
        let point = model.evaluate(25).unwrap();
        assert_eq!(point.salary, 50_000.0);
        assert_eq!(point.equity, EquityValue::Percentage(3.0));
    }

    #[test]
    fn shares_offer_rounds_to_whole_shares() {
        let model = OfferModel::construct(120_000.0, EquityMode::Shares(40_000)).unwrap();
        let point = model.evaluate(70).unwrap();
        assert!((point.salary - 84_000.0).abs() < 1e-6);
        assert_eq!(point.equity, EquityValue::Shares(12_000));

        let odd = OfferModel::construct(1.0, EquityMode::Shares(3)).unwrap();
        assert_eq!(odd.evaluate(50).unwrap().equity, EquityValue::Shares(2));
    }

    #[test]
    fn endpoints_are_exact() {
        let model = OfferModel::construct(987_654.321, EquityMode::Percentage(7.77)).unwrap();
        let start = model.evaluate(0).unwrap();
        let end = model.evaluate(100).unwrap();
        assert_eq!(start.salary, 0.0);
        assert_eq!(start.equity_or_shares(), 7.77);
        assert_eq!(end.salary, 987_654.321);
        assert_eq!(end.equity_or_shares(), 0.0);
    }

    #[test]
    fn evaluate_rejects_positions_off_the_slider() {
        let model = OfferModel::default();
        assert_eq!(model.evaluate(-1), Err(OfferError::InvalidPosition(-1)));
        assert_eq!(model.evaluate(101), Err(OfferError::InvalidPosition(101)));
    }

    #[test]
    fn construct_rejects_invalid_bounds() {
        assert!(OfferModel::construct(f64::NAN, EquityMode::Percentage(1.0)).is_err());
        assert!(OfferModel::construct(1000.0, EquityMode::Percentage(-0.5)).is_err());
    }
}
