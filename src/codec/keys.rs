//! Query keys of the offer link. These are wire literals and never localized.

pub const COMPANY: &str = "company";
pub const POSITION_TITLE: &str = "position";
pub const DATE: &str = "date";
pub const RECIPIENT_NAME: &str = "name";
pub const MAX_SALARY: &str = "maxSalary";
pub const EQUITY_TYPE: &str = "equityType";
pub const MAX_EQUITY: &str = "maxEquity";
pub const MAX_SHARES: &str = "maxShares";
pub const SLIDER_POSITION: &str = "sliderpos";
pub const GRANTER_EMAIL: &str = "email";
pub const SENDER_NAME: &str = "sender";
