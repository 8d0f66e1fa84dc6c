//! Input/output helpers.
//!
//! - offer JSON read/write (`offer_file`)

pub mod offer_file;

pub use offer_file::*;
