//! Trade-off computation.
//!
//! The model is a small, pure function of the offer bounds and the slider
//! position so front-ends can call it on every slider tick.

pub mod offer;

pub use offer::*;
