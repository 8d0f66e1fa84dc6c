//! `compmax` library crate.
//!
//! The binary (`compmax`) is a thin wrapper around this library so that:
//!
//! - the trade-off model and the link codec are testable without a terminal
//! - the codec can be embedded by other front-ends (web handlers, bots, etc.)

pub mod app;
pub mod cli;
pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod model;
pub mod report;
pub mod tui;
