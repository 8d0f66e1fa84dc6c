//! Reporting: formatted terminal output and outbound message drafts.

pub mod format;
pub mod message;

pub use format::*;
pub use message::*;
