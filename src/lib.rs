//! `tracemail`: analyze e-mail messages saved as plain text.
//!
//! The library extracts the basic header fields, reconstructs the relay
//! route from the `Received:` fields, and measures the delay of each hop.

pub mod config;
pub mod error;
pub mod i18n;
pub mod model;
pub mod parser;
pub mod report;
pub mod trace;
