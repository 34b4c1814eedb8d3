//! Data model: received entries, hops, delays and per-file reports.

pub mod delay;
pub mod hop;
pub mod message;
pub mod received;
