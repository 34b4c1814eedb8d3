//! Message parsing: file loading, header decoding and `Received:` extraction.

pub mod eml;
pub mod header;
pub mod received;
