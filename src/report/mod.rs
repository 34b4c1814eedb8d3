//! Rendering of analysis results: plain text, the delay table, and JSON.

pub mod json;
pub mod table;
pub mod text;
