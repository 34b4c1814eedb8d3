//! Extraction of `Received:` fields from raw header lines.
//!
//! A `Received:` field may be folded over any number of physical lines. The
//! field ends where the next header field begins, recognized by its first
//! token being one of the field names present in the message.

use std::collections::HashSet;

use crate::model::received::ReceivedEntry;

/// The token that opens a `Received:` field.
const RECEIVED: &str = "Received:";

/// Header field names present in a message, each suffixed with `:`.
///
/// Comparison is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct KnownFields {
    names: HashSet<String>,
}

impl KnownFields {
    /// Build the set from bare field names (`"Subject"`, `"X-Received"`, …).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| format!("{}:", n.as_ref().trim().to_ascii_lowercase()))
            .collect();
        Self { names }
    }

    /// Whether `token` (including its trailing colon) names a known field.
    pub fn contains(&self, token: &str) -> bool {
        self.names.contains(&token.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Line-driven state machine collecting `Received:` fields.
pub struct ReceivedExtractor<'a> {
    known: &'a KnownFields,
    current: Option<String>,
    entries: Vec<ReceivedEntry>,
}

impl<'a> ReceivedExtractor<'a> {
    pub fn new(known: &'a KnownFields) -> Self {
        Self {
            known,
            current: None,
            entries: Vec::new(),
        }
    }

    /// Feed one physical line (with or without its line ending).
    pub fn push_line(&mut self, line: &str) {
        let first = line.split_whitespace().next();

        if first == Some(RECEIVED) {
            self.flush();
            self.current = Some(line.to_string());
            return;
        }

        let Some(block) = self.current.as_mut() else {
            return;
        };

        match first {
            Some(token) if self.known.contains(token) => self.flush(),
            _ => {
                block.push('\n');
                block.push_str(line);
            }
        }
    }

    /// Close any open field and return the entries in header order.
    pub fn finish(mut self) -> Vec<ReceivedEntry> {
        self.flush();
        self.entries
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            self.entries.push(ReceivedEntry::normalize(&block));
        }
    }
}

/// Collect every `Received:` field in `header_text`, most recent relay first.
pub fn extract_received(header_text: &str, known: &KnownFields) -> Vec<ReceivedEntry> {
    let mut extractor = ReceivedExtractor::new(known);
    for line in header_text.lines() {
        extractor.push_line(line);
    }
    extractor.finish()
}
