//! A single `Received:` header field flattened to one line.

use crate::trace::timestamp::{self, TimestampMatch};

/// One `Received:` field with every whitespace run collapsed to a single
/// space, e.g. `"Received: from a.example ([1.2.3.4]) by b.example; Sat, 28 Dec 2019 18:11:46 -0800"`.
///
/// The header lists these most recent relay first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ReceivedEntry {
    text: String,
}

impl ReceivedEntry {
    /// Build an entry from raw (possibly folded) field text.
    pub fn normalize(raw: &str) -> Self {
        Self {
            text: raw.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    /// The normalized line.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-delimited tokens of the line.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ').filter(|t| !t.is_empty())
    }

    /// Locate and parse the relay timestamp carried by this entry.
    pub fn timestamp(&self) -> TimestampMatch {
        timestamp::parse_timestamp(&self.text)
    }
}

impl std::fmt::Display for ReceivedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
