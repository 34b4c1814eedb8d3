//! Reconstruction of the relay route from `Received:` entries.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::TraceError;
use crate::model::hop::{Hop, ParsedHop};
use crate::model::received::ReceivedEntry;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid bracket pattern"));
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parenthesis pattern"));

/// Parse every entry and return the hops oldest first.
///
/// The result has one element per entry; malformed entries are kept as
/// [`ParsedHop::Malformed`] so hop numbers stay aligned with the header.
pub fn reconstruct_route(entries: &[ReceivedEntry]) -> Vec<ParsedHop> {
    entries
        .iter()
        .rev()
        .map(|entry| {
            let parsed = parse_hop(entry);
            if let ParsedHop::Malformed { .. } = parsed {
                warn!(error = %TraceError::MalformedReceivedEntry(entry.to_string()), "Skipping hop");
            }
            parsed
        })
        .collect()
}

/// Parse one normalized `Received:` entry.
///
/// - `Received: by X ...` is the origin: nothing is known about the sender.
/// - `Received: from A ... by B ... [for ...]` is a transit hop. The sender's
///   annotation is looked up before `by`, the receiver's between `by` and `for`.
pub fn parse_hop(entry: &ReceivedEntry) -> ParsedHop {
    let tokens: Vec<&str> = entry.tokens().collect();
    let malformed = || ParsedHop::Malformed {
        entry: entry.to_string(),
    };

    if tokens.get(1) == Some(&"by") {
        return match tokens.get(2) {
            Some(to_host) => ParsedHop::Origin(Hop::origin(*to_host)),
            None => malformed(),
        };
    }

    let (Some(from), Some(by)) = (position(&tokens, "from", 0), position(&tokens, "by", 0)) else {
        return malformed();
    };
    let (Some(from_host), Some(to_host)) = (tokens.get(from + 1), tokens.get(by + 1)) else {
        return malformed();
    };

    let for_pos = position(&tokens, "for", by + 1).unwrap_or(tokens.len());

    ParsedHop::Transit(Hop {
        from_host: from_host.to_string(),
        from_addr: extract_annotation(&tokens[..by].join(" ")),
        to_host: to_host.to_string(),
        to_addr: extract_annotation(&tokens[by + 1..for_pos].join(" ")),
    })
}

/// Return the first `[...]` token of `text`, else the first `(...)` token,
/// else an empty string. Delimiters are included; contents are not validated.
pub fn extract_annotation(text: &str) -> String {
    BRACKETED
        .find(text)
        .or_else(|| PARENTHESIZED.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn position(tokens: &[&str], keyword: &str, start: usize) -> Option<usize> {
    tokens
        .iter()
        .skip(start)
        .position(|t| *t == keyword)
        .map(|i| i + start)
}
