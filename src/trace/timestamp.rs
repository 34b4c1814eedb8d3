//! Relay timestamps carried by `Received:` fields.
//!
//! MTAs surround the date with their own prose, so each accepted form is
//! searched for anywhere in the line. Forms are tried in order and the first
//! one that yields a valid date wins.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset};
use regex::Regex;
use tracing::debug;

/// The layout a timestamp was recognized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampForm {
    /// `Sat, 28 Dec 2019 18:11:46 -0800`
    Rfc2822,
    /// `Tue, 21 Jan 2020 17:45:40.233 +0000`
    Rfc2822Fractional,
    /// `2020-01-21 17:45:40.209405196 +0000`
    IsoFractional,
}

/// Outcome of looking for a timestamp in one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampMatch {
    Parsed {
        form: TimestampForm,
        at: DateTime<FixedOffset>,
    },
    Unparsed,
}

impl TimestampMatch {
    /// The parsed instant, if any.
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Parsed { at, .. } => Some(*at),
            Self::Unparsed => None,
        }
    }
}

static FORMS: LazyLock<[(TimestampForm, Regex); 3]> = LazyLock::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("valid timestamp pattern");
    [
        (
            TimestampForm::Rfc2822,
            re(r"\S{3},[ ]{1,5}(?P<date>[0-9]{1,2} \S{3} [0-9]{1,4} [0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4})"),
        ),
        (
            TimestampForm::Rfc2822Fractional,
            re(r"\S{3},[ ]{1,5}(?P<date>[0-9]{1,2} \S{3} [0-9]{1,4} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{1,10} [+-][0-9]{4})"),
        ),
        (
            TimestampForm::IsoFractional,
            re(r"(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{1,10} [+-][0-9]{4})"),
        ),
    ]
});

/// Find and parse the timestamp in a normalized `Received:` line.
pub fn parse_timestamp(line: &str) -> TimestampMatch {
    for (form, pattern) in FORMS.iter() {
        let Some(date) = pattern.captures(line).and_then(|caps| caps.name("date")) else {
            continue;
        };
        match to_datetime(*form, date.as_str()) {
            Some(at) => return TimestampMatch::Parsed { form: *form, at },
            None => debug!(form = ?form, text = date.as_str(), "Timestamp out of range"),
        }
    }
    debug!(line, "No recognized timestamp");
    TimestampMatch::Unparsed
}

/// Parse the located date text. The leading weekday is not part of `text`,
/// so a weekday that disagrees with the date does not reject it.
fn to_datetime(form: TimestampForm, text: &str) -> Option<DateTime<FixedOffset>> {
    match form {
        TimestampForm::Rfc2822 => DateTime::parse_from_rfc2822(text).ok(),
        TimestampForm::Rfc2822Fractional => {
            DateTime::parse_from_str(text, "%d %b %Y %H:%M:%S%.f %z")
                .ok()
                .and_then(expand_short_year)
        }
        TimestampForm::IsoFractional => {
            DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f %z").ok()
        }
    }
}

/// Obsolete short years (RFC 5322 §4.3): 00-49 → 20xx, 50-999 → +1900.
fn expand_short_year(at: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    match at.year() {
        0..=49 => at.with_year(at.year() + 2000),
        50..=999 => at.with_year(at.year() + 1900),
        _ => Some(at),
    }
}
