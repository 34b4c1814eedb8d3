//! Per-file report types.

use std::path::PathBuf;

use super::delay::DelayReport;
use super::hop::ParsedHop;

/// Basic header fields printed for every message.
///
/// A `None` field was not present in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct HeaderSummary {
    pub to: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub originating_ip: Option<String>,
    pub user_agent: Option<String>,
    pub message_id: Option<String>,
}

/// Optional report sections selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sections {
    pub origin: bool,
    pub user_agent: bool,
    pub message_id: bool,
    pub route: bool,
    pub delay: bool,
}

impl Sections {
    /// Every section enabled.
    pub fn all() -> Self {
        Self {
            origin: true,
            user_agent: true,
            message_id: true,
            route: true,
            delay: true,
        }
    }
}

/// Everything reported about one message file.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MessageReport {
    pub file: PathBuf,
    pub headers: HeaderSummary,
    /// Hops oldest first; present when the route was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<Vec<ParsedHop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delays: Option<DelayReport>,
}
