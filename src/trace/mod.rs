//! Message analysis: route reconstruction, relay timestamps and hop delays.

pub mod delay;
pub mod route;
pub mod timestamp;

use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::model::message::{MessageReport, Sections};
use crate::parser::eml::{self, RawMessage};
use crate::parser::header;

/// Load and analyze one message file.
pub fn analyze_file(path: &Path, sections: Sections) -> Result<MessageReport> {
    info!(path = %path.display(), "Analyzing message");
    let message = eml::load_message(path)?;
    Ok(analyze_message(path, &message, sections))
}

/// Build the report for an already loaded message.
///
/// The route and delay report are only computed for the sections requested.
pub fn analyze_message(path: &Path, message: &RawMessage, sections: Sections) -> MessageReport {
    let headers = header::summarize_headers(&message.header_text);

    let (route, delays) = if sections.route || sections.delay {
        let entries = message.received_entries();
        debug!(
            received = entries.len(),
            known_fields = message.known_fields.len(),
            "Extracted Received fields"
        );
        (
            sections.route.then(|| route::reconstruct_route(&entries)),
            sections.delay.then(|| delay::compute_delays(&entries)),
        )
    } else {
        (None, None)
    };

    MessageReport {
        file: path.to_path_buf(),
        headers,
        route,
        delays,
    }
}
