//! Loading of messages saved as plain text (`.eml`, `.txt`, saved headers).

use std::path::Path;

use mail_parser::MessageParser;
use tracing::debug;

use crate::error::{Result, TraceError};
use crate::model::received::ReceivedEntry;
use crate::parser::header;
use crate::parser::received::{self, KnownFields};

/// The header section of a message, ready for analysis.
#[derive(Debug, Clone)]
pub struct RawMessage {
    /// Decoded header text, up to (not including) the blank line before the body.
    pub header_text: String,
    /// Field names found by a structured parse of the whole message.
    pub known_fields: KnownFields,
}

impl RawMessage {
    /// `Received:` fields in header order (most recent relay first).
    pub fn received_entries(&self) -> Vec<ReceivedEntry> {
        received::extract_received(&self.header_text, &self.known_fields)
    }
}

/// Read a message file.
///
/// Fails with [`TraceError::FileNotFound`] or [`TraceError::NotARegularFile`]
/// before anything is read.
pub fn load_message(path: impl AsRef<Path>) -> Result<RawMessage> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TraceError::FileNotFound(path.to_path_buf())
        } else {
            TraceError::io(path, e)
        }
    })?;
    if !metadata.is_file() {
        return Err(TraceError::NotARegularFile(path.to_path_buf()));
    }

    let data = std::fs::read(path).map_err(|e| TraceError::io(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "Read message");
    Ok(parse_message(&data))
}

/// Split a raw message into its header text and field-name set.
pub fn parse_message(data: &[u8]) -> RawMessage {
    let header_end = find_header_end(data).unwrap_or(data.len());
    let header_text = header::decode_header_bytes(&data[..header_end]);

    let known_fields = match MessageParser::default().parse(data) {
        Some(msg) => KnownFields::from_names(msg.headers().iter().map(|h| h.name())),
        None => {
            debug!("Structured parse failed, collecting field names from header text");
            KnownFields::from_names(
                header::unfold_headers(&header_text)
                    .into_iter()
                    .map(|(name, _)| name),
            )
        }
    };

    RawMessage {
        header_text,
        known_fields,
    }
}

/// Find the byte offset where headers end (position of the first blank line).
fn find_header_end(data: &[u8]) -> Option<usize> {
    for i in 0..data.len().saturating_sub(1) {
        if data[i] == b'\n' && data[i + 1] == b'\n' {
            return Some(i);
        }
        if data[i..].starts_with(b"\r\n\r\n") {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_end() {
        let data = b"From: a@b.com\nSubject: Hi\n\nBody\n";
        assert_eq!(find_header_end(data), Some(25));
    }

    #[test]
    fn test_find_header_end_crlf() {
        let data = b"From: a@b.com\r\nSubject: Hi\r\n\r\nBody\r\n";
        assert_eq!(find_header_end(data), Some(26));
    }

    #[test]
    fn test_body_is_excluded() {
        let data = b"Received: by mx.example; Sat, 28 Dec 2019 18:11:46 -0800\n\
                     Subject: Hi\n\nReceived: by body.example; not a header\n";
        let message = parse_message(data);
        assert!(!message.header_text.contains("body.example"));
        assert_eq!(message.received_entries().len(), 1);
    }

    #[test]
    fn test_known_fields_from_structured_parse() {
        let data = b"Received: by mx.example; Sat, 28 Dec 2019 18:11:46 -0800\n\
                     X-Custom-Header: 1\nSubject: Hi\n\nbody\n";
        let message = parse_message(data);
        assert!(message.known_fields.contains("X-Custom-Header:"));
        assert!(message.known_fields.contains("Subject:"));
        assert!(message.known_fields.contains("Received:"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_message("/definitely/not/here.eml").unwrap_err();
        assert!(matches!(err, TraceError::FileNotFound(_)));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_message(dir.path()).unwrap_err();
        assert!(matches!(err, TraceError::NotARegularFile(_)));
    }
}
