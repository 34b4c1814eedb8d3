//! Relay hops reconstructed from `Received:` fields.

/// Host name used for the sending side of the origin hop.
pub const UNKNOWN_HOST: &str = "unknown";

/// Address annotation used for the sending side of the origin hop.
pub const NO_ADDRESS: &str = "none";

/// One transfer between two mail systems.
///
/// The `*_addr` fields hold the first bracketed or parenthesized token seen
/// next to the host (`[1.2.3.4]`, `(mail.example.com)`), or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Hop {
    pub from_host: String,
    pub from_addr: String,
    pub to_host: String,
    pub to_addr: String,
}

impl Hop {
    /// A hop with no `from` clause: the message entered the chain at `to_host`.
    pub fn origin(to_host: impl Into<String>) -> Self {
        Self {
            from_host: UNKNOWN_HOST.to_string(),
            from_addr: NO_ADDRESS.to_string(),
            to_host: to_host.into(),
            to_addr: String::new(),
        }
    }
}

/// Result of parsing a single `Received:` entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedHop {
    /// `Received: by ...` with no sending host.
    Origin(Hop),
    /// `Received: from X ... by Y ...`.
    Transit(Hop),
    /// Neither layout was recognized.
    Malformed { entry: String },
}

impl ParsedHop {
    /// The hop, unless the entry was malformed.
    pub fn hop(&self) -> Option<&Hop> {
        match self {
            Self::Origin(hop) | Self::Transit(hop) => Some(hop),
            Self::Malformed { .. } => None,
        }
    }
}

impl std::fmt::Display for Hop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} --> {} {}",
            self.from_host, self.from_addr, self.to_host, self.to_addr
        )
    }
}
