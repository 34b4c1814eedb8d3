//! Per-hop delay figures.

/// Time spent on one hop.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delay {
    /// Seconds between the two relay timestamps. Negative under clock skew.
    Measured { seconds: f64 },
    /// One of the two timestamps could not be parsed.
    Unavailable { reason: String },
}

/// Delay of the hop numbered `hop` (2-based; hop 1 is the origin).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DelayRow {
    pub hop: usize,
    pub delay: Delay,
}

/// Delays for the whole chain, oldest hop first.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DelayReport {
    /// Number of `Received:` entries the report was computed from.
    pub entries: usize,
    pub rows: Vec<DelayRow>,
    /// Sum of all measured delays.
    pub total_seconds: f64,
    /// Entries whose timestamp could not be read, oldest first, each once.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unparsed: Vec<String>,
}

impl DelayReport {
    /// Rows whose delay could not be computed.
    pub fn unavailable(&self) -> impl Iterator<Item = &DelayRow> {
        self.rows
            .iter()
            .filter(|r| matches!(r.delay, Delay::Unavailable { .. }))
    }
}
