//! Time spent between consecutive relays.

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::error::{Result, TraceError};
use crate::model::delay::{Delay, DelayReport, DelayRow};
use crate::model::received::ReceivedEntry;

/// Compute the delay of every hop after the origin.
///
/// Entries come in header order (most recent first). Row `k` compares the
/// timestamps of the `k-1`-th and `k`-th oldest entries. A timestamp that
/// cannot be parsed makes that row unavailable without affecting the total.
pub fn compute_delays(entries: &[ReceivedEntry]) -> DelayReport {
    let instants: Vec<Result<DateTime<FixedOffset>>> = entries.iter().rev().map(instant).collect();
    let mut rows = Vec::with_capacity(instants.len().saturating_sub(1));
    let mut total_seconds = 0.0;

    for (i, pair) in instants.windows(2).enumerate() {
        let hop = i + 2;
        let delay = match (&pair[0], &pair[1]) {
            (Ok(earlier), Ok(later)) => {
                let seconds = seconds_between(*earlier, *later);
                total_seconds += seconds;
                Delay::Measured { seconds }
            }
            (Err(err), _) | (_, Err(err)) => {
                debug!(hop, error = %err, "Hop delay unavailable");
                Delay::Unavailable {
                    reason: err.to_string(),
                }
            }
        };
        rows.push(DelayRow { hop, delay });
    }

    let unparsed = entries
        .iter()
        .rev()
        .zip(&instants)
        .filter(|(_, at)| at.is_err())
        .map(|(entry, _)| entry.to_string())
        .collect();

    DelayReport {
        entries: entries.len(),
        rows,
        total_seconds,
        unparsed,
    }
}

fn instant(entry: &ReceivedEntry) -> Result<DateTime<FixedOffset>> {
    entry
        .timestamp()
        .instant()
        .ok_or_else(|| TraceError::UnparseableTimestamp(entry.to_string()))
}

/// Signed seconds from `earlier` to `later`, microsecond precision.
fn seconds_between(earlier: DateTime<FixedOffset>, later: DateTime<FixedOffset>) -> f64 {
    let delta = later - earlier;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_seconds() as f64,
    }
}
