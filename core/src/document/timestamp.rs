//! document/timestamp.rs
//! Canonical timestamp representation on the wire.
//!
//! Policy: timestamps are always written in UTC. Reading accepts any RFC 3339
//! offset and normalizes to UTC.
//!
//! Years outside 0000..=9999 are written in ISO 8601 expanded form
//! (`+10000-01-01T...`, `-0001-01-01T...`), which RFC 3339 does not cover;
//! reading falls back to a pattern that accepts the sign.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::types::{Scalar, ScalarKind};

/// Mirrors `to_rfc3339_opts` output; `%Y` takes a signed expanded year.
const ISO_EXPANDED_YEAR: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";

/// How timestamps map to wire scalars.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2024-05-01T09:30:00.125+00:00`
    #[default]
    Iso8601Millis,
    /// `2024-05-01T09:30:00.125431+00:00`
    Iso8601Micros,
    /// Integer milliseconds since the Unix epoch.
    UnixMillis,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected {expected} scalar, found {found}")]
    Kind { expected: ScalarKind, found: ScalarKind },

    #[error("unparsable timestamp: {raw}")]
    Format { raw: String },
}

impl TimestampFormat {
    /// Scalar kind this format writes and expects back.
    pub fn scalar_kind(self) -> ScalarKind {
        match self {
            TimestampFormat::Iso8601Millis | TimestampFormat::Iso8601Micros => ScalarKind::Text,
            TimestampFormat::UnixMillis => ScalarKind::Integer,
        }
    }

    pub fn format(self, ts: &DateTime<Utc>) -> Scalar {
        match self {
            TimestampFormat::Iso8601Millis => Scalar::Text(ts.to_rfc3339_opts(SecondsFormat::Millis, false)),
            TimestampFormat::Iso8601Micros => Scalar::Text(ts.to_rfc3339_opts(SecondsFormat::Micros, false)),
            TimestampFormat::UnixMillis    => Scalar::Integer(ts.timestamp_millis()),
        }
    }

    pub fn parse(self, scalar: &Scalar) -> Result<DateTime<Utc>, TimestampError> {
        match (self.scalar_kind(), scalar) {
            (ScalarKind::Text, Scalar::Text(raw)) => DateTime::parse_from_rfc3339(raw)
                .or_else(|_| DateTime::parse_from_str(raw, ISO_EXPANDED_YEAR))
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| TimestampError::Format { raw: raw.clone() }),
            (ScalarKind::Integer, Scalar::Integer(ms)) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .ok_or_else(|| TimestampError::Format { raw: ms.to_string() }),
            (expected, other) => Err(TimestampError::Kind { expected, found: other.kind() }),
        }
    }

    /// Drop sub-second digits this format cannot carry.
    /// `parse(format(ts)) == truncate(ts)` for every `ts`.
    pub fn truncate(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimestampFormat::Iso8601Millis | TimestampFormat::UnixMillis => ts.trunc_subsecs(3),
            TimestampFormat::Iso8601Micros => ts.trunc_subsecs(6),
        }
    }
}
