use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DateAxisError, DateAxisResult};

/// Absolute point in time as milliseconds since the unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    #[must_use]
    pub fn from_datetime<Tz: chrono::TimeZone>(time: &DateTime<Tz>) -> Self {
        Self(time.timestamp_millis())
    }

    /// Returns `None` when the instant lies outside chrono's representable range.
    #[must_use]
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(&value)
    }
}

/// Displayed time range. `lower <= upper` always holds; equality marks a
/// single-point dataset that still needs padding before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    lower: Instant,
    upper: Instant,
}

impl DateRange {
    pub fn new(lower: Instant, upper: Instant) -> DateAxisResult<Self> {
        if lower > upper {
            return Err(DateAxisError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn point(at: Instant) -> Self {
        Self {
            lower: at,
            upper: at,
        }
    }

    #[must_use]
    pub fn lower(self) -> Instant {
        self.lower
    }

    #[must_use]
    pub fn upper(self) -> Instant {
        self.upper
    }

    #[must_use]
    pub fn span_millis(self) -> i64 {
        self.upper.millis().saturating_sub(self.lower.millis())
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.lower == self.upper
    }

    /// Widens the range symmetrically until its span reaches `min_span_ms`.
    #[must_use]
    pub fn padded_to_min_span(self, min_span_ms: i64) -> Self {
        let missing = min_span_ms.saturating_sub(self.span_millis());
        if missing <= 0 {
            return self;
        }
        let below = missing / 2;
        let above = missing - below;
        Self {
            lower: Instant::from_millis(self.lower.millis().saturating_sub(below)),
            upper: Instant::from_millis(self.upper.millis().saturating_add(above)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl AxisOrientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}
