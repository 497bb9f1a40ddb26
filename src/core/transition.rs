use crate::core::types::{DateRange, Instant};

pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 700;

/// Linear interpolation of the displayed bounds from one range to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsTransition {
    from: DateRange,
    to: DateRange,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl BoundsTransition {
    #[must_use]
    pub fn new(from: DateRange, to: DateRange, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    #[must_use]
    pub fn target(self) -> DateRange {
        self.to
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Moves the transition forward and returns the bounds for the new frame.
    pub fn advance(&mut self, delta_ms: u64) -> DateRange {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        self.current()
    }

    #[must_use]
    pub fn current(self) -> DateRange {
        if self.is_finished() {
            return self.to;
        }

        let (elapsed, duration) = (self.elapsed_ms, self.duration_ms);
        let lower = interpolate(self.from.lower(), self.to.lower(), elapsed, duration);
        let upper = interpolate(self.from.upper(), self.to.upper(), elapsed, duration);
        // Both ends move linearly between ordered pairs, so they stay ordered.
        DateRange::new(lower, upper).unwrap_or(self.to)
    }
}

fn interpolate(from: Instant, to: Instant, elapsed_ms: u64, duration_ms: u64) -> Instant {
    let from = i128::from(from.millis());
    let to = i128::from(to.millis());
    let value = from + (to - from) * i128::from(elapsed_ms) / i128::from(duration_ms);
    Instant::from_millis(value as i64)
}
