use crate::core::types::{DateRange, Instant};
use crate::error::{DateAxisError, DateAxisResult};

/// Fits a range over `data`, using the current wall clock for empty data.
#[must_use]
pub fn fit_data_range(data: &[Instant]) -> DateRange {
    fit_data_range_at(data, Instant::now())
}

/// Fits a range over `data`.
///
/// Empty data collapses to `now`; a single point collapses to itself. Both
/// results are degenerate and must be padded before mapping.
#[must_use]
pub fn fit_data_range_at(data: &[Instant], now: Instant) -> DateRange {
    let mut iter = data.iter().copied();
    let Some(first) = iter.next() else {
        return DateRange::point(now);
    };

    let (min, max) = iter.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });
    // min <= max by construction of the fold.
    DateRange::new(min, max).unwrap_or(DateRange::point(min))
}

/// Resolves explicit bounds; both are mandatory when auto-ranging is off.
pub fn manual_range(lower: Option<Instant>, upper: Option<Instant>) -> DateAxisResult<DateRange> {
    let lower = lower.ok_or(DateAxisError::MissingBound { bound: "lower" })?;
    let upper = upper.ok_or(DateAxisError::MissingBound { bound: "upper" })?;
    DateRange::new(lower, upper)
}

#[cfg(test)]
mod tests {
    use super::{fit_data_range_at, manual_range};
    use crate::core::types::Instant;
    use crate::error::DateAxisError;

    #[test]
    fn empty_data_collapses_to_now() {
        let now = Instant::from_millis(42);
        let range = fit_data_range_at(&[], now);
        assert_eq!((range.lower(), range.upper()), (now, now));
    }

    #[test]
    fn single_point_collapses_to_itself() {
        let point = Instant::from_millis(9);
        let range = fit_data_range_at(&[point], Instant::from_millis(0));
        assert!(range.is_degenerate());
        assert_eq!(range.lower(), point);
    }

    #[test]
    fn unsorted_data_uses_min_and_max() {
        let data = [30, 10, 50, 20].map(Instant::from_millis);
        let range = fit_data_range_at(&data, Instant::from_millis(0));
        assert_eq!(range.lower().millis(), 10);
        assert_eq!(range.upper().millis(), 50);
    }

    #[test]
    fn manual_range_requires_both_bounds() {
        let err = manual_range(Some(Instant::from_millis(1)), None).expect_err("missing upper");
        assert_eq!(err, DateAxisError::MissingBound { bound: "upper" });
        let err = manual_range(None, Some(Instant::from_millis(1))).expect_err("missing lower");
        assert_eq!(err, DateAxisError::MissingBound { bound: "lower" });
    }
}
