use crate::core::types::{AxisOrientation, DateRange, Instant};
use crate::error::{DateAxisError, DateAxisResult};

/// Linear mapping between instants and pixel offsets along one axis.
///
/// The range passed in is whatever the host currently displays, which may be
/// an interpolated frame of a running transition rather than the target range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    lower: Instant,
    upper: Instant,
    axis_length_px: f64,
    orientation: AxisOrientation,
}

impl RangeMapper {
    pub fn new(
        range: DateRange,
        axis_length_px: f64,
        orientation: AxisOrientation,
    ) -> DateAxisResult<Self> {
        if range.is_degenerate() {
            return Err(DateAxisError::InvalidRange {
                lower: range.lower(),
                upper: range.upper(),
            });
        }
        if !axis_length_px.is_finite() || axis_length_px <= 0.0 {
            return Err(DateAxisError::InvalidAxisLength(axis_length_px));
        }

        Ok(Self {
            lower: range.lower(),
            upper: range.upper(),
            axis_length_px,
            orientation,
        })
    }

    #[must_use]
    pub fn range(self) -> (Instant, Instant) {
        (self.lower, self.upper)
    }

    #[must_use]
    pub fn axis_length_px(self) -> f64 {
        self.axis_length_px
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    fn span(self) -> f64 {
        millis_between(self.lower, self.upper)
    }

    /// Pixel offset of `date`. Vertical axes grow upward from the bottom edge.
    #[must_use]
    pub fn display_position(self, date: Instant) -> f64 {
        let fraction = millis_between(self.lower, date) / self.span();
        let offset = fraction * self.axis_length_px;
        if self.orientation.is_vertical() {
            self.axis_length_px - offset
        } else {
            offset
        }
    }

    /// Inverse of [`RangeMapper::display_position`], rounded to the nearest millisecond.
    pub fn value_for_display(self, pixel: f64) -> DateAxisResult<Instant> {
        if !pixel.is_finite() {
            return Err(DateAxisError::InvalidData("pixel must be finite".to_owned()));
        }

        let offset = if self.orientation.is_vertical() {
            self.axis_length_px - pixel
        } else {
            pixel
        };
        let fraction = offset / self.axis_length_px;
        let millis = (self.lower.millis() as f64 + fraction * self.span()).round();
        if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
            return Err(DateAxisError::InvalidData(
                "pixel maps outside the instant range".to_owned(),
            ));
        }
        Ok(Instant::from_millis(millis as i64))
    }

    /// True when `date` lies strictly between the bounds.
    #[must_use]
    pub fn is_value_on_axis(self, date: Instant) -> bool {
        date > self.lower && date < self.upper
    }
}

// Widened so extreme instants on either side cannot overflow.
fn millis_between(from: Instant, to: Instant) -> f64 {
    (i128::from(to.millis()) - i128::from(from.millis())) as f64
}

/// One-shot form of [`RangeMapper::display_position`].
pub fn display_position(
    date: Instant,
    range: DateRange,
    axis_length_px: f64,
    orientation: AxisOrientation,
) -> DateAxisResult<f64> {
    Ok(RangeMapper::new(range, axis_length_px, orientation)?.display_position(date))
}

/// One-shot form of [`RangeMapper::value_for_display`].
pub fn value_for_display(
    pixel: f64,
    range: DateRange,
    axis_length_px: f64,
    orientation: AxisOrientation,
) -> DateAxisResult<Instant> {
    RangeMapper::new(range, axis_length_px, orientation)?.value_for_display(pixel)
}
