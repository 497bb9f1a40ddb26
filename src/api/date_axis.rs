use tracing::{debug, warn};

use crate::core::{
    AxisOrientation, BoundsTransition, DateRange, Instant, Interval, RangeMapper, fit_data_range,
    manual_range,
};
use crate::error::{DateAxisError, DateAxisResult};

use super::tick_label_format::{TickLabelFormatterFn, format_tick};
use super::tick_planner::{TickPlan, TickRequest, plan_ticks};
use super::DateAxisConfig;

/// Result of one layout pass: the target range, its ticks and their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    pub range: DateRange,
    pub plan: TickPlan,
    pub labels: Vec<String>,
}

/// Stateful date axis owned by a host widget.
///
/// Tracks the fitted data range, the target bounds and the currently
/// displayed bounds (which trail the target while a transition runs).
pub struct DateAxis {
    config: DateAxisConfig,
    data_range: Option<DateRange>,
    current_range: Option<DateRange>,
    transition: Option<BoundsTransition>,
    tick_label_formatter: Option<TickLabelFormatterFn>,
}

impl DateAxis {
    pub fn new(config: DateAxisConfig) -> DateAxisResult<Self> {
        let config = config.validate()?;
        let current_range = if config.auto_ranging {
            None
        } else {
            match (config.lower_bound, config.upper_bound) {
                (Some(lower), Some(upper)) => Some(DateRange::new(lower, upper)?),
                _ => None,
            }
        };

        Ok(Self {
            config,
            data_range: None,
            current_range,
            transition: None,
            tick_label_formatter: None,
        })
    }

    /// Creates a manually ranged axis with fixed bounds.
    pub fn with_bounds(axis_length_px: f64, lower: Instant, upper: Instant) -> DateAxisResult<Self> {
        Self::new(DateAxisConfig::new(axis_length_px).with_bounds(lower, upper))
    }

    #[must_use]
    pub fn config(&self) -> DateAxisConfig {
        self.config
    }

    pub fn set_axis_length(&mut self, axis_length_px: f64) -> DateAxisResult<()> {
        let mut next = self.config;
        next.axis_length_px = axis_length_px;
        self.config = next.validate()?;
        Ok(())
    }

    pub fn set_orientation(&mut self, orientation: AxisOrientation) {
        self.config.orientation = orientation;
    }

    pub fn set_auto_ranging(&mut self, auto_ranging: bool) -> DateAxisResult<()> {
        self.config.auto_ranging = auto_ranging;
        self.sync_manual_bounds()
    }

    /// Stores the bound; in manual mode an inverted pair is reported and the
    /// previously displayed range is kept.
    pub fn set_lower_bound(&mut self, lower: Instant) -> DateAxisResult<()> {
        self.config.lower_bound = Some(lower);
        self.sync_manual_bounds()
    }

    /// See [`DateAxis::set_lower_bound`].
    pub fn set_upper_bound(&mut self, upper: Instant) -> DateAxisResult<()> {
        self.config.upper_bound = Some(upper);
        self.sync_manual_bounds()
    }

    /// In manual mode the displayed bounds follow the configured ones directly.
    fn sync_manual_bounds(&mut self) -> DateAxisResult<()> {
        if self.config.auto_ranging {
            return Ok(());
        }
        if let (Some(lower), Some(upper)) = (self.config.lower_bound, self.config.upper_bound) {
            let range = DateRange::new(lower, upper).inspect_err(|err| {
                warn!(error = %err, "date axis manual bounds are inverted");
            })?;
            self.transition = None;
            self.current_range = Some(range);
        }
        Ok(())
    }

    pub fn set_tick_label_formatter(&mut self, formatter: TickLabelFormatterFn) {
        self.tick_label_formatter = Some(formatter);
    }

    pub fn clear_tick_label_formatter(&mut self) {
        self.tick_label_formatter = None;
    }

    /// Records the data extent used while auto-ranging.
    pub fn invalidate_range(&mut self, data: &[Instant]) {
        let fitted = fit_data_range(data);
        debug!(
            count = data.len(),
            lower = %fitted.lower(),
            upper = %fitted.upper(),
            "fit date axis data range"
        );
        self.data_range = Some(fitted);
    }

    /// Range the axis should display next.
    pub fn auto_range(&self) -> DateAxisResult<DateRange> {
        if self.config.auto_ranging {
            return Ok(self.data_range.unwrap_or_else(|| fit_data_range(&[])));
        }

        manual_range(self.config.lower_bound, self.config.upper_bound).inspect_err(|err| {
            warn!(error = %err, "date axis manual bounds are incomplete");
        })
    }

    /// Applies a new target range, animating the displayed bounds when asked.
    pub fn set_range(&mut self, range: DateRange, animating: bool) {
        let previous = self.current_range.unwrap_or(range);
        self.config.lower_bound = Some(range.lower());
        self.config.upper_bound = Some(range.upper());

        if animating && self.config.transition_duration_ms > 0 && previous != range {
            debug!(
                from_lower = %previous.lower(),
                from_upper = %previous.upper(),
                to_lower = %range.lower(),
                to_upper = %range.upper(),
                duration_ms = self.config.transition_duration_ms,
                "start date axis transition"
            );
            self.transition = Some(BoundsTransition::new(
                previous,
                range,
                self.config.transition_duration_ms,
            ));
            self.current_range = Some(previous);
        } else {
            self.transition = None;
            self.current_range = Some(range);
        }
    }

    /// Moves a running transition forward; returns the displayed bounds.
    pub fn advance_transition(&mut self, delta_ms: u64) -> Option<DateRange> {
        if let Some(transition) = self.transition.as_mut() {
            let frame = transition.advance(delta_ms);
            self.current_range = Some(frame);
            if transition.is_finished() {
                self.transition = None;
            }
        }
        self.current_range
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Bounds currently on screen, which the pixel mapping uses.
    #[must_use]
    pub fn current_range(&self) -> Option<DateRange> {
        self.current_range
    }

    /// Mapper over the displayed bounds, padded to the configured minimum span.
    pub fn mapper(&self) -> DateAxisResult<RangeMapper> {
        let range = self.current_range.ok_or_else(|| {
            DateAxisError::InvalidConfig("date axis has no displayed range yet".to_owned())
        })?;
        RangeMapper::new(
            range.padded_to_min_span(self.config.min_span_ms),
            self.config.axis_length_px,
            self.config.orientation,
        )
    }

    pub fn map_to_pixel(&self, instant: Instant) -> DateAxisResult<f64> {
        Ok(self.mapper()?.display_position(instant))
    }

    pub fn map_from_pixel(&self, pixel: f64) -> DateAxisResult<Instant> {
        self.mapper()?.value_for_display(pixel)
    }

    #[must_use]
    pub fn is_value_on_axis(&self, instant: Instant) -> bool {
        self.current_range
            .is_some_and(|range| instant > range.lower() && instant < range.upper())
    }

    #[must_use]
    pub fn to_numeric_value(&self, instant: Instant) -> f64 {
        instant.millis() as f64
    }

    /// Truncates toward zero like an integer cast.
    pub fn to_real_value(&self, value: f64) -> DateAxisResult<Instant> {
        if !value.is_finite() || value >= (i64::MAX as f64) || value < (i64::MIN as f64) {
            return Err(DateAxisError::InvalidData(format!(
                "{value} is not a representable instant"
            )));
        }
        Ok(Instant::from_millis(value.trunc() as i64))
    }

    /// Plans ticks for `range` with this axis' length, density and timezone.
    pub fn plan_ticks(&self, range: DateRange) -> DateAxisResult<TickPlan> {
        plan_ticks(
            TickRequest::new(range, self.config.axis_length_px)
                .with_average_tick_gap(self.config.average_tick_gap_px)
                .with_timezone(self.config.timezone),
        )
    }

    /// Labels `instant` using the interval of the plan it came from.
    #[must_use]
    pub fn format_tick(&self, instant: Instant, selected_interval: Interval) -> String {
        format_tick(
            instant,
            selected_interval,
            self.config.locale,
            self.config.timezone,
            self.tick_label_formatter.as_ref(),
        )
    }

    #[must_use]
    pub fn tick_labels(&self, plan: &TickPlan) -> Vec<String> {
        plan.ticks
            .iter()
            .map(|tick| self.format_tick(tick.instant, plan.selected_interval))
            .collect()
    }

    /// Resolves the range, applies it and plans labelled ticks for it.
    ///
    /// Only auto-ranged changes after the first layout are animated; manual
    /// bounds always snap.
    pub fn layout(&mut self) -> DateAxisResult<AxisLayout> {
        let range = self.auto_range()?;
        let animating =
            self.config.animated && self.config.auto_ranging && self.current_range.is_some();
        self.set_range(range, animating);

        let plan = self.plan_ticks(range)?;
        let labels = self.tick_labels(&plan);
        Ok(AxisLayout {
            range,
            plan,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DateAxis;
    use crate::api::DateAxisConfig;
    use crate::core::{DateRange, Instant};
    use crate::error::DateAxisError;

    fn range(lower: i64, upper: i64) -> DateRange {
        DateRange::new(Instant::from_millis(lower), Instant::from_millis(upper)).expect("valid")
    }

    #[test]
    fn manual_axis_without_upper_bound_fails_layout() {
        let mut config = DateAxisConfig::new(400.0);
        config.auto_ranging = false;
        config.lower_bound = Some(Instant::from_millis(0));
        let mut axis = DateAxis::new(config).expect("axis");

        let err = axis.layout().expect_err("missing bound");
        assert_eq!(err, DateAxisError::MissingBound { bound: "upper" });
    }

    #[test]
    fn animated_range_change_trails_target() {
        let mut axis = DateAxis::new(DateAxisConfig::new(400.0).with_animation(700)).expect("axis");
        axis.set_range(range(0, 1_000), false);
        axis.set_range(range(1_000, 3_000), true);

        assert!(axis.is_animating());
        assert_eq!(axis.current_range(), Some(range(0, 1_000)));
        assert_eq!(axis.advance_transition(350), Some(range(500, 2_000)));
        assert_eq!(axis.advance_transition(350), Some(range(1_000, 3_000)));
        assert!(!axis.is_animating());
    }

    #[test]
    fn inverted_manual_bound_is_reported_and_keeps_previous_range() {
        let config = DateAxisConfig::new(400.0)
            .with_bounds(Instant::from_millis(0), Instant::from_millis(1_000));
        let mut axis = DateAxis::new(config).expect("axis");

        let err = axis.set_lower_bound(Instant::from_millis(5_000)).expect_err("inverted");
        assert_eq!(
            err,
            DateAxisError::InvalidRange {
                lower: Instant::from_millis(5_000),
                upper: Instant::from_millis(1_000),
            }
        );
        assert_eq!(axis.current_range(), Some(range(0, 1_000)));

        axis.set_upper_bound(Instant::from_millis(9_000)).expect("ordered again");
        assert_eq!(axis.current_range(), Some(range(5_000, 9_000)));
    }

    #[test]
    fn manual_layout_snaps_even_when_animated() {
        let config = DateAxisConfig::new(400.0)
            .with_bounds(Instant::from_millis(0), Instant::from_millis(1_000))
            .with_animation(700);
        let mut axis = DateAxis::new(config).expect("axis");
        axis.layout().expect("first layout");

        axis.set_upper_bound(Instant::from_millis(4_000)).expect("ordered");
        axis.layout().expect("second layout");
        assert!(!axis.is_animating());
        assert_eq!(axis.current_range(), Some(range(0, 4_000)));
    }

    #[test]
    fn mapping_without_range_is_an_error() {
        let axis = DateAxis::new(DateAxisConfig::new(400.0)).expect("axis");
        assert!(axis.map_to_pixel(Instant::from_millis(0)).is_err());
    }

    #[test]
    fn real_value_truncates_toward_zero() {
        let axis = DateAxis::new(DateAxisConfig::new(400.0)).expect("axis");
        assert_eq!(axis.to_real_value(12.9).expect("finite"), Instant::from_millis(12));
        assert_eq!(axis.to_numeric_value(Instant::from_millis(-3)), -3.0);
        assert!(axis.to_real_value(f64::INFINITY).is_err());
    }
}
