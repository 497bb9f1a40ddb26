use serde::{Deserialize, Serialize};

use crate::core::{AxisOrientation, AxisTimeZone, DEFAULT_TRANSITION_DURATION_MS, Instant};
use crate::error::{DateAxisError, DateAxisResult};

use super::tick_planner::DEFAULT_AVERAGE_TICK_GAP_PX;

pub const DEFAULT_MIN_SPAN_MS: i64 = 1_000;

/// Locale used for built-in tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisLabelLocale {
    #[default]
    EnUs,
    EsEs,
}

/// Serializable date axis setup.
///
/// Every field except `axis_length_px` has a default so hosts can persist a
/// partial config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateAxisConfig {
    #[serde(default)]
    pub orientation: AxisOrientation,
    pub axis_length_px: f64,
    #[serde(default = "default_average_tick_gap_px")]
    pub average_tick_gap_px: f64,
    #[serde(default = "default_auto_ranging")]
    pub auto_ranging: bool,
    #[serde(default)]
    pub lower_bound: Option<Instant>,
    #[serde(default)]
    pub upper_bound: Option<Instant>,
    #[serde(default)]
    pub timezone: AxisTimeZone,
    #[serde(default)]
    pub locale: AxisLabelLocale,
    #[serde(default)]
    pub animated: bool,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default = "default_min_span_ms")]
    pub min_span_ms: i64,
}

impl DateAxisConfig {
    /// Creates an auto-ranging horizontal axis config.
    #[must_use]
    pub fn new(axis_length_px: f64) -> Self {
        Self {
            orientation: AxisOrientation::default(),
            axis_length_px,
            average_tick_gap_px: DEFAULT_AVERAGE_TICK_GAP_PX,
            auto_ranging: true,
            lower_bound: None,
            upper_bound: None,
            timezone: AxisTimeZone::default(),
            locale: AxisLabelLocale::default(),
            animated: false,
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            min_span_ms: DEFAULT_MIN_SPAN_MS,
        }
    }

    /// Switches to manual ranging with explicit bounds.
    #[must_use]
    pub fn with_bounds(mut self, lower: Instant, upper: Instant) -> Self {
        self.auto_ranging = false;
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_average_tick_gap(mut self, average_tick_gap_px: f64) -> Self {
        self.average_tick_gap_px = average_tick_gap_px;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: AxisTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: AxisLabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, transition_duration_ms: u64) -> Self {
        self.animated = true;
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    pub fn validate(self) -> DateAxisResult<Self> {
        if !self.axis_length_px.is_finite() || self.axis_length_px < 0.0 {
            return Err(DateAxisError::InvalidAxisLength(self.axis_length_px));
        }
        if !self.average_tick_gap_px.is_finite() || self.average_tick_gap_px <= 0.0 {
            return Err(DateAxisError::InvalidTickGap(self.average_tick_gap_px));
        }
        if self.min_span_ms <= 0 {
            return Err(DateAxisError::InvalidConfig(
                "min span must be > 0 ms".to_owned(),
            ));
        }
        if let (Some(lower), Some(upper)) = (self.lower_bound, self.upper_bound) {
            if lower > upper {
                return Err(DateAxisError::InvalidRange { lower, upper });
            }
        }
        Ok(self)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> DateAxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| DateAxisError::InvalidData(format!("invalid config json: {err}")))?;
        config.validate()
    }

    pub fn to_json_string(&self) -> DateAxisResult<String> {
        serde_json::to_string(self)
            .map_err(|err| DateAxisError::InvalidData(format!("config serialization: {err}")))
    }
}

fn default_average_tick_gap_px() -> f64 {
    DEFAULT_AVERAGE_TICK_GAP_PX
}

fn default_auto_ranging() -> bool {
    true
}

fn default_transition_duration_ms() -> u64 {
    DEFAULT_TRANSITION_DURATION_MS
}

fn default_min_span_ms() -> i64 {
    DEFAULT_MIN_SPAN_MS
}
