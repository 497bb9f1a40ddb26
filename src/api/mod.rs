mod axis_config;
mod date_axis;
mod tick_label_format;
mod tick_planner;

pub use axis_config::{AxisLabelLocale, DEFAULT_MIN_SPAN_MS, DateAxisConfig};
pub use date_axis::{AxisLayout, DateAxis};
pub use tick_label_format::{
    TickLabelFormatterFn, TickLabelPattern, format_tick, resolve_tick_label_pattern,
};
pub use tick_planner::{
    DEFAULT_AVERAGE_TICK_GAP_PX, Tick, TickKey, TickPlan, TickRequest, candidate_ticks,
    even_intermediate_ticks, plan_many, plan_ticks, trim_crowded_edges,
};

pub use crate::core::AxisTimeZone;
