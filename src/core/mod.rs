pub mod auto_range;
pub mod interval;
pub mod primitives;
pub mod range_mapper;
pub mod transition;
pub mod types;

pub use auto_range::{fit_data_range, fit_data_range_at, manual_range};
pub use interval::{CalendarUnit, INTERVAL_CATALOG, Interval};
pub use primitives::{AxisTimeZone, advance, even};
pub use range_mapper::{RangeMapper, display_position, value_for_display};
pub use transition::{BoundsTransition, DEFAULT_TRANSITION_DURATION_MS};
pub use types::{AxisOrientation, DateRange, Instant};
