//! date-axis: calendar-aware date axis layout.
//!
//! Maps instants to pixel offsets along an axis and plans human-friendly
//! tick instants (decade down to millisecond steps) with matching labels.
//! Rendering, re-layout scheduling and animation timing stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{DateAxis, DateAxisConfig, TickPlan};
pub use error::{DateAxisError, DateAxisResult};
