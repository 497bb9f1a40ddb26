use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use date_axis::api::{AxisLabelLocale, DateAxis, DateAxisConfig};
use date_axis::core::{AxisOrientation, DateRange, Instant, Interval};
use date_axis::DateAxisError;

fn at(y: i32, mo: u32, d: u32, h: u32) -> Instant {
    Instant::from(Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).single().expect("valid"))
}

#[test]
fn single_point_dataset_is_padded_before_mapping() {
    let point = at(2020, 6, 1, 12);
    let mut axis = DateAxis::new(DateAxisConfig::new(400.0)).expect("axis");
    axis.invalidate_range(&[point]);

    let layout = axis.layout().expect("layout");
    assert!(layout.range.is_degenerate());
    assert_eq!(layout.plan.instants(), vec![point, point]);

    let mapper = axis.mapper().expect("padded mapper");
    let (lower, upper) = mapper.range();
    assert!(upper.millis() - lower.millis() >= axis.config().min_span_ms);
    assert_abs_diff_eq!(axis.map_to_pixel(point).expect("to pixel"), 200.0);
}

#[test]
fn empty_dataset_ranges_around_now() {
    let before = Instant::now();
    let mut axis = DateAxis::new(DateAxisConfig::new(400.0)).expect("axis");
    axis.invalidate_range(&[]);
    let layout = axis.layout().expect("layout");
    let after = Instant::now();

    assert!(layout.range.is_degenerate());
    assert!(layout.range.lower() >= before && layout.range.lower() <= after);
}

#[test]
fn auto_ranging_fits_data_extent() {
    let mut axis = DateAxis::new(DateAxisConfig::new(300.0)).expect("axis");
    axis.invalidate_range(&[at(2015, 1, 1, 0), at(2013, 12, 25, 0), at(2016, 1, 1, 0)]);

    let layout = axis.layout().expect("layout");
    assert_eq!(layout.range.lower(), at(2013, 12, 25, 0));
    assert_eq!(layout.range.upper(), at(2016, 1, 1, 0));
    assert_eq!(layout.plan.selected_interval, Interval::YEAR);
    assert_eq!(layout.labels, vec!["Dec 25, 2013", "2015", "2016"]);
}

#[test]
fn manual_bounds_drive_layout_and_mapping() {
    let mut axis =
        DateAxis::with_bounds(1_000.0, at(2020, 1, 1, 0), at(2020, 1, 11, 0)).expect("axis");

    assert_abs_diff_eq!(axis.map_to_pixel(at(2020, 1, 6, 0)).expect("to pixel"), 500.0);
    assert_eq!(
        axis.map_from_pixel(100.0).expect("from pixel"),
        at(2020, 1, 2, 0)
    );

    let layout = axis.layout().expect("layout");
    assert_eq!(layout.plan.selected_interval, Interval::DAY);
    assert_eq!(layout.labels[1], "Jan 2, 2020");
}

#[test]
fn manual_mode_without_bounds_is_a_config_error() {
    let mut axis = DateAxis::new(DateAxisConfig::new(500.0)).expect("axis");
    axis.set_auto_ranging(false).expect("no bounds to check yet");

    let err = axis.layout().expect_err("bounds missing");
    assert_eq!(err, DateAxisError::MissingBound { bound: "lower" });
}

#[test]
fn changing_a_manual_bound_updates_displayed_range() {
    let mut axis =
        DateAxis::with_bounds(1_000.0, at(2020, 1, 1, 0), at(2020, 1, 11, 0)).expect("axis");
    axis.set_upper_bound(at(2020, 1, 21, 0)).expect("ordered bounds");

    assert_eq!(
        axis.current_range(),
        Some(DateRange::new(at(2020, 1, 1, 0), at(2020, 1, 21, 0)).expect("valid"))
    );
    assert_abs_diff_eq!(axis.map_to_pixel(at(2020, 1, 11, 0)).expect("to pixel"), 500.0);
}

#[test]
fn vertical_axis_maps_from_bottom() {
    let mut axis =
        DateAxis::with_bounds(800.0, at(2020, 1, 1, 0), at(2020, 1, 5, 0)).expect("axis");
    axis.set_orientation(AxisOrientation::Vertical);

    assert_abs_diff_eq!(axis.map_to_pixel(at(2020, 1, 1, 0)).expect("bottom"), 800.0);
    assert_abs_diff_eq!(axis.map_to_pixel(at(2020, 1, 5, 0)).expect("top"), 0.0);
}

#[test]
fn animated_layout_maps_with_interpolated_bounds() {
    let config = DateAxisConfig::new(1_000.0).with_animation(700);
    let mut axis = DateAxis::new(config).expect("axis");

    axis.invalidate_range(&[Instant::from_millis(0), Instant::from_millis(10_000)]);
    axis.layout().expect("first layout snaps");
    assert!(!axis.is_animating());

    axis.invalidate_range(&[Instant::from_millis(0), Instant::from_millis(20_000)]);
    let layout = axis.layout().expect("second layout animates");
    assert_eq!(*layout.plan.instants().last().expect("ticks"), Instant::from_millis(20_000));
    assert!(axis.is_animating());

    // Still showing the old bounds: 10s spans the whole axis.
    assert_abs_diff_eq!(axis.map_to_pixel(Instant::from_millis(10_000)).expect("px"), 1_000.0);

    axis.advance_transition(700);
    assert!(!axis.is_animating());
    assert_abs_diff_eq!(axis.map_to_pixel(Instant::from_millis(10_000)).expect("px"), 500.0);
}

#[test]
fn custom_formatter_overrides_built_in_labels() {
    let mut axis =
        DateAxis::with_bounds(300.0, at(2013, 12, 25, 0), at(2016, 1, 1, 0)).expect("axis");
    axis.set_tick_label_formatter(Arc::new(|instant| format!("ms={}", instant.millis())));

    let layout = axis.layout().expect("layout");
    assert!(layout.labels.iter().all(|label| label.starts_with("ms=")));

    axis.clear_tick_label_formatter();
    let layout = axis.layout().expect("layout");
    assert_eq!(layout.labels[1], "2015");
}

#[test]
fn spanish_locale_changes_built_in_patterns() {
    let config = DateAxisConfig::new(1_000.0)
        .with_bounds(at(2020, 1, 1, 0), at(2020, 1, 11, 0))
        .with_locale(AxisLabelLocale::EsEs);
    let mut axis = DateAxis::new(config).expect("axis");

    let layout = axis.layout().expect("layout");
    assert_eq!(layout.labels[1], "02/01/2020");
}

#[test]
fn value_on_axis_excludes_bounds() {
    let axis = DateAxis::with_bounds(500.0, at(2020, 1, 1, 0), at(2020, 1, 2, 0)).expect("axis");
    assert!(axis.is_value_on_axis(at(2020, 1, 1, 12)));
    assert!(!axis.is_value_on_axis(at(2020, 1, 1, 0)));
    assert!(!axis.is_value_on_axis(at(2020, 1, 2, 0)));
}

#[test]
fn invalid_axis_length_is_rejected() {
    assert!(DateAxis::new(DateAxisConfig::new(f64::NAN)).is_err());
    let mut axis = DateAxis::new(DateAxisConfig::new(100.0)).expect("axis");
    assert!(axis.set_axis_length(-5.0).is_err());
    assert_eq!(axis.config().axis_length_px, 100.0);
}
