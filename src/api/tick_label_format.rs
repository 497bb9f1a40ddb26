use std::sync::Arc;

use chrono::{Datelike, Timelike};

use crate::core::primitives::to_zoned;
use crate::core::{AxisTimeZone, CalendarUnit, Instant, Interval};

use super::AxisLabelLocale;

/// Host-supplied label override. When set it formats every tick.
pub type TickLabelFormatterFn = Arc<dyn Fn(Instant) -> String + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickLabelPattern {
    Year,
    MonthYear,
    MediumDate,
    ShortTime,
    MediumTime,
    FullTime,
}

/// Picks the label pattern for `instant` given the interval it was planned with.
#[must_use]
pub fn resolve_tick_label_pattern(
    instant: Instant,
    interval: Interval,
    timezone: AxisTimeZone,
) -> TickLabelPattern {
    if let Ok(local) = to_zoned(instant, timezone) {
        let at_midnight = local.num_seconds_from_midnight() == 0 && local.nanosecond() == 0;
        match interval.unit {
            CalendarUnit::Year if local.month() == 1 && local.day() == 1 && at_midnight => {
                return TickLabelPattern::Year;
            }
            CalendarUnit::Month if local.day() == 1 => return TickLabelPattern::MonthYear,
            _ => {}
        }
    }

    match interval.unit {
        CalendarUnit::Year | CalendarUnit::Month | CalendarUnit::Week | CalendarUnit::Day => {
            TickLabelPattern::MediumDate
        }
        CalendarUnit::Hour | CalendarUnit::Minute => TickLabelPattern::ShortTime,
        CalendarUnit::Second => TickLabelPattern::MediumTime,
        CalendarUnit::Millisecond => TickLabelPattern::FullTime,
    }
}

const ES_MONTH_ABBREVIATIONS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

fn pattern_format(locale: AxisLabelLocale, pattern: TickLabelPattern) -> &'static str {
    match (locale, pattern) {
        (_, TickLabelPattern::Year) => "%Y",
        (AxisLabelLocale::EnUs, TickLabelPattern::MonthYear) => "%b %y",
        (AxisLabelLocale::EnUs, TickLabelPattern::MediumDate) => "%b %-d, %Y",
        (AxisLabelLocale::EnUs, TickLabelPattern::ShortTime) => "%-I:%M %p",
        (AxisLabelLocale::EnUs, TickLabelPattern::MediumTime) => "%-I:%M:%S %p",
        (AxisLabelLocale::EnUs, TickLabelPattern::FullTime) => "%-I:%M:%S%.3f %p %:z",
        (AxisLabelLocale::EsEs, TickLabelPattern::MonthYear) => "%y",
        (AxisLabelLocale::EsEs, TickLabelPattern::MediumDate) => "%d/%m/%Y",
        (AxisLabelLocale::EsEs, TickLabelPattern::ShortTime) => "%H:%M",
        (AxisLabelLocale::EsEs, TickLabelPattern::MediumTime) => "%H:%M:%S",
        (AxisLabelLocale::EsEs, TickLabelPattern::FullTime) => "%H:%M:%S%.3f %:z",
    }
}

/// Formats one tick label.
///
/// `interval` must be the interval of the plan the tick came from. A custom
/// formatter wins over every built-in pattern.
#[must_use]
pub fn format_tick(
    instant: Instant,
    interval: Interval,
    locale: AxisLabelLocale,
    timezone: AxisTimeZone,
    custom: Option<&TickLabelFormatterFn>,
) -> String {
    if let Some(formatter) = custom {
        return formatter(instant);
    }

    let Ok(local) = to_zoned(instant, timezone) else {
        return format!("{}ms", instant.millis());
    };
    let pattern = resolve_tick_label_pattern(instant, interval, timezone);
    let formatted = local.format(pattern_format(locale, pattern)).to_string();
    // chrono only ships English month names without `unstable-locales`.
    match (locale, pattern) {
        (AxisLabelLocale::EsEs, TickLabelPattern::MonthYear) => {
            format!("{} {formatted}", ES_MONTH_ABBREVIATIONS[local.month0() as usize])
        }
        _ => formatted,
    }
}
