use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike, Utc,
};
use serde::{Deserialize, Serialize};

use crate::core::interval::CalendarUnit;
use crate::core::types::Instant;
use crate::error::{DateAxisError, DateAxisResult};

/// Timezone used for calendar stepping, evening and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl AxisTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    /// Offsets outside +-24h fall back to UTC.
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

pub fn to_zoned(instant: Instant, tz: AxisTimeZone) -> DateAxisResult<DateTime<FixedOffset>> {
    instant
        .to_utc()
        .map(|utc| utc.with_timezone(&tz.fixed_offset()))
        .ok_or_else(|| {
            DateAxisError::InvalidData(format!(
                "instant {}ms is outside the calendar range",
                instant.millis()
            ))
        })
}

fn to_local(instant: Instant, tz: AxisTimeZone) -> Option<NaiveDateTime> {
    instant
        .to_utc()
        .map(|utc| utc.with_timezone(&tz.fixed_offset()).naive_local())
}

fn from_local(local: NaiveDateTime, tz: AxisTimeZone) -> Option<Instant> {
    tz.fixed_offset()
        .from_local_datetime(&local)
        .single()
        .map(|dt| Instant::from_datetime(&dt))
}

/// Steps `instant` forward by `amount` calendar units in wall-clock time.
///
/// Month and year steps clamp to the last day of shorter months.
/// Returns `None` once the result leaves the representable calendar.
#[must_use]
pub fn advance(
    instant: Instant,
    unit: CalendarUnit,
    amount: u32,
    tz: AxisTimeZone,
) -> Option<Instant> {
    let local = to_local(instant, tz)?;
    let amount = i64::from(amount);
    let stepped = match unit {
        CalendarUnit::Year => local.checked_add_months(Months::new(
            u32::try_from(amount.checked_mul(12)?).ok()?,
        ))?,
        CalendarUnit::Month => local.checked_add_months(Months::new(u32::try_from(amount).ok()?))?,
        CalendarUnit::Week => local.checked_add_signed(TimeDelta::try_weeks(amount)?)?,
        CalendarUnit::Day => local.checked_add_signed(TimeDelta::try_days(amount)?)?,
        CalendarUnit::Hour => local.checked_add_signed(TimeDelta::try_hours(amount)?)?,
        CalendarUnit::Minute => local.checked_add_signed(TimeDelta::try_minutes(amount)?)?,
        CalendarUnit::Second => local.checked_add_signed(TimeDelta::try_seconds(amount)?)?,
        CalendarUnit::Millisecond => {
            local.checked_add_signed(TimeDelta::try_milliseconds(amount)?)?
        }
    };
    from_local(stepped, tz)
}

/// Snaps `instant` back to the start of its calendar `unit`.
///
/// Weeks are snapped to midnight only; the day of week is left alone.
#[must_use]
pub fn even(instant: Instant, unit: CalendarUnit, tz: AxisTimeZone) -> Option<Instant> {
    let local = to_local(instant, tz)?;
    let date = local.date();
    let evened = match unit {
        CalendarUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?.and_hms_opt(0, 0, 0)?,
        CalendarUnit::Month => date.with_day(1)?.and_hms_opt(0, 0, 0)?,
        CalendarUnit::Week | CalendarUnit::Day => date.and_hms_opt(0, 0, 0)?,
        CalendarUnit::Hour => date.and_time(NaiveTime::from_hms_opt(local.hour(), 0, 0)?),
        CalendarUnit::Minute => {
            date.and_time(NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)?)
        }
        CalendarUnit::Second => local.with_nanosecond(0)?,
        CalendarUnit::Millisecond => local,
    };
    from_local(evened, tz)
}
