use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar unit a tick interval steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl CalendarUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Millisecond => "millisecond",
        }
    }
}

/// One entry of the tick interval catalog: step `amount` units at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub unit: CalendarUnit,
    pub amount: u32,
}

impl Interval {
    pub const DECADE: Self = Self::new(CalendarUnit::Year, 10);
    pub const YEAR: Self = Self::new(CalendarUnit::Year, 1);
    pub const MONTH_6: Self = Self::new(CalendarUnit::Month, 6);
    pub const MONTH_3: Self = Self::new(CalendarUnit::Month, 3);
    pub const MONTH_1: Self = Self::new(CalendarUnit::Month, 1);
    pub const WEEK: Self = Self::new(CalendarUnit::Week, 1);
    pub const DAY: Self = Self::new(CalendarUnit::Day, 1);
    pub const HOUR_12: Self = Self::new(CalendarUnit::Hour, 12);
    pub const HOUR_6: Self = Self::new(CalendarUnit::Hour, 6);
    pub const HOUR_3: Self = Self::new(CalendarUnit::Hour, 3);
    pub const HOUR_1: Self = Self::new(CalendarUnit::Hour, 1);
    pub const MINUTE_15: Self = Self::new(CalendarUnit::Minute, 15);
    pub const MINUTE_5: Self = Self::new(CalendarUnit::Minute, 5);
    pub const MINUTE_1: Self = Self::new(CalendarUnit::Minute, 1);
    pub const SECOND_15: Self = Self::new(CalendarUnit::Second, 15);
    pub const SECOND_5: Self = Self::new(CalendarUnit::Second, 5);
    pub const SECOND_1: Self = Self::new(CalendarUnit::Second, 1);
    pub const MILLISECOND: Self = Self::new(CalendarUnit::Millisecond, 1);

    #[must_use]
    pub const fn new(unit: CalendarUnit, amount: u32) -> Self {
        Self { unit, amount }
    }

    /// Coarsest catalog entry.
    #[must_use]
    pub fn coarsest() -> Self {
        INTERVAL_CATALOG[0]
    }

    /// Finest catalog entry, used when no coarser interval is dense enough.
    #[must_use]
    pub fn finest() -> Self {
        INTERVAL_CATALOG[INTERVAL_CATALOG.len() - 1]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.amount, self.unit.as_str())
    }
}

/// Tick intervals ordered from coarsest to finest.
pub const INTERVAL_CATALOG: [Interval; 18] = [
    Interval::DECADE,
    Interval::YEAR,
    Interval::MONTH_6,
    Interval::MONTH_3,
    Interval::MONTH_1,
    Interval::WEEK,
    Interval::DAY,
    Interval::HOUR_12,
    Interval::HOUR_6,
    Interval::HOUR_3,
    Interval::HOUR_1,
    Interval::MINUTE_15,
    Interval::MINUTE_5,
    Interval::MINUTE_1,
    Interval::SECOND_15,
    Interval::SECOND_5,
    Interval::SECOND_1,
    Interval::MILLISECOND,
];

#[cfg(test)]
mod tests {
    use super::{CalendarUnit, INTERVAL_CATALOG, Interval};

    #[test]
    fn catalog_units_never_get_coarser() {
        for pair in INTERVAL_CATALOG.windows(2) {
            assert!(pair[0].unit <= pair[1].unit, "{} before {}", pair[0], pair[1]);
            if pair[0].unit == pair[1].unit {
                assert!(pair[0].amount > pair[1].amount);
            }
        }
    }

    #[test]
    fn catalog_ends_are_decade_and_millisecond() {
        assert_eq!(Interval::coarsest(), Interval::new(CalendarUnit::Year, 10));
        assert_eq!(Interval::finest().unit, CalendarUnit::Millisecond);
    }
}
