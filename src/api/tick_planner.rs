use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    AxisTimeZone, CalendarUnit, DateRange, INTERVAL_CATALOG, Instant, Interval, advance, even,
};
use crate::error::{DateAxisError, DateAxisResult};

pub const DEFAULT_AVERAGE_TICK_GAP_PX: f64 = 100.0;

/// Identity of a planned tick, unique within one plan.
///
/// Evened ticks of different plans can land on the same instant; hosts that
/// key label caches on the value should key on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickKey {
    pub unit: CalendarUnit,
    pub index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tick {
    pub instant: Instant,
    pub key: TickKey,
}

/// Ticks of one planning call together with the interval they were built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickPlan {
    pub ticks: Vec<Tick>,
    pub selected_interval: Interval,
}

impl TickPlan {
    #[must_use]
    pub fn instants(&self) -> Vec<Instant> {
        self.ticks.iter().map(|tick| tick.instant).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Inputs of one planning call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRequest {
    pub range: DateRange,
    pub axis_length_px: f64,
    #[serde(default = "default_average_tick_gap_px")]
    pub average_tick_gap_px: f64,
    #[serde(default)]
    pub timezone: AxisTimeZone,
}

impl TickRequest {
    #[must_use]
    pub fn new(range: DateRange, axis_length_px: f64) -> Self {
        Self {
            range,
            axis_length_px,
            average_tick_gap_px: DEFAULT_AVERAGE_TICK_GAP_PX,
            timezone: AxisTimeZone::default(),
        }
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

    fn average_ticks(self) -> DateAxisResult<f64> {
        if !self.axis_length_px.is_finite() || self.axis_length_px < 0.0 {
            return Err(DateAxisError::InvalidAxisLength(self.axis_length_px));
        }
        if !self.average_tick_gap_px.is_finite() || self.average_tick_gap_px <= 0.0 {
            return Err(DateAxisError::InvalidTickGap(self.average_tick_gap_px));
        }
        Ok(self.axis_length_px / self.average_tick_gap_px)
    }
}

fn default_average_tick_gap_px() -> f64 {
    DEFAULT_AVERAGE_TICK_GAP_PX
}

/// Plans calendar-aligned ticks for `request.range`.
///
/// The first tick is the lower bound and the last tick is the upper bound;
/// everything between is evened to the selected unit.
pub fn plan_ticks(request: TickRequest) -> DateAxisResult<TickPlan> {
    let average_ticks = request.average_ticks()?;
    let range = request.range;

    let (selected_interval, mut candidates) =
        select_interval(range, average_ticks, request.timezone);
    candidates.push(range.upper());

    let evened = even_intermediate_ticks(&candidates, selected_interval.unit, request.timezone);
    let trimmed = trim_crowded_edges(evened, range);

    debug!(
        interval = %selected_interval,
        average_ticks,
        ticks = trimmed.len(),
        "planned date axis ticks"
    );

    let ticks = trimmed
        .into_iter()
        .enumerate()
        .map(|(index, instant)| Tick {
            instant,
            key: TickKey {
                unit: selected_interval.unit,
                index: index as u32,
            },
        })
        .collect();

    Ok(TickPlan {
        ticks,
        selected_interval,
    })
}

/// Plans several independent axes. Each result carries its own interval.
#[must_use]
pub fn plan_many(requests: &[TickRequest]) -> Vec<DateAxisResult<TickPlan>> {
    #[cfg(feature = "parallel-planning")]
    {
        use rayon::prelude::*;
        return requests.par_iter().copied().map(plan_ticks).collect();
    }

    #[cfg(not(feature = "parallel-planning"))]
    {
        requests.iter().copied().map(plan_ticks).collect()
    }
}

/// Steps from the lower bound by `interval` while the cursor stays within range.
#[must_use]
pub fn candidate_ticks(range: DateRange, interval: Interval, tz: AxisTimeZone) -> Vec<Instant> {
    let mut ticks = Vec::new();
    let mut cursor = Some(range.lower());
    while let Some(instant) = cursor.filter(|instant| *instant <= range.upper()) {
        ticks.push(instant);
        cursor = advance(instant, interval.unit, interval.amount, tz);
    }
    ticks
}

/// Picks the coarsest interval whose tick count exceeds `average_ticks`, unless
/// the next coarser interval lands closer to it. Falls back to the finest
/// interval when nothing is dense enough.
pub(crate) fn select_interval(
    range: DateRange,
    average_ticks: f64,
    tz: AxisTimeZone,
) -> (Interval, Vec<Instant>) {
    let mut previous = Interval::coarsest();

    for interval in INTERVAL_CATALOG {
        let ticks = candidate_ticks(range, interval, tz);
        trace!(interval = %interval, count = ticks.len(), "tick interval candidate");
        if (ticks.len() as f64) <= average_ticks {
            previous = interval;
            continue;
        }

        let previous_ticks = candidate_ticks(range, previous, tz);
        let excess = ticks.len() as f64 - average_ticks;
        let deficit = average_ticks - previous_ticks.len() as f64;
        if deficit < excess {
            return (previous, previous_ticks);
        }
        return (interval, ticks);
    }

    let finest = Interval::finest();
    (finest, candidate_ticks(range, finest, tz))
}

/// Snaps every tick but the first and last to the start of `unit`.
#[must_use]
pub fn even_intermediate_ticks(
    ticks: &[Instant],
    unit: CalendarUnit,
    tz: AxisTimeZone,
) -> Vec<Instant> {
    if ticks.len() <= 2 {
        return ticks.to_vec();
    }

    let last_index = ticks.len() - 1;
    ticks
        .iter()
        .enumerate()
        .map(|(index, tick)| {
            if index == 0 || index == last_index {
                *tick
            } else {
                even(*tick, unit, tz).unwrap_or(*tick)
            }
        })
        .collect()
}

/// Drops the second tick when it crowds the lower bound and the second-to-last
/// tick when it crowds the upper bound.
///
/// Both decisions read the untrimmed neighbor gaps; a tick flagged by both
/// checks is removed once.
#[must_use]
pub fn trim_crowded_edges(mut ticks: Vec<Instant>, range: DateRange) -> Vec<Instant> {
    let len = ticks.len();
    if len <= 2 {
        return ticks;
    }

    let millis = |index: usize| ticks[index].millis();
    let second = millis(1);
    let third = millis(2);
    let last = millis(len - 2);
    let previous_last = millis(len - 3);

    let mut to_remove: SmallVec<[usize; 2]> = SmallVec::new();
    if second - range.lower().millis() < (third - second) / 2 {
        trace!(tick = %ticks[1], "dropping tick crowding lower bound");
        to_remove.push(1);
    }
    if range.upper().millis() - last < (last - previous_last) / 2 && !to_remove.contains(&(len - 2)) {
        trace!(tick = %ticks[len - 2], "dropping tick crowding upper bound");
        to_remove.push(len - 2);
    }

    to_remove.sort_unstable_by(|a, b| b.cmp(a));
    for index in to_remove {
        ticks.remove(index);
    }
    ticks
}
