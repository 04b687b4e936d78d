//! Derivation logic over the raw forecast feed: the daily summary
//! (exact time-of-day match), its pagination and display sort, and the
//! hourly strip (nearest-timestamp match). Everything here is a pure
//! function of the feed plus explicit state; the views are recomputed
//! from scratch on every search.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::api::ForecastEntry;
use crate::format::round_degrees;

/// One representative sample per day is wanted; the feed holds ~8/day.
pub const NOON_HOUR: u32 = 12;
/// The daily summary never grows past 5 days.
const DAILY_CAP: usize = 5;
/// Daily cards revealed per page
const DAILY_PAGE_SIZE: usize = 2;

const SEGMENT_COUNT: i64 = 6;
const SEGMENT_STEP_HOURS: i64 = 4;

/// Select the samples marking exactly `reference_hour` of their day, in
/// feed order, capped at 5. Days without an exact match are simply
/// absent; there is no nearest-match fallback here (contrast with
/// [`hourly_segments`]).
pub fn daily_forecast(feed: &[ForecastEntry], reference_hour: u32) -> Vec<ForecastEntry> {
    feed.iter()
        .filter(|entry| {
            entry
                .timestamp()
                .map(|ts| {
                    let time = ts.time();
                    time.hour() == reference_hour && time.minute() == 0 && time.second() == 0
                })
                .unwrap_or(false)
        })
        .take(DAILY_CAP)
        .cloned()
        .collect()
}

/// Display-only ordering of the visible daily page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Chronological, the default
    #[default]
    Date,
    TempAsc,
    TempDesc,
}

impl SortMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(Self::Date),
            "temp-asc" => Some(Self::TempAsc),
            "temp-desc" => Some(Self::TempDesc),
            _ => None,
        }
    }
}

/// 1-indexed cursor over the daily summary. Pages are cumulative: page
/// `n` exposes the first `n * 2` entries.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    page: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self { page: 1 }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    pub fn visible_len(&self, total: usize) -> usize {
        total.min(self.page * DAILY_PAGE_SIZE)
    }

    /// True while entries remain beyond the current prefix; gates the
    /// "load more" control.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.page * DAILY_PAGE_SIZE
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

/// The visible slice of the daily summary: select the page first, then
/// apply the sort to that page only. The underlying sequence is never
/// reordered, so paging and sorting stay independent.
pub fn visible_daily(daily: &[ForecastEntry], pager: Pager, sort: SortMode) -> Vec<ForecastEntry> {
    let mut page: Vec<ForecastEntry> = daily[..pager.visible_len(daily.len())].to_vec();
    match sort {
        SortMode::Date => page.sort_by_key(|entry| entry.timestamp()),
        SortMode::TempAsc => page.sort_by(|a, b| a.main.temp.total_cmp(&b.main.temp)),
        SortMode::TempDesc => page.sort_by(|a, b| b.main.temp.total_cmp(&a.main.temp)),
    }
    page
}

/// One slot of the hourly strip: the nearest sample to a 4-hour-step
/// target, plus the rounded-degree delta against the previous slot.
#[derive(Debug, Clone)]
pub struct HourlySegment {
    pub entry: ForecastEntry,
    /// `None` for the first segment, which has nothing to compare to
    pub delta: Option<i64>,
}

/// Select six segments at 4h, 8h, .. 24h past `now`. Forecast samples
/// are sparse and irregular near "now", so each target takes the sample
/// with the minimum absolute timestamp distance; a strict comparison
/// keeps the earliest feed entry on ties. Deltas are computed on the
/// rounded temperatures, matching what the cards display.
pub fn hourly_segments(feed: &[ForecastEntry], now: NaiveDateTime) -> Vec<HourlySegment> {
    let mut segments = Vec::with_capacity(SEGMENT_COUNT as usize);
    let mut prev_temp: Option<i64> = None;

    for i in 1..=SEGMENT_COUNT {
        let target = now + Duration::hours(i * SEGMENT_STEP_HOURS);

        let mut closest: Option<&ForecastEntry> = None;
        let mut min_distance = i64::MAX;
        for entry in feed {
            let Some(ts) = entry.timestamp() else { continue };
            let distance = (ts - target).num_seconds().abs();
            if distance < min_distance {
                min_distance = distance;
                closest = Some(entry);
            }
        }

        if let Some(entry) = closest {
            let temp = round_degrees(entry.main.temp);
            segments.push(HourlySegment {
                entry: entry.clone(),
                delta: prev_temp.map(|prev| temp - prev),
            });
            prev_temp = Some(temp);
        }
    }

    segments
}
