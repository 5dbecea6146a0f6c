//! Reading time accounting
//!
//! A narrowly-scoped component: it only ever appends elapsed seconds to a
//! date-keyed counter. Hosts flush on an interval and on teardown; the
//! log itself is the durable, syncable artifact.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilawah_core::Timestamp;

/// Seconds read per calendar day, keyed by ISO date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingTimeLog {
    seconds_by_date: BTreeMap<String, u64>,
}

impl ReadingTimeLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds seconds under a date key
    pub fn add(&mut self, date: NaiveDate, seconds: u64) {
        if seconds == 0 {
            return;
        }
        *self.seconds_by_date.entry(date.to_string()).or_insert(0) += seconds;
    }

    /// Seconds recorded for one day
    pub fn seconds_on(&self, date: NaiveDate) -> u64 {
        self.seconds_by_date
            .get(&date.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Whole minutes recorded for one day
    pub fn minutes_on(&self, date: NaiveDate) -> u64 {
        self.seconds_on(date) / 60
    }

    /// Whole minutes over the 7 days ending on `today`
    pub fn week_minutes(&self, today: NaiveDate) -> u64 {
        let mut total = 0;
        for back in 0..7 {
            if let Some(day) = today.checked_sub_days(chrono::Days::new(back)) {
                total += self.seconds_on(day);
            }
        }
        total / 60
    }
}

/// Accumulates wall-clock reading time into a [`ReadingTimeLog`]
///
/// One segment runs between `start` and each `flush`; flushing appends the
/// elapsed whole seconds to the current date key and restarts the segment.
#[derive(Debug)]
pub struct ReadingTimer {
    log: ReadingTimeLog,
    segment_start: Timestamp,
}

impl ReadingTimer {
    /// Starts timing at `now` over an existing log
    pub fn start(log: ReadingTimeLog, now: Timestamp) -> Self {
        Self {
            log,
            segment_start: now,
        }
    }

    /// Flushes the running segment into the log and restarts it
    pub fn flush(&mut self, now: Timestamp) {
        let elapsed = now.since(self.segment_start).as_seconds();
        if elapsed > 0 {
            self.log.add(date_of(now), elapsed);
            self.segment_start = now;
        }
    }

    /// The accumulated log
    pub fn log(&self) -> &ReadingTimeLog {
        &self.log
    }

    /// Flushes and yields the log for persistence
    pub fn into_log(mut self, now: Timestamp) -> ReadingTimeLog {
        self.flush(now);
        self.log
    }
}

fn date_of(now: Timestamp) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(now.as_millis())
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
