//! Completion plan
//!
//! A reading plan that divides the 604 pages over a chosen number of
//! days. Days are checked off by index; progress is the fraction of days
//! completed, not pages, matching how the plan is shown.

use crate::error::{ProgressError, ProgressResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilawah_core::PAGE_COUNT;

/// A full-text reading plan over a fixed number of days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionPlan {
    pub total_days: u32,
    /// ISO date the plan starts on
    pub start_date: String,
    pub pages_per_day: u16,
    /// Day index -> checked off
    completed_days: BTreeMap<u32, bool>,
}

impl CompletionPlan {
    /// Creates a plan starting on `start_date`
    pub fn new(total_days: u32, start_date: NaiveDate) -> ProgressResult<Self> {
        if total_days == 0 {
            return Err(ProgressError::InvalidPlanLength(total_days));
        }
        let pages_per_day = u32::from(PAGE_COUNT).div_ceil(total_days).min(u32::from(PAGE_COUNT));
        Ok(Self {
            total_days,
            start_date: start_date.to_string(),
            pages_per_day: pages_per_day as u16,
            completed_days: BTreeMap::new(),
        })
    }

    /// Toggles a day's checkmark, returning the new value
    pub fn toggle_day(&mut self, day: u32) -> ProgressResult<bool> {
        if day >= self.total_days {
            return Err(ProgressError::DayOutOfRange {
                day,
                total: self.total_days,
            });
        }
        let entry = self.completed_days.entry(day).or_insert(false);
        *entry = !*entry;
        Ok(*entry)
    }

    /// True if a day is checked off
    pub fn is_day_completed(&self, day: u32) -> bool {
        self.completed_days.get(&day).copied().unwrap_or(false)
    }

    /// Number of days checked off
    pub fn completed_count(&self) -> usize {
        self.completed_days.values().filter(|&&done| done).count()
    }

    /// Percentage of days completed, rounded
    pub fn progress_percent(&self) -> u32 {
        ((self.completed_count() as f64 / f64::from(self.total_days)) * 100.0).round() as u32
    }

    /// Zero-based index of `today` within the plan, `None` outside it
    pub fn day_index(&self, today: NaiveDate) -> Option<u32> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        let offset = (today - start).num_days();
        if offset < 0 || offset >= i64::from(self.total_days) {
            return None;
        }
        Some(offset as u32)
    }

    /// True if fewer days are checked off than have elapsed
    pub fn is_behind(&self, today: NaiveDate) -> bool {
        match self.day_index(today) {
            Some(index) => (self.completed_count() as u32) < index,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_pages_per_day_rounds_up() {
        let plan = CompletionPlan::new(30, date(2026, 8, 1)).expect("valid");
        // ceil(604 / 30) = 21
        assert_eq!(plan.pages_per_day, 21);

        let long = CompletionPlan::new(365, date(2026, 8, 1)).expect("valid");
        assert_eq!(long.pages_per_day, 2);
    }

    #[test]
    fn test_zero_days_rejected() {
        assert!(CompletionPlan::new(0, date(2026, 8, 1)).is_err());
    }

    #[test]
    fn test_toggle_day_flips_and_counts() {
        let mut plan = CompletionPlan::new(30, date(2026, 8, 1)).expect("valid");
        assert!(plan.toggle_day(0).expect("toggle"));
        assert!(plan.toggle_day(1).expect("toggle"));
        assert!(!plan.toggle_day(1).expect("toggle"));

        assert!(plan.is_day_completed(0));
        assert!(!plan.is_day_completed(1));
        assert_eq!(plan.completed_count(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_rejected() {
        let mut plan = CompletionPlan::new(30, date(2026, 8, 1)).expect("valid");
        assert!(plan.toggle_day(30).is_err());
    }

    #[test]
    fn test_progress_percent() {
        let mut plan = CompletionPlan::new(10, date(2026, 8, 1)).expect("valid");
        for day in 0..3 {
            plan.toggle_day(day).expect("toggle");
        }
        assert_eq!(plan.progress_percent(), 30);
    }

    #[test]
    fn test_day_index_within_and_outside_plan() {
        let plan = CompletionPlan::new(30, date(2026, 8, 1)).expect("valid");
        assert_eq!(plan.day_index(date(2026, 8, 1)), Some(0));
        assert_eq!(plan.day_index(date(2026, 8, 15)), Some(14));
        assert_eq!(plan.day_index(date(2026, 7, 31)), None);
        assert_eq!(plan.day_index(date(2026, 8, 31)), None);
    }

    #[test]
    fn test_is_behind() {
        let mut plan = CompletionPlan::new(30, date(2026, 8, 1)).expect("valid");
        // day 5, nothing checked: behind
        assert!(plan.is_behind(date(2026, 8, 6)));

        for day in 0..5 {
            plan.toggle_day(day).expect("toggle");
        }
        assert!(!plan.is_behind(date(2026, 8, 6)));
    }
}
