//! Time-tracking entries: what was worked on, when, and for how long.

use std::collections::BTreeMap;

use serde::Deserialize;
use time::{Date, Duration, PrimitiveDateTime};

use super::series::DailySeries;

/// Tracked activity categories. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Task {
    #[serde(rename = "Deep Work")]
    DeepWork,
    Gym,
    Learning,
    #[serde(rename = "Shallow Work")]
    ShallowWork,
}

impl Task {
    pub const ALL: [Task; 4] = [Task::DeepWork, Task::Gym, Task::Learning, Task::ShallowWork];

    pub fn label(self) -> &'static str {
        match self {
            Task::DeepWork => "Deep Work",
            Task::Gym => "Gym",
            Task::Learning => "Learning",
            Task::ShallowWork => "Shallow Work",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Task::DeepWork => "rgb(27,158,119)",
            Task::Gym => "rgb(36,78,213)",
            Task::Learning => "rgb(117,112,179)",
            Task::ShallowWork => "rgb(127,201,127)",
        }
    }
}

/// One tracked block of time. `date` is the day the block is booked on,
/// which may differ from `start.date()` for blocks after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEntry {
    pub task: Task,
    pub start: PrimitiveDateTime,
    pub finish: PrimitiveDateTime,
    pub date: Date,
    pub ideal: bool,
}

impl TimeEntry {
    pub fn duration(&self) -> Duration {
        (self.finish - self.start).max(Duration::ZERO)
    }

    /// Minutes between the booked day's midnight and the block's start.
    pub fn start_minute(&self) -> i64 {
        (self.start - self.date.midnight()).whole_minutes()
    }

    pub fn finish_minute(&self) -> i64 {
        (self.finish - self.date.midnight()).whole_minutes()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeLog {
    entries: Vec<TimeEntry>,
}

impl TimeLog {
    pub fn new(mut entries: Vec<TimeEntry>) -> Self {
        entries.sort_by_key(|entry| (entry.date, entry.start));
        Self { entries }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Tracked (non-ideal) entries booked on `date`.
    pub fn day(&self, date: Date) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.ideal && entry.date == date)
            .copied()
            .collect()
    }

    pub fn ideal(&self) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.ideal)
            .copied()
            .collect()
    }

    pub fn latest_date(&self) -> Option<Date> {
        self.entries
            .iter()
            .filter(|entry| !entry.ideal)
            .map(|entry| entry.date)
            .max()
    }

    /// Tracked time per day as a fraction of `ideal_day`, with untracked days
    /// between the first and last entry filled in as zero.
    pub fn daily_share(&self, ideal_day: Duration) -> DailySeries {
        let mut per_day: BTreeMap<Date, Duration> = BTreeMap::new();
        for entry in self.entries.iter().filter(|entry| !entry.ideal) {
            *per_day.entry(entry.date).or_insert(Duration::ZERO) += entry.duration();
        }
        let ideal_seconds = ideal_day.as_seconds_f64();
        per_day
            .into_iter()
            .map(|(date, total)| {
                let share = if ideal_seconds > 0.0 {
                    total.as_seconds_f64() / ideal_seconds
                } else {
                    0.0
                };
                (date, share)
            })
            .collect::<DailySeries>()
            .fill_missing_days(0.0)
    }
}

/// Total duration per task; every task is present, untracked ones with zero.
pub fn totals_by_task(entries: &[TimeEntry]) -> BTreeMap<Task, Duration> {
    let mut totals: BTreeMap<Task, Duration> =
        Task::ALL.iter().map(|task| (*task, Duration::ZERO)).collect();
    for entry in entries {
        *totals.entry(entry.task).or_insert(Duration::ZERO) += entry.duration();
    }
    totals
}
