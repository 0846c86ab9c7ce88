//! Gantt-style daily schedule.

use time::{Date, Duration};

use crate::core::format::{format_clock_duration, format_clock_minute, format_date};
use crate::core::schedule::{totals_by_task, Task, TimeEntry, TimeLog};

/// 07:00 on the booked day.
pub const WINDOW_START_MINUTE: i64 = 7 * 60;
/// 02:00 on the following day.
pub const WINDOW_END_MINUTE: i64 = 26 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleBar {
    pub start_minute: i64,
    pub finish_minute: i64,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub task: Task,
    pub color: &'static str,
    pub bars: Vec<ScheduleBar>,
    pub total: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSpec {
    pub title: String,
    /// One row per task in [`Task::ALL`] order, including tasks with no blocks.
    pub rows: Vec<ScheduleRow>,
    pub total: Duration,
}

impl ScheduleSpec {
    pub fn window(&self) -> (i64, i64) {
        (WINDOW_START_MINUTE, WINDOW_END_MINUTE)
    }

    /// Even hours across the window, as `(minute, "HH:MM")`.
    pub fn hour_ticks(&self) -> Vec<(i64, String)> {
        (WINDOW_START_MINUTE..=WINDOW_END_MINUTE)
            .step_by(60)
            .filter(|minute| (minute / 60) % 2 == 0)
            .map(|minute| (minute, format_clock_minute(minute)))
            .collect()
    }
}

/// Tracked blocks booked on `date`.
pub fn daily_schedule(log: &TimeLog, date: Date) -> ScheduleSpec {
    build(format!("Daily Schedule: {}", format_date(date)), &log.day(date))
}

/// The planned ideal work day.
pub fn ideal_schedule(log: &TimeLog) -> ScheduleSpec {
    build("Daily Schedule: ideal Work-Day".to_string(), &log.ideal())
}

fn build(title: String, entries: &[TimeEntry]) -> ScheduleSpec {
    let totals = totals_by_task(entries);
    let rows = Task::ALL
        .iter()
        .map(|task| ScheduleRow {
            task: *task,
            color: task.color(),
            bars: entries
                .iter()
                .filter(|entry| entry.task == *task)
                .map(bar)
                .collect(),
            total: totals.get(task).copied().unwrap_or(Duration::ZERO),
        })
        .collect();
    let total = totals.values().fold(Duration::ZERO, |sum, d| sum + *d);

    ScheduleSpec { title, rows, total }
}

fn bar(entry: &TimeEntry) -> ScheduleBar {
    let start_minute = entry.start_minute();
    let finish_minute = entry.finish_minute();
    ScheduleBar {
        start_minute,
        finish_minute,
        hover: format!(
            "Start - {}\nFinish - {}\nDuration - {}",
            format_clock_minute(start_minute),
            format_clock_minute(finish_minute),
            format_clock_duration(entry.duration())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn entry(task: Task, start: time::PrimitiveDateTime, finish: time::PrimitiveDateTime, ideal: bool) -> TimeEntry {
        TimeEntry {
            task,
            start,
            finish,
            date: date!(2019 - 03 - 04),
            ideal,
        }
    }

    fn log() -> TimeLog {
        TimeLog::new(vec![
            entry(Task::Gym, datetime!(2019 - 03 - 04 18:30), datetime!(2019 - 03 - 04 20:00), false),
            entry(Task::DeepWork, datetime!(2019 - 03 - 04 08:00), datetime!(2019 - 03 - 04 12:00), false),
            entry(Task::DeepWork, datetime!(2019 - 03 - 04 23:30), datetime!(2019 - 03 - 05 00:45), false),
            entry(Task::Learning, datetime!(2019 - 03 - 04 13:00), datetime!(2019 - 03 - 04 15:00), true),
        ])
    }

    #[test]
    fn every_task_gets_a_row_even_without_blocks() {
        let spec = daily_schedule(&log(), date!(2019 - 03 - 04));
        let tasks: Vec<Task> = spec.rows.iter().map(|row| row.task).collect();
        assert_eq!(tasks, Task::ALL.to_vec());
        let learning = &spec.rows[2];
        assert!(learning.bars.is_empty());
        assert_eq!(learning.total, Duration::ZERO);
    }

    #[test]
    fn totals_cover_each_task_and_the_day() {
        let spec = daily_schedule(&log(), date!(2019 - 03 - 04));
        assert_eq!(spec.rows[0].total, Duration::minutes(315));
        assert_eq!(spec.rows[1].total, Duration::minutes(90));
        assert_eq!(spec.total, Duration::minutes(405));
        assert_eq!(spec.title, "Daily Schedule: 2019-03-04");
    }

    #[test]
    fn blocks_after_midnight_stay_on_the_booked_day() {
        let spec = daily_schedule(&log(), date!(2019 - 03 - 04));
        let late = &spec.rows[0].bars[1];
        assert_eq!(late.start_minute, 23 * 60 + 30);
        assert_eq!(late.finish_minute, 24 * 60 + 45);
        assert_eq!(late.hover, "Start - 23:30\nFinish - 00:45\nDuration - 01:15");
    }

    #[test]
    fn ideal_day_uses_only_planned_blocks() {
        let spec = ideal_schedule(&log());
        assert_eq!(spec.total, Duration::hours(2));
        assert_eq!(spec.rows[2].bars.len(), 1);
        assert_eq!(spec.hour_ticks().first().map(|t| t.1.as_str()), Some("08:00"));
        assert_eq!(spec.hour_ticks().last().map(|t| t.1.as_str()), Some("02:00"));
    }
}
