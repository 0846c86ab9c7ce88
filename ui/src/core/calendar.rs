//! Calendar grid bucketing for contribution-style heatmaps.
//!
//! A daily series is laid out on a fixed 52-week × 7-day grid whose first
//! column is always Monday. Days before the first tracked day and after the
//! last one are zero.

use thiserror::Error;
use time::{Date, Duration};

use super::series::{month_abbrev, DailySeries};

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;
pub const CELLS: usize = WEEKS * DAYS_PER_WEEK;

pub const WEEKDAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("series spans {needed} calendar days but a grid holds {capacity}; trim older entries from the source")]
    RangeExceeded { needed: usize, capacity: usize },
}

/// A 52×7 grid of daily values. Row `w`, column `d` holds the value of
/// `origin + (7w + d)` days; `origin` is always a Monday.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    origin: Date,
    cells: [[f64; DAYS_PER_WEEK]; WEEKS],
}

/// A month label placed at the week where that month begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTick {
    pub week: usize,
    pub label: &'static str,
}

/// Lay `series` out on a Monday-aligned calendar grid beginning at the week of `start`.
///
/// Points before `start` are ignored. Fails with [`GridError::RangeExceeded`]
/// when the padded range does not fit in 364 days.
pub fn build_grid(series: &DailySeries, start: Date) -> Result<CalendarGrid, GridError> {
    let origin = monday_on_or_before(start);

    if let Some(last) = series.last_date().filter(|last| *last >= start) {
        let needed = (last - origin).whole_days() as usize + 1;
        if needed > CELLS {
            return Err(GridError::RangeExceeded {
                needed,
                capacity: CELLS,
            });
        }
    }

    let mut cells = [[0.0; DAYS_PER_WEEK]; WEEKS];
    for (date, value) in series.iter().filter(|(date, _)| *date >= start) {
        let index = (date - origin).whole_days() as usize;
        cells[index / DAYS_PER_WEEK][index % DAYS_PER_WEEK] = value;
    }

    Ok(CalendarGrid { origin, cells })
}

/// Same as [`build_grid`] for a contiguous run of daily values starting at `start`.
pub fn build_grid_from_values(values: &[f64], start: Date) -> Result<CalendarGrid, GridError> {
    build_grid(&DailySeries::from_values(start, values.iter().copied()), start)
}

fn monday_on_or_before(date: Date) -> Date {
    let offset = date.weekday().number_days_from_monday();
    date - Duration::days(i64::from(offset))
}

impl CalendarGrid {
    /// The Monday shown in row 0, column 0.
    pub fn origin(&self) -> Date {
        self.origin
    }

    pub fn rows(&self) -> &[[f64; DAYS_PER_WEEK]; WEEKS] {
        &self.cells
    }

    pub fn get(&self, week: usize, weekday: usize) -> Option<f64> {
        self.cells.get(week)?.get(weekday).copied()
    }

    /// Always 364.
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(|row| row.len()).sum()
    }

    /// Cell values in reading order (row-major).
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    pub fn date_of(&self, index: usize) -> Date {
        self.origin + Duration::days(index as i64)
    }

    /// Calendar dates in the same reading order as [`values`](Self::values).
    pub fn cell_dates(&self) -> impl Iterator<Item = Date> + '_ {
        (0..CELLS).map(|index| self.date_of(index))
    }

    /// Sunday closing week `week`.
    pub fn week_ending(&self, week: usize) -> Date {
        self.date_of(week * DAYS_PER_WEEK + DAYS_PER_WEEK - 1)
    }

    pub fn max_value(&self) -> f64 {
        self.values()
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values().filter(|value| value.is_finite()).sum()
    }

    /// Month labels for the week axis: the first week is always labelled,
    /// afterwards a label appears whenever the month of the week's Sunday changes.
    pub fn month_ticks(&self) -> Vec<MonthTick> {
        let mut ticks: Vec<MonthTick> = Vec::new();
        let mut current = None;
        for week in 0..WEEKS {
            let month = self.week_ending(week).month();
            if current != Some(month) {
                ticks.push(MonthTick {
                    week,
                    label: month_abbrev(month),
                });
                current = Some(month);
            }
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    #[test]
    fn wednesday_start_is_left_padded() {
        let grid = build_grid_from_values(&[5.0, 0.0, 3.0], date!(2019 - 01 - 02)).unwrap();
        assert_eq!(grid.origin(), date!(2018 - 12 - 31));
        assert_eq!(grid.rows()[0], [0.0, 0.0, 5.0, 0.0, 3.0, 0.0, 0.0]);
        assert!(grid.rows()[1..].iter().all(|row| row.iter().all(|v| *v == 0.0)));
    }

    #[test]
    fn monday_start_needs_no_padding() {
        let grid = build_grid_from_values(&[7.0, 1.0], date!(2018 - 01 - 01)).unwrap();
        assert_eq!(grid.origin(), date!(2018 - 01 - 01));
        assert_eq!(grid.get(0, 0), Some(7.0));
        assert_eq!(grid.get(0, 1), Some(1.0));
    }

    #[test]
    fn entries_before_start_are_dropped() {
        let series =
            DailySeries::from_values(date!(2018 - 12 - 28), [9.0, 9.0, 9.0, 9.0, 2.0, 4.0]);
        let grid = build_grid(&series, date!(2019 - 01 - 01)).unwrap();
        // 2018-12-31 is the padded Monday; its value predates the start and stays zero.
        assert_eq!(grid.rows()[0][..3], [0.0, 2.0, 4.0]);
    }

    #[test]
    fn full_year_fits_exactly() {
        let values = vec![1.0; CELLS];
        let grid = build_grid_from_values(&values, date!(2018 - 01 - 01)).unwrap();
        assert_eq!(grid.total(), CELLS as f64);
        assert_eq!(grid.date_of(CELLS - 1), date!(2018 - 12 - 30));
    }

    #[test]
    fn padding_counts_towards_capacity() {
        // Sunday start: six padding days plus 359 values is one too many.
        let values = vec![1.0; CELLS - 5];
        let err = build_grid_from_values(&values, date!(2018 - 11 - 04)).unwrap_err();
        assert_eq!(
            err,
            GridError::RangeExceeded {
                needed: CELLS + 1,
                capacity: CELLS
            }
        );
    }

    #[test]
    fn cell_dates_follow_reading_order() {
        let grid = build_grid_from_values(&[1.0], date!(2018 - 11 - 04)).unwrap();
        let dates: Vec<Date> = grid.cell_dates().collect();
        assert_eq!(dates.len(), CELLS);
        assert_eq!(dates[0].weekday(), Weekday::Monday);
        assert_eq!(dates[6], date!(2018 - 11 - 04));
        assert_eq!(grid.get(0, 6), Some(1.0));
        assert_eq!(grid.week_ending(0), date!(2018 - 11 - 04));
    }

    #[test]
    fn month_ticks_mark_month_changes() {
        let grid = build_grid_from_values(&[], date!(2018 - 12 - 31)).unwrap();
        let ticks = grid.month_ticks();
        assert_eq!(ticks[0], MonthTick { week: 0, label: "Jan" });
        // Week 4 ends on Sunday 2019-02-03.
        assert_eq!(ticks[1], MonthTick { week: 4, label: "Feb" });
        assert_eq!(ticks.len(), 12);
    }
}
