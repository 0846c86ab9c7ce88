//! Daily time series and the handful of transforms the charts need.
//!
//! A [`DailySeries`] is an ordered list of `(date, value)` points with strictly
//! increasing dates. Missing measurements are stored as `NaN` (e.g. a day
//! without a weigh-in) and skipped by the aggregating helpers.

use thiserror::Error;
use time::{Date, Duration, Month};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("dates must be strictly increasing: {next} follows {previous}")]
    NotIncreasing { previous: Date, next: Date },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    points: Vec<(Date, f64)>,
}

/// Sum of one calendar month, labelled by its first day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyTotal {
    pub month_start: Date,
    pub total: f64,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit points, rejecting duplicate or unordered dates.
    pub fn from_points(points: Vec<(Date, f64)>) -> Result<Self, SeriesError> {
        for pair in points.windows(2) {
            let (previous, next) = (pair[0].0, pair[1].0);
            if next <= previous {
                return Err(SeriesError::NotIncreasing { previous, next });
            }
        }
        Ok(Self { points })
    }

    /// Contiguous values, one per day, beginning at `start`.
    pub fn from_values<I>(start: Date, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(offset, value)| (start + Duration::days(offset as i64), value))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Date, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn points(&self) -> &[(Date, f64)] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    pub fn first_date(&self) -> Option<Date> {
        self.points.first().map(|(date, _)| *date)
    }

    pub fn last_date(&self) -> Option<Date> {
        self.points.last().map(|(date, _)| *date)
    }

    pub fn value_on(&self, date: Date) -> Option<f64> {
        self.points
            .binary_search_by(|(day, _)| day.cmp(&date))
            .ok()
            .map(|index| self.points[index].1)
    }

    /// Last date carrying an actual (non-NaN) measurement.
    pub fn last_valid_date(&self) -> Option<Date> {
        self.points
            .iter()
            .rev()
            .find(|(_, value)| !value.is_nan())
            .map(|(date, _)| *date)
    }

    /// Points on or after `start`.
    pub fn since(&self, start: Date) -> Self {
        let from = self.points.partition_point(|(date, _)| *date < start);
        Self {
            points: self.points[from..].to_vec(),
        }
    }

    /// Points on or before `end`.
    pub fn until(&self, end: Date) -> Self {
        let to = self.points.partition_point(|(date, _)| *date <= end);
        Self {
            points: self.points[..to].to_vec(),
        }
    }

    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self {
            points: self
                .points
                .iter()
                .map(|(date, value)| (*date, f(*value)))
                .collect(),
        }
    }

    pub fn sum(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, value)| *value)
            .filter(|value| !value.is_nan())
            .sum()
    }

    /// Running total; missing values contribute nothing.
    pub fn cumulative_sum(&self) -> Self {
        let mut running = 0.0;
        Self {
            points: self
                .points
                .iter()
                .map(|(date, value)| {
                    if !value.is_nan() {
                        running += value;
                    }
                    (*date, running)
                })
                .collect(),
        }
    }

    /// Trailing mean over `window` consecutive entries, labelled by the last
    /// entry of each window. The first `window - 1` entries produce no point,
    /// nor does any window containing a missing value.
    pub fn rolling_mean(&self, window: usize) -> Self {
        if window == 0 {
            return Self::new();
        }
        let points = self
            .points
            .windows(window)
            .filter_map(|slice| {
                if slice.iter().any(|(_, value)| value.is_nan()) {
                    return None;
                }
                let total: f64 = slice.iter().map(|(_, value)| *value).sum();
                slice
                    .last()
                    .map(|(date, _)| (*date, total / window as f64))
            })
            .collect();
        Self { points }
    }

    /// Insert `fill` for every calendar day between the first and last point
    /// that has no entry.
    pub fn fill_missing_days(&self, fill: f64) -> Self {
        let (Some(first), Some(last)) = (self.first_date(), self.last_date()) else {
            return Self::new();
        };
        let mut points = Vec::with_capacity((last - first).whole_days() as usize + 1);
        let mut existing = self.points.iter().peekable();
        let mut day = first;
        loop {
            match existing.peek() {
                Some((date, value)) if *date == day => {
                    points.push((day, *value));
                    existing.next();
                }
                _ => points.push((day, fill)),
            }
            if day >= last {
                break;
            }
            match day.next_day() {
                Some(next) => day = next,
                None => break,
            }
        }
        Self { points }
    }

    /// Calendar-month sums in chronological order.
    pub fn monthly_sums(&self) -> Vec<MonthlyTotal> {
        let mut totals: Vec<MonthlyTotal> = Vec::new();
        for (date, value) in self.iter() {
            let month_start = first_of_month(date);
            let value = if value.is_nan() { 0.0 } else { value };
            match totals.last_mut() {
                Some(current) if current.month_start == month_start => current.total += value,
                _ => totals.push(MonthlyTotal {
                    month_start,
                    total: value,
                }),
            }
        }
        totals
    }
}

impl FromIterator<(Date, f64)> for DailySeries {
    /// Collects points, sorting by date and keeping the last value of a duplicated day.
    fn from_iter<T: IntoIterator<Item = (Date, f64)>>(iter: T) -> Self {
        let mut points: Vec<(Date, f64)> = iter.into_iter().collect();
        points.sort_by_key(|(date, _)| *date);
        let mut deduped: Vec<(Date, f64)> = Vec::with_capacity(points.len());
        for (date, value) in points {
            match deduped.last_mut() {
                Some(last) if last.0 == date => last.1 = value,
                _ => deduped.push((date, value)),
            }
        }
        Self { points: deduped }
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

pub(crate) fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
