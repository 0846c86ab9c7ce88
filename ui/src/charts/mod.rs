//! Chart descriptions and their SVG renderers.
//!
//! Builders in [`kpi`], [`heatmap`] and [`schedule`] are pure: they take data
//! plus the current control selection and return a spec value. Components in
//! [`svg`] draw those specs. Views re-run the builders whenever a signal
//! holding the selection changes.

pub mod heatmap;
pub mod kpi;
pub mod schedule;
pub mod svg;

pub use heatmap::{HeatCell, HeatmapSpec, UploadYear};
pub use kpi::{RollingWindow, YoutubeKpi};
pub use schedule::{ScheduleBar, ScheduleRow, ScheduleSpec};
pub use svg::{CalendarHeatmap, ChartError, LineChart, ScheduleChart};

use time::Date;

use crate::core::format::DayKind;
use crate::core::series::month_abbrev;

/// Background of every plotting area; hollow markers are filled with it.
pub const PLOT_BACKGROUND: &str = "#F5F6F9";

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Filled,
    /// Drawn in the plot background colour; used for weekends.
    Hollow,
}

impl Marker {
    pub fn for_day(date: Date) -> Self {
        match DayKind::of(date) {
            DayKind::Workday => Marker::Filled,
            DayKind::Weekend => Marker::Hollow,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: Date,
    /// `NaN` breaks the line and draws no marker.
    pub value: f64,
    pub hover: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub color: &'static str,
    pub line: LineStyle,
    /// Shade the area between this trace and the previous one (or the x axis).
    pub fill_to_previous: bool,
    pub hoverable: bool,
    pub points: Vec<ChartPoint>,
}

impl Trace {
    pub fn line(name: impl Into<String>, color: &'static str, points: Vec<ChartPoint>) -> Self {
        Self {
            name: name.into(),
            color,
            line: LineStyle::Solid,
            fill_to_previous: false,
            hoverable: true,
            points,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.line = LineStyle::Dashed;
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill_to_previous = true;
        self
    }

    pub fn without_hover(mut self) -> Self {
        self.hoverable = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartSpec {
    pub title: Option<String>,
    pub x_title: Option<String>,
    pub y_title: String,
    pub height: u32,
    pub traces: Vec<Trace>,
    pub y_ticks: Vec<Tick>,
    /// Fixed y range; derived from ticks and data when absent.
    pub y_range: Option<(f64, f64)>,
    pub legend: bool,
}

impl LineChartSpec {
    pub fn is_empty(&self) -> bool {
        self.traces.iter().all(|trace| trace.points.is_empty())
    }

    pub fn x_extent(&self) -> Option<(Date, Date)> {
        let dates = self
            .traces
            .iter()
            .flat_map(|trace| trace.points.iter().map(|point| point.date));
        dates.fold(None, |extent, date| match extent {
            None => Some((date, date)),
            Some((lo, hi)) => Some((lo.min(date), hi.max(date))),
        })
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        if let Some(range) = self.y_range {
            return range;
        }
        let values = self
            .traces
            .iter()
            .flat_map(|trace| trace.points.iter().map(|point| point.value))
            .chain(self.y_ticks.iter().map(|tick| tick.value))
            .filter(|value| value.is_finite());
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return (0.0, 1.0);
        }
        if (hi - lo).abs() < f64::EPSILON {
            return (lo - 1.0, hi + 1.0);
        }
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    }

    /// First day of each month inside the x extent, thinned to at most ~12 labels.
    pub fn x_ticks(&self) -> Vec<(Date, String)> {
        let Some((start, end)) = self.x_extent() else {
            return Vec::new();
        };
        let mut months = Vec::new();
        let mut cursor = crate::core::series::first_of_month(start);
        if cursor < start {
            cursor = next_month(cursor);
        }
        while cursor <= end {
            months.push(cursor);
            cursor = next_month(cursor);
        }
        if months.is_empty() {
            months.push(start);
        }
        let step = months.len().div_ceil(12).max(1);
        months
            .into_iter()
            .step_by(step)
            .map(|date| {
                let label = if date.month() == time::Month::January {
                    format!("{} {}", month_abbrev(date.month()), date.year())
                } else {
                    month_abbrev(date.month()).to_string()
                };
                (date, label)
            })
            .collect()
    }
}

fn next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        time::Month::December => (date.year() + 1, time::Month::January),
        month => (date.year(), month.next()),
    };
    Date::from_calendar_date(year, month, 1).unwrap_or(date)
}

/// Roughly `target` evenly spaced round values covering `lo..=hi`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || target == 0 {
        return Vec::new();
    }
    let (lo, hi) = if hi - lo < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    };
    let raw_step = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let step = magnitude
        * if residual < 1.5 {
            1.0
        } else if residual < 3.0 {
            2.0
        } else if residual < 7.0 {
            5.0
        } else {
            10.0
        };
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
