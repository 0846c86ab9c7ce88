//! Line-chart builders for the KPI and lead-measure charts.

use time::Date;

use super::{nice_ticks, ChartPoint, LineChartSpec, Marker, Tick, Trace};
use crate::core::config::DashboardConfig;
use crate::core::format::{
    format_breath_hold, format_count, format_date, format_hours_minutes, format_kg,
    format_percent, DayKind,
};
use crate::core::schedule::TimeLog;
use crate::core::series::{month_abbrev, DailySeries};
use crate::data::{BreathingLog, WeightLog, YoutubeKpis};

const GOAL_GREEN: &str = "#2ca02c";
const BOUND_RED: &str = "#d62728";
const ORANGE: &str = "#ff7f0e";
const ROUND_COLORS: [&str; 3] = ["#1f77b4", "#ff7f0e", "#2ca02c"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YoutubeKpi {
    #[default]
    Subscribers,
    Views,
}

impl YoutubeKpi {
    pub const ALL: [YoutubeKpi; 2] = [YoutubeKpi::Subscribers, YoutubeKpi::Views];

    /// Radio input value.
    pub fn value(self) -> &'static str {
        match self {
            YoutubeKpi::Subscribers => "subscribers",
            YoutubeKpi::Views => "views",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kpi| kpi.value() == value)
    }
}

/// Trailing window of the deep-work rolling average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollingWindow {
    #[default]
    Week,
    Month,
    Quarter,
}

impl RollingWindow {
    pub const ALL: [RollingWindow; 3] = [
        RollingWindow::Week,
        RollingWindow::Month,
        RollingWindow::Quarter,
    ];

    pub fn days(self) -> usize {
        match self {
            RollingWindow::Week => 7,
            RollingWindow::Month => 30,
            RollingWindow::Quarter => 90,
        }
    }

    pub fn from_days(days: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|window| window.days() == days)
    }
}

/// Subscriber growth (cumulative) or monthly views, each against its goal.
pub fn youtube_kpi(kpis: &YoutubeKpis, kpi: YoutubeKpi, config: &DashboardConfig) -> LineChartSpec {
    let (name, y_title, goal, points) = match kpi {
        YoutubeKpi::Subscribers => {
            let points = kpis
                .subscribers
                .cumulative_sum()
                .iter()
                .map(|(date, value)| ChartPoint {
                    date,
                    value,
                    hover: format!("{}\n{} subscribers", format_date(date), format_count(value)),
                    marker: Marker::None,
                })
                .collect::<Vec<_>>();
            ("Subscribers", "Subscriber Count", config.subscriber_goal, points)
        }
        YoutubeKpi::Views => {
            let mut months = kpis.views.monthly_sums();
            // The newest month is still in progress.
            months.pop();
            let points = months
                .into_iter()
                .map(|month| ChartPoint {
                    date: month.month_start,
                    value: month.total,
                    hover: format!(
                        "{} {}\n{} views",
                        month_abbrev(month.month_start.month()),
                        month.month_start.year(),
                        format_count(month.total)
                    ),
                    marker: Marker::Filled,
                })
                .collect::<Vec<_>>();
            ("Views", "Views per Month", config.monthly_views_goal(), points)
        }
    };

    let peak = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(goal, f64::max);
    let y_ticks = nice_ticks(0.0, peak, 5)
        .into_iter()
        .map(|value| Tick::new(value, format_count(value)))
        .collect();

    let goal_line = goal_trace(&points, goal);
    LineChartSpec {
        title: None,
        x_title: None,
        y_title: y_title.to_string(),
        height: 380,
        traces: vec![Trace::line(name, "#1f77b4", points), goal_line],
        y_ticks,
        y_range: None,
        legend: false,
    }
}

/// Deep-work minutes as a trailing rolling mean, plotted in hours.
pub fn deep_work(minutes: &DailySeries, window: RollingWindow) -> LineChartSpec {
    let points = minutes
        .rolling_mean(window.days())
        .iter()
        .map(|(date, value)| ChartPoint {
            date,
            value,
            hover: format!("{}\n{}", DayKind::of(date).label(), format_hours_minutes(value)),
            marker: Marker::for_day(date),
        })
        .collect();

    LineChartSpec {
        title: Some("Time spent on Deep Work".into()),
        x_title: Some("Date".into()),
        y_title: "Hours".into(),
        height: 420,
        traces: vec![Trace::line("Deep Work", ORANGE, points)],
        y_ticks: (0..10)
            .map(|hours| Tick::new(f64::from(hours * 60), hours.to_string()))
            .collect(),
        y_range: None,
        legend: false,
    }
}

/// Tracked time per day as a share of the ideal day.
pub fn time_spent(log: &TimeLog, config: &DashboardConfig) -> LineChartSpec {
    let ideal_minutes = config.ideal_day().whole_minutes() as f64;
    let points = log
        .daily_share(config.ideal_day())
        .iter()
        .map(|(date, share)| ChartPoint {
            date,
            value: share,
            hover: format!(
                "{}\n{}: {}",
                DayKind::of(date).label(),
                format_percent(share),
                format_hours_minutes(share * ideal_minutes)
            ),
            marker: Marker::for_day(date),
        })
        .collect();

    LineChartSpec {
        title: Some("Time spent on Something productive".into()),
        x_title: None,
        y_title: format!("Percentage of Ideal ({}h)", config.ideal_day_hours),
        height: 380,
        traces: vec![Trace::line("Time spent", ORANGE, points)],
        y_ticks: (0..=5)
            .map(|step| {
                let share = f64::from(step) * 0.2;
                Tick::new(share, format_percent(share))
            })
            .collect(),
        y_range: Some((-0.05, 1.05)),
        legend: false,
    }
}

/// Weight corridor (dashed bounds, goal) plus the measured weight.
pub fn weight(log: &WeightLog) -> LineChartSpec {
    let plain = |series: &DailySeries| -> Vec<ChartPoint> {
        series
            .iter()
            .map(|(date, value)| ChartPoint {
                date,
                value,
                hover: format_kg(value),
                marker: Marker::None,
            })
            .collect()
    };
    let actual = log
        .actual
        .iter()
        .map(|(date, value)| ChartPoint {
            date,
            value,
            hover: format!("{}\n{}", format_date(date), format_kg(value)),
            marker: Marker::for_day(date),
        })
        .collect();

    let y_ticks = {
        let all = [&log.upper_bound, &log.lower_bound, &log.goal, &log.actual];
        let (lo, hi) = all
            .iter()
            .flat_map(|series| series.iter().map(|(_, value)| value))
            .filter(|value| value.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        nice_ticks(lo, hi, 5)
            .into_iter()
            .map(|value| Tick::new(value, format!("{value}")))
            .collect()
    };

    LineChartSpec {
        title: None,
        x_title: None,
        y_title: "Weight in kg".into(),
        height: 420,
        traces: vec![
            Trace::line("Upper bound", BOUND_RED, plain(&log.upper_bound))
                .dashed()
                .without_hover(),
            Trace::line("Goal", GOAL_GREEN, plain(&log.goal)).without_hover(),
            Trace::line("Lower bound", BOUND_RED, plain(&log.lower_bound))
                .dashed()
                .without_hover(),
            Trace::line("Weight", "black", actual),
        ],
        y_ticks,
        y_range: None,
        legend: false,
    }
}

/// Breath-hold time per round as stacked-looking area traces.
pub fn breathing(log: &BreathingLog) -> LineChartSpec {
    let traces = log
        .rounds
        .iter()
        .zip(ROUND_COLORS.iter().copied().cycle())
        .map(|((name, series), color)| {
            let points = series
                .iter()
                .map(|(date, seconds)| ChartPoint {
                    date,
                    value: seconds,
                    hover: format!("{name}\n{}", format_breath_hold(seconds)),
                    marker: Marker::None,
                })
                .collect();
            Trace::line(name.clone(), color, points).filled()
        })
        .collect();

    LineChartSpec {
        title: Some("Wim Hof Breathing Method".into()),
        x_title: None,
        y_title: "Breath held in minutes".into(),
        height: 380,
        traces,
        y_ticks: (0..=5)
            .map(|minutes| Tick::new(f64::from(minutes * 60), minutes.to_string()))
            .collect(),
        y_range: None,
        legend: true,
    }
}

fn goal_trace(points: &[ChartPoint], goal: f64) -> Trace {
    let span: Vec<Date> = match (points.first(), points.last()) {
        (Some(first), Some(last)) => vec![first.date, last.date],
        _ => Vec::new(),
    };
    let points = span
        .into_iter()
        .map(|date| ChartPoint {
            date,
            value: goal,
            hover: format!("Goal: {}", format_count(goal)),
            marker: Marker::None,
        })
        .collect();
    Trace::line("Goal", GOAL_GREEN, points).dashed().without_hover()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::{Task, TimeEntry};
    use time::macros::{date, datetime};

    #[test]
    fn subscribers_are_cumulated_against_the_goal() {
        let kpis = YoutubeKpis {
            subscribers: DailySeries::from_values(date!(2019 - 01 - 01), [10.0, 20.0, 5.0]),
            views: DailySeries::new(),
        };
        let chart = youtube_kpi(&kpis, YoutubeKpi::Subscribers, &DashboardConfig::default());
        let values: Vec<f64> = chart.traces[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 30.0, 35.0]);
        let goal = &chart.traces[1];
        assert!(goal.points.iter().all(|p| p.value == 100_000.0));
        assert_eq!(chart.y_ticks.last().map(|t| t.label.as_str()), Some("100,000"));
    }

    #[test]
    fn monthly_views_drop_the_partial_month() {
        let kpis = YoutubeKpis {
            subscribers: DailySeries::new(),
            views: DailySeries::from_values(date!(2019 - 01 - 30), [1.0, 2.0, 3.0, 4.0, 5.0]),
        };
        let chart = youtube_kpi(&kpis, YoutubeKpi::Views, &DashboardConfig::default());
        let points = &chart.traces[0].points;
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date!(2019 - 01 - 01));
        assert_eq!(points[0].value, 3.0);
        assert_eq!(chart.traces[1].points[0].value, 2_000_000.0);
    }

    #[test]
    fn deep_work_hover_names_the_kind_of_day() {
        // 2019-03-02 is a Saturday.
        let minutes = DailySeries::from_values(date!(2019 - 02 - 24), (0..7).map(|_| 125.0));
        let chart = deep_work(&minutes, RollingWindow::Week);
        let point = &chart.traces[0].points[0];
        assert_eq!(point.date, date!(2019 - 03 - 02));
        assert_eq!(point.hover, "Weekend\n2h 05min");
        assert_eq!(point.marker, Marker::Hollow);
        assert_eq!(chart.y_ticks.len(), 10);
        assert_eq!(chart.y_ticks[9].value, 540.0);
    }

    #[test]
    fn longer_windows_start_later() {
        let minutes = DailySeries::from_values(date!(2019 - 01 - 01), (0..120).map(f64::from));
        for window in RollingWindow::ALL {
            let chart = deep_work(&minutes, window);
            assert_eq!(chart.traces[0].points.len(), 120 - window.days() + 1);
        }
        assert_eq!(RollingWindow::from_days(30), Some(RollingWindow::Month));
        assert_eq!(RollingWindow::from_days(14), None);
    }

    #[test]
    fn time_spent_is_a_share_of_the_ideal_day() {
        let log = TimeLog::new(vec![TimeEntry {
            task: Task::DeepWork,
            start: datetime!(2019 - 03 - 04 08:00),
            finish: datetime!(2019 - 03 - 04 14:00),
            date: date!(2019 - 03 - 04),
            ideal: false,
        }]);
        let chart = time_spent(&log, &DashboardConfig::default());
        let point = &chart.traces[0].points[0];
        assert_eq!(point.value, 0.5);
        assert_eq!(point.hover, "Workday\n50%: 6h 00min");
        assert_eq!(chart.y_range, Some((-0.05, 1.05)));
        assert_eq!(chart.y_ticks.last().map(|t| t.label.as_str()), Some("100%"));
    }

    #[test]
    fn weight_bounds_are_dashed_and_silent() {
        let day = date!(2019 - 07 - 04);
        let log = WeightLog {
            upper_bound: DailySeries::from_values(day, [90.0, 89.9]),
            goal: DailySeries::from_values(day, [88.0, 87.9]),
            lower_bound: DailySeries::from_values(day, [86.0, 85.9]),
            actual: DailySeries::from_values(day, [88.4, f64::NAN]),
        };
        let chart = weight(&log);
        assert_eq!(chart.traces.len(), 4);
        assert!(!chart.traces[0].hoverable);
        assert_eq!(chart.traces[0].line, super::super::LineStyle::Dashed);
        let actual = &chart.traces[3];
        assert!(actual.hoverable);
        assert_eq!(actual.points[0].hover, "2019-07-04\n88.4kg");
        assert!(actual.points[1].value.is_nan());
    }

    #[test]
    fn breathing_rounds_become_area_traces() {
        let log = BreathingLog {
            rounds: vec![
                ("Round 1".into(), DailySeries::from_values(date!(2019 - 01 - 10), [65.0])),
                ("Round 2".into(), DailySeries::from_values(date!(2019 - 01 - 10), [95.0])),
            ],
        };
        let chart = breathing(&log);
        assert!(chart.traces.iter().all(|trace| trace.fill_to_previous));
        assert_eq!(chart.traces[0].points[0].hover, "Round 1\n1min 05s");
        assert_eq!(chart.y_ticks[5].value, 300.0);
    }
}
