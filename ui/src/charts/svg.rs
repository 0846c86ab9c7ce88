//! SVG renderers for the chart specs.
//!
//! Each component lays its spec out on a fixed view box and lets CSS scale
//! it to the container width. Hover text uses native `<title>` tooltips.

use dioxus::prelude::*;
use time::Date;

use super::heatmap::HeatmapSpec;
use super::schedule::ScheduleSpec;
use super::{LineChartSpec, LineStyle, Marker, Trace, PLOT_BACKGROUND};
use crate::core::calendar::{DAYS_PER_WEEK, WEEKS};
use crate::core::format::format_clock_duration;
use crate::t;

const WIDTH: f64 = 960.0;
const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;

/// Maps dates and values onto the plotting area.
struct Frame {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    height: f64,
}

impl Frame {
    fn new(spec: &LineChartSpec, start: Date, end: Date) -> Self {
        let (y0, y1) = spec.y_bounds();
        let x0 = f64::from(start.to_julian_day());
        // Single-day charts still need a non-zero span.
        let x1 = f64::from(end.to_julian_day()).max(x0 + 1.0);
        Self {
            x0,
            x1,
            y0,
            y1,
            height: f64::from(spec.height),
        }
    }

    fn x(&self, date: Date) -> f64 {
        let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (f64::from(date.to_julian_day()) - self.x0) / (self.x1 - self.x0) * span
    }

    fn y(&self, value: f64) -> f64 {
        let span = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let range = if self.y1 - self.y0 > f64::EPSILON {
            self.y1 - self.y0
        } else {
            1.0
        };
        self.height - MARGIN_BOTTOM - (value - self.y0) / range * span
    }

    fn bottom(&self) -> f64 {
        self.height - MARGIN_BOTTOM
    }
}

#[derive(Clone, PartialEq)]
struct Dot {
    cx: f64,
    cy: f64,
    date: Date,
    fill: &'static str,
    hover: String,
}

#[derive(Clone, PartialEq)]
struct Layer {
    name: String,
    color: &'static str,
    dash: Option<&'static str>,
    /// Polyline point lists, split wherever the trace has a gap.
    segments: Vec<String>,
    area: Option<String>,
    dots: Vec<Dot>,
    hoverable: bool,
}

fn layer(frame: &Frame, trace: &Trace, previous: Option<&Trace>) -> Layer {
    let mut segments = Vec::new();
    let mut current = String::new();
    for point in &trace.points {
        if point.value.is_finite() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&format!("{:.1},{:.1}", frame.x(point.date), frame.y(point.value)));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let area = trace.fill_to_previous.then(|| area_path(frame, trace, previous));

    let dots = trace
        .points
        .iter()
        .filter(|point| point.value.is_finite())
        .filter_map(|point| {
            let fill = match point.marker {
                Marker::None if !trace.hoverable => return None,
                // Invisible hover target.
                Marker::None => "transparent",
                Marker::Filled => trace.color,
                Marker::Hollow => PLOT_BACKGROUND,
            };
            Some(Dot {
                cx: frame.x(point.date),
                cy: frame.y(point.value),
                date: point.date,
                fill,
                hover: point.hover.clone(),
            })
        })
        .collect();

    Layer {
        name: trace.name.clone(),
        color: trace.color,
        dash: (trace.line == LineStyle::Dashed).then_some("6 4"),
        segments,
        area,
        dots,
        hoverable: trace.hoverable,
    }
}

/// Polygon between `trace` and `previous`, or down to the x axis.
fn area_path(frame: &Frame, trace: &Trace, previous: Option<&Trace>) -> String {
    let upper: Vec<(f64, f64)> = trace
        .points
        .iter()
        .map(|point| {
            let value = if point.value.is_finite() { point.value } else { 0.0 };
            (frame.x(point.date), frame.y(value))
        })
        .collect();
    let lower: Vec<(f64, f64)> = match previous {
        Some(prev) if !prev.points.is_empty() => prev
            .points
            .iter()
            .rev()
            .map(|point| {
                let value = if point.value.is_finite() { point.value } else { 0.0 };
                (frame.x(point.date), frame.y(value))
            })
            .collect(),
        _ => {
            let baseline = frame.y(frame.y0.max(0.0));
            upper.iter().rev().map(|(x, _)| (*x, baseline)).collect()
        }
    };
    let mut path = String::new();
    for (index, (x, y)) in upper.iter().chain(lower.iter()).enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{command}{x:.1},{y:.1} "));
    }
    path.push('Z');
    path
}

/// Line/area chart. `on_hover` fires with the date of the hovered marker;
/// `selected` draws a cursor on that date.
#[component]
pub fn LineChart(
    spec: LineChartSpec,
    on_hover: Option<EventHandler<Date>>,
    #[props(!optional)] selected: Option<Date>,
) -> Element {
    let Some((start, end)) = spec.x_extent() else {
        return rsx! {
            figure { class: "chart chart--empty",
                p { class: "chart__placeholder", {t!("chart-no-data")} }
            }
        };
    };

    let frame = Frame::new(&spec, start, end);
    let height = frame.height;
    let bottom = frame.bottom();
    let right = WIDTH - MARGIN_RIGHT;
    let view_box = format!("0 0 {WIDTH} {height}");

    let y_ticks: Vec<(f64, String)> = spec
        .y_ticks
        .iter()
        .filter(|tick| {
            let (lo, hi) = spec.y_bounds();
            tick.value >= lo && tick.value <= hi
        })
        .map(|tick| (frame.y(tick.value), tick.label.clone()))
        .collect();
    let x_ticks: Vec<(f64, String)> = spec
        .x_ticks()
        .into_iter()
        .map(|(date, label)| (frame.x(date), label))
        .collect();

    let layers: Vec<Layer> = spec
        .traces
        .iter()
        .enumerate()
        .map(|(index, trace)| {
            let previous = index.checked_sub(1).and_then(|i| spec.traces.get(i));
            layer(&frame, trace, previous)
        })
        .collect();
    let legend: Vec<(String, &'static str)> = layers
        .iter()
        .map(|layer| (layer.name.clone(), layer.color))
        .collect();

    let cursor_x = selected
        .filter(|date| *date >= start && *date <= end)
        .map(|date| frame.x(date));
    let y_title_y = (MARGIN_TOP + bottom) / 2.0;
    let x_title_y = height - 6.0;
    let x_title_x = (MARGIN_LEFT + right) / 2.0;

    rsx! {
        figure { class: "chart chart--line",
            if let Some(title) = spec.title.as_ref() {
                figcaption { class: "chart__title", "{title}" }
            }
            svg {
                class: "chart__canvas",
                view_box: "{view_box}",
                preserve_aspect_ratio: "xMidYMid meet",
                rect {
                    class: "chart__plot",
                    x: MARGIN_LEFT,
                    y: MARGIN_TOP,
                    width: right - MARGIN_LEFT,
                    height: bottom - MARGIN_TOP,
                    fill: PLOT_BACKGROUND,
                }
                g { class: "chart__axis chart__axis--y",
                    for (y, label) in y_ticks {
                        line { class: "chart__gridline", x1: MARGIN_LEFT, x2: right, y1: y, y2: y }
                        text {
                            class: "chart__tick",
                            x: MARGIN_LEFT - 8.0,
                            y: y,
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{label}"
                        }
                    }
                    text {
                        class: "chart__axis-title",
                        transform: "translate(14 {y_title_y}) rotate(-90)",
                        text_anchor: "middle",
                        "{spec.y_title}"
                    }
                }
                g { class: "chart__axis chart__axis--x",
                    for (x, label) in x_ticks {
                        line { class: "chart__tick-mark", x1: x, x2: x, y1: bottom, y2: bottom + 5.0 }
                        text {
                            class: "chart__tick",
                            x: x,
                            y: bottom + 18.0,
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                    if let Some(x_title) = spec.x_title.as_ref() {
                        text {
                            class: "chart__axis-title",
                            x: x_title_x,
                            y: x_title_y,
                            text_anchor: "middle",
                            "{x_title}"
                        }
                    }
                }
                if let Some(x) = cursor_x {
                    line { class: "chart__cursor", x1: x, x2: x, y1: MARGIN_TOP, y2: bottom }
                }
                for layer in layers {
                    g { class: "chart__trace",
                        if let Some(area) = layer.area.as_ref() {
                            path { class: "chart__area", d: "{area}", fill: layer.color, fill_opacity: "0.35", stroke: "none" }
                        }
                        for segment in layer.segments.iter() {
                            polyline {
                                class: "chart__line",
                                points: "{segment}",
                                fill: "none",
                                stroke: layer.color,
                                stroke_width: "2",
                                stroke_dasharray: layer.dash,
                            }
                        }
                        if layer.hoverable {
                            for dot in layer.dots {
                                circle {
                                    class: "chart__marker",
                                    cx: dot.cx,
                                    cy: dot.cy,
                                    r: 4.0,
                                    fill: dot.fill,
                                    stroke: layer.color,
                                    stroke_width: "1.5",
                                    onmouseenter: move |_| {
                                        if let Some(handler) = on_hover {
                                            handler.call(dot.date);
                                        }
                                    },
                                    title { "{dot.hover}" }
                                }
                            }
                        }
                    }
                }
            }
            if spec.legend {
                div { class: "chart__legend",
                    for (name, color) in legend {
                        span { class: "chart__legend-item",
                            span { class: "chart__legend-swatch", style: "background: {color}" }
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

const CELL: f64 = 14.0;
const GAP: f64 = 3.0;
const HEAT_LEFT: f64 = 78.0;
const HEAT_TOP: f64 = 22.0;

/// GitHub-style calendar: weeks run left to right, Monday on top.
#[component]
pub fn CalendarHeatmap(spec: HeatmapSpec) -> Element {
    let pitch = CELL + GAP;
    let width = HEAT_LEFT + WEEKS as f64 * pitch + GAP;
    let height = HEAT_TOP + DAYS_PER_WEEK as f64 * pitch + GAP;
    let view_box = format!("0 0 {width} {height}");

    let months: Vec<(f64, &'static str)> = spec
        .month_ticks
        .iter()
        .map(|tick| (HEAT_LEFT + tick.week as f64 * pitch, tick.label))
        .collect();
    let weekdays: Vec<(f64, &'static str)> = spec
        .weekday_labels()
        .into_iter()
        .map(|(row, name)| (HEAT_TOP + row as f64 * pitch + CELL / 2.0, name))
        .collect();

    rsx! {
        figure { class: "chart chart--heatmap",
            figcaption { class: "chart__title", "{spec.title}" }
            svg {
                class: "chart__canvas",
                view_box: "{view_box}",
                preserve_aspect_ratio: "xMidYMid meet",
                for (x, label) in months {
                    text { class: "chart__tick", x: x, y: HEAT_TOP - 8.0, "{label}" }
                }
                for (y, name) in weekdays {
                    text {
                        class: "chart__tick",
                        x: HEAT_LEFT - 8.0,
                        y: y,
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        "{name}"
                    }
                }
                for cell in spec.cells.iter() {
                    rect {
                        class: "heatmap__cell",
                        x: HEAT_LEFT + cell.week as f64 * pitch,
                        y: HEAT_TOP + cell.weekday as f64 * pitch,
                        width: CELL,
                        height: CELL,
                        rx: 2.0,
                        fill: "{cell.color}",
                        title { "{cell.hover}" }
                    }
                }
            }
        }
    }
}

const ROW_HEIGHT: f64 = 44.0;
const BAR_HEIGHT: f64 = 26.0;
const GANTT_LEFT: f64 = 110.0;
const GANTT_RIGHT: f64 = 130.0;
const GANTT_TOP: f64 = 26.0;
const GANTT_BOTTOM: f64 = 34.0;

/// Horizontal bars per task across the day, with totals on the right.
#[component]
pub fn ScheduleChart(spec: ScheduleSpec) -> Element {
    let (window_start, window_end) = spec.window();
    let plot_right = WIDTH - GANTT_RIGHT;
    let height = GANTT_TOP + spec.rows.len() as f64 * ROW_HEIGHT + GANTT_BOTTOM;
    let plot_bottom = height - GANTT_BOTTOM;
    let view_box = format!("0 0 {WIDTH} {height}");
    let scale = move |minute: i64| -> f64 {
        let clamped = minute.clamp(window_start, window_end);
        GANTT_LEFT
            + (clamped - window_start) as f64 / (window_end - window_start) as f64
                * (plot_right - GANTT_LEFT)
    };

    let hours: Vec<(f64, String)> = spec
        .hour_ticks()
        .into_iter()
        .map(|(minute, label)| (scale(minute), label))
        .collect();
    let total_label = t!("schedule-total-label");
    let grand_total = format_clock_duration(spec.total);
    let total_x = plot_right + 16.0;
    let footer_y = plot_bottom + 22.0;

    rsx! {
        figure { class: "chart chart--schedule",
            figcaption { class: "chart__title", "{spec.title}" }
            svg {
                class: "chart__canvas",
                view_box: "{view_box}",
                preserve_aspect_ratio: "xMidYMid meet",
                rect {
                    class: "chart__plot",
                    x: GANTT_LEFT,
                    y: GANTT_TOP,
                    width: plot_right - GANTT_LEFT,
                    height: plot_bottom - GANTT_TOP,
                    fill: PLOT_BACKGROUND,
                }
                for (x, label) in hours {
                    line { class: "chart__gridline", x1: x, x2: x, y1: GANTT_TOP, y2: plot_bottom }
                    text { class: "chart__tick", x: x, y: footer_y, text_anchor: "middle", "{label}" }
                }
                text {
                    class: "schedule__total-heading",
                    x: total_x,
                    y: GANTT_TOP - 8.0,
                    "{total_label}"
                }
                for (index, row) in spec.rows.iter().enumerate() {
                    g { class: "schedule__row",
                        text {
                            class: "chart__tick",
                            x: GANTT_LEFT - 10.0,
                            y: GANTT_TOP + index as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{row.task.label()}"
                        }
                        for bar in row.bars.iter() {
                            rect {
                                class: "schedule__bar",
                                x: scale(bar.start_minute),
                                y: GANTT_TOP + index as f64 * ROW_HEIGHT + (ROW_HEIGHT - BAR_HEIGHT) / 2.0,
                                width: (scale(bar.finish_minute) - scale(bar.start_minute)).max(1.0),
                                height: BAR_HEIGHT,
                                rx: 3.0,
                                fill: row.color,
                                title { "{bar.hover}" }
                            }
                        }
                        text {
                            class: "schedule__total",
                            x: total_x,
                            y: GANTT_TOP + index as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0,
                            dominant_baseline: "middle",
                            "{format_clock_duration(row.total)}"
                        }
                    }
                }
                text {
                    class: "schedule__total schedule__total--grand",
                    x: total_x,
                    y: footer_y,
                    "{grand_total}"
                }
            }
        }
    }
}

/// Shown in place of a chart whose data could not be laid out.
#[component]
pub fn ChartError(message: String) -> Element {
    rsx! {
        div { class: "chart chart--error", role: "alert",
            p { class: "chart__placeholder", {t!("chart-unavailable", error = message)} }
        }
    }
}
