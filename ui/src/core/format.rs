//! Formatting helpers for presenting metrics.

use time::{macros::format_description, Date, Duration, Weekday};

/// Workday vs weekend, used for hover labels and hollow weekend markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Workday,
    Weekend,
}

impl DayKind {
    pub fn of(date: Date) -> Self {
        match date.weekday() {
            Weekday::Saturday | Weekday::Sunday => Self::Weekend,
            _ => Self::Workday,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Workday => "Workday",
            Self::Weekend => "Weekend",
        }
    }
}

pub fn format_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// `2h 05min`
pub fn format_hours_minutes(total_minutes: f64) -> String {
    if !total_minutes.is_finite() {
        return "—".into();
    }
    let rounded = total_minutes.round().max(0.0) as i64;
    format!("{}h {:02}min", rounded / 60, rounded % 60)
}

/// `1min 05s`
pub fn format_breath_hold(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return "—".into();
    }
    let rounded = total_seconds.round().max(0.0) as i64;
    format!("{}min {:02}s", rounded / 60, rounded % 60)
}

/// `04:30`
pub fn format_clock_duration(duration: Duration) -> String {
    let minutes = duration.whole_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Minutes past midnight as a wall-clock time; values past 24h wrap.
pub fn format_clock_minute(minute: i64) -> String {
    let wrapped = minute.rem_euclid(24 * 60);
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

pub fn format_percent(fraction: f64) -> String {
    if fraction.is_finite() {
        format!("{:.0}%", fraction * 100.0)
    } else {
        "—".into()
    }
}

pub fn format_kg(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}kg")
    } else {
        "—".into()
    }
}

/// Whole number with thousands separators: `100,000`.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
