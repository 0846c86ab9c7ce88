//! Row layouts of the bundled CSV files.

use serde::{de, Deserialize, Deserializer};
use time::{Date, PrimitiveDateTime};

use crate::core::schedule::{Task, TimeEntry};

time::serde::format_description!(csv_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(
    csv_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);

#[derive(Debug, Deserialize)]
pub(crate) struct YoutubeRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    /// Net subscribers gained that day.
    pub subscribers: f64,
    pub views: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    pub videos: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeepWorkRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    pub minutes: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HabitRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    pub ab_workout: f64,
    pub cold_shower: f64,
    pub self_discipline: f64,
    pub lucid_dreaming: f64,
    pub omad: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BreathingRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    pub round_1: f64,
    pub round_2: f64,
    pub round_3: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WeightRow {
    #[serde(with = "csv_date")]
    pub date: Date,
    pub upper_bound: f64,
    pub goal: f64,
    pub lower_bound: f64,
    /// Empty on days without a weigh-in.
    pub actual: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimeRow {
    #[serde(rename = "Task")]
    pub task: Task,
    #[serde(rename = "Start", with = "csv_timestamp")]
    pub start: PrimitiveDateTime,
    #[serde(rename = "Finish", with = "csv_timestamp")]
    pub finish: PrimitiveDateTime,
    #[serde(rename = "Date", with = "csv_date")]
    pub date: Date,
    #[serde(rename = "ideal_schedule", deserialize_with = "flag")]
    pub ideal: bool,
}

impl From<TimeRow> for TimeEntry {
    fn from(row: TimeRow) -> Self {
        TimeEntry {
            task: row.task,
            start: row.start,
            finish: row.finish,
            date: row.date,
            ideal: row.ideal,
        }
    }
}

/// Accepts `True`/`False` as written by spreadsheet exports, plus `true`/`false`/`1`/`0`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "True" | "true" | "1" => Ok(true),
        "False" | "false" | "0" | "" => Ok(false),
        other => Err(de::Error::custom(format!("invalid boolean flag `{other}`"))),
    }
}
