//! Data access: loads every dataset the dashboard shows from a [`DataSource`].
//!
//! Views never touch files. The app shell loads a [`Datasets`] once and shares
//! it through a Dioxus context (see `components::dashboard`).

mod records;
mod source;

#[cfg(not(target_arch = "wasm32"))]
pub use source::DirectorySource;
pub use source::{DataSource, EmbeddedSource};

use serde::de::DeserializeOwned;
use thiserror::Error;
use time::Date;
use tracing::{debug, info};

use crate::core::config::DashboardConfig;
use crate::core::habits::HabitLog;
use crate::core::schedule::TimeLog;
use crate::core::series::{DailySeries, SeriesError};

use records::{
    BreathingRow, DeepWorkRow, HabitRow, TimeRow, UploadRow, WeightRow, YoutubeRow,
};

pub const YOUTUBE_KPIS: &str = "youtube_kpis.csv";
pub const VIDEO_UPLOADS_2018: &str = "video_uploads_2018.csv";
pub const VIDEO_UPLOADS_2019: &str = "video_uploads_2019.csv";
pub const DEEP_WORK: &str = "deep_work.csv";
pub const HABITS: &str = "habits.csv";
pub const BREATHING: &str = "wim_hof_breathing.csv";
pub const WEIGHT: &str = "weight.csv";
pub const TIME_TRACKING: &str = "time_tracking.csv";
pub const CONFIG: &str = "dashboard.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data file `{name}` not found")]
    Missing { name: String },
    #[error("failed to read `{name}`: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },
    #[error("malformed CSV in `{name}`: {source}")]
    Csv { name: String, source: csv::Error },
    #[error("`{name}`: {source}")]
    Series { name: String, source: SeriesError },
    #[error("invalid `dashboard.json`: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YoutubeKpis {
    /// Net subscribers gained per day.
    pub subscribers: DailySeries,
    pub views: DailySeries,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightLog {
    pub upper_bound: DailySeries,
    pub goal: DailySeries,
    pub lower_bound: DailySeries,
    /// `NaN` on days without a weigh-in.
    pub actual: DailySeries,
}

impl WeightLog {
    pub fn until(&self, end: Date) -> Self {
        Self {
            upper_bound: self.upper_bound.until(end),
            goal: self.goal.until(end),
            lower_bound: self.lower_bound.until(end),
            actual: self.actual.until(end),
        }
    }

    pub fn since(&self, start: Date) -> Self {
        Self {
            upper_bound: self.upper_bound.since(start),
            goal: self.goal.since(start),
            lower_bound: self.lower_bound.since(start),
            actual: self.actual.since(start),
        }
    }

    pub fn latest_weigh_in(&self) -> Option<Date> {
        self.actual.last_valid_date()
    }
}

/// Breath-hold durations in seconds, one series per round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreathingLog {
    pub rounds: Vec<(String, DailySeries)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub config: DashboardConfig,
    pub youtube: YoutubeKpis,
    pub uploads_2018: DailySeries,
    pub uploads_2019: DailySeries,
    /// Minutes of deep work per day.
    pub deep_work: DailySeries,
    pub habits: HabitLog,
    pub breathing: BreathingLog,
    pub weight: WeightLog,
    pub time_log: TimeLog,
}

impl Datasets {
    pub fn load(source: &dyn DataSource) -> Result<Self, DataError> {
        info!(source = %source.describe(), "loading dashboard datasets");

        let config = match source.read(CONFIG)? {
            Some(bytes) => DashboardConfig::from_json(&bytes)?,
            None => {
                debug!("no {CONFIG}; using default configuration");
                DashboardConfig::default()
            }
        };

        let youtube_rows: Vec<YoutubeRow> = read_rows(source, YOUTUBE_KPIS)?;
        let youtube = YoutubeKpis {
            subscribers: series(YOUTUBE_KPIS, youtube_rows.iter().map(|r| (r.date, r.subscribers)))?,
            views: series(YOUTUBE_KPIS, youtube_rows.iter().map(|r| (r.date, r.views)))?,
        };

        let uploads_2018 = upload_series(source, VIDEO_UPLOADS_2018)?;
        let uploads_2019 = upload_series(source, VIDEO_UPLOADS_2019)?;

        let deep_work_rows: Vec<DeepWorkRow> = read_rows(source, DEEP_WORK)?;
        let deep_work = series(DEEP_WORK, deep_work_rows.iter().map(|r| (r.date, r.minutes)))?;

        let habit_rows: Vec<HabitRow> = read_rows(source, HABITS)?;
        let habits = HabitLog {
            ab_workout: series(HABITS, habit_rows.iter().map(|r| (r.date, r.ab_workout)))?,
            cold_shower: series(HABITS, habit_rows.iter().map(|r| (r.date, r.cold_shower)))?,
            self_discipline: series(
                HABITS,
                habit_rows.iter().map(|r| (r.date, r.self_discipline)),
            )?,
            lucid_dreaming: series(HABITS, habit_rows.iter().map(|r| (r.date, r.lucid_dreaming)))?,
            omad: series(HABITS, habit_rows.iter().map(|r| (r.date, r.omad)))?,
        };

        let breathing_rows: Vec<BreathingRow> = read_rows(source, BREATHING)?;
        let breathing = BreathingLog {
            rounds: vec![
                (
                    "Round 1".to_string(),
                    series(BREATHING, breathing_rows.iter().map(|r| (r.date, r.round_1)))?,
                ),
                (
                    "Round 2".to_string(),
                    series(BREATHING, breathing_rows.iter().map(|r| (r.date, r.round_2)))?,
                ),
                (
                    "Round 3".to_string(),
                    series(BREATHING, breathing_rows.iter().map(|r| (r.date, r.round_3)))?,
                ),
            ],
        };

        let weight_rows: Vec<WeightRow> = read_rows(source, WEIGHT)?;
        let weight = WeightLog {
            upper_bound: series(WEIGHT, weight_rows.iter().map(|r| (r.date, r.upper_bound)))?,
            goal: series(WEIGHT, weight_rows.iter().map(|r| (r.date, r.goal)))?,
            lower_bound: series(WEIGHT, weight_rows.iter().map(|r| (r.date, r.lower_bound)))?,
            actual: series(
                WEIGHT,
                weight_rows
                    .iter()
                    .map(|r| (r.date, r.actual.unwrap_or(f64::NAN))),
            )?,
        };

        let time_rows: Vec<TimeRow> = read_rows(source, TIME_TRACKING)?;
        let time_log = TimeLog::new(time_rows.into_iter().map(Into::into).collect());

        info!(
            habit_days = habits.self_discipline.len(),
            tracked_blocks = time_log.entries().len(),
            "datasets loaded"
        );

        Ok(Self {
            config,
            youtube,
            uploads_2018,
            uploads_2019,
            deep_work,
            habits,
            breathing,
            weight,
            time_log,
        })
    }

    /// Uploads over both tracked years.
    pub fn total_uploads(&self) -> f64 {
        self.uploads_2018.sum() + self.uploads_2019.sum()
    }
}

fn read_rows<T: DeserializeOwned>(source: &dyn DataSource, name: &str) -> Result<Vec<T>, DataError> {
    let bytes = source.read(name)?.ok_or_else(|| DataError::Missing {
        name: name.to_string(),
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes.as_ref());
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DataError::Csv {
            name: name.to_string(),
            source,
        })?;
    debug!(file = name, rows = rows.len(), "parsed CSV");
    Ok(rows)
}

fn series<I>(name: &str, points: I) -> Result<DailySeries, DataError>
where
    I: IntoIterator<Item = (Date, f64)>,
{
    DailySeries::from_points(points.into_iter().collect()).map_err(|source| DataError::Series {
        name: name.to_string(),
        source,
    })
}

fn upload_series(source: &dyn DataSource, name: &str) -> Result<DailySeries, DataError> {
    let rows: Vec<UploadRow> = read_rows(source, name)?;
    series(name, rows.iter().map(|r| (r.date, r.videos)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::collections::HashMap;
    use time::macros::date;

    struct MemorySource(HashMap<&'static str, &'static str>);

    impl DataSource for MemorySource {
        fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>, DataError> {
            Ok(self.0.get(name).map(|text| Cow::Borrowed(text.as_bytes())))
        }

        fn describe(&self) -> String {
            "memory".into()
        }
    }

    #[test]
    fn bundled_data_loads() {
        let data = Datasets::load(&EmbeddedSource).expect("bundled data parses");
        assert_eq!(data.uploads_2018.first_date(), Some(date!(2018 - 01 - 01)));
        assert_eq!(data.uploads_2019.first_date(), Some(date!(2018 - 12 - 31)));
        assert_eq!(data.breathing.rounds.len(), 3);
        assert!(!data.time_log.ideal().is_empty());
        assert!(data.weight.latest_weigh_in().is_some());
        assert!(data.total_uploads() > 0.0);
    }

    #[test]
    fn missing_file_is_reported_by_name() {
        let source = MemorySource(HashMap::new());
        let err = Datasets::load(&source).unwrap_err();
        assert!(matches!(err, DataError::Missing { ref name } if name == YOUTUBE_KPIS));
    }

    #[test]
    fn out_of_range_config_is_a_config_error() {
        let source = MemorySource(HashMap::from([(CONFIG, r#"{ "ideal_day_hours": 1e300 }"#)]));
        let err = Datasets::load(&source).unwrap_err();
        assert!(matches!(err, DataError::Config(_)), "got {err}");
    }

    #[test]
    fn malformed_rows_surface_as_csv_errors() {
        let source = MemorySource(HashMap::from([(
            YOUTUBE_KPIS,
            "date,subscribers,views\n2019-01-01,ten,100\n",
        )]));
        let err = Datasets::load(&source).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }), "got {err}");
    }

    #[test]
    fn unordered_dates_are_rejected() {
        let rows: Vec<DeepWorkRow> = {
            let source = MemorySource(HashMap::from([(
                DEEP_WORK,
                "date,minutes\n2019-01-02,60\n2019-01-01,30\n",
            )]));
            read_rows(&source, DEEP_WORK).unwrap()
        };
        let err = series(DEEP_WORK, rows.iter().map(|r| (r.date, r.minutes))).unwrap_err();
        assert!(matches!(err, DataError::Series { .. }));
    }

    #[test]
    fn time_tracking_flags_parse() {
        let source = MemorySource(HashMap::from([(
            TIME_TRACKING,
            "Task,Start,Finish,Date,ideal_schedule\n\
             Gym,2019-03-01 18:00:00,2019-03-01 19:00:00,2019-03-01,True\n\
             Shallow Work,2019-03-02 09:00:00,2019-03-02 10:30:00,2019-03-02,False\n",
        )]));
        let rows: Vec<TimeRow> = read_rows(&source, TIME_TRACKING).unwrap();
        assert!(rows[0].ideal);
        assert!(!rows[1].ideal);
        let log = TimeLog::new(rows.into_iter().map(Into::into).collect());
        assert_eq!(log.latest_date(), Some(date!(2019 - 03 - 02)));
    }
}
