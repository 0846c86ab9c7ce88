//! Habit and upload heatmaps: a [`CalendarGrid`](crate::core::CalendarGrid) laid out as coloured cells with hover text.

use time::Date;

use crate::core::calendar::{
    build_grid, GridError, MonthTick, DAYS_PER_WEEK, WEEKDAY_NAMES,
};
use crate::core::config::DashboardConfig;
use crate::core::format::format_date;
use crate::core::series::DailySeries;
use crate::data::Datasets;

const EMPTY_RGB: (u8, u8, u8) = (0xd9, 0xd9, 0xd9);
const FULL_RGB: (u8, u8, u8) = (0x7b, 0xc9, 0x6f);

/// Weekday rows that get an axis label.
pub const LABELLED_WEEKDAYS: [usize; 3] = [1, 3, 5];

#[derive(Debug, Clone, PartialEq)]
pub struct HeatCell {
    pub week: usize,
    pub weekday: usize,
    pub date: Date,
    pub value: f64,
    pub color: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapSpec {
    pub title: String,
    pub cells: Vec<HeatCell>,
    pub month_ticks: Vec<MonthTick>,
}

impl HeatmapSpec {
    pub fn weekday_labels(&self) -> Vec<(usize, &'static str)> {
        LABELLED_WEEKDAYS
            .iter()
            .map(|weekday| (*weekday, WEEKDAY_NAMES[*weekday]))
            .collect()
    }
}

/// Which year of uploads the work page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadYear {
    Y2018,
    #[default]
    Y2019,
}

impl UploadYear {
    pub const ALL: [UploadYear; 2] = [UploadYear::Y2018, UploadYear::Y2019];

    pub fn value(self) -> &'static str {
        match self {
            UploadYear::Y2018 => "2018",
            UploadYear::Y2019 => "2019",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|year| year.value() == value)
    }

    pub fn series(self, data: &Datasets) -> &DailySeries {
        match self {
            UploadYear::Y2018 => &data.uploads_2018,
            UploadYear::Y2019 => &data.uploads_2019,
        }
    }

    pub fn start(self, config: &DashboardConfig) -> Date {
        match self {
            UploadYear::Y2018 => config.uploads_2018_start,
            UploadYear::Y2019 => config.uploads_2019_start,
        }
    }
}

/// Lay `series` out from `start` and colour each cell by its share of the maximum.
pub fn habit_heatmap(
    series: &DailySeries,
    start: Date,
    title: impl Into<String>,
) -> Result<HeatmapSpec, GridError> {
    let grid = build_grid(series, start)?;
    let max = grid.max_value();
    let cells = grid
        .values()
        .zip(grid.cell_dates())
        .enumerate()
        .map(|(index, (value, date))| {
            let intensity = if max > 0.0 && value.is_finite() {
                (value / max).clamp(0.0, 1.0)
            } else {
                0.0
            };
            HeatCell {
                week: index / DAYS_PER_WEEK,
                weekday: index % DAYS_PER_WEEK,
                date,
                value,
                color: cell_color(intensity),
                hover: format!("{} ({}): {}", format_date(date), date.weekday(), value),
            }
        })
        .collect();

    Ok(HeatmapSpec {
        title: title.into(),
        month_ticks: grid.month_ticks(),
        cells,
    })
}

pub fn upload_heatmap(data: &Datasets, year: UploadYear) -> Result<HeatmapSpec, GridError> {
    habit_heatmap(
        year.series(data),
        year.start(&data.config),
        format!("Videos uploaded in {}", year.value()),
    )
}

/// Linear blend from grey (nothing) to green (maximum).
pub fn cell_color(intensity: f64) -> String {
    let t = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mix = |from: u8, to: u8| -> u8 {
        (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(EMPTY_RGB.0, FULL_RGB.0),
        mix(EMPTY_RGB.1, FULL_RGB.1),
        mix(EMPTY_RGB.2, FULL_RGB.2)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::CELLS;
    use time::macros::date;

    #[test]
    fn colour_scale_ends() {
        assert_eq!(cell_color(0.0), "#d9d9d9");
        assert_eq!(cell_color(1.0), "#7bc96f");
        assert_eq!(cell_color(f64::NAN), "#d9d9d9");
        assert_eq!(cell_color(7.0), "#7bc96f");
    }

    #[test]
    fn cells_follow_the_grid() {
        let series = DailySeries::from_values(date!(2019 - 01 - 02), [1.0, 0.0, 1.0]);
        let spec = habit_heatmap(&series, date!(2019 - 01 - 02), "Omad").unwrap();
        assert_eq!(spec.cells.len(), CELLS);
        let wednesday = &spec.cells[2];
        assert_eq!((wednesday.week, wednesday.weekday), (0, 2));
        assert_eq!(wednesday.date, date!(2019 - 01 - 02));
        assert_eq!(wednesday.color, "#7bc96f");
        assert_eq!(wednesday.hover, "2019-01-02 (Wednesday): 1");
        assert_eq!(spec.cells[3].color, "#d9d9d9");
        assert_eq!(spec.month_ticks[0].label, "Jan");
    }

    #[test]
    fn oversized_ranges_propagate_the_grid_error() {
        let series = DailySeries::from_values(date!(2018 - 01 - 01), (0..400).map(|_| 1.0));
        let err = habit_heatmap(&series, date!(2018 - 01 - 01), "too long").unwrap_err();
        assert!(matches!(err, GridError::RangeExceeded { needed: 400, capacity: 364 }));
    }

    #[test]
    fn upload_years_use_their_own_start() {
        let config = DashboardConfig::default();
        assert_eq!(UploadYear::Y2018.start(&config), date!(2018 - 01 - 01));
        assert_eq!(UploadYear::Y2019.start(&config), date!(2018 - 12 - 31));
        assert_eq!(UploadYear::from_value("2018"), Some(UploadYear::Y2018));
        assert_eq!(UploadYear::from_value("2020"), None);
    }
}
