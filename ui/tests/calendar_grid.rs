use proptest::prelude::*;
use time::macros::date;
use time::{Date, Duration, Weekday};

use ui::core::calendar::{CELLS, DAYS_PER_WEEK, WEEKS};
use ui::core::habits::Habit;
use ui::core::{build_grid, build_grid_from_values, DailySeries, GridError};
use ui::data::{Datasets, EmbeddedSource};

fn any_start() -> impl Strategy<Value = Date> {
    (0i64..15_000).prop_map(|days| date!(2000 - 01 - 01) + Duration::days(days))
}

fn padding(start: Date) -> usize {
    start.weekday().number_days_from_monday() as usize
}

fn sample_values(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 7) % 5) as f64).collect()
}

proptest! {
    #[test]
    fn fitting_series_fill_a_monday_aligned_grid(
        start in any_start(),
        values in prop::collection::vec(0.0f64..10.0, 0..=CELLS),
    ) {
        prop_assume!(values.len() + padding(start) <= CELLS);
        let grid = build_grid_from_values(&values, start).unwrap();
        prop_assert_eq!(grid.cell_count(), CELLS);
        prop_assert_eq!(grid.origin().weekday(), Weekday::Monday);
        prop_assert!(grid.origin() <= start);
        prop_assert!(start - grid.origin() < Duration::days(DAYS_PER_WEEK as i64));
        let placed: Vec<f64> = grid.values().skip(padding(start)).take(values.len()).collect();
        prop_assert_eq!(placed, values);
    }

    #[test]
    fn series_past_the_last_cell_are_rejected(start in any_start(), overflow in 1usize..=30) {
        let len = CELLS - padding(start) + overflow;
        let err = build_grid_from_values(&sample_values(len), start).unwrap_err();
        prop_assert_eq!(err, GridError::RangeExceeded { needed: CELLS + overflow, capacity: CELLS });
    }
}

#[test]
fn grid_shape_is_fixed() {
    let grid = build_grid_from_values(&sample_values(30), date!(2019 - 01 - 03)).unwrap();
    assert_eq!(grid.rows().len(), WEEKS);
    assert!(grid.rows().iter().all(|row| row.len() == DAYS_PER_WEEK));
}

#[test]
fn identical_inputs_give_identical_grids() {
    let values = sample_values(200);
    let first = build_grid_from_values(&values, date!(2019 - 03 - 14)).unwrap();
    let second = build_grid_from_values(&values, date!(2019 - 03 - 14)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn each_value_lands_on_its_own_date() {
    let start = date!(2019 - 03 - 14);
    let series = DailySeries::from_values(start, sample_values(120));
    let grid = build_grid(&series, start).unwrap();
    for (index, (date, value)) in grid.cell_dates().zip(grid.values()).enumerate() {
        let expected = series.value_on(date).unwrap_or(0.0);
        assert_eq!(value, expected, "cell {index} ({date})");
    }
}

#[test]
fn documented_example_from_a_wednesday() {
    let grid = build_grid_from_values(&[5.0, 0.0, 3.0], date!(2019 - 01 - 02)).unwrap();
    assert_eq!(grid.rows()[0], [0.0, 0.0, 5.0, 0.0, 3.0, 0.0, 0.0]);
}

#[test]
fn bundled_habits_fit_from_their_configured_start() {
    let data = Datasets::load(&EmbeddedSource).unwrap();
    for habit in Habit::ALL {
        let target = data.config.habit(habit);
        let grid = build_grid(data.habits.series(habit), target.start);
        assert!(grid.is_ok(), "{habit:?}: {:?}", grid.err());
    }
    for (series, start) in [
        (&data.uploads_2018, data.config.uploads_2018_start),
        (&data.uploads_2019, data.config.uploads_2019_start),
    ] {
        let grid = build_grid(series, start).unwrap();
        assert_eq!(grid.total(), series.sum());
    }
}
