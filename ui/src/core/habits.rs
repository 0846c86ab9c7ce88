//! Tracked habits and their daily checkmarks.

use serde::{Deserialize, Serialize};

use time::Date;

use super::series::DailySeries;
use super::streak::{current_streak, longest_streak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Habit {
    AbWorkout,
    ColdShower,
    SelfDiscipline,
    LucidDreaming,
    Omad,
}

impl Habit {
    pub const ALL: [Habit; 5] = [
        Habit::AbWorkout,
        Habit::ColdShower,
        Habit::SelfDiscipline,
        Habit::LucidDreaming,
        Habit::Omad,
    ];

    /// Column name in `habits.csv`.
    pub fn column(self) -> &'static str {
        match self {
            Habit::AbWorkout => "ab_workout",
            Habit::ColdShower => "cold_shower",
            Habit::SelfDiscipline => "self_discipline",
            Habit::LucidDreaming => "lucid_dreaming",
            Habit::Omad => "omad",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Habit::AbWorkout => "Morning Ab Workout",
            Habit::ColdShower => "Cold Shower",
            Habit::SelfDiscipline => "Self-Discipline",
            Habit::LucidDreaming => "Lucid Dreaming",
            Habit::Omad => "OMAD",
        }
    }
}

/// One daily series per habit, all covering the same days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitLog {
    pub ab_workout: DailySeries,
    pub cold_shower: DailySeries,
    pub self_discipline: DailySeries,
    pub lucid_dreaming: DailySeries,
    pub omad: DailySeries,
}

/// Current and best run of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakSummary {
    pub current: usize,
    pub best: usize,
}

impl HabitLog {
    pub fn series(&self, habit: Habit) -> &DailySeries {
        match habit {
            Habit::AbWorkout => &self.ab_workout,
            Habit::ColdShower => &self.cold_shower,
            Habit::SelfDiscipline => &self.self_discipline,
            Habit::LucidDreaming => &self.lucid_dreaming,
            Habit::Omad => &self.omad,
        }
    }

    /// Streaks counted over the days on or after `since`, the same window the
    /// heatmap shows.
    ///
    /// Days logged before `since` never extend a streak: a run that began
    /// earlier is only counted from `since` onwards, so `current` can be
    /// shorter than the run over the whole column.
    pub fn streaks(&self, habit: Habit, since: Date) -> StreakSummary {
        let values = self.series(habit).since(since).values();
        StreakSummary {
            current: current_streak(&values),
            best: longest_streak(&values),
        }
    }
}
