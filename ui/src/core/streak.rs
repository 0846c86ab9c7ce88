//! Streak detection over per-day activity indicators.
//!
//! Values are classified as active or inactive by an [`ActivityPolicy`]. The
//! default treats every non-zero value as active, negative numbers and `NaN`
//! included, so a habit column holding counts works as well as one holding 0/1.

/// How an indicator value maps to "active".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActivityPolicy {
    /// Anything other than zero.
    #[default]
    NonZero,
    /// Only an exact sentinel value (e.g. `1.0` for "done").
    Exactly(f64),
}

impl ActivityPolicy {
    pub fn is_active(self, value: f64) -> bool {
        match self {
            Self::NonZero => value != 0.0,
            Self::Exactly(sentinel) => value == sentinel,
        }
    }
}

/// A maximal run of consecutive days sharing the same activity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityRun {
    pub active: bool,
    pub start: usize,
    pub len: usize,
}

/// Run-length encode `values` by activity state. Adjacent active days with
/// different values belong to the same run.
pub fn activity_runs(values: &[f64], policy: ActivityPolicy) -> Vec<ActivityRun> {
    let mut runs: Vec<ActivityRun> = Vec::new();
    for (index, value) in values.iter().enumerate() {
        let active = policy.is_active(*value);
        match runs.last_mut() {
            Some(run) if run.active == active => run.len += 1,
            _ => runs.push(ActivityRun {
                active,
                start: index,
                len: 1,
            }),
        }
    }
    runs
}

/// Length of the run of active days ending on the last entry; 0 once the
/// most recent day is inactive.
pub fn current_streak(values: &[f64]) -> usize {
    current_streak_with(values, ActivityPolicy::default())
}

pub fn current_streak_with(values: &[f64], policy: ActivityPolicy) -> usize {
    activity_runs(values, policy)
        .last()
        .filter(|run| run.active)
        .map_or(0, |run| run.len)
}

/// Longest active run anywhere in `values`.
pub fn longest_streak(values: &[f64]) -> usize {
    longest_streak_with(values, ActivityPolicy::default())
}

pub fn longest_streak_with(values: &[f64], policy: ActivityPolicy) -> usize {
    activity_runs(values, policy)
        .iter()
        .filter(|run| run.active)
        .map(|run| run.len)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_inactive_series_have_no_streak() {
        assert_eq!(current_streak(&[]), 0);
        assert_eq!(current_streak(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(longest_streak(&[0.0, 0.0, 0.0]), 0);
    }

    #[test]
    fn trailing_inactive_day_breaks_the_streak() {
        assert_eq!(current_streak(&[1.0, 1.0, 1.0, 0.0, 0.0]), 0);
        assert_eq!(current_streak(&[1.0, 1.0, 1.0, 1.0, 0.0]), 0);
        assert_eq!(longest_streak(&[1.0, 1.0, 1.0, 0.0, 0.0]), 3);
    }

    #[test]
    fn counts_last_active_run() {
        assert_eq!(current_streak(&[0.0, 0.0, 1.0, 1.0, 1.0]), 3);
        assert_eq!(current_streak(&[1.0, 0.0, 1.0, 1.0]), 2);
        assert_eq!(current_streak(&[1.0; 12]), 12);
    }

    #[test]
    fn distinct_non_zero_values_share_a_run() {
        assert_eq!(current_streak(&[0.0, 2.0, 1.0, 3.0]), 3);
        assert_eq!(current_streak(&[0.0, -1.0, f64::NAN]), 2);
    }

    #[test]
    fn sentinel_policy_only_counts_exact_matches() {
        let done = ActivityPolicy::Exactly(1.0);
        assert_eq!(current_streak_with(&[1.0, 2.0, 1.0, 1.0], done), 2);
        assert_eq!(current_streak_with(&[1.0, 1.0, 0.5], done), 0);
    }

    #[test]
    fn runs_cover_the_whole_input() {
        let values = [1.0, 1.0, 0.0, 4.0, 0.0, 0.0];
        let runs = activity_runs(&values, ActivityPolicy::NonZero);
        assert_eq!(runs.len(), 4);
        assert_eq!(runs.iter().map(|run| run.len).sum::<usize>(), values.len());
        assert_eq!(
            runs[2],
            ActivityRun {
                active: true,
                start: 3,
                len: 1
            }
        );
    }
}
