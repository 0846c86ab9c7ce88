use proptest::prelude::*;

use ui::core::current_streak;
use ui::core::streak::{current_streak_with, longest_streak, ActivityPolicy};

/// Mostly zeros and ones, with the odd arbitrary float (NaN and infinities included).
fn indicator() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => Just(0.0),
        4 => Just(1.0),
        1 => any::<f64>(),
    ]
}

#[test]
fn documented_examples() {
    assert_eq!(current_streak(&[]), 0);
    assert_eq!(current_streak(&[1.0, 1.0, 1.0, 0.0, 0.0]), 0);
    assert_eq!(current_streak(&[0.0, 0.0, 1.0, 1.0, 1.0]), 3);
    assert_eq!(current_streak(&[1.0, 0.0, 1.0, 1.0]), 2);
    assert_eq!(current_streak(&[0.0, 0.0, 0.0]), 0);
}

#[test]
fn policy_decides_what_counts_as_active() {
    let counts = [2.0, 3.0, 1.0];
    assert_eq!(current_streak(&counts), 3);
    assert_eq!(current_streak_with(&counts, ActivityPolicy::Exactly(1.0)), 1);
}

proptest! {
    #[test]
    fn streak_is_the_trailing_non_zero_run(values in prop::collection::vec(indicator(), 0..120)) {
        let current = current_streak(&values);
        let trailing = values.iter().rev().take_while(|v| **v != 0.0).count();
        prop_assert!(current <= values.len());
        prop_assert!(current <= longest_streak(&values));
        prop_assert_eq!(current, trailing);
    }

    #[test]
    fn trailing_zero_resets_the_streak(mut values in prop::collection::vec(indicator(), 0..120)) {
        values.push(0.0);
        prop_assert_eq!(current_streak(&values), 0);
    }
}
