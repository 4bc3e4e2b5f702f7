//! Property-based tests for the match store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated goal sequences.

use chrono::Duration;
use proptest::prelude::*;
use scoreboard::core::{format_elapsed, ManualClock, Score, Side};
use scoreboard::store::MatchStore;
use std::sync::Arc;

prop_compose! {
    fn arbitrary_side()(home in any::<bool>()) -> Side {
        if home { Side::Home } else { Side::Away }
    }
}

prop_compose! {
    /// A goal: which side scored and how many milliseconds after the previous one.
    fn arbitrary_goal()(side in arbitrary_side(), gap_ms in 0i64..120_000) -> (Side, i64) {
        (side, gap_ms)
    }
}

fn play(goals: &[(Side, i64)]) -> MatchStore {
    let clock = ManualClock::default();
    let mut store = MatchStore::with_clock(Arc::new(clock.clone()));
    for (side, gap_ms) in goals {
        clock.advance(Duration::milliseconds(*gap_ms));
        store.increment(*side);
    }
    store
}

fn elapsed_seconds(line: &str) -> u64 {
    let time = line.split(' ').next().unwrap();
    let (minutes, seconds) = time.split_once(':').unwrap();
    minutes.parse::<u64>().unwrap() * 60 + seconds.parse::<u64>().unwrap()
}

proptest! {
    #[test]
    fn log_has_one_line_per_goal_plus_start(
        goals in prop::collection::vec(arbitrary_goal(), 0..40)
    ) {
        let store = play(&goals);
        let state = store.state();

        prop_assert_eq!(state.events.len(), 1 + goals.len());
        prop_assert_eq!(&state.events[0], "00:00 : Game starts!");
    }

    #[test]
    fn final_score_counts_goals_per_side(
        goals in prop::collection::vec(arbitrary_goal(), 0..40)
    ) {
        let store = play(&goals);
        let home = goals.iter().filter(|(s, _)| *s == Side::Home).count() as u32;
        let away = goals.len() as u32 - home;

        prop_assert_eq!(store.score(), Score::new(home, away));
    }

    #[test]
    fn each_snapshot_matches_its_own_increment(
        goals in prop::collection::vec(arbitrary_goal(), 1..30)
    ) {
        let store = play(&goals);
        let mut expected = Score::default();

        for ((side, _), event) in goals.iter().zip(&store.events()[1..]) {
            expected = expected.increment(*side);
            prop_assert_eq!(event.side(), Some(*side));
            prop_assert_eq!(event.score(), Some(expected));
        }
    }

    #[test]
    fn counters_never_decrease(
        goals in prop::collection::vec(arbitrary_goal(), 1..30)
    ) {
        let store = play(&goals);
        let scores: Vec<Score> = store.events().iter().filter_map(|e| e.score()).collect();

        for pair in scores.windows(2) {
            prop_assert!(pair[1].home >= pair[0].home);
            prop_assert!(pair[1].away >= pair[0].away);
            prop_assert_eq!(pair[1].total(), pair[0].total() + 1);
        }
    }

    #[test]
    fn elapsed_time_never_goes_backwards(
        goals in prop::collection::vec((arbitrary_side(), 0i64..600_000), 1..30)
    ) {
        // Up to ~5 hours of match time, well past the first hour.
        let store = play(&goals);
        let lines = store.state().events;

        for pair in lines[1..].windows(2) {
            prop_assert!(elapsed_seconds(&pair[1]) >= elapsed_seconds(&pair[0]));
        }
    }

    #[test]
    fn state_read_is_idempotent(
        goals in prop::collection::vec(arbitrary_goal(), 0..20)
    ) {
        let store = play(&goals);
        prop_assert_eq!(store.state(), store.state());
    }

    #[test]
    fn goal_line_matches_format(side in arbitrary_side(), elapsed_ms in 0i64..3_600_000) {
        let store = play(&[(side, elapsed_ms)]);
        let line = &store.state().events[1];

        let expected_time = format_elapsed(std::time::Duration::from_millis(elapsed_ms as u64));
        let (message, score) = match side {
            Side::Home => ("France scores!", "1 – 0"),
            Side::Away => ("Finland scores!", "0 – 1"),
        };
        prop_assert_eq!(line, &format!("{expected_time} : {message} ({score})"));
    }

    #[test]
    fn elapsed_format_truncates(ms in 0u64..36_000_000) {
        let formatted = format_elapsed(std::time::Duration::from_millis(ms));
        let whole_seconds = ms / 1000;

        prop_assert!(formatted.len() >= 5);
        prop_assert_eq!(elapsed_seconds(&formatted), whole_seconds);
    }
}
