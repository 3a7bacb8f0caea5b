//! Property-based tests for the interpreter
//!
//! These tests check the invariants that hold for any sequence of input lines.

use super::calendar::{self, FixedClock};
use super::Interpreter;
use crate::session::{Sender, Session};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_interpreter(seed: u64) -> Interpreter<FixedClock, StdRng> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    Interpreter::with_parts(FixedClock(today), StdRng::seed_from_u64(seed))
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_command_line() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["ping", "help", "history", "lunch", "todo list", "playmysong"])
            .prop_map(str::to_string),
        "[a-zA-Z]{1,8}".prop_map(|task| format!("todo add {}", task)),
        "[a-zA-Z]{1,8}".prop_map(|task| format!("todo done {}", task)),
        "[a-zA-Z]{1,8}".prop_map(|song| format!("mynewsongis {}", song)),
        "-?[0-9]{1,4}".prop_map(|n| format!("vol {}", n)),
        "[0-9]{1,3}".prop_map(|n| format!("lorem {}", n)),
        "[a-zA-Z0-9][a-zA-Z0-9 ]{0,29}",
    ]
}

fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_blank_input_changes_nothing(
        history in proptest::collection::vec(arb_command_line(), 0..10),
        blank in arb_blank(),
    ) {
        let mut interp = test_interpreter(3);
        let mut session = Session::new();
        for line in &history {
            interp.process(&mut session, line);
        }

        let entries_before = session.transcript().entries().to_vec();
        let todos_before = session.todos().to_vec();
        let song_before = session.saved_song().map(str::to_string);

        prop_assert!(interp.process(&mut session, &blank).is_none());
        prop_assert_eq!(session.transcript().entries(), entries_before.as_slice());
        prop_assert_eq!(session.todos(), todos_before.as_slice());
        prop_assert_eq!(session.saved_song().map(str::to_string), song_before);
    }

    #[test]
    fn prop_each_line_appends_user_then_bot(
        lines in proptest::collection::vec(arb_command_line(), 1..20),
    ) {
        let mut interp = test_interpreter(5);
        let mut session = Session::new();

        for line in &lines {
            let before = session.transcript().entries().to_vec();
            let reply = interp.process(&mut session, line);
            let after = session.transcript().entries();

            prop_assert!(reply.is_some());
            prop_assert_eq!(after.len(), before.len() + 2);
            // earlier entries are never rewritten
            prop_assert_eq!(&after[..before.len()], before.as_slice());
            prop_assert_eq!(after[before.len()].sender, Sender::User);
            prop_assert_eq!(after[before.len()].text.as_str(), line.trim());
            prop_assert_eq!(after[before.len() + 1].sender, Sender::Bot);
            prop_assert_eq!(Some(&after[before.len() + 1]), reply.as_ref());
        }
    }

    #[test]
    fn prop_ping_and_help_are_read_only(
        setup in proptest::collection::vec(arb_command_line(), 0..10),
        probes in proptest::collection::vec(prop_oneof![Just("ping"), Just("help"), Just("PING  ")], 1..10),
    ) {
        let mut interp = test_interpreter(9);
        let mut session = Session::new();
        for line in &setup {
            interp.process(&mut session, line);
        }

        let todos_before = session.todos().to_vec();
        let song_before = session.saved_song().map(str::to_string);

        for probe in probes {
            interp.process(&mut session, probe);
        }

        prop_assert_eq!(session.todos(), todos_before.as_slice());
        prop_assert_eq!(session.saved_song().map(str::to_string), song_before);
    }

    #[test]
    fn prop_next_weekday_is_strictly_ahead(days_from_epoch in 0i64..40_000, target in 0usize..7) {
        let today = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days_from_epoch);
        let weekday = calendar::parse_weekday(calendar::WEEKDAY_NAMES[target]).unwrap();

        let next = calendar::next_occurrence(today, weekday);
        let gap = (next - today).num_days();

        prop_assert!((1..=7).contains(&gap));
        prop_assert_eq!(next.weekday(), weekday);
        prop_assert_eq!(weekday.num_days_from_sunday() as usize, target);
    }
}
