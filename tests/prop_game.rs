//! Property-based tests for game mechanics.
//!
//! These tests verify movement, bank flows, rent and turn order for arbitrary
//! positions, rolls and command sequences.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use fun_finance::game::{
    check_invariants, pay_rent, Board, EventLog, GameEvent, GameState, ScriptedRandom, TurnStatus,
    BOARD_SIZE, PASS_START_BONUS,
};
use fun_finance::{Command, GameConfig, Session};

/// Commands a player could send, valid or not.
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::Roll(None)),
        2 => (0u8..9).prop_map(|r| Command::Roll(Some(r))),
        3 => (0usize..3).prop_map(Command::Choose),
        1 => Just(Command::Status),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Advancing never leaves the board.
    #[test]
    fn prop_advance_stays_on_board(from in 0usize..BOARD_SIZE, roll in 1usize..=6) {
        let board = Board::standard();
        let to = board.advance(from, roll);
        prop_assert!(to < BOARD_SIZE);
        prop_assert_eq!(to, (from + roll) % BOARD_SIZE);
    }

    /// Wrapping past START pays exactly the bonus before the tile resolves.
    #[test]
    fn prop_pass_start_bonus(from in 0usize..BOARD_SIZE, roll in 1u8..=6) {
        let mut state = GameState::default();
        state.players[0].position = from;
        let outcome = state.take_turn(roll, &mut ScriptedRandom::default()).unwrap();

        let wrapped = from + usize::from(roll) >= BOARD_SIZE;
        prop_assert_eq!(outcome.passed_start, wrapped);
        prop_assert_eq!(outcome.to, (from + usize::from(roll)) % BOARD_SIZE);

        let bonus_events = state
            .log()
            .iter()
            .filter(|e| matches!(e, GameEvent::PassedStart { .. }))
            .count();
        prop_assert_eq!(bonus_events, usize::from(wrapped));

        if wrapped {
            let without_bonus = {
                let mut other = GameState::default();
                other.players[0].position = from;
                other.players[0].money -= i64::from(PASS_START_BONUS);
                other.take_turn(roll, &mut ScriptedRandom::default()).unwrap();
                other.players[0].money
            };
            prop_assert_eq!(state.players[0].money, without_bonus + i64::from(PASS_START_BONUS));
        }
    }

    /// Rent moves money between players and conserves the total.
    #[test]
    fn prop_rent_conserves_money(
        payer_money in -5000i64..5000,
        owner_money in -5000i64..5000,
        rent in 0i32..500,
    ) {
        let mut state = GameState::default();
        state.players[0].money = payer_money;
        state.players[1].money = owner_money;
        let before = state.total_money();

        let mut log = EventLog::new();
        pay_rent(&mut state.players, 0, 2, rent, &mut log);

        prop_assert_eq!(state.players[0].money, payer_money - i64::from(rent));
        prop_assert_eq!(state.players[1].money, owner_money + i64::from(rent));
        prop_assert_eq!(state.total_money(), before);
    }

    /// The turn pointer moves exactly once per fully resolved turn.
    #[test]
    fn prop_turns_alternate(rolls in prop::collection::vec(1u8..=6, 1..60)) {
        let mut state = GameState::default();
        let mut rng = ScriptedRandom::default();

        for (i, roll) in rolls.into_iter().enumerate() {
            prop_assert_eq!(state.current_index(), i % 2);
            let outcome = state.take_turn(roll, &mut rng).unwrap();
            if outcome.status == TurnStatus::AwaitingDecision {
                prop_assert_eq!(state.current_index(), i % 2);
                state.choose(0).unwrap();
            }
            prop_assert_eq!(state.current_index(), (i + 1) % 2);
            prop_assert_eq!(state.turn(), u32::try_from(i + 1).unwrap());
        }
    }

    /// No command sequence can break the game's invariants, and a rejected
    /// command changes nothing.
    #[test]
    fn prop_commands_keep_invariants(
        commands in prop::collection::vec(command_strategy(), 1..200),
        seed in any::<u64>(),
    ) {
        let config = GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        };
        let mut session = Session::new(&config);

        for command in commands {
            let before = session.state().clone();
            let result = session.execute(command);
            let after = session.state();

            let violations = check_invariants(after);
            prop_assert!(violations.is_empty(), "{:?}", violations);

            if result.is_err() {
                prop_assert_eq!(&before.players, &after.players);
                prop_assert_eq!(&before.board, &after.board);
                prop_assert_eq!(before.current_index(), after.current_index());
                prop_assert_eq!(before.log(), after.log());
            }
        }
    }
}
