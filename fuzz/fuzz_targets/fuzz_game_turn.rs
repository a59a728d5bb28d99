#![no_main]

//! Game turn fuzzer.
//!
//! Drives the turn engine with arbitrary rolls, chance draws, starting
//! balances and decision answers:
//! 1. Take a turn (valid or invalid roll)
//! 2. Answer any pending decision with an arbitrary option index
//! 3. Check invariants and bank accounting after every step

use arbitrary::Arbitrary;
use fun_finance::game::{
    check_invariants, GameEvent, GameState, ScriptedRandom, TurnStatus,
};
use libfuzzer_sys::fuzz_target;

/// One fuzzer-generated step.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzStep {
    /// Die value; values outside 1-6 must be rejected.
    roll: u8,
    /// Option index submitted for a pending decision.
    choice: u8,
}

/// Structured input for game turn fuzzing.
#[derive(Arbitrary, Debug)]
struct GameTurnInput {
    /// Starting balances.
    starting_money: [i16; 2],
    /// Chance card indices handed to the engine.
    draws: Vec<u8>,
    /// Turns to play.
    steps: Vec<FuzzStep>,
}

fuzz_target!(|input: GameTurnInput| {
    let mut state = GameState::default();
    for (player, money) in state.players.iter_mut().zip(input.starting_money) {
        player.money = i64::from(money);
    }
    let draws = input.draws.iter().map(|&d| usize::from(d)).collect();
    let mut rng = ScriptedRandom::new(vec![], draws);
    let start_total = state.total_money();

    for step in input.steps.into_iter().take(500) {
        let turn = state.turn();
        match state.take_turn(step.roll, &mut rng) {
            Ok(outcome) => {
                assert!((1..=6).contains(&step.roll));
                if outcome.status == TurnStatus::AwaitingDecision {
                    let index = usize::from(step.choice % 4);
                    if state.choose(index).is_err() {
                        // A rejected answer keeps the decision open
                        assert!(state.pending_decision().is_some());
                        assert!(state.choose(0).is_ok());
                    }
                }
                assert_eq!(state.turn(), turn + 1);
            }
            Err(_) => assert_eq!(state.turn(), turn),
        }

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }

    let bank: i64 = state
        .log()
        .chronological()
        .map(|event| match event {
            GameEvent::PassedStart { bonus, .. } => i64::from(*bonus),
            GameEvent::Collected { amount, .. } => i64::from(*amount),
            GameEvent::Paid { amount, .. } => -i64::from(*amount),
            GameEvent::Bought { cost, .. } => -i64::from(*cost),
            GameEvent::Chance { delta, .. } => i64::from(*delta),
            _ => 0,
        })
        .sum();
    assert_eq!(state.total_money(), start_total + bank);
});
