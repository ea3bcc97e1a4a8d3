//! Adaptive selector behaviour tests.
//!
//! Covers weighted sampling, rebalancing from history, the weight bounds,
//! and history resets.

use rpsls::core::{GameRng, Move, RoundOutcome, SelectorConfig, WeightBounds};
use rpsls::error::{ConfigError, Error};
use rpsls::selector::{AdaptiveSelector, History, WeightTable};

fn history_of(wins: &[Move], losses: &[Move]) -> History {
    let mut history = History::new();
    for &m in wins {
        history.record(m, RoundOutcome::SelectorWins);
    }
    for &m in losses {
        history.record(m, RoundOutcome::OpponentWins);
    }
    history
}

// =============================================================================
// Sampling
// =============================================================================

/// Every draw in [0, 25) maps to a defined move, five draws per move.
#[test]
fn test_equal_weights_cover_every_draw() {
    let table = WeightTable::new(5, WeightBounds::default());
    assert_eq!(table.total(), 25);

    for draw in 0..25 {
        let m = table.pick(draw);
        assert!(Move::ALL.contains(&m));
        assert_eq!(m.index() as u32, draw / 5);
    }
}

/// Long-run frequencies match weight / total.
#[test]
fn test_sampling_converges_to_weight_proportions() {
    let weights = [1, 2, 3, 4, 5];
    let mut selector = AdaptiveSelector::seeded(2024).with_weights(weights);
    let draws = 15_000;

    let mut counts = [0u32; Move::COUNT];
    for _ in 0..draws {
        counts[selector.choose_move().index()] += 1;
    }

    let total: u32 = weights.iter().sum();
    for m in Move::ALL {
        let expected = weights[m.index()] as f64 / total as f64;
        let observed = counts[m.index()] as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.02,
            "{m}: observed {observed:.3}, expected {expected:.3}"
        );
    }
}

/// Moves at the floor stay reachable.
#[test]
fn test_floor_weight_still_sampled() {
    let mut selector = AdaptiveSelector::seeded(77).with_weights([10, 10, 10, 10, 1]);
    let spocks = (0..4100).filter(|_| selector.choose_move() == Move::Spock).count();
    assert!(spocks > 0);
}

/// Same seed, same configuration, same choices.
#[test]
fn test_seeded_selectors_agree() {
    let config = SelectorConfig::default().with_initial_weight(3);
    let mut a = AdaptiveSelector::new(config.clone(), GameRng::new(5)).unwrap();
    let mut b = AdaptiveSelector::new(config, GameRng::new(5)).unwrap();

    for _ in 0..100 {
        assert_eq!(a.choose_move(), b.choose_move());
    }
}

/// A cap whose total overflows `u32` never reaches the sampler.
#[test]
fn test_overflowing_bounds_rejected() {
    let config = SelectorConfig::default()
        .with_bounds(1, u32::MAX)
        .with_initial_weight(u32::MAX);

    let result = AdaptiveSelector::new(config, GameRng::new(1));
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::WeightTotalOverflow { max: u32::MAX }))
    ));
}

/// Equal weights at the largest accepted cap still spread over every move.
#[test]
fn test_largest_cap_samples_every_move() {
    let cap = u32::MAX / Move::COUNT as u32;
    let config = SelectorConfig::default().with_bounds(1, cap).with_initial_weight(cap);
    let mut selector = AdaptiveSelector::new(config, GameRng::new(4)).unwrap();
    assert_eq!(selector.weights().total(), cap * Move::COUNT as u32);

    let mut counts = [0u32; Move::COUNT];
    for _ in 0..1000 {
        counts[selector.choose_move().index()] += 1;
    }
    for m in Move::ALL {
        assert!(counts[m.index()] > 100, "{m}: {counts:?}");
    }
}

// =============================================================================
// Rebalancing
// =============================================================================

#[test]
fn test_five_rock_wins_raise_rock_only() {
    let mut selector = AdaptiveSelector::seeded(1).with_history(history_of(&[Move::Rock; 5], &[]));
    selector.rebalance();

    assert_eq!(selector.weights().get(Move::Rock), 6);
    for m in [Move::Paper, Move::Scissors, Move::Lizard, Move::Spock] {
        assert_eq!(selector.weights().get(m), 5);
    }
}

#[test]
fn test_five_paper_losses_lower_paper() {
    let mut selector = AdaptiveSelector::seeded(1).with_history(history_of(&[], &[Move::Paper; 5]));
    selector.rebalance();

    assert_eq!(selector.weights().get(Move::Paper), 4);
    for m in [Move::Rock, Move::Scissors, Move::Lizard, Move::Spock] {
        assert_eq!(selector.weights().get(m), 5);
    }
}

#[test]
fn test_losing_move_at_floor_stays_at_floor() {
    let mut selector = AdaptiveSelector::seeded(1).with_weights([1, 5, 5, 5, 5]);

    for _ in 0..25 {
        let history = history_of(&[], &[Move::Rock; 6]);
        selector = selector.with_history(history);
        selector.rebalance();
        assert_eq!(selector.weights().get(Move::Rock), 1);
    }
}

#[test]
fn test_scattered_history_changes_nothing() {
    let wins = [Move::Rock, Move::Paper, Move::Scissors, Move::Lizard, Move::Spock];
    let mut selector = AdaptiveSelector::seeded(1).with_history(history_of(&wins, &wins));
    let before = selector.weights().clone();

    assert!(selector.rebalance().is_empty());
    assert_eq!(selector.weights(), &before);
}

#[test]
fn test_custom_policy_threshold_and_samples() {
    let config = SelectorConfig::default()
        .with_majority_threshold(0.75)
        .with_min_samples(4);
    let wins = [Move::Lizard, Move::Lizard, Move::Lizard, Move::Paper];

    let mut selector = AdaptiveSelector::new(config.clone(), GameRng::new(1))
        .unwrap()
        .with_history(history_of(&wins, &[]));
    selector.rebalance();
    assert_eq!(selector.weights().get(Move::Lizard), 6);

    // Two of four is below 75%.
    let wins = [Move::Lizard, Move::Lizard, Move::Paper, Move::Paper];
    let mut selector = AdaptiveSelector::new(config, GameRng::new(1))
        .unwrap()
        .with_history(history_of(&wins, &[]));
    assert!(selector.rebalance().is_empty());
}

// =============================================================================
// History reset
// =============================================================================

/// Eleven rounds past a threshold of ten clears history and keeps weights.
#[test]
fn test_reset_after_threshold_preserves_weights() {
    let mut selector = AdaptiveSelector::seeded(31);
    let opponent = [Move::Rock, Move::Spock, Move::Paper];

    for i in 0..11 {
        let mine = selector.choose_move();
        selector.record_outcome(RoundOutcome::judge(mine, opponent[i % opponent.len()]));
    }
    assert_eq!(selector.history().rounds(), 11);
    assert!(selector.should_reset());

    let mut expected = selector.clone();
    expected.rebalance();

    selector.finish_match();

    assert!(selector.history().winning_moves().is_empty());
    assert!(selector.history().losing_moves().is_empty());
    assert_eq!(selector.history().rounds(), 0);
    assert_eq!(selector.weights(), expected.weights());
}

#[test]
fn test_reset_zeroes_frequencies() {
    let mut selector = AdaptiveSelector::seeded(1)
        .with_history(history_of(&[Move::Rock; 7], &[Move::Spock; 7]));
    selector.reset_history();

    for m in Move::ALL {
        assert_eq!(selector.history().win_frequency(m), 0.0);
        assert_eq!(selector.history().loss_frequency(m), 0.0);
    }
    assert!(selector.rebalance().is_empty());
}

#[test]
fn test_short_match_keeps_history_for_next_match() {
    let mut selector = AdaptiveSelector::seeded(9);
    for _ in 0..6 {
        selector.choose_move();
        selector.record_outcome(RoundOutcome::Tie);
    }
    selector.finish_match();
    assert_eq!(selector.history().rounds(), 6);

    for _ in 0..5 {
        selector.choose_move();
        selector.record_outcome(RoundOutcome::Tie);
    }
    selector.finish_match();
    assert_eq!(selector.history().rounds(), 0);
}
