use crate::cards::Card;
use crate::enumerate::{BoardCompletions, CompletionPolicy, EnumerateError};
use crate::evaluator::evaluate_seven;
use crate::game::GameState;
use log::debug;
use rand::Rng;

/// Knobs for one equity computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquityConfig {
    pub completion: CompletionPolicy,
}

/// Win rate for one player, as a percentage of all trials. Ties split the
/// credit evenly, so across a showdown the rates sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerEquity {
    pub id: usize,
    pub win_rate: f64,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquityError {
    #[error("need at least 2 active players, got {0}")]
    InsufficientPlayers(usize),
    #[error("player {player} is active but does not have both hole cards")]
    IncompletePlayerHand { player: usize },
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),
}

/// Compute win rates for every active player with the thread-local RNG.
///
/// ```
/// use holdem_equity::equity::{compute_equity, EquityConfig};
/// use holdem_equity::game::{BoardSlot, GameState};
///
/// let mut state = GameState::new(2);
/// state.set_hole_card(0, 0, "Ah".parse().unwrap()).unwrap();
/// state.set_hole_card(0, 1, "Kh".parse().unwrap()).unwrap();
/// state.set_hole_card(1, 0, "2c".parse().unwrap()).unwrap();
/// state.set_hole_card(1, 1, "2d".parse().unwrap()).unwrap();
/// for (slot, card) in BoardSlot::ALL.iter().zip(["Qh", "Jh", "Th", "3c", "3d"]) {
///     state.set_board_card(*slot, card.parse().unwrap()).unwrap();
/// }
/// let equity = compute_equity(&state, &EquityConfig::default()).unwrap();
/// // the made royal flush wins every trial
/// assert_eq!(equity[0].win_rate, 100.0);
/// assert_eq!(equity[1].win_rate, 0.0);
/// ```
pub fn compute_equity(
    state: &GameState,
    config: &EquityConfig,
) -> Result<Vec<PlayerEquity>, EquityError> {
    compute_equity_with_rng(state, config, rand::rng())
}

/// [`compute_equity`] with an explicit RNG, for reproducible sampled runs.
///
/// Validation is fail-fast and happens before any board is dealt: fewer than
/// two active players is [`EquityError::InsufficientPlayers`]; an active
/// player with a missing hole card is [`EquityError::IncompletePlayerHand`].
/// Folded players never appear in the result, but their cards stay out of
/// the dealing pool.
pub fn compute_equity_with_rng<R: Rng>(
    state: &GameState,
    config: &EquityConfig,
    rng: R,
) -> Result<Vec<PlayerEquity>, EquityError> {
    let contenders = state.active_players();
    if contenders.len() < 2 {
        return Err(EquityError::InsufficientPlayers(contenders.len()));
    }
    let mut holes: Vec<(usize, [Card; 2])> = Vec::with_capacity(contenders.len());
    for player in &contenders {
        let hole = player
            .hole_cards()
            .ok_or(EquityError::IncompletePlayerHand { player: player.id })?;
        holes.push((player.id, hole));
    }

    let completions =
        BoardCompletions::new(state.board(), state.used_cards(), &config.completion, rng)?;
    let trials = completions.trials();
    debug!("equity: {} contenders, {} trials", holes.len(), trials);

    let mut credit = vec![0.0f64; holes.len()];

    for board in completions {
        let five = board.as_five().expect("completions emit complete boards");
        let values: Vec<_> = holes
            .iter()
            .map(|(_, hole)| {
                let seven = [hole[0], hole[1], five[0], five[1], five[2], five[3], five[4]];
                evaluate_seven(&seven).value()
            })
            .collect();

        // every trial pays out exactly one unit, split across the winners
        let best = *values.iter().max().expect("at least two contenders");
        let winners = values.iter().filter(|v| **v == best).count();
        let share = 1.0 / winners as f64;
        for (value, credit) in values.iter().zip(credit.iter_mut()) {
            if *value == best {
                *credit += share;
            }
        }
    }

    Ok(holes
        .iter()
        .zip(credit)
        .map(|(&(id, _), credit)| PlayerEquity { id, win_rate: credit / trials as f64 * 100.0 })
        .collect())
}
