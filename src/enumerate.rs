use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::Combinations;
use crate::game::{Board, BoardSlot};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Exact binomial coefficient. n never exceeds 52 here, so u64 arithmetic
/// is exact with plenty of headroom.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// When to enumerate exhaustively versus sample. Both knobs are explicit so
/// callers can trade precision for latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPolicy {
    /// Enumerate every completion when the combination count is at or below
    /// this.
    pub exhaustive_threshold: u64,
    /// Number of sampled trials when enumeration is too large.
    pub sample_count: u64,
}

impl CompletionPolicy {
    pub const DEFAULT_EXHAUSTIVE_THRESHOLD: u64 = 1_000_000;
    pub const DEFAULT_SAMPLE_COUNT: u64 = 100_000;
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            exhaustive_threshold: Self::DEFAULT_EXHAUSTIVE_THRESHOLD,
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EnumerateError {
    #[error("cannot complete the board: {missing} slots to fill but only {available} cards left")]
    InsufficientDeck { available: usize, missing: usize },
}

#[derive(Debug)]
enum Mode {
    /// Every C(available, missing) subset, in lexicographic order.
    Exhaustive(Combinations),
    /// Shuffle the pool and take the first `missing` cards per trial.
    Sampled,
}

/// Iterator over fully-specified boards consistent with a partial board and
/// the used-card set. Never mutates the caller's board or used set; build a
/// new one to re-drive enumeration.
///
/// Mode choice: exhaustive whenever the true combination count is within the
/// policy threshold or no larger than the sample count (enumerating exactly
/// is never more work than sampling that many trials); otherwise exactly
/// `sample_count` shuffle-samples. Sampled sequences are not reproducible
/// across runs unless a seeded RNG is supplied.
#[derive(Debug)]
pub struct BoardCompletions<R: Rng> {
    base: Board,
    missing: Vec<BoardSlot>,
    available: Vec<Card>,
    mode: Mode,
    rng: R,
    remaining: u64,
}

impl<R: Rng> BoardCompletions<R> {
    pub fn new(
        board: &Board,
        used: &HashSet<Card>,
        policy: &CompletionPolicy,
        rng: R,
    ) -> Result<Self, EnumerateError> {
        let missing = board.missing_slots();
        let board_cards = board.cards();
        // The used set normally covers the board already; filter anyway so an
        // inconsistent caller cannot make us deal a board card twice.
        let available: Vec<Card> = Deck::available(used)
            .into_iter()
            .filter(|c| !board_cards.contains(c))
            .collect();

        if available.len() < missing.len() {
            return Err(EnumerateError::InsufficientDeck {
                available: available.len(),
                missing: missing.len(),
            });
        }

        let total = binomial(available.len() as u64, missing.len() as u64);
        let exhaustive = total <= policy.exhaustive_threshold || total <= policy.sample_count;
        let (mode, remaining) = if exhaustive {
            (Mode::Exhaustive(Combinations::new(available.len(), missing.len())), total)
        } else {
            (Mode::Sampled, policy.sample_count)
        };
        debug!(
            "board completion: {} missing slots, {} available cards, {} combinations, {} trials ({})",
            missing.len(),
            available.len(),
            total,
            remaining,
            if exhaustive { "exhaustive" } else { "sampled" },
        );

        Ok(Self { base: *board, missing, available, mode, rng, remaining })
    }

    /// Number of boards this iterator will emit.
    pub fn trials(&self) -> u64 {
        self.remaining
    }

    pub fn is_exhaustive(&self) -> bool {
        matches!(self.mode, Mode::Exhaustive(_))
    }
}

impl<R: Rng> Iterator for BoardCompletions<R> {
    type Item = Board;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let picks: Vec<Card> = match &mut self.mode {
            Mode::Exhaustive(combos) => {
                let indices = combos.next()?;
                indices.into_iter().map(|i| self.available[i]).collect()
            }
            Mode::Sampled => {
                self.available.shuffle(&mut self.rng);
                self.available[..self.missing.len()].to_vec()
            }
        };

        let mut board = self.base;
        for (slot, card) in self.missing.iter().zip(picks) {
            board.set(*slot, Some(card));
        }
        Some(board)
    }
}
