pub(crate) mod analysis;
pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod rank_groups;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;

pub(crate) use combinations::Combinations;

/// Compact, totally ordered hand strength. Higher is stronger; equal values
/// are genuinely tied hands under standard poker rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand categories from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Result of evaluating one 5-card hand (or the best 5 of a larger set).
/// `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    value: HandValue,
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

impl Evaluation {
    /// The packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl HandValue {
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and five rank tiebreakers into one comparable value.
    ///
    /// Layout (most significant -> least):
    /// [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
    ///
    /// The category discriminant sits above every tiebreaker, so no hand in a
    /// lower category can ever reach a higher category's range; r0 is the
    /// primary tiebreaker and outweighs r1..r4.
    pub fn from_parts(category: Category, ranks_desc: &[Rank; 5]) -> Self {
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("need at least 5 cards to evaluate, got {0}")]
    NotEnoughCards(usize),
}

/// Evaluate exactly five cards: detect the category and encode tiebreakers.
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use analysis::HandAnalysis;
    use detector::DETECTORS;

    let analysis = HandAnalysis::new(cards);
    for detector in DETECTORS.iter() {
        if detector.detect(&analysis) {
            return detector.build_evaluation(&analysis);
        }
    }

    // HighCard always matches as the fallback
    unreachable!("high-card detector should always match")
}

/// Evaluate seven cards (two hole + five board): the best of all C(7,5) = 21
/// five-card sub-hands. This is the aggregator's per-trial hot path.
pub fn evaluate_seven(cards: &[Card; 7]) -> Evaluation {
    let mut best: Option<Evaluation> = None;

    for indices in Combinations::new(7, 5) {
        let hand = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    best.expect("C(7,5) yields at least one combination")
}

/// Evaluate five to seven cards, selecting the best five-card sub-hand.
/// Fewer than five cards is an error.
///
/// ```
/// use holdem_equity::cards::parse_cards;
/// use holdem_equity::evaluator::{evaluate_best, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 2d").unwrap();
/// let eval = evaluate_best(&cards).unwrap();
/// assert_eq!(eval.category, Category::RoyalFlush);
/// ```
pub fn evaluate_best(cards: &[Card]) -> Result<Evaluation, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }

    let mut best: Option<Evaluation> = None;
    for indices in Combinations::new(cards.len(), 5) {
        let hand = [
            cards[indices[0]],
            cards[indices[1]],
            cards[indices[2]],
            cards[indices[3]],
            cards[indices[4]],
        ];
        let eval = evaluate_five(&hand);
        if best.as_ref().map_or(true, |b| eval > *b) {
            best = Some(eval);
        }
    }

    Ok(best.expect("at least one 5-card combination exists"))
}
