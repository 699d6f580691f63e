use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank, Suit};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed facts about a 5-card hand, built once and shared by every
/// category detector.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards sorted by rank descending (suit descending as a stable tiebreak).
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    /// Shared suit, if all five cards are suited.
    pub flush_suit: Option<Suit>,
    /// Top rank of the straight, if the five ranks form one. The wheel
    /// (A-2-3-4-5) reports Five.
    pub straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = [
            sorted_cards[0].rank(),
            sorted_cards[1].rank(),
            sorted_cards[2].rank(),
            sorted_cards[3].rank(),
            sorted_cards[4].rank(),
        ];

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_ranks(&ranks),
            flush_suit: flush_suit(&sorted_cards),
            straight_top: straight_top(&ranks),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_top.is_some()
    }

    pub fn build_evaluation(&self, category: Category, tiebreak: [Rank; 5]) -> Evaluation {
        Evaluation {
            category,
            best_five: self.sorted_cards,
            value: HandValue::from_parts(category, &tiebreak),
        }
    }
}

fn flush_suit(cards: &[Card; 5]) -> Option<Suit> {
    let first = cards[0].suit();
    cards.iter().all(|c| c.suit() == first).then_some(first)
}

/// `ranks` must be sorted descending. Ace is tried both high (the normal
/// run test) and low (the wheel A-2-3-4-5, where Five is the top rank).
fn straight_top(ranks: &[Rank; 5]) -> Option<Rank> {
    let consecutive = (0..4).all(|i| ranks[i].value() == ranks[i + 1].value() + 1);
    if consecutive {
        return Some(ranks[0]);
    }
    if ranks == &[Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        return Some(Rank::Five);
    }
    None
}
