use super::analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Each category knows how to recognize itself in an analyzed hand and how
/// to encode its tiebreakers. Detectors run in precedence order, first match
/// wins.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// Tiebreak slots a category does not use are padded with the lowest rank so
// unused positions never influence ordering.
const PAD: Rank = Rank::Two;

/// Royal Flush: ace-high straight, all one suit.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.straight_top == Some(Rank::Ace)
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        // all royal flushes tie
        analysis.build_evaluation(Category::RoyalFlush, [Rank::Ace, PAD, PAD, PAD, PAD])
    }
}

/// Straight Flush: five consecutive ranks, all one suit, below ace-high.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.is_straight()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_top.expect("detector checked straight");
        analysis.build_evaluation(Category::StraightFlush, [top, PAD, PAD, PAD, PAD])
    }
}

/// Four of a Kind: quad rank, then the kicker.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let quad = analysis.rank_groups.quad().expect("detector checked quad");
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::FourOfAKind, [quad, kicker, PAD, PAD, PAD])
    }
}

/// Full House: trip rank outweighs the pair rank.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().expect("detector checked trips");
        let pair = analysis.rank_groups.pairs()[0];
        analysis.build_evaluation(Category::FullHouse, [trips, pair, PAD, PAD, PAD])
    }
}

/// Flush: keyed by all five ranks, descending.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Flush, analysis.ranks)
    }
}

/// Straight: keyed by its top rank (the wheel keys on Five).
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top = analysis.straight_top.expect("detector checked straight");
        analysis.build_evaluation(Category::Straight, [top, PAD, PAD, PAD, PAD])
    }
}

/// Three of a Kind: trip rank, then two kickers.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().expect("detector checked trips");
        let kickers = analysis.rank_groups.kickers();
        analysis.build_evaluation(Category::ThreeOfAKind, [trips, kickers[0], kickers[1], PAD, PAD])
    }
}

/// Two Pair: high pair, low pair, kicker.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pairs = analysis.rank_groups.pairs();
        let kicker = analysis.rank_groups.kickers()[0];
        analysis.build_evaluation(Category::TwoPair, [pairs[0], pairs[1], kicker, PAD, PAD])
    }
}

/// One Pair: pair rank, then three kickers.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pair = analysis.rank_groups.pairs()[0];
        let kickers = analysis.rank_groups.kickers();
        analysis.build_evaluation(Category::Pair, [pair, kickers[0], kickers[1], kickers[2], PAD])
    }
}

/// High Card: always matches as the fallback; keyed by all five ranks.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::HighCard, analysis.ranks)
    }
}

/// Detectors in precedence order, highest category first.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
