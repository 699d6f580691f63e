use holdem_equity::cards::{Card, Rank, Suit};
use holdem_equity::evaluator::{evaluate_five, evaluate_seven, Category};
use proptest::prelude::*;
use std::cmp::Ordering;

fn rank_from_val(v: u8) -> Rank {
    match v {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        11 => Rank::Jack,
        12 => Rank::Queen,
        13 => Rank::King,
        _ => Rank::Ace,
    }
}

fn any_rank() -> impl Strategy<Value = Rank> {
    (2u8..=14u8).prop_map(rank_from_val)
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades)]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

/// Five-card straight topping at `top`, in mixed suits so it never flushes.
fn straight_cards(top: u8) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

/// Five distinct ranks that do not form a straight (so a suited hand is a
/// plain flush).
fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

fn suited(ranks: &[Rank], suit: Suit) -> [Card; 5] {
    [
        Card::new(ranks[0], suit),
        Card::new(ranks[1], suit),
        Card::new(ranks[2], suit),
        Card::new(ranks[3], suit),
        Card::new(ranks[4], suit),
    ]
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    let mut a_desc = a.to_vec();
    let mut b_desc = b.to_vec();
    a_desc.sort_by(|x, y| y.cmp(x));
    b_desc.sort_by(|x, y| y.cmp(x));
    a_desc.cmp(&b_desc)
}

proptest! {
    #[test]
    fn evaluation_ignores_input_order(cards in prop::array::uniform5(any_card()), seed in 0usize..120) {
        // walk a deterministic permutation from the seed
        let mut permuted = cards;
        let mut s = seed;
        for i in (1..5).rev() {
            permuted.swap(i, s % (i + 1));
            s /= i + 1;
        }
        prop_assert_eq!(evaluate_five(&cards), evaluate_five(&permuted));
    }

    #[test]
    fn seven_card_evaluation_ignores_input_order(
        cards in prop::array::uniform7(any_card()),
        seed in 0usize..5040,
    ) {
        let mut permuted = cards;
        let mut s = seed;
        for i in (1..7).rev() {
            permuted.swap(i, s % (i + 1));
            s /= i + 1;
        }
        prop_assert_eq!(evaluate_seven(&cards), evaluate_seven(&permuted));
    }

    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(
        a in prop::array::uniform5(any_card()),
        b in prop::array::uniform5(any_card()),
        c in prop::array::uniform5(any_card()),
    ) {
        let ea = evaluate_five(&a);
        let eb = evaluate_five(&b);
        let ec = evaluate_five(&c);

        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn seven_card_best_is_at_least_as_good_as_any_five(cards in prop::array::uniform7(any_card())) {
        let best7 = evaluate_seven(&cards);
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
            prop_assert!(best7 >= evaluate_five(&five));
        }}}}}
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi));
        let e_lo = evaluate_five(&straight_cards(top_lo));
        prop_assert!(matches!(e_hi.category, Category::Straight));
        prop_assert!(matches!(e_lo.category, Category::Straight));
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let e_wheel = evaluate_five(&straight_cards(5));
        let e_high = evaluate_five(&straight_cards(top));
        prop_assert!(matches!(e_wheel.category, Category::Straight));
        prop_assert!(e_high > e_wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let e_a = evaluate_five(&suited(&a, Suit::Hearts));
        let e_b = evaluate_five(&suited(&b, Suit::Spades));
        prop_assert!(matches!(e_a.category, Category::Flush));
        prop_assert!(matches!(e_b.category, Category::Flush));

        match compare_rank_lists(&a, &b) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }

    #[test]
    fn every_straight_flush_loses_only_to_the_royal(top in 6u8..=13u8) {
        let ranks: Vec<Rank> = (0..5).map(|i| rank_from_val(top - i)).collect();
        let e = evaluate_five(&suited(&ranks, Suit::Diamonds));
        prop_assert!(matches!(e.category, Category::StraightFlush));

        let royal: Vec<Rank> = (10..=14).rev().map(rank_from_val).collect();
        let e_royal = evaluate_five(&suited(&royal, Suit::Diamonds));
        prop_assert!(matches!(e_royal.category, Category::RoyalFlush));
        prop_assert!(e_royal > e);
    }
}
