use crate::cards::{Card, Rank, Suit};
use std::collections::HashSet;

/// The standard 52-card deck, in a fixed deterministic order
/// (suits C, D, H, S; ranks Two through Ace within each suit).
#[derive(Debug, Clone)]
pub struct Deck;

impl Deck {
    /// All 52 canonical cards.
    ///
    /// ```
    /// use holdem_equity::deck::Deck;
    ///
    /// assert_eq!(Deck::standard().len(), 52);
    /// ```
    pub fn standard() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        cards
    }

    /// The standard deck minus `used`, preserving deck order. Pure.
    ///
    /// ```
    /// use holdem_equity::deck::Deck;
    /// use std::collections::HashSet;
    ///
    /// let mut used = HashSet::new();
    /// used.insert("As".parse().unwrap());
    /// used.insert("Kh".parse().unwrap());
    /// assert_eq!(Deck::available(&used).len(), 50);
    /// ```
    pub fn available(used: &HashSet<Card>) -> Vec<Card> {
        Self::standard().into_iter().filter(|c| !used.contains(c)).collect()
    }
}
