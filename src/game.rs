use crate::cards::Card;
use std::collections::HashSet;

/// The five named community-card positions.
///
/// Slot identity matters for state bookkeeping (which position a card sits
/// in), never for hand strength. The engine tolerates any subset of slots
/// being filled, in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoardSlot {
    Flop1,
    Flop2,
    Flop3,
    Turn,
    River,
}

impl BoardSlot {
    pub const ALL: [BoardSlot; 5] =
        [BoardSlot::Flop1, BoardSlot::Flop2, BoardSlot::Flop3, BoardSlot::Turn, BoardSlot::River];

    pub const fn index(self) -> usize {
        match self {
            BoardSlot::Flop1 => 0,
            BoardSlot::Flop2 => 1,
            BoardSlot::Flop3 => 2,
            BoardSlot::Turn => 3,
            BoardSlot::River => 4,
        }
    }
}

/// Community cards: five named slots, each empty or holding a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    slots: [Option<Card>; 5],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: BoardSlot) -> Option<Card> {
        self.slots[slot.index()]
    }

    pub(crate) fn set(&mut self, slot: BoardSlot, card: Option<Card>) {
        self.slots[slot.index()] = card;
    }

    /// Slots currently empty, in canonical slot order.
    pub fn missing_slots(&self) -> Vec<BoardSlot> {
        BoardSlot::ALL.iter().copied().filter(|s| self.get(*s).is_none()).collect()
    }

    /// Filled cards, in canonical slot order.
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().filter_map(|c| *c).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|c| c.is_some())
    }

    /// All five cards of a complete board, or `None` if any slot is empty.
    pub fn as_five(&self) -> Option<[Card; 5]> {
        Some([
            self.slots[0]?,
            self.slots[1]?,
            self.slots[2]?,
            self.slots[3]?,
            self.slots[4]?,
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Active,
    Folded,
}

/// A seat at the table: two optional hole cards and an active/folded flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: usize,
    pub hole: [Option<Card>; 2],
    pub status: PlayerStatus,
}

impl Player {
    fn new(id: usize) -> Self {
        Self { id, hole: [None, None], status: PlayerStatus::Active }
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Both hole cards, if the hand is complete.
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        Some([self.hole[0]?, self.hole[1]?])
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("card {0} is already assigned elsewhere")]
    CardInUse(Card),
    #[error("no player with id {0}")]
    NoSuchPlayer(usize),
    #[error("hole card index {0} out of range (expected 0 or 1)")]
    HoleIndex(usize),
}

/// The full table state: players, board, and the used-card projection.
///
/// `GameState` is the sole owner of the used-card set; every card mutation
/// goes through it and atomically keeps the projection consistent, so a card
/// can never sit in two places at once. Assigning a card that is already used
/// anywhere else fails with [`StateError::CardInUse`] and leaves the state
/// untouched.
///
/// ```
/// use holdem_equity::game::{BoardSlot, GameState};
///
/// let mut state = GameState::new(2);
/// state.set_hole_card(0, 0, "Ah".parse().unwrap()).unwrap();
/// state.set_board_card(BoardSlot::Turn, "Kd".parse().unwrap()).unwrap();
/// // Ah is taken: assigning it to the board is rejected.
/// assert!(state.set_board_card(BoardSlot::River, "Ah".parse().unwrap()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    board: Board,
    used: HashSet<Card>,
}

impl GameState {
    /// A fresh table of `player_count` active players with empty hands and board.
    pub fn new(player_count: usize) -> Self {
        Self {
            players: (0..player_count).map(Player::new).collect(),
            board: Board::new(),
            used: HashSet::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards currently assigned to any hand or board slot.
    pub fn used_cards(&self) -> &HashSet<Card> {
        &self.used
    }

    /// Players that are active, regardless of hole-card completeness.
    pub fn active_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active()).collect()
    }

    fn player_mut(&mut self, id: usize) -> Result<&mut Player, StateError> {
        self.players.iter_mut().find(|p| p.id == id).ok_or(StateError::NoSuchPlayer(id))
    }

    /// Claim `card` for a new location, releasing `old` if the location was
    /// occupied. Fails without any mutation if `card` is used elsewhere.
    fn swap_used(&mut self, old: Option<Card>, card: Card) -> Result<(), StateError> {
        if old != Some(card) && self.used.contains(&card) {
            return Err(StateError::CardInUse(card));
        }
        if let Some(old) = old {
            self.used.remove(&old);
        }
        self.used.insert(card);
        Ok(())
    }

    /// Assign a hole card. Replacing an occupied slot releases the old card.
    pub fn set_hole_card(&mut self, id: usize, index: usize, card: Card) -> Result<(), StateError> {
        if index > 1 {
            return Err(StateError::HoleIndex(index));
        }
        let old = self.player_mut(id)?.hole[index];
        self.swap_used(old, card)?;
        self.player_mut(id)?.hole[index] = Some(card);
        Ok(())
    }

    /// Remove a hole card, returning it to the pool.
    pub fn clear_hole_card(&mut self, id: usize, index: usize) -> Result<(), StateError> {
        if index > 1 {
            return Err(StateError::HoleIndex(index));
        }
        if let Some(card) = self.player_mut(id)?.hole[index].take() {
            self.used.remove(&card);
        }
        Ok(())
    }

    /// Assign a board slot. Replacing an occupied slot releases the old card.
    pub fn set_board_card(&mut self, slot: BoardSlot, card: Card) -> Result<(), StateError> {
        let old = self.board.get(slot);
        self.swap_used(old, card)?;
        self.board.set(slot, Some(card));
        Ok(())
    }

    /// Empty a board slot, returning its card to the pool.
    pub fn clear_board_card(&mut self, slot: BoardSlot) {
        if let Some(card) = self.board.get(slot) {
            self.used.remove(&card);
            self.board.set(slot, None);
        }
    }

    pub fn set_status(&mut self, id: usize, status: PlayerStatus) -> Result<(), StateError> {
        self.player_mut(id)?.status = status;
        Ok(())
    }

    /// Flip a player between active and folded. Folded players keep their
    /// cards (still unavailable to the deck) but sit out of equity.
    pub fn toggle_status(&mut self, id: usize) -> Result<(), StateError> {
        let p = self.player_mut(id)?;
        p.status = match p.status {
            PlayerStatus::Active => PlayerStatus::Folded,
            PlayerStatus::Folded => PlayerStatus::Active,
        };
        Ok(())
    }

    /// Clear all cards and statuses, keeping the player count.
    pub fn reset(&mut self) {
        let n = self.players.len();
        *self = GameState::new(n);
    }
}
