//! Texas Hold'em equity engine.
//!
//! Build a [`game::GameState`], assign hole and board cards, and ask for each
//! active player's win rate. Unknown board cards are completed exhaustively
//! when the combination count is small enough, otherwise by uniform sampling;
//! ties split the pot credit so the rates always sum to 100.
//!
//! ```
//! use holdem_equity::equity::{compute_equity, EquityConfig};
//! use holdem_equity::game::{BoardSlot, GameState};
//!
//! let mut state = GameState::new(2);
//! state.set_hole_card(0, 0, "Ah".parse().unwrap()).unwrap();
//! state.set_hole_card(0, 1, "Kh".parse().unwrap()).unwrap();
//! state.set_hole_card(1, 0, "2c".parse().unwrap()).unwrap();
//! state.set_hole_card(1, 1, "2d".parse().unwrap()).unwrap();
//! for (slot, card) in BoardSlot::ALL.iter().zip(["Qh", "Jh", "Th", "3c", "3d"]) {
//!     state.set_board_card(*slot, card.parse().unwrap()).unwrap();
//! }
//!
//! let equity = compute_equity(&state, &EquityConfig::default()).unwrap();
//! assert_eq!(equity[0].win_rate, 100.0);
//! ```

pub mod cards;
pub mod deck;
pub mod enumerate;
pub mod equity;
pub mod evaluator;
pub mod game;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
