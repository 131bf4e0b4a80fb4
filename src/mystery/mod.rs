//! The murder mystery itself: cards, mansion board, detective, game rules
//! and the session flow that drives them.

pub mod board;
pub mod cards;
pub mod game;
pub mod player;
pub mod session;

pub use board::{Board, Cell, Position, RoomInfo};
pub use cards::{Direction, Room, Solution, Suspect, Weapon};
pub use game::{FeedbackTone, Game, Outcome, Verdict};
pub use player::Player;
pub use session::{Session, SessionInput, SessionState, TurnPhase};
