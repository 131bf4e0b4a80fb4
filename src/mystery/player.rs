//! The detective's token.

use super::board::{Board, Position};
use super::cards::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Current position (row, col). Only changed by `move_in`.
    pub position: Position,
}

impl Player {
    pub fn new(name: impl Into<String>, start: Position) -> Self {
        Self {
            name: name.into(),
            position: start,
        }
    }

    /// Step one cell in `direction`. Returns false and stays put when the
    /// target is off the grid or a wall.
    pub fn move_in(&mut self, direction: Direction, board: &Board) -> bool {
        let (d_row, d_col) = direction.delta();
        let new_row = self.position.0 as i32 + d_row;
        let new_col = self.position.1 as i32 + d_col;

        if new_row < 0 || new_col < 0 {
            return false;
        }
        let target = (new_row as usize, new_col as usize);
        if !board.is_walkable(target) {
            return false;
        }

        self.position = target;
        true
    }
}
