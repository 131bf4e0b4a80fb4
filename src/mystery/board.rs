//! The mansion board: fixed grid layout, room placement, weapon placement
//! and floor-tile hint spots.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards::{Room, Solution, Suspect, Weapon};
use crate::constants::{GRID_COLS, GRID_ROWS};

/// Grid coordinate as (row, col).
pub type Position = (usize, usize);

/// Mansion layout. `W` = wall, `P` = pathway, digits = numbered room slots.
const LAYOUT: [&str; GRID_ROWS] = [
    "WWWWWWWWW",
    "W1P2P3P4W",
    "WPPPPPPPW",
    "W5PPPPP6W",
    "WPPPPPPPW",
    "W7PP8PP9W",
    "WWWWWWWWW",
];

/// A single cell of the mansion grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Pathway,
    /// Unresolved room slot, numbered 1-9 in layout order.
    RoomSlot(u8),
    /// Room slot resolved to its room by `setup_rooms`.
    Room(Room),
}

impl Cell {
    fn from_layout(ch: char) -> Self {
        match ch {
            'P' => Cell::Pathway,
            d @ '1'..='9' => Cell::RoomSlot(d as u8 - b'0'),
            _ => Cell::Wall,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }

    pub fn is_room(self) -> bool {
        matches!(self, Cell::RoomSlot(_) | Cell::Room(_))
    }
}

/// Per-room placement record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomInfo {
    pub position: Option<Position>,
    pub weapon: Option<Weapon>,
}

#[derive(Debug, Clone)]
pub struct Board {
    /// The grid, indexed as grid[row][col].
    pub grid: [[Cell; GRID_COLS]; GRID_ROWS],
    /// Placement table indexed by `Room::index()`.
    rooms: [RoomInfo; Room::COUNT],
    hint_spots: HashMap<Position, String>,
    generated_hints: Vec<String>,
}

impl Board {
    /// Build the fixed grid and shuffle the rooms onto the room slots.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::unplaced();
        board.assign_random_positions(rng);
        board
    }

    /// The bare layout with no rooms placed yet.
    pub fn unplaced() -> Self {
        let mut grid = [[Cell::Wall; GRID_COLS]; GRID_ROWS];
        for (row, line) in LAYOUT.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                grid[row][col] = Cell::from_layout(ch);
            }
        }

        Self {
            grid,
            rooms: [RoomInfo::default(); Room::COUNT],
            hint_spots: HashMap::new(),
            generated_hints: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    /// Cell at a position, or `None` when out of bounds.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        let (row, col) = position;
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True when the position is on the grid and not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| !cell.is_wall())
    }

    /// All room-slot cells in row-major order, resolved or not.
    pub fn room_slot_positions(&self) -> Vec<Position> {
        self.positions_where(Cell::is_room)
    }

    /// All pathway cells in row-major order.
    pub fn pathway_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell == Cell::Pathway)
    }

    fn positions_where(&self, pred: impl Fn(Cell) -> bool) -> Vec<Position> {
        let mut positions = Vec::new();
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if pred(cell) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Shuffle the room slots and hand one to each room, without replacement.
    /// Rooms beyond the number of slots are left without a position.
    pub fn assign_random_positions<R: Rng>(&mut self, rng: &mut R) {
        let mut slots = self.room_slot_positions();
        slots.shuffle(rng);

        for info in self.rooms.iter_mut() {
            info.position = None;
        }
        for (room, position) in Room::ALL.iter().zip(slots) {
            self.rooms[room.index()].position = Some(position);
        }
    }

    /// Rewrite each assigned room slot with its resolved room.
    pub fn setup_rooms(&mut self) {
        for room in Room::ALL {
            if let Some((row, col)) = self.rooms[room.index()].position {
                self.grid[row][col] = Cell::Room(room);
            }
        }
    }

    /// Put the murder weapon in the murder room and scatter the other weapons
    /// over the remaining rooms. Rooms left over hold no weapon.
    pub fn setup_weapons<R: Rng>(&mut self, solution: &Solution, rng: &mut R) {
        for info in self.rooms.iter_mut() {
            info.weapon = None;
        }
        self.rooms[solution.room.index()].weapon = Some(solution.weapon);

        let weapons: Vec<Weapon> = Weapon::ALL
            .into_iter()
            .filter(|&w| w != solution.weapon)
            .collect();
        let mut remaining_rooms: Vec<Room> = Room::ALL
            .into_iter()
            .filter(|&r| r != solution.room)
            .collect();
        remaining_rooms.shuffle(rng);

        for (room, weapon) in remaining_rooms.into_iter().zip(weapons) {
            self.rooms[room.index()].weapon = Some(weapon);
        }
    }

    /// Write the four hint messages and scatter them over distinct pathway
    /// cells. One hint always names the real murder room.
    pub fn generate_hints<R: Rng>(&mut self, solution: &Solution, rng: &mut R) {
        let innocents: Vec<Suspect> = Suspect::ALL
            .into_iter()
            .filter(|&s| s != solution.murderer)
            .collect();
        let other_rooms: Vec<Room> = Room::ALL
            .into_iter()
            .filter(|&r| r != solution.room)
            .collect();

        let pick_innocent =
            |rng: &mut R| innocents.choose(rng).copied().unwrap_or(solution.murderer);
        let alibi_suspect = pick_innocent(rng);
        let alibi_room = other_rooms.choose(rng).copied().unwrap_or(solution.room);
        let witness_suspect = pick_innocent(rng);
        let accomplice = pick_innocent(rng);

        self.generated_hints = vec![
            format!("{alibi_suspect} was in the {alibi_room} during the murder."),
            format!("A loud noise was heard in the {}.", solution.room),
            format!(
                "Someone saw {witness_suspect} heading to the {}.",
                solution.room
            ),
            format!("{accomplice} and {} were seen talking.", solution.murderer),
        ];
        self.generated_hints.shuffle(rng);

        let mut spots = self.pathway_positions();
        spots.shuffle(rng);

        self.hint_spots = spots
            .into_iter()
            .zip(self.generated_hints.iter().cloned())
            .collect();
    }

    /// Hint text at a position, if that cell is a hint spot.
    pub fn get_hint(&self, position: Position) -> Option<&str> {
        self.hint_spots.get(&position).map(String::as_str)
    }

    pub fn hint_spots(&self) -> &HashMap<Position, String> {
        &self.hint_spots
    }

    /// The hint messages in their shuffled order.
    pub fn generated_hints(&self) -> &[String] {
        &self.generated_hints
    }

    pub fn room_info(&self, room: Room) -> RoomInfo {
        self.rooms[room.index()]
    }

    pub fn room_position(&self, room: Room) -> Option<Position> {
        self.rooms[room.index()].position
    }

    pub fn room_weapon(&self, room: Room) -> Option<Weapon> {
        self.rooms[room.index()].weapon
    }

    /// Room placed at a position, whether or not `setup_rooms` has run.
    pub fn room_at(&self, position: Position) -> Option<Room> {
        Room::ALL
            .into_iter()
            .find(|room| self.rooms[room.index()].position == Some(position))
    }
}
