//! The fixed card sets of the mystery: suspects, weapons and rooms.

use std::fmt;

/// Generate the standard `ALL`, `COUNT`, `from_index()` and `name()` items
/// shared by the card enums.
macro_rules! card_enum_impl {
    ($name:ident, $count:literal { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl $name {
            pub const ALL: [$name; $count] = [$($name::$variant),+];
            pub const COUNT: usize = $count;

            /// Wraps out-of-range indices back into the card set.
            pub fn from_index(index: usize) -> Self {
                Self::ALL[index % Self::COUNT]
            }

            pub fn index(self) -> usize {
                self as usize
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suspect {
    MissScarlet,
    ProfessorPlum,
    MrsPeacock,
    ReverendGreen,
    ColonelMustard,
    MrsWhite,
}

card_enum_impl!(Suspect, 6 {
    MissScarlet => "Miss Scarlet",
    ProfessorPlum => "Professor Plum",
    MrsPeacock => "Mrs. Peacock",
    ReverendGreen => "Reverend Green",
    ColonelMustard => "Colonel Mustard",
    MrsWhite => "Mrs. White",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weapon {
    Candlestick,
    Dagger,
    LeadPipe,
    Revolver,
    Rope,
    Wrench,
}

card_enum_impl!(Weapon, 6 {
    Candlestick => "Candlestick",
    Dagger => "Dagger",
    LeadPipe => "Lead Pipe",
    Revolver => "Revolver",
    Rope => "Rope",
    Wrench => "Wrench",
});

/// The nine mansion rooms. Declaration order is the order rooms are handed
/// their shuffled slots in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    Bedroom,
    Bathroom,
    Study,
    Kitchen,
    GameRoom,
    DiningRoom,
    Garage,
    Courtyard,
    LivingRoom,
}

card_enum_impl!(Room, 9 {
    Bedroom => "Bedroom",
    Bathroom => "Bathroom",
    Study => "Study",
    Kitchen => "Kitchen",
    GameRoom => "Game Room",
    DiningRoom => "Dining Room",
    Garage => "Garage",
    Courtyard => "Courtyard",
    LivingRoom => "Living Room",
});

impl Room {
    /// File stem of the room's ASCII art, e.g. `DiningRoom`.
    pub fn art_stem(self) -> &'static str {
        match self {
            Room::Bedroom => "Bedroom",
            Room::Bathroom => "Bath",
            Room::Study => "Study",
            Room::Kitchen => "Kitchen",
            Room::GameRoom => "GameRoom",
            Room::DiningRoom => "DiningRoom",
            Room::Garage => "Garage",
            Room::Courtyard => "Courtyard",
            Room::LivingRoom => "LivingRoom",
        }
    }
}

/// A murderer/weapon/room triple: the hidden answer, or a guess at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Solution {
    pub murderer: Suspect,
    pub weapon: Weapon,
    pub room: Room,
}

impl Solution {
    pub fn new(murderer: Suspect, weapon: Weapon, room: Room) -> Self {
        Self {
            murderer,
            weapon,
            room,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} in {}", self.murderer, self.weapon, self.room)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector as (d_row, d_col).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
