//! Room art: one ASCII-art text file per room, read the first time the
//! player walks into that room.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::constants::{PLACEHOLDER_ART_HEIGHT, PLACEHOLDER_ART_WIDTH};
use crate::errors::{CluedoError, Result};
use crate::mystery::cards::Room;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomArt {
    pub lines: Vec<String>,
    /// True when the art file was missing and a solid block stands in.
    pub placeholder: bool,
}

impl RoomArt {
    pub fn placeholder() -> Self {
        let row = "█".repeat(PLACEHOLDER_ART_WIDTH);
        Self {
            lines: vec![row; PLACEHOLDER_ART_HEIGHT],
            placeholder: true,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }
}

pub fn art_path(dir: &Path, room: Room) -> PathBuf {
    dir.join(format!("{}.txt", room.art_stem()))
}

/// Read a room's art file. Trailing blank lines are dropped.
pub fn load_room_art(dir: &Path, room: Room) -> Result<RoomArt> {
    let path = art_path(dir, room);
    let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CluedoError::MissingArt {
            room,
            path: path.clone(),
        },
        _ => CluedoError::Io(e),
    })?;

    let mut lines: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(CluedoError::MissingArt { room, path });
    }

    Ok(RoomArt {
        lines,
        placeholder: false,
    })
}

/// Lazily loaded art, one entry per room.
#[derive(Debug)]
pub struct ArtCache {
    dir: PathBuf,
    loaded: HashMap<Room, RoomArt>,
}

impl ArtCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            loaded: HashMap::new(),
        }
    }

    /// Art for a room, loading it on first use. Any load failure is logged
    /// and replaced by the placeholder.
    pub fn get(&mut self, room: Room) -> &RoomArt {
        let dir = &self.dir;
        self.loaded
            .entry(room)
            .or_insert_with(|| match load_room_art(dir, room) {
                Ok(art) => {
                    debug!(%room, "room art loaded");
                    art
                }
                Err(e) => {
                    warn!(error = %e, "using placeholder art");
                    RoomArt::placeholder()
                }
            })
    }
}
