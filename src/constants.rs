// Frame timing
pub const FRAME_MS: u64 = 33; // ~30 FPS, input poll timeout per frame

// Mansion grid
pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 9;
pub const PLAYER_START: (usize, usize) = (3, 4);
pub const PLAYER_NAME: &str = "Detective";

// Dice
pub const DICE_SIDES: u32 = 6;

// Timed screen durations (defaults, overridable in config)
pub const FEEDBACK_DISPLAY_MS: u64 = 3000;
pub const HINT_DISPLAY_MS: u64 = 3000;
pub const ROOM_DISPLAY_MS: u64 = 3000;
pub const VICTORY_DISPLAY_MS: u64 = 5000;

// Files under ~/.cluedo/
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "cluedo.log";
pub const DEFAULT_ROOM_ART_DIR: &str = "room_art";

// Placeholder art when a room's art file is missing
pub const PLACEHOLDER_ART_WIDTH: usize = 24;
pub const PLACEHOLDER_ART_HEIGHT: usize = 8;
