//! Mansion Mystery - a terminal murder mystery on a small mansion board.
//!
//! The rules live in `mystery`; `ui` and `input` are the ratatui/crossterm
//! front end driven by the binary.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod input;
pub mod logging;
pub mod mystery;
pub mod room_art;
pub mod ui;
pub mod utils;
