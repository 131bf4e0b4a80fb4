pub mod ascii_scaler;
pub mod board_scene;
pub mod game_common;
pub mod responsive;
pub mod screens;

use ratatui::Frame;

use crate::mystery::session::{Overlay, Session, SessionState, TimedScreen};
use crate::room_art::ArtCache;
use responsive::{LayoutContext, SizeTier};

/// Main UI drawing function. One view is drawn per frame, picked in order:
/// size check, intro/closing screen, timed reveal, overlay, then the board
/// with any open picker on top.
pub fn draw(frame: &mut Frame, session: &Session, art: &mut ArtCache) {
    let ctx = LayoutContext::from_frame(frame);
    if ctx.tier == SizeTier::TooSmall {
        responsive::render_too_small(frame, &ctx);
        return;
    }

    let area = frame.size();

    match session.state {
        SessionState::Intro => {
            screens::render_intro(frame, area);
            return;
        }
        SessionState::Finished(verdict) => {
            screens::render_end_screen(frame, area, verdict, session);
            return;
        }
        SessionState::Playing | SessionState::Quit => {}
    }

    if let Some(active) = &session.active_screen {
        match &active.screen {
            TimedScreen::HintReveal { text } => screens::render_hint_reveal(frame, area, text),
            TimedScreen::RoomReveal { room, weapon } => {
                let room_art = art.get(*room);
                screens::render_room_reveal(frame, area, *room, *weapon, room_art);
            }
            TimedScreen::Feedback => screens::render_feedback(frame, area, session),
        }
        return;
    }

    match session.overlay {
        Overlay::Instructions => {
            screens::render_instructions(frame, area);
            return;
        }
        Overlay::Notes => {
            screens::render_notes(frame, area, &session.notes);
            return;
        }
        Overlay::None => {}
    }

    board_scene::render_board(frame, area, session, &ctx);
    if let Some(picker) = &session.picker {
        screens::render_picker(frame, area, picker);
    }
}
