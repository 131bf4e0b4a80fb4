//! Mansion board rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{create_game_layout, render_info_panel_frame, render_status_bar};
use super::responsive::LayoutContext;
use crate::mystery::board::{Board, Cell, Position};
use crate::mystery::cards::Room;
use crate::mystery::session::{Session, TurnPhase};

const WALL_COLOR: Color = Color::Rgb(210, 180, 140);
const PATHWAY_COLOR: Color = Color::Rgb(240, 234, 214);
const ROOM_COLOR: Color = Color::Rgb(173, 216, 230);
const HINT_COLOR: Color = Color::Rgb(0, 104, 0);
const PLAYER_COLOR: Color = Color::Red;
const LABEL_COLOR: Color = Color::Rgb(30, 30, 60);

const INFO_PANEL_WIDTH: u16 = 26;
const MAX_CELL_WIDTH: u16 = 12;
const MAX_CELL_HEIGHT: u16 = 5;

/// Render the board with status bar, plus the info panel when there is room.
pub fn render_board(frame: &mut Frame, area: Rect, session: &Session, ctx: &LayoutContext) {
    let panel = ctx.show_info_panel().then_some(INFO_PANEL_WIDTH);
    let layout = create_game_layout(frame, area, " Mansion Mystery ", Color::Yellow, 7, panel);

    render_grid(frame, layout.content, session);

    let (status, color) = status_line(session);
    render_status_bar(frame, layout.status_bar, &status, color, &controls(session));

    if let Some(info) = layout.info_panel {
        render_info(frame, info, session);
    }
}

/// Cell size that fits a `rows` x `cols` grid into `area`.
pub fn cell_size(area: Rect, rows: usize, cols: usize) -> (u16, u16) {
    let width = (area.width / cols.max(1) as u16).clamp(2, MAX_CELL_WIDTH);
    let height = (area.height / rows.max(1) as u16).clamp(1, MAX_CELL_HEIGHT);
    (width, height)
}

fn render_grid(frame: &mut Frame, area: Rect, session: &Session) {
    let board = &session.game.board;
    let (cell_w, cell_h) = cell_size(area, board.rows(), board.cols());

    let grid_width = cell_w * board.cols() as u16;
    let grid_height = cell_h * board.rows() as u16;
    let x_offset = area.x + area.width.saturating_sub(grid_width) / 2;
    let y_offset = area.y + area.height.saturating_sub(grid_height) / 2;

    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let x = x_offset + col as u16 * cell_w;
            let y = y_offset + row as u16 * cell_h;
            let cell_area = Rect::new(x, y, cell_w, cell_h).intersection(area);
            if cell_area.area() == 0 {
                continue;
            }
            render_cell(frame, cell_area, session, (row, col));
        }
    }
}

fn render_cell(frame: &mut Frame, area: Rect, session: &Session, position: Position) {
    let board = &session.game.board;
    let Some(cell) = board.cell(position) else {
        return;
    };

    let background = match cell {
        Cell::Wall => WALL_COLOR,
        Cell::Pathway | Cell::RoomSlot(_) => PATHWAY_COLOR,
        Cell::Room(_) => ROOM_COLOR,
    };

    let mut rows: Vec<Line> = (0..area.height).map(|_| Line::from("")).collect();
    let middle = (area.height / 2) as usize;

    if let Cell::Room(room) = cell {
        let label: String = room.name().chars().take(area.width as usize).collect();
        rows[0] = Line::from(Span::styled(
            label,
            Style::default().fg(LABEL_COLOR).add_modifier(Modifier::BOLD),
        ));
    }

    if session.game.player.position == position {
        rows[middle] = Line::from(Span::styled(
            "●",
            Style::default().fg(PLAYER_COLOR).add_modifier(Modifier::BOLD),
        ));
    } else if is_unread_hint_spot(board, session, position) {
        rows[middle] = Line::from(Span::styled(
            "?",
            Style::default().fg(HINT_COLOR).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(rows)
        .style(Style::default().bg(background))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn is_unread_hint_spot(board: &Board, session: &Session, position: Position) -> bool {
    board
        .get_hint(position)
        .is_some_and(|hint| !session.notes.hints.iter().any(|h| h == hint))
}

fn status_line(session: &Session) -> (String, Color) {
    match session.phase {
        TurnPhase::Moving { roll, remaining } => (
            format!("Rolled {roll}. {remaining} moves left."),
            Color::White,
        ),
        TurnPhase::AwaitingRoll => match session.game.current_room() {
            Some(room) => (
                format!("You are in the {room}. Make a suggestion or roll on."),
                Color::Cyan,
            ),
            None => ("Roll the dice to move.".to_string(), Color::White),
        },
    }
}

fn controls(session: &Session) -> Vec<(&'static str, &'static str)> {
    match session.phase {
        TurnPhase::Moving { .. } => vec![("[Arrows]", "Move"), ("[L]", "Notes"), ("[Esc]", "Quit")],
        TurnPhase::AwaitingRoll => {
            let mut keys = vec![("[Space]", "Roll")];
            if session.can_suggest() {
                keys.push(("[S]", "Suggest"));
            }
            keys.extend([
                ("[A]", "Accuse"),
                ("[H]", "Hint"),
                ("[L]", "Notes"),
                ("[I]", "Help"),
            ]);
            keys
        }
    }
}

fn render_info(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let location = session
        .game
        .current_room()
        .map(|room| room.name().to_string())
        .unwrap_or_else(|| "Hallway".to_string());
    let roll = session
        .last_roll
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            session.game.player.name.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Location: ", label),
            Span::styled(location, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Last roll: ", label),
            Span::styled(roll, value),
        ]),
        Line::from(vec![
            Span::styled("Moves left: ", label),
            Span::styled(session.spaces_left().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rooms searched: ", label),
            Span::styled(
                format!("{}/{}", session.notes.room_weapons.len(), Room::COUNT),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Clues found: ", label),
            Span::styled(session.notes.hints.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Suggestions: ", label),
            Span::styled(session.notes.suggestions.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(PLAYER_COLOR)),
            Span::styled("You", label),
        ]),
        Line::from(vec![
            Span::styled("? ", Style::default().fg(HINT_COLOR)),
            Span::styled("Clue", label),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
