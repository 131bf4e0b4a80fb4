//! Full-screen views layered over the board: intro, help, note sheet,
//! suggestion/accusation picker, timed reveals and the closing screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

use super::ascii_scaler::fit_art;
use super::game_common::{centered_rect, render_message_screen};
use crate::mystery::cards::{Room, Solution, Suspect, Weapon};
use crate::mystery::game::{FeedbackTone, Verdict};
use crate::mystery::session::{Notes, Picker, PickerKind, PickerStep, Session};
use crate::room_art::RoomArt;

const TITLE_COLOR: Color = Color::Yellow;
const DIM: Color = Color::DarkGray;
/// Clue text; the board's `?` marker keeps its dark green.
const HINT_TEXT: Color = Color::Rgb(255, 255, 0);

pub fn render_intro(frame: &mut Frame, area: Rect) {
    let body = vec![
        Line::from(Span::styled(
            "A body has been found in the mansion.",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Six suspects. Six weapons. Nine rooms.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Search the rooms, gather clues and name the murderer,",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "the weapon and the room where it happened.",
            Style::default().fg(Color::Gray),
        )),
    ];
    render_message_screen(
        frame,
        area,
        TITLE_COLOR,
        "MANSION MYSTERY",
        body,
        "[Enter] Begin investigation   [Esc] Leave",
    );
}

pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::White);
    let text = Style::default().fg(Color::Gray);
    let entries: [(&str, &str); 10] = [
        ("Space", "Roll the dice"),
        ("Arrows", "Move one square per point rolled"),
        ("S", "Suggest a suspect and weapon for this room"),
        ("A", "Make your final accusation"),
        ("H", "Ask for a hint"),
        ("L", "Open the note sheet"),
        ("I", "Show or hide this help"),
        ("Enter", "Confirm a choice or skip a message"),
        ("Esc", "Cancel a choice, or leave the game"),
        ("Q", "Quit at once"),
    ];

    let mut body: Vec<Line> = entries
        .iter()
        .map(|(k, what)| {
            Line::from(vec![
                Span::styled(format!("{k:>7}  "), key),
                Span::styled(format!("{what:<44}"), text),
            ])
        })
        .collect();
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        "Green marks on the floor hide clues. A wrong accusation ends the case.",
        Style::default().fg(Color::Cyan),
    )));

    render_message_screen(frame, area, Color::Cyan, "HOW TO PLAY", body, "[I] or [Esc] Close");
}

/// Lines of the detective's note sheet.
pub fn notes_lines(notes: &Notes) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(TITLE_COLOR)
        .add_modifier(Modifier::BOLD);
    let entry = Style::default().fg(Color::White);
    let empty = Style::default().fg(DIM);

    let mut lines = vec![Line::from(Span::styled("Suggestions", heading))];
    if notes.suggestions.is_empty() {
        lines.push(Line::from(Span::styled("  none yet", empty)));
    }
    for suggestion in &notes.suggestions {
        lines.push(Line::from(Span::styled(format!("  {suggestion}"), entry)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Clues", heading)));
    let hints = notes.all_hints();
    if hints.is_empty() {
        lines.push(Line::from(Span::styled("  none yet", empty)));
    }
    for hint in hints {
        lines.push(Line::from(Span::styled(format!("  {hint}"), entry)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Reference", heading)));
    let reference: [(&str, Vec<&str>); 3] = [
        ("Characters", Suspect::ALL.iter().map(|s| s.name()).collect()),
        ("Weapons", Weapon::ALL.iter().map(|w| w.name()).collect()),
        ("Locations", Room::ALL.iter().map(|r| r.name()).collect()),
    ];
    for (label, names) in reference {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
            Span::styled(names.join(", "), entry),
        ]));
    }
    lines
}

pub fn render_notes(frame: &mut Frame, area: Rect, notes: &Notes) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Note Sheet ")
        .title(
            Title::from(" [L] or [Esc] Close ")
                .position(Position::Bottom)
                .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TITLE_COLOR));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(notes_lines(notes)).wrap(Wrap { trim: false });
    frame.render_widget(text, inner);
}

fn step_options(step: PickerStep) -> Vec<&'static str> {
    match step {
        PickerStep::Suspect => Suspect::ALL.iter().map(|s| s.name()).collect(),
        PickerStep::Weapon => Weapon::ALL.iter().map(|w| w.name()).collect(),
        PickerStep::Room => Room::ALL.iter().map(|r| r.name()).collect(),
    }
}

fn picker_title(picker: &Picker) -> String {
    let action = match picker.kind {
        PickerKind::Suggestion => "Suggestion",
        PickerKind::Accusation => "Accusation",
    };
    let what = match picker.step {
        PickerStep::Suspect => "Who did it?",
        PickerStep::Weapon => "With what?",
        PickerStep::Room => "Where?",
    };
    format!(" {action}: {what} ")
}

pub fn render_picker(frame: &mut Frame, area: Rect, picker: &Picker) {
    let options = step_options(picker.step);
    let height = options.len() as u16 + 6;
    let modal = centered_rect(area, 40, height);
    frame.render_widget(Clear, modal);

    let accent = match picker.kind {
        PickerKind::Suggestion => Color::Cyan,
        PickerKind::Accusation => Color::LightRed,
    };
    let block = Block::default()
        .title(picker_title(picker))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let selected = picker.selected();
    let mut lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {name}"),
                    Style::default()
                        .fg(Color::Black)
                        .bg(accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {name}"),
                    Style::default().fg(Color::White),
                ))
            }
        })
        .collect();

    lines.push(Line::from(""));
    if let Some(room) = picker.fixed_room {
        lines.push(Line::from(Span::styled(
            format!("in the {room}"),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        "[Up/Down] Choose  [Enter] OK  [Esc] Back",
        Style::default().fg(DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_hint_reveal(frame: &mut Frame, area: Rect, text: &str) {
    let body = vec![Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(HINT_TEXT),
    ))];
    render_message_screen(
        frame,
        area,
        Color::Green,
        "A CLUE",
        body,
        "[Enter] Continue",
    );
}

/// Sentence shown under the room art.
pub fn room_reveal_caption(room: Room, weapon: Option<Weapon>) -> String {
    match weapon {
        Some(weapon) => format!("You search the {room} and find the {weapon}."),
        None => format!("You search the {room}. There is no weapon here."),
    }
}

pub fn render_room_reveal(
    frame: &mut Frame,
    area: Rect,
    room: Room,
    weapon: Option<Weapon>,
    art: &RoomArt,
) {
    // Title, caption, footer and spacing take 7 rows plus the border.
    let max_art_height = area.height.saturating_sub(9) as usize;
    let max_art_width = area.width.saturating_sub(4) as usize;
    let art_color = if art.placeholder {
        DIM
    } else {
        Color::Rgb(173, 216, 230)
    };

    let mut body: Vec<Line> = fit_art(&art.lines, max_art_width, max_art_height)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(art_color))))
        .collect();
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        room_reveal_caption(room, weapon),
        Style::default().fg(Color::White),
    )));

    render_message_screen(
        frame,
        area,
        Color::Cyan,
        &room.name().to_uppercase(),
        body,
        "[Enter] Continue",
    );
}

fn tone_color(tone: FeedbackTone) -> Color {
    match tone {
        FeedbackTone::Correct => Color::Green,
        FeedbackTone::Incorrect => Color::Red,
        FeedbackTone::Hint => HINT_TEXT,
    }
}

pub fn render_feedback(frame: &mut Frame, area: Rect, session: &Session) {
    let (text, color) = match session.game.get_feedback() {
        Some((text, tone)) => (text.to_string(), tone_color(tone)),
        None => (String::new(), Color::White),
    };
    let body = vec![Line::from(Span::styled(text, Style::default().fg(color)))];
    render_message_screen(frame, area, color, "THE VERDICT", body, "[Enter] Continue");
}

/// Headline and explanation for the closing screen.
pub fn end_screen_text(verdict: Verdict, solution: &Solution) -> (&'static str, String) {
    match verdict {
        Verdict::Solved => ("CASE SOLVED", format!("It was {solution}.")),
        Verdict::Failed => (
            "CASE LOST",
            format!("Your accusation was wrong. It was {solution}."),
        ),
    }
}

pub fn render_end_screen(frame: &mut Frame, area: Rect, verdict: Verdict, session: &Session) {
    let (title, message) = end_screen_text(verdict, session.game.solution());
    let color = match verdict {
        Verdict::Solved => Color::Green,
        Verdict::Failed => Color::Red,
    };
    let body = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Rooms searched: {}   Suggestions: {}",
                session.notes.room_weapons.len(),
                session.notes.suggestions.len()
            ),
            Style::default().fg(Color::Cyan),
        )),
    ];
    render_message_screen(frame, area, color, title, body, "[Press any key]");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_reveal_caption() {
        assert_eq!(
            room_reveal_caption(Room::Kitchen, Some(Weapon::Rope)),
            "You search the Kitchen and find the Rope."
        );
        assert!(room_reveal_caption(Room::Garage, None).contains("no weapon"));
    }

    #[test]
    fn test_end_screen_text_names_solution() {
        let solution = Solution::new(Suspect::MrsWhite, Weapon::Rope, Room::Kitchen);
        let (title, message) = end_screen_text(Verdict::Failed, &solution);
        assert_eq!(title, "CASE LOST");
        assert!(message.contains(&solution.to_string()));
        assert_eq!(end_screen_text(Verdict::Solved, &solution).0, "CASE SOLVED");
    }

    #[test]
    fn test_notes_lines_empty_sheet() {
        let lines = notes_lines(&Notes::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text.iter().filter(|l| l.contains("none yet")).count(), 2);
    }

    #[test]
    fn test_notes_lines_list_every_card() {
        let text: String = notes_lines(&Notes::default())
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Reference"));
        for name in Suspect::ALL
            .iter()
            .map(|s| s.name())
            .chain(Weapon::ALL.iter().map(|w| w.name()))
            .chain(Room::ALL.iter().map(|r| r.name()))
        {
            assert!(text.contains(name), "{name} missing from note sheet");
        }
    }

    #[test]
    fn test_hint_feedback_is_yellow() {
        assert_eq!(tone_color(FeedbackTone::Hint), Color::Rgb(255, 255, 0));
        assert_eq!(tone_color(FeedbackTone::Correct), Color::Green);
        assert_eq!(tone_color(FeedbackTone::Incorrect), Color::Red);
    }

    #[test]
    fn test_step_options_counts() {
        assert_eq!(step_options(PickerStep::Suspect).len(), Suspect::COUNT);
        assert_eq!(step_options(PickerStep::Weapon).len(), Weapon::COUNT);
        assert_eq!(step_options(PickerStep::Room).len(), Room::COUNT);
    }
}
