//! Terminal size classification.
//!
//! A `LayoutContext` is built once per frame and decides whether the board
//! gets its side panel or the terminal is too small to play at all.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    /// Board only, no info panel.
    Compact, // 54x21+
    Full,    // 90x28+
}

// Board cells are at least 6x3 chars; the full tier adds a 26-col panel.
const FULL_MIN_COLS: u16 = 90;
const FULL_MIN_ROWS: u16 = 28;
const COMPACT_MIN_COLS: u16 = 54;
const COMPACT_MIN_ROWS: u16 = 21;

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// min(width tier, height tier).
    pub tier: SizeTier,
    pub cols: u16,
    pub rows: u16,
}

impl LayoutContext {
    pub fn from_frame(frame: &Frame) -> Self {
        let size = frame.size();
        Self::from_size(size.width, size.height)
    }

    /// Create a LayoutContext from explicit dimensions (for testing).
    pub fn from_size(cols: u16, rows: u16) -> Self {
        let width_tier = classify(cols, FULL_MIN_COLS, COMPACT_MIN_COLS);
        let height_tier = classify(rows, FULL_MIN_ROWS, COMPACT_MIN_ROWS);

        LayoutContext {
            tier: width_tier.min(height_tier),
            cols,
            rows,
        }
    }

    pub fn show_info_panel(&self) -> bool {
        self.tier == SizeTier::Full
    }
}

fn classify(val: u16, full: u16, compact: u16) -> SizeTier {
    if val >= full {
        SizeTier::Full
    } else if val >= compact {
        SizeTier::Compact
    } else {
        SizeTier::TooSmall
    }
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, ctx: &LayoutContext) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                COMPACT_MIN_COLS, COMPACT_MIN_ROWS, ctx.cols, ctx.rows
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
