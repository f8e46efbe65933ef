//! Sound cue bubble drawn over the map corner.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme::Theme;
use crate::state::SoundCue;

const BUBBLE_WIDTH: u16 = 9;
const BUBBLE_HEIGHT: u16 = 3;

/// Draws the cue in the top-right corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, cue: &SoundCue, theme: &Theme) {
    if area.width < BUBBLE_WIDTH + 2 || area.height < BUBBLE_HEIGHT + 2 {
        return;
    }
    let bubble = Rect {
        x: area.x + area.width - BUBBLE_WIDTH - 1,
        y: area.y + 1,
        width: BUBBLE_WIDTH,
        height: BUBBLE_HEIGHT,
    };

    let paragraph = Paragraph::new(cue.label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.lock).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );

    frame.render_widget(Clear, bubble);
    frame.render_widget(paragraph, bubble);
}
