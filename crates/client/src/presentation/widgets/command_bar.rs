//! Command bar echoing pending parser input and the level instructions.

use game_core::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    echo: &str,
    mode: Mode,
    instructions: &str,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled(format!("-- {mode} -- "), theme.mode(mode)),
        Span::styled(echo.to_string(), Style::default().fg(theme.foreground)),
    ];
    if echo.is_empty() {
        spans.push(Span::styled(
            instructions.to_string(),
            Style::default().fg(theme.muted),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(paragraph, area);
}
