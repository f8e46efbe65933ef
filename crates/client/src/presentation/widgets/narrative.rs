//! Full-screen narrative overlay.

use game_content::Milestone;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, milestone: Milestone, theme: &Theme) {
    let mut text = vec![
        Line::from(Span::styled(
            milestone.title(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    text.extend(
        milestone
            .lines()
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(theme.foreground)))),
    );
    text.push(Line::default());
    text.push(Line::from(Span::styled(
        "[ press any key ]",
        Style::default().fg(theme.muted),
    )));

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
