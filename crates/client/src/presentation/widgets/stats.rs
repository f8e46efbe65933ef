//! Stats widget: level, health, keystrokes against par, mode and registers.

use game_core::GameEngine;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use runtime::LevelSummary;

use crate::presentation::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    engine: &GameEngine,
    last_summary: Option<&LevelSummary>,
    theme: &Theme,
) {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.foreground);
    let player = engine.player();

    let level = engine
        .level()
        .map(|level| level.number.to_string())
        .unwrap_or_else(|| "-".to_string());

    let registers = if engine.registers().is_empty() {
        "empty".to_string()
    } else {
        engine
            .registers()
            .iter()
            .map(|(register, letter)| format!("\"{register}={letter}"))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut text = vec![
        Line::from(vec![
            Span::styled("Level: ", label),
            Span::styled(level, value),
        ]),
        Line::from(vec![
            Span::styled("HP: ", label),
            Span::styled(format!("{}/{}", player.hp, player.max_hp), value),
        ]),
        Line::from(vec![
            Span::styled("Keys: ", label),
            Span::styled(
                format!("{} / par {}", engine.keystrokes(), engine.par_keystrokes()),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Mode: ", label),
            Span::styled(engine.mode().to_string(), theme.mode(engine.mode())),
        ]),
        Line::from(vec![
            Span::styled("Registers: ", label),
            Span::styled(registers, Style::default().fg(theme.key)),
        ]),
    ];

    if let Some(summary) = last_summary {
        text.push(Line::from(vec![
            Span::styled("Last: ", label),
            Span::styled(
                format!(
                    "L{} {} ({}/{})",
                    summary.level,
                    summary.rating.label(),
                    summary.keystrokes,
                    summary.par
                ),
                Style::default().fg(theme.success),
            ),
        ]));
    }

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" Stats ", theme.block_title())),
    );

    frame.render_widget(paragraph, area);
}
