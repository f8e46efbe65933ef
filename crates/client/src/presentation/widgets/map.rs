//! Map widget rendering the level grid with entities.

use game_core::GameEngine;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the map panel. The player glyph is highlighted while the aura is up.
pub fn render(frame: &mut Frame, area: Rect, engine: &GameEngine, theme: &Theme) {
    let player = engine.player().position;
    let aura = engine.aura_active();

    let rows: Vec<Line> = engine
        .render_grid()
        .into_iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .into_iter()
                .enumerate()
                .map(|(x, glyph)| {
                    let at_player = player.x == x as i32 && player.y == y as i32;
                    let style = if at_player && aura {
                        theme.aura()
                    } else {
                        theme.glyph(glyph)
                    };
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let title = engine
        .level()
        .map(|level| format!(" {} ", level.name))
        .unwrap_or_default();

    let paragraph = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(title, theme.block_title())),
    );

    frame.render_widget(paragraph, area);
}
