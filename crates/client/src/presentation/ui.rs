//! Screen composition.
//!
//! Layout: map (70%) beside a stats/log column, command bar at the bottom,
//! narrative overlay and sound bubble drawn last.
use anyhow::Result;
use game_core::GameEngine;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::Theme, widgets},
    state::AppState,
};

const COMMAND_BAR_HEIGHT: u16 = 3;
const STATS_HEIGHT: u16 = 8;

/// Everything a frame needs.
pub struct RenderContext<'a> {
    pub engine: &'a GameEngine,
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(COMMAND_BAR_HEIGHT)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(STATS_HEIGHT), Constraint::Min(0)])
            .split(columns[1]);

        widgets::map::render(frame, columns[0], ctx.engine, ctx.theme);
        widgets::stats::render(
            frame,
            side[0],
            ctx.engine,
            ctx.app_state.last_summary.as_ref(),
            ctx.theme,
        );
        widgets::messages::render(frame, side[1], ctx.engine.messages(), ctx.theme);

        let instructions = ctx
            .engine
            .level()
            .map(|level| level.instructions.as_str())
            .unwrap_or_default();
        widgets::command_bar::render(
            frame,
            rows[1],
            &ctx.app_state.echo,
            ctx.engine.mode(),
            instructions,
            ctx.theme,
        );

        if let Some(cue) = &ctx.app_state.sound {
            widgets::sound::render(frame, columns[0], cue, ctx.theme);
        }

        if let Some(overlay) = &ctx.app_state.overlay {
            widgets::narrative::render(
                frame,
                centered_rect(60, 50, area),
                overlay.milestone,
                ctx.theme,
            );
        }
    })?;

    Ok(())
}

/// Helper to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
