//! Messages widget displaying the engine's log, newest at the bottom.

use game_core::MessageLog;
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = messages
        .recent(visible)
        .map(|text| ListItem::new(text.to_string()).style(theme.message(text)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(Span::styled(" Log ", theme.block_title())),
        )
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}
