//! Terminal presentation: setup, styling, layout and the frame loop.
pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
