//! Widgets composing the game screen.
pub mod command_bar;
pub mod map;
pub mod messages;
pub mod narrative;
pub mod sound;
pub mod stats;
