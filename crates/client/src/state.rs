//! Presentation state that lives outside the rules engine.

use std::time::{Duration, Instant};

use game_content::Milestone;
use game_core::Key;
use runtime::LevelSummary;

/// How long a sound cue stays on screen.
pub const SOUND_CUE_DURATION: Duration = Duration::from_millis(300);

/// How long the finale stays up before the client exits on its own.
pub const FINALE_DURATION: Duration = Duration::from_secs(5);

/// Full-screen narrative shown between levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub milestone: Milestone,
    /// Set for the finale: dismissing it, or waiting it out, ends the run.
    pub closes_at: Option<Instant>,
}

/// Transient onomatopoeia for a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundCue {
    pub label: &'static str,
    pub shown_at: Instant,
}

impl SoundCue {
    pub fn for_key(key: Key, now: Instant) -> Self {
        let label = match key {
            Key::Char(ch) if ch.is_alphanumeric() => "CLACK",
            _ => "TICK",
        };
        Self {
            label,
            shown_at: now,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= SOUND_CUE_DURATION
    }
}

/// What dismissing or expiring the overlay means for the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayExit {
    Resume,
    Quit,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub overlay: Option<Overlay>,
    pub sound: Option<SoundCue>,
    /// Parser echo shown in the command bar.
    pub echo: String,
    pub last_summary: Option<LevelSummary>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the milestone for `level`, if it has one.
    pub fn enter_level(&mut self, level: u32) {
        if let Some(milestone) = Milestone::before_level(level) {
            self.overlay = Some(Overlay {
                milestone,
                closes_at: None,
            });
        }
    }

    pub fn show_finale(&mut self, now: Instant) {
        self.overlay = Some(Overlay {
            milestone: Milestone::finale(),
            closes_at: Some(now + FINALE_DURATION),
        });
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Any key dismisses the overlay.
    pub fn dismiss_overlay(&mut self) -> OverlayExit {
        match self.overlay.take() {
            Some(Overlay {
                closes_at: Some(_), ..
            }) => OverlayExit::Quit,
            _ => OverlayExit::Resume,
        }
    }

    pub fn cue_sound(&mut self, key: Key, now: Instant) {
        self.sound = Some(SoundCue::for_key(key, now));
    }

    /// Clears timed elements. Returns `true` if the screen needs a redraw,
    /// and whether the finale ran out.
    pub fn tick(&mut self, now: Instant) -> (bool, OverlayExit) {
        let mut redraw = false;
        if self.sound.is_some_and(|cue| cue.expired(now)) {
            self.sound = None;
            redraw = true;
        }

        let finale_over = self
            .overlay
            .as_ref()
            .and_then(|overlay| overlay.closes_at)
            .is_some_and(|deadline| now >= deadline);
        if finale_over {
            self.overlay = None;
            return (true, OverlayExit::Quit);
        }

        (redraw, OverlayExit::Resume)
    }
}
