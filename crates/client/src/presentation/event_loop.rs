//! Frame loop: keyboard input, timed UI elements and rendering.
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use game_core::Key;
use runtime::{ScoreRepository, Session};
use tokio::time::{self, Duration};

use crate::{
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        theme::Theme,
        ui::{self, RenderContext},
    },
    state::{AppState, OverlayExit},
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Whether the loop keeps running after handling something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct EventLoop<R: ScoreRepository> {
    session: Session<R>,
    input: InputHandler,
    theme: Theme,
    sound_enabled: bool,
    app_state: AppState,
}

impl<R: ScoreRepository> EventLoop<R> {
    pub fn new(session: Session<R>, input: InputHandler, theme: Theme, sound_enabled: bool) -> Self {
        let mut app_state = AppState::new();
        app_state.enter_level(session.current_level().number);

        Self {
            session,
            input,
            theme,
            sound_enabled,
            app_state,
        }
    }

    /// Runs until the player quits or the finale closes. Returns the session
    /// so the caller can inspect final scores.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<Session<R>> {
        self.render(terminal)?;

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Interrupt received");
                    break;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_tick(terminal)? == Flow::Exit {
                        break;
                    }
                }
            }
        }

        Ok(self.session)
    }

    fn handle_tick(&mut self, terminal: &mut Tui) -> Result<Flow> {
        let (redraw, exit) = self.app_state.tick(Instant::now());
        if exit == OverlayExit::Quit {
            return Ok(Flow::Exit);
        }
        if redraw {
            self.render(terminal)?;
        }

        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(Flow::Continue);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let flow = self.handle_key_press(key)?;
                if flow == Flow::Continue {
                    self.render(terminal)?;
                }
                Ok(flow)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> Result<Flow> {
        let key = match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Ok(Flow::Exit);
            }
            KeyAction::None => return Ok(Flow::Continue),
            KeyAction::Forward(key) => key,
        };

        if self.app_state.has_overlay() {
            return Ok(match self.app_state.dismiss_overlay() {
                OverlayExit::Quit => Flow::Exit,
                OverlayExit::Resume => Flow::Continue,
            });
        }

        self.forward(key)?;
        Ok(Flow::Continue)
    }

    fn forward(&mut self, key: Key) -> Result<()> {
        let now = Instant::now();
        if self.sound_enabled {
            self.app_state.cue_sound(key, now);
        }

        let outcome = self.session.handle_key(key)?;
        self.app_state.echo = outcome.echo;

        if let Some(summary) = outcome.completed {
            self.app_state.last_summary = Some(summary);
            if outcome.finished {
                self.app_state.show_finale(now);
            } else {
                self.app_state
                    .enter_level(self.session.current_level().number);
            }
        }

        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            engine: self.session.engine(),
            app_state: &self.app_state,
            theme: &self.theme,
        };
        ui::render(terminal, &ctx)
    }
}
