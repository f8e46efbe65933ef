//! Session controller: one engine, one parser, and level progression.
//!
//! A [`Session`] feeds keys through the parser into the engine, notices when
//! a level is cleared, records the score and loads the next level.

use game_core::{
    Action, CommandSink, GameConfig, GameEngine, GameError, Key, KeyParser, LevelDescriptor, Mode,
};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::repository::ScoreRepository;
use crate::scoring::Rating;

/// Result of a cleared level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: u32,
    pub name: String,
    pub keystrokes: u32,
    pub par: u32,
    pub rating: Rating,
    /// Best score after this run was recorded, if the repository answered.
    pub best: Option<u32>,
    pub improved: bool,
}

/// What a single key press produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Parser echo for the command bar.
    pub echo: String,
    pub completed: Option<LevelSummary>,
    /// The last level has been cleared.
    pub finished: bool,
}

/// Forwards parser callbacks to the engine and traces them.
struct TracingSink<'a> {
    engine: &'a mut GameEngine,
}

impl CommandSink for TracingSink<'_> {
    fn on_mode_change(&mut self, mode: Mode) {
        debug!(mode = %mode, "mode change");
        self.engine.set_mode(mode);
    }

    fn on_action(&mut self, action: Action) {
        let outcome = self.engine.apply(&action);
        debug!(action = action.as_snake_case(), ?outcome, "action resolved");
    }
}

pub struct Session<R: ScoreRepository> {
    levels: Vec<LevelDescriptor>,
    index: usize,
    engine: GameEngine,
    parser: KeyParser,
    scores: R,
    finished: bool,
}

impl<R: ScoreRepository> Session<R> {
    /// Starts at the first level.
    pub fn new(config: GameConfig, levels: Vec<LevelDescriptor>, scores: R) -> Result<Self> {
        Self::starting_at(config, levels, scores, 0)
    }

    /// Starts at `index` in `levels`.
    ///
    /// Every level is checked up front so progression never hits a broken map.
    pub fn starting_at(
        config: GameConfig,
        levels: Vec<LevelDescriptor>,
        scores: R,
        index: usize,
    ) -> Result<Self> {
        if levels.is_empty() {
            return Err(RuntimeError::NoLevels);
        }
        if index >= levels.len() {
            return Err(RuntimeError::StartOutOfRange {
                index,
                count: levels.len(),
            });
        }

        let mut probe = GameEngine::new(config.clone());
        for (i, level) in levels.iter().enumerate() {
            if let Err(source) = probe.load_level(level) {
                warn!(
                    level = level.number,
                    code = source.error_code(),
                    severity = source.severity().as_str(),
                    "rejecting curriculum"
                );
                return Err(RuntimeError::InvalidLevel { index: i, source });
            }
        }

        let parser = KeyParser::new(&config);
        let mut session = Self {
            levels,
            index,
            engine: GameEngine::new(config),
            parser,
            scores,
            finished: false,
        };
        session.load_current()?;
        Ok(session)
    }

    /// Routes one key through the parser and handles level completion.
    pub fn handle_key(&mut self, key: Key) -> Result<KeyOutcome> {
        if self.finished {
            return Ok(KeyOutcome {
                finished: true,
                ..KeyOutcome::default()
            });
        }

        let mode = self.engine.mode();
        let mut sink = TracingSink {
            engine: &mut self.engine,
        };
        let echo = self.parser.handle_key(key, mode, &mut sink);

        if !self.engine.is_level_complete() {
            return Ok(KeyOutcome {
                echo,
                ..KeyOutcome::default()
            });
        }

        let summary = self.complete_current();
        self.parser.reset();
        if self.index + 1 < self.levels.len() {
            self.index += 1;
            self.load_current()?;
        } else {
            self.finished = true;
            info!("curriculum complete");
        }

        Ok(KeyOutcome {
            echo: self.parser.echo(),
            completed: Some(summary),
            finished: self.finished,
        })
    }

    fn complete_current(&mut self) -> LevelSummary {
        let level = &self.levels[self.index];
        let keystrokes = self.engine.keystrokes();
        let par = level.par_keystrokes;
        let rating = Rating::grade(keystrokes, par);

        let improved = self
            .scores
            .record(level.number, keystrokes)
            .unwrap_or_else(|err| {
                warn!(level = level.number, %err, "failed to record best score");
                false
            });
        let best = self.scores.best(level.number).unwrap_or_else(|err| {
            warn!(level = level.number, %err, "failed to read best score");
            None
        });

        info!(
            level = level.number,
            keystrokes,
            par,
            rating = rating.as_ref(),
            improved,
            "level complete"
        );

        LevelSummary {
            level: level.number,
            name: level.name.clone(),
            keystrokes,
            par,
            rating,
            best,
            improved,
        }
    }

    fn load_current(&mut self) -> Result<()> {
        let level = &self.levels[self.index];
        self.engine
            .load_level(level)
            .map_err(|source| RuntimeError::InvalidLevel {
                index: self.index,
                source,
            })?;
        info!(level = level.number, name = %level.name, "level loaded");
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn parser(&self) -> &KeyParser {
        &self.parser
    }

    pub fn scores(&self) -> &R {
        &self.scores
    }

    /// Descriptor of the level being played (or the last one once finished).
    pub fn current_level(&self) -> &LevelDescriptor {
        &self.levels[self.index]
    }

    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
