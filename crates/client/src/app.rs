//! Composition root: content, settings, scores, session and terminal.
use anyhow::{Context, Result};
use game_content::{ContentFactory, LevelLoader, builtin_levels};
use game_core::{GameConfig, LevelDescriptor};
use runtime::{FileScoreRepository, Session};

use crate::{
    config::{CliConfig, Settings},
    input::InputHandler,
    presentation::{event_loop::EventLoop, terminal, theme::Theme},
};

pub async fn run(config: CliConfig) -> Result<()> {
    let (game_config, levels) = load_content(&config)?;

    let settings_path = config.settings_path();
    let settings = Settings::load(settings_path.as_deref())?;
    tracing::info!(
        "Settings: theme={}, sound={}, remapped keys={}",
        settings.theme,
        settings.sound_enabled,
        settings.key_map.len()
    );

    let scores = open_scores(&config);
    let session = Session::starting_at(game_config, levels, scores, config.start_index())
        .context("Failed to start session")?;
    tracing::info!(
        "Session ready: {} levels, starting at {}",
        session.level_count(),
        session.current_level().number
    );

    let event_loop = EventLoop::new(
        session,
        InputHandler::new(settings.key_remap()),
        Theme::from_name(&settings.theme),
        settings.sound_enabled,
    );

    let mut tui = terminal::init()?;
    let _guard = terminal::TerminalGuard;
    let session = event_loop.run(&mut tui).await?;

    tracing::info!(
        "Session ended at level {} (finished: {})",
        session.current_level().number,
        session.is_finished()
    );
    Ok(())
}

fn load_content(config: &CliConfig) -> Result<(GameConfig, Vec<LevelDescriptor>)> {
    let (game_config, mut levels) = match &config.content_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            tracing::info!("Loading content from {}", factory.data_dir().display());
            (factory.load_config()?, factory.load_levels()?)
        }
        None => (GameConfig::default(), builtin_levels()?),
    };

    if let Some(path) = &config.levels_path {
        tracing::info!("Loading levels from {}", path.display());
        levels = LevelLoader::load(path)?;
    }

    Ok((game_config, levels))
}

/// A broken score file must not stop play; it is replaced on the next record.
fn open_scores(config: &CliConfig) -> FileScoreRepository {
    let path = config.scores_path();
    match FileScoreRepository::open(&path) {
        Ok(repo) => repo,
        Err(err) => {
            tracing::warn!("Ignoring unreadable scores {}: {}", path.display(), err);
            FileScoreRepository::fresh(&path)
        }
    }
}
