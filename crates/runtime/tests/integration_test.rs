use game_content::builtin_levels;
use game_core::{GameConfig, Key, Mode};
use runtime::{FileScoreRepository, InMemoryScoreRepository, Rating, ScoreRepository, Session};

fn press<R: ScoreRepository>(session: &mut Session<R>, keys: &str) -> runtime::KeyOutcome {
    let mut last = runtime::KeyOutcome::default();
    for key in Key::sequence(keys) {
        last = session.handle_key(key).expect("key handled");
    }
    last
}

fn command<R: ScoreRepository>(session: &mut Session<R>, text: &str) -> runtime::KeyOutcome {
    press(session, ":");
    press(session, text);
    session.handle_key(Key::Enter).expect("command handled")
}

/// Plays the opening of the built-in curriculum with optimal inputs.
#[test]
fn opening_levels_play_through() {
    let levels = builtin_levels().unwrap();
    let mut session =
        Session::new(GameConfig::default(), levels, InMemoryScoreRepository::new()).unwrap();

    // Level 1: corridor, drop, corridor back.
    press(&mut session, "$");
    press(&mut session, "2j");
    press(&mut session, "0");
    assert_eq!(session.level_index(), 1);
    assert_eq!(session.scores().best(1).unwrap(), Some(3));

    // Level 2: word jumps.
    let outcome = press(&mut session, "4w");
    let summary = outcome.completed.expect("level 2 cleared");
    assert_eq!(summary.rating, Rating::S);

    // Level 3: line ends.
    press(&mut session, "$");
    press(&mut session, "2j");
    let outcome = press(&mut session, "0");
    assert_eq!(outcome.completed.map(|summary| summary.level), Some(3));

    // Level 4: counts.
    press(&mut session, "3j");
    let outcome = press(&mut session, "$");
    assert_eq!(outcome.completed.map(|summary| summary.rating), Some(Rating::S));
    assert_eq!(session.current_level().number, 5);
}

#[test]
fn key_and_lock_level() {
    let levels = builtin_levels().unwrap();
    let mut session = Session::starting_at(
        GameConfig::default(),
        levels,
        InMemoryScoreRepository::new(),
        5,
    )
    .unwrap();
    assert_eq!(session.current_level().number, 6);

    press(&mut session, "\"ay");
    assert_eq!(session.engine().registers().get('a'), Some('a'));

    press(&mut session, "5l");
    press(&mut session, "\"ap");
    let outcome = press(&mut session, "$");

    let summary = outcome.completed.expect("level 6 cleared");
    assert_eq!(summary.keystrokes, 4);
    assert_eq!(summary.rating, Rating::S);
    // Registers carry over into the next level.
    assert_eq!(session.engine().registers().get('a'), Some('a'));
}

#[test]
fn boss_level_needs_two_purges() {
    let levels = builtin_levels().unwrap();
    let mut session = Session::starting_at(
        GameConfig::default(),
        levels,
        InMemoryScoreRepository::new(),
        9,
    )
    .unwrap();

    command(&mut session, "s/CORRUPT/DATA/g");
    assert_eq!(session.engine().mode(), Mode::Normal);
    assert_eq!(session.engine().enemies().len(), 1);

    command(&mut session, "s/CORRUPT/DATA/g");
    assert!(session.engine().enemies().is_empty());

    let outcome = press(&mut session, "$");
    assert_eq!(outcome.completed.map(|summary| summary.level), Some(10));
    assert_eq!(session.current_level().name, "Sector 11");
}

#[test]
fn sentry_falls_to_melee() {
    let levels = builtin_levels().unwrap();
    let mut session = Session::starting_at(
        GameConfig::default(),
        levels,
        InMemoryScoreRepository::new(),
        8,
    )
    .unwrap();

    // Aura from the counted move powers up the first strike.
    press(&mut session, "4l");
    assert!(session.engine().aura_active());
    press(&mut session, "dd");
    assert!(session.engine().enemies().is_empty());

    let outcome = press(&mut session, "$");
    assert_eq!(outcome.completed.map(|summary| summary.keystrokes), Some(3));
}

#[test]
fn scores_persist_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let levels = builtin_levels().unwrap();

    {
        let repo = FileScoreRepository::open(&path).unwrap();
        let mut session = Session::starting_at(GameConfig::default(), levels.clone(), repo, 1).unwrap();
        press(&mut session, "w");
        press(&mut session, "3w");
    }

    let repo = FileScoreRepository::open(&path).unwrap();
    assert_eq!(repo.best(2).unwrap(), Some(2));

    let mut session = Session::starting_at(GameConfig::default(), levels, repo, 1).unwrap();
    let summary = press(&mut session, "4w").completed.unwrap();
    assert!(summary.improved);
    assert_eq!(summary.best, Some(1));
}
