//! Built-in curriculum: authored levels plus generated training sectors.

use game_core::LevelDescriptor;

use crate::loaders::{LevelLoader, LoadResult};

/// Authored levels, embedded at compile time.
pub const BUILTIN_LEVELS_RON: &str = include_str!("../data/levels.ron");

/// Number of the last built-in level.
pub const FINAL_LEVEL: u32 = 30;

const FIRST_SECTOR: u32 = 11;

/// Parses the embedded levels and appends the generated sectors.
pub fn builtin_levels() -> LoadResult<Vec<LevelDescriptor>> {
    let mut levels = LevelLoader::parse(BUILTIN_LEVELS_RON)?;
    let first = levels.last().map_or(1, |level| level.number + 1).max(FIRST_SECTOR);
    levels.extend((first..=FINAL_LEVEL).map(sector));
    Ok(levels)
}

/// Generated single-corridor level.
///
/// One more sentry appears every five sectors and every tenth sector adds a
/// boss in front of the exit.
pub fn sector(number: u32) -> LevelDescriptor {
    let sentries = 1 + number.saturating_sub(FIRST_SECTOR) / 5;

    let mut corridor = String::from("@...");
    for _ in 0..sentries {
        corridor.push_str("G.");
    }
    if number % 10 == 0 {
        corridor.push_str("B.");
    }
    corridor.push_str("..>");

    let wall = "#".repeat(corridor.chars().count() + 2);
    let map = [wall.clone(), format!("#{corridor}#"), wall];

    LevelDescriptor::new(
        number,
        format!("Sector {number}"),
        format!("Continue training, Runner. Threat level {number}."),
        map,
    )
    .with_commands(["all"])
    .with_par(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curriculum_is_numbered_contiguously() {
        let levels = builtin_levels().expect("embedded levels parse");
        assert_eq!(levels.len(), FINAL_LEVEL as usize);
        for (index, level) in levels.iter().enumerate() {
            assert_eq!(level.number, index as u32 + 1);
        }
    }

    #[test]
    fn every_level_has_equal_rows_and_one_player() {
        for level in builtin_levels().unwrap() {
            let width = level.map[0].chars().count();
            assert!(
                level.map.iter().all(|row| row.chars().count() == width),
                "level {} is ragged",
                level.number
            );
            let players: usize = level.map.iter().map(|row| row.matches('@').count()).sum();
            assert_eq!(players, 1, "level {}", level.number);
        }
    }

    #[test]
    fn sectors_scale_with_number() {
        let early = sector(11);
        assert_eq!(early.map[1], "#@...G...>#");
        assert_eq!(early.par_keystrokes, 11);

        let boss = sector(20);
        assert_eq!(boss.map[1].matches('G').count(), 2);
        assert!(boss.map[1].contains('B'));
        assert_eq!(boss.map[0].len(), boss.map[1].len());
    }
}
