//! Level template scanning.

use crate::config::GameConfig;
use crate::engine::LevelError;
use crate::state::{Entity, FLOOR, LevelDescriptor, Position};

/// Initial world contents decoded from a map template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LevelLayout {
    pub tiles: Vec<Vec<char>>,
    pub width: usize,
    pub height: usize,
    pub player: Position,
    pub enemies: Vec<Entity>,
    pub interactables: Vec<Entity>,
}

/// Validates the template and scans it row-major.
///
/// Every spawn cell is replaced by floor in the returned grid.
pub(crate) fn scan(level: &LevelDescriptor, config: &GameConfig) -> Result<LevelLayout, LevelError> {
    let mut tiles: Vec<Vec<char>> = level.map.iter().map(|row| row.chars().collect()).collect();

    let height = tiles.len();
    let width = tiles.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err(LevelError::EmptyMap);
    }
    if width > GameConfig::MAX_MAP_WIDTH || height > GameConfig::MAX_MAP_HEIGHT {
        return Err(LevelError::TooLarge { width, height });
    }
    if let Some((row, cells)) = tiles.iter().enumerate().find(|(_, cells)| cells.len() != width) {
        return Err(LevelError::RaggedRow {
            row,
            expected: width,
            found: cells.len(),
        });
    }

    let mut player: Option<Position> = None;
    let mut enemies = Vec::new();
    let mut interactables = Vec::new();

    for (y, row) in tiles.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let position = Position::new(x as i32, y as i32);
            match *cell {
                '@' => {
                    if let Some(first) = player {
                        return Err(LevelError::DuplicatePlayer {
                            first,
                            second: position,
                        });
                    }
                    player = Some(position);
                }
                'G' => enemies.push(Entity::enemy(position, config.enemy_hp)),
                'B' => enemies.push(Entity::boss(position, config.boss_hp)),
                '>' => interactables.push(Entity::exit(position)),
                'R' => interactables.push(Entity::rubble(position)),
                letter if letter.is_lowercase() => {
                    interactables.push(Entity::key(position, letter))
                }
                glyph if glyph.is_uppercase() => {
                    interactables.push(Entity::lock(position, glyph))
                }
                _ => continue,
            }
            *cell = FLOOR;
        }
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;

    Ok(LevelLayout {
        tiles,
        width,
        height,
        player,
        enemies,
        interactables,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityKind;

    fn level(rows: &[&str]) -> LevelDescriptor {
        LevelDescriptor::new(1, "test", "", rows.iter().copied())
    }

    #[test]
    fn markers_become_entities_over_floor() {
        let layout = scan(&level(&["#@aA#", "#GBR>"]), &GameConfig::default()).unwrap();

        assert_eq!(layout.player, Position::new(1, 0));
        assert_eq!(layout.width, 5);
        assert_eq!(layout.height, 2);
        assert_eq!(layout.tiles[0], vec!['#', '.', '.', '.', '#']);
        assert_eq!(layout.tiles[1], vec!['#', '.', '.', '.', '.']);

        let kinds: Vec<_> = layout.enemies.iter().map(|e| (e.kind, e.hp)).collect();
        assert_eq!(kinds, vec![(EntityKind::Enemy, 5), (EntityKind::Boss, 10)]);

        let kinds: Vec<_> = layout.interactables.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Key { letter: 'a' },
                EntityKind::Lock { letter: 'a' },
                EntityKind::Rubble,
                EntityKind::Exit,
            ]
        );
    }

    #[test]
    fn accented_letters_are_keys_and_locks() {
        let layout = scan(&level(&["@éÉ"]), &GameConfig::default()).unwrap();
        assert_eq!(layout.tiles[0], vec!['.', '.', '.']);

        let kinds: Vec<_> = layout.interactables.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Key { letter: 'é' },
                EntityKind::Lock { letter: 'é' },
            ]
        );
    }

    #[test]
    fn non_letter_glyphs_stay_walls() {
        let layout = scan(&level(&["@ #~"]), &GameConfig::default()).unwrap();
        assert_eq!(layout.tiles[0], vec!['.', ' ', '#', '~']);
        assert!(layout.interactables.is_empty());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = scan(&level(&["#@..#", "#..#"]), &GameConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LevelError::RaggedRow {
                row: 1,
                expected: 5,
                found: 4
            }
        );
    }

    #[test]
    fn rejects_missing_and_duplicate_player() {
        let config = GameConfig::default();
        assert_eq!(scan(&level(&["#..>#"]), &config), Err(LevelError::MissingPlayer));
        assert!(matches!(
            scan(&level(&["@.@"]), &config),
            Err(LevelError::DuplicatePlayer { .. })
        ));
        assert_eq!(scan(&level(&[]), &config), Err(LevelError::EmptyMap));
        assert_eq!(scan(&level(&[""]), &config), Err(LevelError::EmptyMap));
    }
}
