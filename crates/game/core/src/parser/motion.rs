use crate::action::MoveAction;

/// Motion keys understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// `h`
    Left,
    /// `j`
    Down,
    /// `k`
    Up,
    /// `l`
    Right,
    /// `w`
    WordForward,
    /// `b`
    WordBackward,
    /// `0`
    LineStart,
    /// `$`
    LineEnd,
}

impl Motion {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'h' => Some(Self::Left),
            'j' => Some(Self::Down),
            'k' => Some(Self::Up),
            'l' => Some(Self::Right),
            'w' => Some(Self::WordForward),
            'b' => Some(Self::WordBackward),
            '0' => Some(Self::LineStart),
            '$' => Some(Self::LineEnd),
            _ => None,
        }
    }

    /// Translates the motion into a relative move.
    ///
    /// Line-boundary motions ignore the count and sweep toward the edge;
    /// movement stops at the first wall or obstacle.
    pub fn to_move(self, count: u32, word_jump: i32) -> MoveAction {
        match self {
            Self::Left => MoveAction::new(-1, 0, count),
            Self::Down => MoveAction::new(0, 1, count),
            Self::Up => MoveAction::new(0, -1, count),
            Self::Right => MoveAction::new(1, 0, count),
            Self::WordForward => MoveAction::new(word_jump, 0, count),
            Self::WordBackward => MoveAction::new(-word_jump, 0, count),
            Self::LineStart => MoveAction::line(-1),
            Self::LineEnd => MoveAction::line(1),
        }
    }
}
