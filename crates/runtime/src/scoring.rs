//! Performance rating relative to a level's par.

use strum::{AsRefStr, Display};

/// Letter grade for a cleared level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Rating {
    S,
    A,
    B,
    C,
}

impl Rating {
    /// Grades a run: at most par is S, at most 1.5x par is A, at most 2.5x
    /// par is B, anything slower is C.
    pub fn grade(strokes: u32, par: u32) -> Self {
        let strokes = u64::from(strokes);
        let par = u64::from(par);
        if strokes <= par {
            Self::S
        } else if strokes * 2 <= par * 3 {
            Self::A
        } else if strokes * 2 <= par * 5 {
            Self::B
        } else {
            Self::C
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::S => "VIM MASTER",
            Self::A => "EFFICIENT",
            Self::B => "COMPETENT",
            Self::C => "NOVICE",
        }
    }

    /// Grade and title, e.g. `S - VIM MASTER`.
    pub fn label(self) -> String {
        format!("{} - {}", self.as_ref(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        assert_eq!(Rating::grade(4, 4), Rating::S);
        assert_eq!(Rating::grade(6, 4), Rating::A);
        assert_eq!(Rating::grade(7, 4), Rating::B);
        assert_eq!(Rating::grade(10, 4), Rating::B);
        assert_eq!(Rating::grade(11, 4), Rating::C);
    }

    #[test]
    fn zero_par_only_rewards_zero() {
        assert_eq!(Rating::grade(0, 0), Rating::S);
        assert_eq!(Rating::grade(1, 0), Rating::C);
    }

    #[test]
    fn label_joins_grade_and_title() {
        assert_eq!(Rating::A.label(), "A - EFFICIENT");
        assert_eq!(Rating::C.to_string(), "C");
    }
}
