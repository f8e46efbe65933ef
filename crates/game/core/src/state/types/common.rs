use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: diagonal neighbours are one step away.
    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Returns true if `other` lies in the 8-neighbourhood of `self` (or on it).
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) <= 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_includes_diagonals() {
        let origin = Position::new(3, 3);
        assert!(origin.is_adjacent(Position::new(4, 4)));
        assert!(origin.is_adjacent(Position::new(2, 3)));
        assert!(origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(Position::new(5, 3)));
    }
}
