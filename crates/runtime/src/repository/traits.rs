//! Repository contract for best-score persistence.

use std::collections::BTreeMap;

use crate::repository::Result;

/// Best keystroke count per level number.
///
/// Lower is better. A record only replaces the stored value when it
/// improves on it.
pub trait ScoreRepository: Send + Sync {
    /// Best recorded keystroke count for a level, if any.
    fn best(&self, level: u32) -> Result<Option<u32>>;

    /// Record a finished run. Returns `true` if it became the new best.
    fn record(&self, level: u32, strokes: u32) -> Result<bool>;

    /// Every stored best, ordered by level number.
    fn all(&self) -> Result<BTreeMap<u32, u32>>;
}

/// Shared improvement rule for every implementation.
pub(crate) fn improves(current: Option<u32>, strokes: u32) -> bool {
    current.is_none_or(|best| strokes < best)
}
