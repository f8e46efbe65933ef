//! Narrative milestones shown as full-screen overlays.

/// Story beat displayed before certain levels and after the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Milestone {
    Boot,
    Regex,
    ZeroDay,
}

impl Milestone {
    /// Milestone shown right before the given level starts.
    pub fn before_level(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Boot),
            10 => Some(Self::Regex),
            30 => Some(Self::ZeroDay),
            _ => None,
        }
    }

    /// Milestone shown once the final level is cleared.
    pub const fn finale() -> Self {
        Self::ZeroDay
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Boot => "SYSTEM REBOOT...",
            Self::Regex => "ACCESS GRANTED.",
            Self::ZeroDay => "ZERO-DAY ACHIEVED.",
        }
    }

    /// Body lines, without the title.
    pub const fn lines(self) -> &'static [&'static str] {
        match self {
            Self::Boot => &[
                "You are a VIM-RUNNER.",
                "Infiltrate the GUI-COLLECTION tower.",
                "Objective: delete the bloat.",
                "Weapon: the keystroke.",
            ],
            Self::Regex => &[
                "The basic motions are yours.",
                "But the data ahead is corrupted...",
                "Prepare for REGEX combat.",
            ],
            Self::ZeroDay => &[
                "The bloated binary is purged.",
                "You have become a Vim Master.",
                "The tower answers to your keystrokes now.",
            ],
        }
    }

    /// Title followed by a blank line and the body.
    pub fn text(self) -> String {
        let mut text = String::from(self.title());
        text.push('\n');
        for line in self.lines() {
            text.push('\n');
            text.push_str(line);
        }
        text
    }
}
