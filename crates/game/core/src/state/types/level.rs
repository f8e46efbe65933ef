use std::collections::BTreeSet;

/// Static description of a single level.
///
/// Map templates use single-character markers:
///
/// | glyph | meaning |
/// |---|---|
/// | `.` | floor |
/// | `@` | player spawn |
/// | `G` | enemy |
/// | `B` | boss |
/// | `>` | exit |
/// | `R` | rubble |
/// | other lowercase | key carrying that letter |
/// | other uppercase | lock opened by the lowercase letter |
///
/// Any other glyph is a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelDescriptor {
    pub number: u32,
    pub name: String,
    pub instructions: String,
    pub map: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub unlocked_commands: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub par_keystrokes: u32,
}

impl LevelDescriptor {
    pub fn new(
        number: u32,
        name: impl Into<String>,
        instructions: impl Into<String>,
        map: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            instructions: instructions.into(),
            map: map.into_iter().map(Into::into).collect(),
            unlocked_commands: BTreeSet::new(),
            par_keystrokes: 0,
        }
    }

    pub fn with_par(mut self, par_keystrokes: u32) -> Self {
        self.par_keystrokes = par_keystrokes;
        self
    }

    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unlocked_commands = commands.into_iter().map(Into::into).collect();
        self
    }
}
