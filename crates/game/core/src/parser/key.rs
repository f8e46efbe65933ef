//! Platform-independent key representation.

/// Raw key delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// Printable character, including digits and punctuation.
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Expands a string into one `Key::Char` per character.
    pub fn sequence(text: &str) -> impl Iterator<Item = Key> + '_ {
        text.chars().map(Key::Char)
    }
}
