use std::collections::BTreeMap;

/// Named single-letter slots that carry a key from a yank to a later put.
///
/// Values persist until overwritten by another yank into the same slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterTable {
    slots: BTreeMap<char, char>,
}

impl RegisterTable {
    /// The unnamed register, selected when no `"x` prefix was typed.
    pub const DEFAULT: char = '"';

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: char) -> Option<char> {
        self.slots.get(&register).copied()
    }

    pub fn set(&mut self, register: char, letter: char) {
        self.slots.insert(register, letter);
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Iterates `(register, letter)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.slots.iter().map(|(register, letter)| (*register, *letter))
    }
}
