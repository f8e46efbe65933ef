//! Color palettes for the terminal UI.

use game_core::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Palette selected by the `theme` setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub wall: Color,
    pub floor: Color,
    pub player: Color,
    pub aura: Color,
    pub enemy: Color,
    pub boss: Color,
    pub exit: Color,
    pub rubble: Color,
    pub key: Color,
    pub lock: Color,
    pub success: Color,
    pub failure: Color,
    pub attack: Color,
}

impl Theme {
    pub const TOKYO_NIGHT: Theme = Theme {
        foreground: Color::Rgb(0xc0, 0xca, 0xf5),
        muted: Color::Rgb(0x56, 0x5f, 0x89),
        accent: Color::Rgb(0x7a, 0xa2, 0xf7),
        border: Color::Rgb(0x41, 0x48, 0x68),
        wall: Color::Rgb(0x41, 0x48, 0x68),
        floor: Color::Rgb(0x24, 0x28, 0x3b),
        player: Color::Rgb(0xe0, 0xaf, 0x68),
        aura: Color::Rgb(0x7d, 0xcf, 0xff),
        enemy: Color::Rgb(0xf7, 0x76, 0x8e),
        boss: Color::Rgb(0xdb, 0x4b, 0x4b),
        exit: Color::Rgb(0x9e, 0xce, 0x6a),
        rubble: Color::Rgb(0x73, 0x7a, 0xa2),
        key: Color::Rgb(0xbb, 0x9a, 0xf7),
        lock: Color::Rgb(0xff, 0x9e, 0x64),
        success: Color::Rgb(0x9e, 0xce, 0x6a),
        failure: Color::Rgb(0xf7, 0x76, 0x8e),
        attack: Color::Rgb(0xbb, 0x9a, 0xf7),
    };

    pub const MONO: Theme = Theme {
        foreground: Color::White,
        muted: Color::DarkGray,
        accent: Color::White,
        border: Color::Gray,
        wall: Color::Gray,
        floor: Color::DarkGray,
        player: Color::White,
        aura: Color::White,
        enemy: Color::White,
        boss: Color::White,
        exit: Color::White,
        rubble: Color::Gray,
        key: Color::White,
        lock: Color::White,
        success: Color::White,
        failure: Color::White,
        attack: Color::White,
    };

    /// Unknown names fall back to Tokyo Night.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "mono" | "monochrome" => Self::MONO,
            _ => Self::TOKYO_NIGHT,
        }
    }

    /// Style for one rendered map glyph.
    pub fn glyph(&self, glyph: char) -> Style {
        let color = match glyph {
            '@' => self.player,
            'G' => self.enemy,
            'B' => return Style::default().fg(self.boss).add_modifier(Modifier::BOLD),
            '>' => self.exit,
            'R' => self.rubble,
            '.' => self.floor,
            ch if ch.is_ascii_lowercase() => self.key,
            ch if ch.is_ascii_uppercase() => self.lock,
            _ => self.wall,
        };
        Style::default().fg(color)
    }

    /// Player glyph while the aura is active.
    pub fn aura(&self) -> Style {
        Style::default()
            .fg(self.aura)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn mode(&self, mode: Mode) -> Style {
        let color = match mode {
            Mode::Normal => self.accent,
            Mode::Insert => self.success,
            Mode::Visual | Mode::VisualLine => self.key,
            Mode::Command => self.lock,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Colors log lines by their leading tag.
    pub fn message(&self, text: &str) -> Style {
        const SUCCESS: [&str; 4] = ["Success", "Access Granted", "THREAT NEUTRALIZED", "ERASED"];
        const FAILURE: [&str; 4] = ["Error", "Failure", "Invalid syntax", "Path blocked"];
        const ATTACK: [&str; 2] = ["SYSTEM PURGE", "LINK DAMAGE"];

        let color = if SUCCESS.iter().any(|tag| text.starts_with(tag)) {
            self.success
        } else if FAILURE.iter().any(|tag| text.starts_with(tag)) {
            self.failure
        } else if ATTACK.iter().any(|tag| text.starts_with(tag)) {
            self.attack
        } else {
            self.foreground
        };
        Style::default().fg(color)
    }

    pub fn block_title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }
}
