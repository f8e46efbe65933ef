//! Key-sequence parser.
//!
//! [`KeyParser`] is a modal chord-resolution state machine: it accumulates
//! counts, a register prefix and a pending operator until a key completes a
//! command, then reports the result to a [`CommandSink`]. Partial sequences
//! only produce a textual echo for the command bar.
//!
//! Resolution priority, highest first:
//! 1. Escape clears everything and forces NORMAL mode.
//! 2. In COMMAND mode keys edit the command line; Enter submits it.
//! 3. `"` arms a register prefix; the next key names the register.
//! 4. Digits accumulate into the count (a leading `0` is a motion instead).
//! 5. Operators, motions, yank and put resolve against the pending state.
//! 6. Mode-switch keys change mode and drop pending state.
mod key;
mod motion;

pub use key::Key;
pub use motion::Motion;

use crate::action::{Action, DeleteScope};
use crate::config::GameConfig;
use crate::state::{Mode, RegisterTable};

/// Receiver of resolved commands.
///
/// Both callbacks run synchronously inside [`KeyParser::handle_key`].
pub trait CommandSink {
    fn on_mode_change(&mut self, mode: Mode);
    fn on_action(&mut self, action: Action);
}

/// Operators that wait for a motion (or a repeat of themselves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Delete,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'd' => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Delete => 'd',
        }
    }
}

/// Stateful interpreter turning raw keys into actions and mode changes.
#[derive(Debug, Clone)]
pub struct KeyParser {
    count: String,
    operator: Option<Operator>,
    register: Option<char>,
    awaiting_register: bool,
    command: String,
    word_jump: i32,
}

impl Default for KeyParser {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl KeyParser {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            count: String::new(),
            operator: None,
            register: None,
            awaiting_register: false,
            command: String::new(),
            word_jump: config.word_jump,
        }
    }

    /// Feeds one key and returns the text to show in the command bar.
    pub fn handle_key<S>(&mut self, key: Key, mode: Mode, sink: &mut S) -> String
    where
        S: CommandSink + ?Sized,
    {
        if key == Key::Escape {
            self.reset();
            sink.on_mode_change(Mode::Normal);
            return String::new();
        }

        match mode {
            Mode::Command => self.handle_command_line(key, sink),
            // Insert mode has no gameplay meaning; only Escape leaves it.
            Mode::Insert => self.echo(),
            Mode::Normal | Mode::Visual | Mode::VisualLine => match key {
                Key::Char(ch) => self.handle_char(ch, sink),
                _ => self.echo(),
            },
        }
    }

    fn handle_command_line<S>(&mut self, key: Key, sink: &mut S) -> String
    where
        S: CommandSink + ?Sized,
    {
        match key {
            Key::Enter => {
                let command = std::mem::take(&mut self.command);
                self.reset();
                sink.on_action(Action::regex_attack(command));
                sink.on_mode_change(Mode::Normal);
                return String::new();
            }
            Key::Backspace => {
                self.command.pop();
            }
            Key::Char(ch) => self.command.push(ch),
            Key::Escape => {}
        }
        format!(":{}", self.command)
    }

    fn handle_char<S>(&mut self, ch: char, sink: &mut S) -> String
    where
        S: CommandSink + ?Sized,
    {
        if self.awaiting_register {
            self.register = Some(ch);
            self.awaiting_register = false;
            return self.echo();
        }

        if ch == '"' && self.register.is_none() {
            self.awaiting_register = true;
            return self.echo();
        }

        if ch.is_ascii_digit() && !(ch == '0' && self.count.is_empty()) {
            self.count.push(ch);
            return self.echo();
        }

        let count = self.count();
        let register = self.register.unwrap_or(RegisterTable::DEFAULT);

        match ch {
            'y' => self.resolve(Action::yank(register), sink),
            'p' => self.resolve(Action::put(register), sink),
            ':' => self.switch_mode(Mode::Command, sink),
            'v' => self.switch_mode(Mode::Visual, sink),
            'V' => self.switch_mode(Mode::VisualLine, sink),
            'i' => self.switch_mode(Mode::Insert, sink),
            _ => {
                if let Some(operator) = Operator::from_char(ch) {
                    return match self.operator {
                        Some(pending) if pending == operator => {
                            self.resolve(Action::delete(DeleteScope::Line, count), sink)
                        }
                        _ => {
                            self.operator = Some(operator);
                            self.echo()
                        }
                    };
                }

                let Some(motion) = Motion::from_char(ch) else {
                    return self.echo();
                };

                match self.operator {
                    Some(Operator::Delete) => {
                        let scope = if motion == Motion::WordForward {
                            DeleteScope::Word
                        } else {
                            DeleteScope::Char
                        };
                        self.resolve(Action::delete(scope, count), sink)
                    }
                    None => {
                        let action = motion.to_move(count, self.word_jump);
                        self.resolve(action.into(), sink)
                    }
                }
            }
        }
    }

    fn resolve<S>(&mut self, action: Action, sink: &mut S) -> String
    where
        S: CommandSink + ?Sized,
    {
        self.reset();
        sink.on_action(action);
        String::new()
    }

    fn switch_mode<S>(&mut self, mode: Mode, sink: &mut S) -> String
    where
        S: CommandSink + ?Sized,
    {
        self.reset();
        sink.on_mode_change(mode);
        if mode == Mode::Command {
            ":".to_string()
        } else {
            String::new()
        }
    }

    /// Effective count: the typed digits, or 1 when none were typed.
    pub fn count(&self) -> u32 {
        if self.count.is_empty() {
            return 1;
        }
        self.count.parse().unwrap_or(u32::MAX)
    }

    /// Returns true if no partial sequence is buffered.
    #[cfg(test)]
    fn is_idle(&self) -> bool {
        self.count.is_empty()
            && self.operator.is_none()
            && self.register.is_none()
            && !self.awaiting_register
            && self.command.is_empty()
    }

    pub fn reset(&mut self) {
        self.count.clear();
        self.operator = None;
        self.register = None;
        self.awaiting_register = false;
        self.command.clear();
    }

    /// Textual echo of the pending sequence: `"<reg>`, count, operator.
    pub fn echo(&self) -> String {
        let mut echo = String::new();
        if self.awaiting_register {
            echo.push('"');
        }
        if let Some(register) = self.register {
            echo.push('"');
            echo.push(register);
        }
        echo.push_str(&self.count);
        if let Some(operator) = self.operator {
            echo.push(operator.as_char());
        }
        echo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{MoveAction, PutAction, RegexAttackAction, YankAction};

    #[derive(Default)]
    struct Recorder {
        mode: Mode,
        modes: Vec<Mode>,
        actions: Vec<Action>,
    }

    impl CommandSink for Recorder {
        fn on_mode_change(&mut self, mode: Mode) {
            self.mode = mode;
            self.modes.push(mode);
        }

        fn on_action(&mut self, action: Action) {
            self.actions.push(action);
        }
    }

    fn feed(parser: &mut KeyParser, recorder: &mut Recorder, keys: &str) -> String {
        let mut echo = String::new();
        for key in Key::sequence(keys) {
            let mode = recorder.mode;
            echo = parser.handle_key(key, mode, recorder);
        }
        echo
    }

    #[test]
    fn plain_motion_resolves_to_single_step() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "j"), "");
        assert_eq!(recorder.actions, vec![Action::Move(MoveAction::new(0, 1, 1))]);
    }

    #[test]
    fn count_prefix_is_echoed_then_applied() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "3"), "3");
        assert!(recorder.actions.is_empty());
        feed(&mut parser, &mut recorder, "l");
        assert_eq!(recorder.actions, vec![Action::moving(1, 0, 3)]);
        assert!(parser.is_idle());
    }

    #[test]
    fn zero_is_motion_unless_count_started() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "0");
        assert_eq!(recorder.actions, vec![Action::Move(MoveAction::line(-1))]);

        recorder.actions.clear();
        assert_eq!(feed(&mut parser, &mut recorder, "10"), "10");
        feed(&mut parser, &mut recorder, "j");
        assert_eq!(recorder.actions, vec![Action::moving(0, 1, 10)]);
    }

    #[test]
    fn word_motions_use_configured_jump() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "w2b");
        assert_eq!(
            recorder.actions,
            vec![Action::moving(3, 0, 1), Action::moving(-3, 0, 2)]
        );
    }

    #[test]
    fn named_register_yank() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "\""), "\"");
        assert_eq!(feed(&mut parser, &mut recorder, "a"), "\"a");
        feed(&mut parser, &mut recorder, "y");
        assert_eq!(recorder.actions, vec![Action::Yank(YankAction::new('a'))]);
        assert!(parser.is_idle());
    }

    #[test]
    fn put_defaults_to_unnamed_register() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "p");
        assert_eq!(
            recorder.actions,
            vec![Action::Put(PutAction::new(RegisterTable::DEFAULT))]
        );
    }

    #[test]
    fn register_prefix_accepts_any_character() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "\"3"), "\"3");
        feed(&mut parser, &mut recorder, "p");
        assert_eq!(recorder.actions, vec![Action::put('3')]);
    }

    #[test]
    fn delete_operator_variants() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "d"), "d");
        feed(&mut parser, &mut recorder, "d");
        assert_eq!(feed(&mut parser, &mut recorder, "2d"), "2d");
        feed(&mut parser, &mut recorder, "w");
        feed(&mut parser, &mut recorder, "dl");
        assert_eq!(
            recorder.actions,
            vec![
                Action::delete(DeleteScope::Line, 1),
                Action::delete(DeleteScope::Word, 2),
                Action::delete(DeleteScope::Char, 1),
            ]
        );
    }

    #[test]
    fn command_line_submits_regex_attack() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, ":"), ":");
        assert_eq!(recorder.mode, Mode::Command);
        assert_eq!(feed(&mut parser, &mut recorder, "s/a/bx"), ":s/a/bx");
        let echo = parser.handle_key(Key::Backspace, recorder.mode, &mut recorder);
        assert_eq!(echo, ":s/a/b");
        feed(&mut parser, &mut recorder, "/g");
        let echo = parser.handle_key(Key::Enter, recorder.mode, &mut recorder);
        assert_eq!(echo, "");
        assert_eq!(
            recorder.actions,
            vec![Action::RegexAttack(RegexAttackAction::new("s/a/b/g"))]
        );
        assert_eq!(recorder.modes, vec![Mode::Command, Mode::Normal]);
    }

    #[test]
    fn escape_clears_pending_state() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "\"a3d");
        assert!(!parser.is_idle());
        let echo = parser.handle_key(Key::Escape, recorder.mode, &mut recorder);
        assert_eq!(echo, "");
        assert!(parser.is_idle());
        assert!(recorder.actions.is_empty());
        assert_eq!(recorder.modes, vec![Mode::Normal]);
    }

    #[test]
    fn unknown_keys_leave_echo_unchanged() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        assert_eq!(feed(&mut parser, &mut recorder, "4z"), "4");
        assert!(recorder.actions.is_empty());
        assert_eq!(
            parser.handle_key(Key::Enter, recorder.mode, &mut recorder),
            "4"
        );
    }

    #[test]
    fn mode_switch_drops_pending_count() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "5v");
        assert_eq!(recorder.mode, Mode::Visual);
        assert!(parser.is_idle());
        feed(&mut parser, &mut recorder, "k");
        assert_eq!(recorder.actions, vec![Action::moving(0, -1, 1)]);
    }

    #[test]
    fn insert_mode_ignores_keys_until_escape() {
        let mut parser = KeyParser::default();
        let mut recorder = Recorder::default();
        feed(&mut parser, &mut recorder, "ijjj");
        assert_eq!(recorder.mode, Mode::Insert);
        assert!(recorder.actions.is_empty());
        parser.handle_key(Key::Escape, recorder.mode, &mut recorder);
        assert_eq!(recorder.mode, Mode::Normal);
    }
}
