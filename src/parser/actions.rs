//! Terminal Actions
//!
//! Semantic tokens produced by the parser that should be applied to the
//! terminal state.

use serde::{Deserialize, Serialize};

/// A terminal action produced by the parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Write a glyph at the cursor
    Print(char),

    /// A control character that only moves the cursor or is ignored
    Control(ControlCode),

    /// A control sequence with its (defaulted) parameters
    Csi(CsiAction),
}

/// Control characters with a meaning of their own. Any other control
/// character is printed like a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlCode {
    /// NUL - Null (ignored)
    Null,
    /// BS - Backspace
    Backspace,
    /// LF - Line Feed
    LineFeed,
    /// CR - Carriage Return
    CarriageReturn,
    /// SI - Shift In (ignored)
    ShiftIn,
}

impl ControlCode {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\0' => Some(ControlCode::Null),
            '\x08' => Some(ControlCode::Backspace),
            '\n' => Some(ControlCode::LineFeed),
            '\r' => Some(ControlCode::CarriageReturn),
            '\x0f' => Some(ControlCode::ShiftIn),
            _ => None,
        }
    }
}

/// A parsed control sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsiAction {
    /// The terminating letter, case preserved
    pub final_char: char,
    /// Parameters in order; never empty once produced by the parser
    pub params: Vec<u32>,
}

impl CsiAction {
    pub fn new(final_char: char, params: Vec<u32>) -> Self {
        Self { final_char, params }
    }

    /// A sequence written without parameters, e.g. `ESC[H`
    pub fn with_defaults(final_char: char) -> Self {
        Self::new(final_char, default_params(final_char))
    }

    /// The command tag used for dispatch (terminators are case-insensitive)
    pub fn command(&self) -> char {
        self.final_char.to_ascii_lowercase()
    }

    /// Get parameter at index, or default value if not present
    pub fn param(&self, index: usize, default: u32) -> u32 {
        self.params.get(index).copied().unwrap_or(default)
    }
}

/// Parameters substituted when a sequence carries none
pub fn default_params(final_char: char) -> Vec<u32> {
    match final_char.to_ascii_lowercase() {
        'a' | 'b' | 'c' | 'd' => vec![1],
        'h' => vec![1, 1],
        _ => vec![0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        assert_eq!(default_params('A'), vec![1]);
        assert_eq!(default_params('d'), vec![1]);
        assert_eq!(default_params('H'), vec![1, 1]);
        assert_eq!(default_params('m'), vec![0]);
        assert_eq!(default_params('J'), vec![0]);
        assert_eq!(default_params('z'), vec![0]);
    }

    #[test]
    fn test_csi_action_param() {
        let csi = CsiAction::new('H', vec![10, 20]);

        assert_eq!(csi.param(0, 1), 10);
        assert_eq!(csi.param(1, 1), 20);
        assert_eq!(csi.param(2, 1), 1); // default
    }

    #[test]
    fn test_command_is_case_insensitive() {
        assert_eq!(CsiAction::with_defaults('M').command(), 'm');
        assert_eq!(CsiAction::with_defaults('k').command(), 'k');
        assert_eq!(CsiAction::with_defaults('h').params, vec![1, 1]);
    }

    #[test]
    fn test_control_codes() {
        assert_eq!(ControlCode::from_char('\r'), Some(ControlCode::CarriageReturn));
        assert_eq!(ControlCode::from_char('\x08'), Some(ControlCode::Backspace));
        assert_eq!(ControlCode::from_char('\x0f'), Some(ControlCode::ShiftIn));
        assert_eq!(ControlCode::from_char('\t'), None);
        assert_eq!(ControlCode::from_char('a'), None);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Csi(CsiAction::new('H', vec![1, 2]));

        let json = serde_json::to_string(&action).unwrap();
        let restored: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, restored);
    }
}
