//! Control Sequence Scanner
//!
//! Splits a character stream into actions. The grammar accepted after the
//! ESC lead-in is deliberately small:
//!
//! ```text
//! ESC [ '[' ] [ digits { ';' digits } ] letter
//! ```
//!
//! The scanner walks the input with a position marker and keeps no state
//! between calls, so one input can be re-scanned from any token boundary.

use tracing::trace;

use super::actions::{Action, ControlCode, CsiAction};
use crate::error::{Error, Result};

/// Lead-in of every control sequence
pub const ESC: u8 = 0x1B;

/// Parse the control sequence at the head of `input`.
///
/// Returns `Ok(None)` when `input` does not start with ESC, otherwise the
/// parsed sequence and the number of characters it spans.
///
/// # Errors
///
/// [`Error::Parse`] when the input starts with ESC but the grammar is not
/// satisfied before the input ends.
pub fn parse_sequence(input: &str) -> Result<Option<(CsiAction, usize)>> {
    scan_sequence(input.as_bytes(), 0)
}

fn scan_sequence(bytes: &[u8], start: usize) -> Result<Option<(CsiAction, usize)>> {
    if bytes.get(start) != Some(&ESC) {
        return Ok(None);
    }

    let fail = |end: usize, reason: &'static str| Error::Parse {
        fragment: String::from_utf8_lossy(&bytes[start..end]).into_owned(),
        reason,
    };

    let mut pos = start + 1;
    if bytes.get(pos) == Some(&b'[') {
        pos += 1;
    }

    let mut params = Vec::new();
    if bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        loop {
            let (value, next) =
                scan_number(bytes, pos).ok_or_else(|| fail(pos, "parameter out of range"))?;
            params.push(value);
            pos = next;

            if bytes.get(pos) != Some(&b';') {
                break;
            }
            pos += 1;
            if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return Err(fail(pos, "expected digit after ';'"));
            }
        }
    }

    let final_char = match bytes.get(pos) {
        Some(b) if b.is_ascii_alphabetic() => char::from(*b),
        Some(_) => return Err(fail(pos, "expected a terminating letter")),
        None => return Err(fail(pos, "unterminated control sequence")),
    };
    pos += 1;

    let csi = if params.is_empty() {
        CsiAction::with_defaults(final_char)
    } else {
        CsiAction::new(final_char, params)
    };

    Ok(Some((csi, pos - start)))
}

/// Read a run of ASCII digits, returning the value and the position after it.
/// `None` if the value does not fit in a `u32`.
fn scan_number(bytes: &[u8], mut pos: usize) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    while let Some(b) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
        pos += 1;
    }
    Some((value, pos))
}

/// Iterator over the actions in a string.
///
/// Yields each action in input order. After the first error no further
/// items are produced.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unread token
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Input not yet consumed
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn next_action(&mut self) -> Result<Option<Action>> {
        if let Some((csi, len)) = scan_sequence(self.input.as_bytes(), self.pos)? {
            trace!(offset = self.pos, len, ?csi, "control sequence");
            self.pos += len;
            return Ok(Some(Action::Csi(csi)));
        }

        let Some(c) = self.remaining().chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();

        Ok(Some(match ControlCode::from_char(c) {
            Some(code) => Action::Control(code),
            None => Action::Print(c),
        }))
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<Action>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_action() {
            Ok(action) => action.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(input: &str) -> Result<Vec<Action>> {
        Parser::new(input).collect()
    }

    #[test]
    fn test_no_sequence() {
        assert_eq!(parse_sequence("hello").unwrap(), None);
        assert_eq!(parse_sequence("").unwrap(), None);
    }

    #[test]
    fn test_sequence_with_params() {
        let (csi, len) = parse_sequence("\x1b[5;10Hrest").unwrap().unwrap();
        assert_eq!(csi, CsiAction::new('H', vec![5, 10]));
        assert_eq!(len, 7);
    }

    #[test]
    fn test_sequence_defaults() {
        let (csi, len) = parse_sequence("\x1b[H").unwrap().unwrap();
        assert_eq!(csi.params, vec![1, 1]);
        assert_eq!(len, 3);

        let (csi, _) = parse_sequence("\x1b[C").unwrap().unwrap();
        assert_eq!(csi.params, vec![1]);

        let (csi, _) = parse_sequence("\x1b[m").unwrap().unwrap();
        assert_eq!(csi.params, vec![0]);

        let (csi, _) = parse_sequence("\x1b[K").unwrap().unwrap();
        assert_eq!(csi.params, vec![0]);
    }

    #[test]
    fn test_explicit_zero_is_not_defaulted() {
        let (csi, _) = parse_sequence("\x1b[0A").unwrap().unwrap();
        assert_eq!(csi.params, vec![0]);
    }

    #[test]
    fn test_bracket_is_optional() {
        let (csi, len) = parse_sequence("\x1b2J").unwrap().unwrap();
        assert_eq!(csi, CsiAction::new('J', vec![2]));
        assert_eq!(len, 3);
    }

    #[test]
    fn test_many_params() {
        let (csi, len) = parse_sequence("\x1b[1;31;44;7m").unwrap().unwrap();
        assert_eq!(csi.params, vec![1, 31, 44, 7]);
        assert_eq!(len, 13);
    }

    #[test]
    fn test_unterminated() {
        for input in ["\x1b", "\x1b[", "\x1b[12", "\x1b[1;2"] {
            assert!(
                matches!(parse_sequence(input), Err(Error::Parse { .. })),
                "{input:?} should fail"
            );
        }
    }

    #[test]
    fn test_malformed() {
        let err = parse_sequence("\x1b[1;m").unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                fragment: "\x1b[1;".to_string(),
                reason: "expected digit after ';'",
            }
        );

        assert!(matches!(parse_sequence("\x1b[;1H"), Err(Error::Parse { .. })));
        assert!(matches!(parse_sequence("\x1b[?25h"), Err(Error::Parse { .. })));
        assert!(matches!(parse_sequence("\x1b[1 q"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_param_overflow() {
        let err = parse_sequence("\x1b[99999999999A").unwrap_err();
        assert!(matches!(err, Error::Parse { reason: "parameter out of range", .. }));
    }

    #[test]
    fn test_parser_tokens() {
        let actions = parse_all("a\x1b[31mb\r\n\x08\0\x0f\t").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Print('a'),
                Action::Csi(CsiAction::new('m', vec![31])),
                Action::Print('b'),
                Action::Control(ControlCode::CarriageReturn),
                Action::Control(ControlCode::LineFeed),
                Action::Control(ControlCode::Backspace),
                Action::Control(ControlCode::Null),
                Action::Control(ControlCode::ShiftIn),
                Action::Print('\t'),
            ]
        );
    }

    #[test]
    fn test_parser_multibyte_literal() {
        let mut parser = Parser::new("é\x1b[A");
        assert_eq!(parser.next().unwrap().unwrap(), Action::Print('é'));
        assert_eq!(parser.position(), 2);
        assert_eq!(parser.remaining(), "\x1b[A");
        assert_eq!(
            parser.next().unwrap().unwrap(),
            Action::Csi(CsiAction::new('A', vec![1]))
        );
        assert!(parser.next().is_none());
    }

    #[test]
    fn test_parser_stops_after_error() {
        let mut parser = Parser::new("x\x1b[1;zy");
        assert_eq!(parser.next().unwrap().unwrap(), Action::Print('x'));
        assert!(parser.next().unwrap().is_err());
        assert!(parser.next().is_none());
    }
}
