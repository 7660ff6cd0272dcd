use std::fmt;

use super::record::{Record, RecordKey};

/// Numeric key selector, for callers that pick the comparison key at
/// runtime (from a menu, a config value, a foreign caller).
///
/// Only the four associated constants mean anything. Any other code is
/// accepted and simply never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub i32);

impl KeyCode {
    /// Number field against another record's number field.
    pub const INT: KeyCode = KeyCode(0);
    /// Text field against another record's text field.
    pub const STR: KeyCode = KeyCode(1);
    /// Text field against a bare string.
    pub const SINGLE_STR: KeyCode = KeyCode(2);
    /// Number field against a bare integer.
    pub const SINGLE_INT: KeyCode = KeyCode(3);

    pub fn is_known(self) -> bool {
        (KeyCode::INT.0..=KeyCode::SINGLE_INT.0).contains(&self.0)
    }
}

impl From<i32> for KeyCode {
    fn from(code: i32) -> Self {
        KeyCode(code)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeyCode::INT => write!(f, "INT"),
            KeyCode::STR => write!(f, "STR"),
            KeyCode::SINGLE_STR => write!(f, "SINGLESTR"),
            KeyCode::SINGLE_INT => write!(f, "SINGLEINT"),
            KeyCode(other) => write!(f, "#{other}"),
        }
    }
}

/// Second operand of an untyped keyed comparison.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Record(&'a Record),
    Text(&'a str),
    Number(i32),
}

impl<'a> RecordKey<'a> {
    /// Pair a key code with an operand.
    ///
    /// `None` for unknown codes, or when the operand isn't the shape the
    /// code expects (a bare string for `INT`, say).
    pub fn from_code(code: KeyCode, operand: Operand<'a>) -> Option<Self> {
        match (code, operand) {
            (KeyCode::INT, Operand::Record(record)) => Some(RecordKey::Number(record)),
            (KeyCode::STR, Operand::Record(record)) => Some(RecordKey::Text(record)),
            (KeyCode::SINGLE_STR, Operand::Text(text)) => Some(RecordKey::BareText(text)),
            (KeyCode::SINGLE_INT, Operand::Number(number)) => Some(RecordKey::BareNumber(number)),
            _ => None,
        }
    }

    /// The numeric code for this key.
    pub fn code(&self) -> KeyCode {
        match self {
            RecordKey::Number(_) => KeyCode::INT,
            RecordKey::Text(_) => KeyCode::STR,
            RecordKey::BareText(_) => KeyCode::SINGLE_STR,
            RecordKey::BareNumber(_) => KeyCode::SINGLE_INT,
        }
    }
}
