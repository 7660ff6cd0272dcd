use std::cmp::Ordering;
use std::fmt;

use log::trace;

use super::Payload;
use super::key::{KeyCode, Operand};
use crate::error::Result;
use crate::types::Comparison;

/// A payload holding a number and a piece of text.
///
/// The text is always owned: construction and duplication copy it, so two
/// records never share text storage and each can be dropped on its own.
#[derive(Debug, PartialEq, Eq)]
pub struct Record {
    number: i32,
    text: String,
}

/// Which part of a [`Record`] a keyed comparison looks at, together with
/// the value it is compared against.
#[derive(Debug, Clone, Copy)]
pub enum RecordKey<'k> {
    /// Order by the number field of both records (same as `compare`).
    Number(&'k Record),
    /// Text fields must be byte-identical.
    Text(&'k Record),
    /// The record's text must byte-match a bare string.
    BareText(&'k str),
    /// The record's number must equal a bare integer.
    BareNumber(i32),
}

impl Record {
    /// Build a record, copying `text` into storage of its own.
    ///
    /// Returns `OutOfMemory` if the text can't be allocated.
    pub fn new(number: i32, text: &str) -> Result<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        Ok(Record {
            number,
            text: owned,
        })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Keyed comparison driven by a numeric key code and an untyped operand.
    ///
    /// Unknown codes, and operands whose shape doesn't fit the code, never
    /// match. This path can't fail.
    pub fn compare_with_code(&self, code: KeyCode, operand: Operand<'_>) -> Comparison {
        match RecordKey::from_code(code, operand) {
            Some(key) => self.compare_with_key(&key),
            None => {
                trace!("key code {code} does not apply to {operand:?}");
                Comparison::NotComparable
            }
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

impl Payload for Record {
    type Key<'k> = RecordKey<'k>;

    fn render(&self) -> String {
        format!("{self}\n")
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }

    fn compare_with_key(&self, key: &RecordKey<'_>) -> Comparison {
        match *key {
            RecordKey::Number(other) => self.compare(other).into(),
            RecordKey::Text(other) => Comparison::matching(self.text == other.text),
            RecordKey::BareText(text) => Comparison::matching(self.text.as_bytes() == text.as_bytes()),
            RecordKey::BareNumber(number) => Comparison::matching(self.number == number),
        }
    }

    fn duplicate(&self) -> Result<Self> {
        Record::new(self.number, &self.text)
    }
}
