pub mod key;
pub mod record;

use std::cmp::Ordering;
use std::io::Write;

use crate::error::{Error, Result};
use crate::types::Comparison;

pub use key::{KeyCode, Operand};
pub use record::{Record, RecordKey};

/// The behavior a list needs from the values it stores.
///
/// A `LinkedList<T>` never looks inside `T`. Printing, teardown, sorting,
/// searching and copying all go through this trait, so a payload type
/// implements it once and every list operation works with it.
///
/// ```text
///   LinkedList<T> ──► node ──► node ──► node
///                       │        │        │
///                       ▼        ▼        ▼
///                    T::render / T::compare / T::duplicate / T::release
/// ```
pub trait Payload: Sized {
    /// Selector for keyed comparisons. May borrow the value it compares
    /// against, so a key can carry a whole payload or a bare field value.
    type Key<'k>;

    /// Human-readable line for this payload, newline-terminated.
    fn render(&self) -> String;

    /// Default three-way ordering. Lists sort by this.
    fn compare(&self, other: &Self) -> Ordering;

    /// Compare against whatever `key` selects.
    ///
    /// Keys that only test for equality report `NotComparable` on a
    /// mismatch rather than `Less`/`Greater`.
    fn compare_with_key(&self, key: &Self::Key<'_>) -> Comparison;

    /// Independent copy. Nothing is shared with `self`.
    fn duplicate(&self) -> Result<Self>;

    /// Give up the payload. The default just drops it.
    ///
    /// Payloads that own outside resources can override this to report a
    /// failed cleanup; the value is consumed either way.
    fn release(self) -> Result<()> {
        drop(self);
        Ok(())
    }
}

/// Write one payload's rendered line to `out`.
///
/// Fails with `NullInput` when there is no payload.
pub fn print_item<T: Payload, W: Write>(item: Option<&T>, out: &mut W) -> Result<()> {
    let item = item.ok_or(Error::NullInput("print_item"))?;
    out.write_all(item.render().as_bytes())?;
    Ok(())
}

/// Release one payload.
///
/// Releasing nothing is an error, not a no-op.
pub fn free_item<T: Payload>(item: Option<T>) -> Result<()> {
    match item {
        Some(item) => item.release(),
        None => Err(Error::NullInput("free_item")),
    }
}

/// Duplicate a payload that may be absent. An absent source yields
/// `Ok(None)`; only allocation can fail.
pub fn copy_item<T: Payload>(source: Option<&T>) -> Result<Option<T>> {
    source.map(T::duplicate).transpose()
}
