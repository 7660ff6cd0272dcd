//! Whole-list operations built on the [`Payload`] contract.
//!
//! Each takes the list as an `Option` so callers holding a list that may be
//! missing get the documented outcome for that case instead of having to
//! branch first: printing or destroying nothing is an error, copying
//! nothing gives an empty list, searching nothing finds nothing.

use std::io::Write;

use log::{debug, trace, warn};

use crate::error::{Error, ReleaseFailure, Result};
use crate::list::LinkedList;
use crate::options::{Options, ReleasePolicy};
use crate::payload::{self, Payload};
use crate::types::NodeId;

/// Write every payload's line to `out`, front to back.
///
/// Stops at the first payload that fails to print. An empty list prints
/// nothing and succeeds.
pub fn print_list<T: Payload, W: Write>(list: Option<&LinkedList<T>>, out: &mut W) -> Result<()> {
    let list = list.ok_or(Error::NullInput("print_list"))?;
    for item in list.iter() {
        payload::print_item(Some(item), out)?;
    }
    Ok(())
}

/// Release every payload in the list with the default options.
///
/// Returns how many payloads were released.
pub fn destroy_list<T: Payload>(list: Option<LinkedList<T>>) -> Result<usize> {
    destroy_list_with(list, &Options::default())
}

/// Release every payload in the list.
///
/// Under [`ReleasePolicy::Sweep`] all payloads get released and any
/// failures come back together as `PartialRelease`. Under
/// [`ReleasePolicy::FailFast`] the first failure is returned as is and the
/// rest of the payloads are dropped unreleased.
pub fn destroy_list_with<T: Payload>(list: Option<LinkedList<T>>, options: &Options) -> Result<usize> {
    let list = list.ok_or(Error::NullInput("destroy_list"))?;
    let total = list.len();

    let mut released = 0;
    let mut failed = Vec::new();
    for (position, item) in list.into_payloads().enumerate() {
        match payload::free_item(Some(item)) {
            Ok(()) => released += 1,
            Err(error) => {
                warn!("payload at position {position} failed to release: {error}");
                if options.release_policy == ReleasePolicy::FailFast {
                    // remaining payloads drop with the iterator
                    return Err(error);
                }
                failed.push(ReleaseFailure { position, error });
            }
        }
    }

    debug!("destroyed list: {released}/{total} payloads released");
    if failed.is_empty() {
        Ok(released)
    } else {
        Err(Error::PartialRelease(failed))
    }
}

/// Deep-copy a list: a new list holding a duplicate of each payload, in
/// order.
///
/// A missing list copies to an empty one.
pub fn copy_list<T: Payload>(list: Option<&LinkedList<T>>) -> Result<LinkedList<T>> {
    let Some(list) = list else {
        return Ok(LinkedList::new());
    };

    let mut copy = LinkedList::with_options(&Options::default().initial_capacity(list.len()))?;
    for item in list.iter() {
        copy.push_back(item.duplicate()?)?;
    }
    debug!("copied list of {} payloads", copy.len());
    Ok(copy)
}

/// Handle of the first node, front to back, whose payload compares `Equal`
/// under `key`.
///
/// Later matches are never reported. Missing and empty lists find nothing.
pub fn find_in_list<T: Payload>(list: Option<&LinkedList<T>>, key: &T::Key<'_>) -> Option<NodeId> {
    let list = list?;
    let mut cursor = list.cursor();
    if cursor.seek(key) {
        cursor.id()
    } else {
        trace!("no match in list of {} payloads", list.len());
        None
    }
}
