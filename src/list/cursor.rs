use super::LinkedList;
use crate::payload::Payload;
use crate::types::NodeId;

/// A position in a list that can step both ways and seek by key.
///
/// Only valid while it sits on a node. Stepping past either end makes it
/// invalid for good; accessors then return `None`.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>, current: Option<usize>) -> Self {
        Cursor { list, current }
    }

    /// Returns true if the cursor is positioned at a node.
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    /// Handle of the current node.
    pub fn id(&self) -> Option<NodeId> {
        self.current.map(|index| self.list.id_of(index))
    }

    /// Payload of the current node.
    pub fn payload(&self) -> Option<&'a T> {
        let list = self.list;
        self.current.map(|index| list.payload_at(index))
    }

    /// Step toward the tail.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|index| self.list.next_index(index));
    }

    /// Step toward the head.
    pub fn move_prev(&mut self) {
        self.current = self.current.and_then(|index| self.list.prev_index(index));
    }
}

impl<T: Payload> Cursor<'_, T> {
    /// Move forward to the first node, starting with the current one, whose
    /// payload compares `Equal` under `key`.
    ///
    /// Returns false and leaves the cursor invalid if nothing matches.
    pub fn seek(&mut self, key: &T::Key<'_>) -> bool {
        while let Some(payload) = self.payload() {
            if payload.compare_with_key(key).is_equal() {
                return true;
            }
            self.move_next();
        }
        false
    }
}
