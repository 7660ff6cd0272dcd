pub mod cursor;

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::Result;
use crate::options::Options;
use crate::payload::Payload;
use crate::types::NodeId;

pub use cursor::Cursor;

/// A single slot in the arena.
///
/// `payload` is `None` only for vacant slots, which are never linked.
/// `generation` is bumped every time the slot is vacated, so stale
/// `NodeId`s stop resolving.
struct Node<T> {
    payload: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
    generation: u64,
}

/// A doubly-linked list that owns one payload per node.
///
/// Nodes live in a `Vec` and link to each other by index, so there is no
/// `unsafe` and no pointer juggling. Removing a node puts its slot on a
/// free list for the next insert.
///
/// ```text
///   head                                   tail
///    │                                       │
///    ▼                                       ▼
///  [ 2 ] ◄──► [ 0 ] ◄──► [ 3 ]    [ 1: vacant ] ◄── free
/// ```
///
/// The list never looks inside `T`; operations that need to (sorting,
/// searching) require `T: Payload`.
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        LinkedList {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty list sized from `options`, failing instead of
    /// aborting if the slots can't be allocated.
    pub fn with_options(options: &Options) -> Result<Self> {
        let mut list = Self::new();
        list.nodes.try_reserve(options.initial_capacity)?;
        Ok(list)
    }

    /// Build a list from payloads, in iteration order.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(payloads: I) -> Result<Self> {
        let mut list = Self::new();
        for payload in payloads {
            list.push_back(payload)?;
        }
        Ok(list)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a payload. Returns the handle of the new node.
    pub fn push_back(&mut self, payload: T) -> Result<NodeId> {
        let index = self.alloc(payload)?;
        self.nodes[index].prev = self.tail;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        Ok(self.id_of(index))
    }

    /// Prepend a payload. Returns the handle of the new node.
    pub fn push_front(&mut self, payload: T) -> Result<NodeId> {
        let index = self.alloc(payload)?;
        self.nodes[index].next = self.head;
        match self.head {
            Some(head) => self.nodes[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        Ok(self.id_of(index))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Unlink a node and hand its payload back to the caller.
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let index = self.resolve(id)?;
        Some(self.unlink(index))
    }

    /// Payload of a node, if the handle is still live.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = self.resolve(id)?;
        self.nodes[index].payload.as_ref()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.resolve(id).is_some()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.head.map(|index| self.id_of(index))
    }

    pub fn last(&self) -> Option<NodeId> {
        self.tail.map(|index| self.id_of(index))
    }

    /// Handle of the node after `id`.
    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.nodes[index].next.map(|next| self.id_of(next))
    }

    /// Handle of the node before `id`.
    pub fn prev_of(&self, id: NodeId) -> Option<NodeId> {
        let index = self.resolve(id)?;
        self.nodes[index].prev.map(|prev| self.id_of(prev))
    }

    /// Payloads front to back. Reverse with `.rev()`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.entries().map(|(_, payload)| payload)
    }

    /// `(handle, payload)` pairs front to back.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Cursor positioned at the first node.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head)
    }

    /// Cursor positioned at `id`. Invalid from the start if `id` is stale.
    pub fn cursor_at(&self, id: NodeId) -> Cursor<'_, T> {
        Cursor::new(self, self.resolve(id))
    }

    /// Stable sort with a caller-supplied comparator.
    ///
    /// Only links are rewritten; payloads stay in their slots, so every
    /// existing `NodeId` still points at the same payload afterwards.
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return Ok(());
        }

        let mut order = Vec::new();
        order.try_reserve_exact(self.len)?;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            order.push(index);
            cursor = self.nodes[index].next;
        }

        order.sort_by(|&a, &b| compare(self.payload_at(a), self.payload_at(b)));

        for (pos, &index) in order.iter().enumerate() {
            let node = &mut self.nodes[index];
            node.prev = pos.checked_sub(1).map(|p| order[p]);
            node.next = order.get(pos + 1).copied();
        }
        self.head = order.first().copied();
        self.tail = order.last().copied();
        debug!("sorted {} nodes", self.len);
        Ok(())
    }

    pub(crate) fn payload_at(&self, index: usize) -> &T {
        match &self.nodes[index].payload {
            Some(payload) => payload,
            None => unreachable!("linked slot {index} is vacant"),
        }
    }

    pub(crate) fn next_index(&self, index: usize) -> Option<usize> {
        self.nodes[index].next
    }

    pub(crate) fn prev_index(&self, index: usize) -> Option<usize> {
        self.nodes[index].prev
    }

    pub(crate) fn id_of(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.nodes[index].generation,
        }
    }

    fn resolve(&self, id: NodeId) -> Option<usize> {
        let node = self.nodes.get(id.index)?;
        (node.payload.is_some() && node.generation == id.generation).then_some(id.index)
    }

    /// Take a slot for `payload`, reusing a vacant one when possible.
    fn alloc(&mut self, payload: T) -> Result<usize> {
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index].payload = Some(payload);
                index
            }
            None => {
                self.nodes.try_reserve(1)?;
                self.nodes.push(Node {
                    payload: Some(payload),
                    prev: None,
                    next: None,
                    generation: 0,
                });
                self.nodes.len() - 1
            }
        };
        self.len += 1;
        trace!("linked slot {index} ({} nodes)", self.len);
        Ok(index)
    }

    /// Detach a linked slot, vacate it and return its payload.
    fn unlink(&mut self, index: usize) -> T {
        let (prev, next) = (self.nodes[index].prev, self.nodes[index].next);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[index];
        node.prev = None;
        node.next = None;
        node.generation = node.generation.wrapping_add(1);
        let payload = match node.payload.take() {
            Some(payload) => payload,
            None => unreachable!("linked slot {index} is vacant"),
        };
        self.free.push(index);
        self.len -= 1;
        trace!("unlinked slot {index} ({} nodes)", self.len);
        payload
    }
}

impl<T: Payload> LinkedList<T> {
    /// Stable sort by the payload's default ordering.
    pub fn sort(&mut self) -> Result<()> {
        self.sort_by(T::compare)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over `(NodeId, &T)` in list order.
pub struct Entries<'a, T> {
    list: &'a LinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.front?;
        self.front = self.list.next_index(index);
        self.remaining -= 1;
        Some((self.list.id_of(index), self.list.payload_at(index)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.back?;
        self.back = self.list.prev_index(index);
        self.remaining -= 1;
        Some((self.list.id_of(index), self.list.payload_at(index)))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

/// Owning iterator that drains payloads front to back.
pub struct IntoPayloads<T>(LinkedList<T>);

impl<T> Iterator for IntoPayloads<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoPayloads<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoPayloads<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoPayloads<T>;

    fn into_iter(self) -> IntoPayloads<T> {
        IntoPayloads(self)
    }
}

impl<T> LinkedList<T> {
    /// Drain the list, yielding payloads in traversal order.
    pub fn into_payloads(self) -> IntoPayloads<T> {
        self.into_iter()
    }
}
