use std::cmp::Ordering;

/// Outcome of a keyed comparison.
///
/// The comparable variants follow the usual total order
/// `Less < Equal < Greater`. `NotComparable` is the "no match" outcome of a
/// key that only tests for equality, or of a key that doesn't apply to the
/// operand. It is a result value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    NotComparable,
}

impl Comparison {
    /// The three-way ordering, or `None` for `NotComparable`.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::NotComparable => None,
        }
    }

    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }

    /// `Equal` when the predicate holds, `NotComparable` otherwise.
    pub(crate) fn matching(matched: bool) -> Self {
        if matched {
            Comparison::Equal
        } else {
            Comparison::NotComparable
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// Handle to a node in a [`LinkedList`](crate::list::LinkedList).
///
/// Handles are tagged with the slot's generation: once the node is removed,
/// its handle never resolves again, even after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_round_trips_through_comparison() {
        for ord in [Ordering::Less, Ordering::Equal, Ordering::Greater] {
            assert_eq!(Comparison::from(ord).ordering(), Some(ord));
        }
        assert_eq!(Comparison::NotComparable.ordering(), None);
    }

    #[test]
    fn matching_maps_bool() {
        assert_eq!(Comparison::matching(true), Comparison::Equal);
        assert_eq!(Comparison::matching(false), Comparison::NotComparable);
    }
}
