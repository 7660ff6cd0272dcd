//! # Payload List
//!
//! A doubly-linked list that never looks inside the values it stores.
//!
//! ## Core idea
//! Everything the list does to an element (print it, free it, order it,
//! search for it, copy it) is delegated to the element's type through the
//! [`Payload`] trait. Implement the trait once for a record type and the
//! list-level operations in [`ops`] work for it unchanged.
//!
//! Searches go through a per-type key ([`Payload::Key`]), so one entry point
//! covers "find this exact record", "find by this field", and "find by this
//! bare value". [`Record`] is the worked example: a number plus text, with
//! [`RecordKey`] selecting the field.
//!
//! ```
//! use payload_list::{LinkedList, Record, RecordKey, ops};
//!
//! let mut list = LinkedList::new();
//! list.push_back(Record::new(5, "y")?)?;
//! list.push_back(Record::new(1, "x")?)?;
//! list.sort()?;
//!
//! let mut out = Vec::new();
//! ops::print_list(Some(&list), &mut out)?;
//! assert_eq!(out, b"1 x\n5 y\n");
//!
//! let hit = ops::find_in_list(Some(&list), &RecordKey::BareText("y")).unwrap();
//! assert_eq!(list.get(hit).map(Record::number), Some(5));
//! # Ok::<(), payload_list::Error>(())
//! ```

pub mod error;
pub mod list;
pub mod ops;
pub mod options;
pub mod payload;
pub mod types;

pub use error::{Error, ReleaseFailure, Result};
pub use list::{Cursor, LinkedList};
pub use options::{Options, ReleasePolicy};
pub use payload::{KeyCode, Operand, Payload, Record, RecordKey};
pub use types::{Comparison, NodeId};
