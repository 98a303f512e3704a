//! This crate provides a singly-linked list with owned nodes, implemented as a
//! circular list that is reached through its last node.
//!
//! The [`List`] behaves like an index-addressable sequence: elements can be read,
//! inserted, removed and searched by position. Pushing at either end and popping
//! the front take constant time. In compromise, accessing or mutating elements at
//! a given position takes *O*(*i*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::{List, ListError};
//!
//! let mut list = List::from([0, 1, 2]);
//! assert_eq!(list.to_string(), "{ 0 1 2 }");
//!
//! list.push_back(3);
//! list.push_back(4);
//! assert!(list.insert(3, 69).is_ok()); // insert 69 at position 3
//! assert_eq!(list.to_string(), "{ 0 1 2 69 3 4 }");
//!
//! // out of bounds positions are rejected, and the list is left untouched
//! assert_eq!(list.insert(-1, 69), Err(ListError::ListBounds { index: -1, len: 6 }));
//!
//! assert_eq!(list.remove(3), Ok(69));
//! assert_eq!(list.get(3), Ok(&3));
//! assert_eq!(list.find_last(&4), Some(4));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌────────────────────────────────────────────────────────┐
//!          ↓                                                        │
//!    ╔═══════════╗           ╔═══════════╗                    ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──────────→ ║   next    ║ ─┘
//!    ╟───────────╢           ╟───────────╢   Node 2, 3, ...   ╟───────────╢
//!    ║ payload T ║           ║ payload T ║                    ║ payload T ║
//!    ╚═══════════╝           ╚═══════════╝                    ╚═══════════╝
//!     Node 0 (head)              Node 1                       Node N-1 (tail)
//!                                                                   ↑
//! ╔═══════════╗                                                     │
//! ║   tail    ║ ────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `tail` that points to the last node, or nothing if the list is
//!   empty;
//! - a length field `len` indicating the number of nodes in the cycle.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the first element if
//!   it is the tail);
//! - the actual payload `T`.
//!
//! There is no head pointer: the first element is always `tail.next`. A list with
//! one element is a single node whose `next` points to itself, and an empty list
//! has no node at all.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1. Inserting at position *n* is the same as pushing back.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`], [`IterMut`] and [`IntoIter`]
//! iterators. They start from the first node and stop after exactly as many
//! elements as the list held when they were created (fused and non-cyclic).
//! [`List::indexed`] pairs every element with its position.
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Splicing
//!
//! Two lists are joined by exchanging the `next` links of their tails, without
//! touching any other node:
//! - [`append`]: move all nodes of another list to the back;
//! - [`prepend`]: move all nodes of another list to the front;
//! - [`extend_from_list`]: splice in a clone of another list, leaving it intact.
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//!
//! let mut list = List::from(['a', 'b']);
//! let other = List::from(['c']);
//!
//! list.extend_from_list(&other);
//! assert_eq!(list.to_string(), "{ a b c }");
//! assert_eq!(other.to_string(), "{ c }");
//!
//! list.reverse();
//! assert_eq!(list.to_string(), "{ c b a }");
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`IntoIter`]: crate::IntoIter
//! [`List::indexed`]: crate::List::indexed
//! [`append`]: crate::List::append
//! [`prepend`]: crate::List::prepend
//! [`extend_from_list`]: crate::List::extend_from_list

#[doc(inline)]
pub use list::error::ListError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;
