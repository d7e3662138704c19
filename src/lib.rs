// This file is part of stack-queue.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `stack-queue`
//!
//! Growable, insertion-ordered [`Stack`] (LIFO) and [`Queue`] (FIFO)
//! containers with a full array-like surface: indexed access, linear and
//! binary search, predicate search, in-place and persistent sorting,
//! sub-container derivation, and cancellable enumeration.
//!
//! Both containers store elements of a single generic type `T` contiguously
//! in insertion order and share the same operation set; they differ only in
//! which end removal works on:
//!
//! - [`Stack`]: `push`/`pop`/`peek` operate on the top (the highest index;
//!   index 0 is the bottom).
//! - [`Queue`]: `enqueue` appends at the back, `dequeue`/`peek` operate on
//!   the front (index 0).
//!
//! ## Two operation families
//!
//! Every structural operation exists in two flavors:
//!
//! - **In place**: `push`, `pop`, `enqueue`, `dequeue`, `sort_by`,
//!   `exchange` mutate the receiver through `&mut self`.
//! - **Persistent**: `pushing`, `popping`, `enqueueing`, `dequeueing`,
//!   `filtered`, `sub_stack`/`sub_queue`, `sorted_by` borrow the receiver
//!   immutably and return a new, independently owned container.
//!
//! ```
//! use stack_queue::Stack;
//!
//! let base = Stack::from([1, 2, 3]);
//! let grown = base.pushing(4);
//! assert_eq!(grown.len(), base.len() + 1);
//! assert_eq!(base.as_slice(), &[1, 2, 3]); // receiver untouched
//! ```
//!
//! ## Errors and emptiness
//!
//! The two conditions are deliberately kept apart:
//!
//! - An index or range outside `0..len` is a hard error: fallible accessors
//!   return [`Error::OutOfRange`], and the `container[i]` indexing sugar
//!   panics like a slice would.
//! - An empty container is an ordinary state: `peek`, `pop`, and `dequeue`
//!   return `None`, never an error.
//!
//! ## Searching and sorting
//!
//! Comparators and predicates are plain closures. `index_of` finds by value
//! equality; the `index_where`/`indices_where` families search by predicate,
//! optionally reversed or restricted to an index set
//! ([`EnumerationOptions`]); `binary_search_in_range` searches an
//! already-sorted range with [`BinarySearchOptions`]. Sorting takes a
//! comparator, [`SortOptions`] for stability, a [`SortDescriptor`] list for
//! multi-key ordering, or a [`SortHint`] to accelerate re-sorting
//! near-sorted data without affecting the result.
//!
//! ```
//! use stack_queue::{queue, Queue};
//!
//! let mut q = queue!["b", "c", "a"];
//! q.sort_by(|a, b| a.cmp(b));
//! assert_eq!(q.dequeue(), Some("a"));
//! assert_eq!(q.joined("+"), "b+c");
//! ```
//!
//! ## Concurrency model
//!
//! Containers are single-owner, synchronous values. Rust's borrow rules
//! supply the exclusion discipline: in-place operations require `&mut self`,
//! so mutation during enumeration or shared traversal cannot compile.
//! Nothing here blocks, locks, or spawns.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Stack`], [`Queue`], and
//!   [`SortHint`]. Containers round-trip as a plain element sequence,
//!   preserving count and order exactly.
//!
//! ## `no_std` support
//!
//! The crate is `no_std` and requires only `alloc` for its growable backing
//! storage.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod queue;
mod seq;
#[cfg(feature = "serde")]
mod serde;
mod sort;
mod stack;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::EnumerationOptions;
pub use queue::Queue;
pub use sort::{BinarySearchOptions, SortDescriptor, SortHint, SortOptions, SortedMatch};
pub use stack::Stack;
