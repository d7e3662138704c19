// This file is part of stack-queue.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sorting and sorted-search configuration.
//!
//! - [`SortOptions`] selects between the default unstable sort and a stable
//!   one.
//! - [`SortDescriptor`] is a typed comparator built from a key extractor or
//!   a raw comparison closure; a slice of descriptors compares
//!   lexicographically (first non-equal descriptor wins).
//! - [`SortHint`] captures a prior element order as a sequence of hashes and
//!   can be fed back into `sorted_by_with_hint` to speed up re-sorting
//!   near-sorted data. A hint never changes the result, only performance.
//! - [`BinarySearchOptions`] / [`SortedMatch`] configure binary search over
//!   an already-sorted range.

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

// External imports - rustc-hash
use rustc_hash::FxHasher;

/// Options for the in-place and persistent sort operations.
///
/// The default sort is not required to preserve the relative order of equal
/// elements. Set [`stable`](SortOptions::stable) to request a stable sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Preserve the relative order of elements that compare equal.
    pub stable: bool,
}

/// Which index to report when a sorted range contains several elements equal
/// to the searched value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortedMatch {
    /// Any index of an equal element.
    #[default]
    Any,
    /// The lowest index of the equal run.
    First,
    /// The highest index of the equal run.
    Last,
}

/// Options for [`binary search`](crate::Stack::binary_search_in_range) over a
/// sorted range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinarySearchOptions {
    /// Which equal element to report; see [`SortedMatch`].
    pub matching: SortedMatch,
    /// Report the index at which the value could be inserted while keeping
    /// the range sorted, instead of requiring an equal element to exist.
    ///
    /// With this set the search always yields an index: the start of the
    /// equal run for [`SortedMatch::First`], the end of it for
    /// [`SortedMatch::Last`] and [`SortedMatch::Any`].
    pub insertion_index: bool,
}

/// A single sort key: a comparison plus a direction.
///
/// Descriptors replace dynamic key-path/selector sorting with typed closures.
/// Build one from a key extractor with [`by_key`](SortDescriptor::by_key) or
/// from a raw comparison with [`new`](SortDescriptor::new), and flip its
/// direction with [`descending`](SortDescriptor::descending).
///
/// # Examples
///
/// ```
/// use stack_queue::{Stack, SortDescriptor};
///
/// let mut stack = Stack::from([(2, "b"), (1, "a"), (2, "a")]);
/// stack.sort_by_descriptors(&[
///     SortDescriptor::by_key(|t: &(i32, &str)| t.0),
///     SortDescriptor::by_key(|t: &(i32, &str)| t.1).descending(),
/// ]);
/// assert_eq!(stack.as_slice(), &[(1, "a"), (2, "b"), (2, "a")]);
/// ```
pub struct SortDescriptor<T> {
    compare: Box<dyn Fn(&T, &T) -> Ordering>,
    ascending: bool,
}

impl<T> SortDescriptor<T> {
    /// Builds an ascending descriptor from a raw comparison closure.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            compare: Box::new(compare),
            ascending: true,
        }
    }

    /// Builds an ascending descriptor that compares elements by an extracted
    /// key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    /// Flips the descriptor's direction.
    #[must_use]
    pub fn descending(mut self) -> Self {
        self.ascending = !self.ascending;
        self
    }

    /// Returns `true` if the descriptor sorts ascending.
    #[inline]
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Applies the descriptor, honoring its direction.
    pub(crate) fn ordering(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.compare)(a, b);
        if self.ascending { ord } else { ord.reverse() }
    }
}

impl<T> fmt::Debug for SortDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("ascending", &self.ascending)
            .finish_non_exhaustive()
    }
}

/// Lexicographic comparison over a descriptor list: the first descriptor
/// that distinguishes `a` from `b` decides.
pub(crate) fn compare_by_descriptors<T>(
    descriptors: &[SortDescriptor<T>],
    a: &T,
    b: &T,
) -> Ordering {
    for d in descriptors {
        match d.ordering(a, b) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// A captured element order, used to accelerate re-sorting of near-sorted
/// data.
///
/// A hint records the `FxHasher` hash of every element in the container's
/// order at capture time. Feeding it to a `sorted_by_with_hint` call on a
/// slightly permuted container lets the sort start from the remembered order
/// and finish with an adaptive pass. The hint is an optimization only: the
/// sorted result is the same with or without it.
///
/// With the `serde` feature enabled a hint serializes as its hash sequence,
/// so a prior order can be persisted alongside the data it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortHint {
    pub(crate) hashes: Vec<u64>,
}

impl SortHint {
    /// Captures the order of `items`.
    pub(crate) fn of_slice<T: Hash>(items: &[T]) -> Self {
        Self {
            hashes: items.iter().map(hash_one).collect(),
        }
    }

    /// Number of elements the hint describes.
    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns `true` if the hint describes no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// Hash of a single element under the fixed `FxHasher` used by hints.
pub(crate) fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}
