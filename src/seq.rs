// This file is part of stack-queue.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared ordered-sequence container behind [`Stack`](crate::Stack) and
//! [`Queue`](crate::Queue).
//!
//! Both facades store elements in insertion order in a growable buffer and
//! differ only in which end [`peek`](Sequence::peek)/[`take`](Sequence::take)
//! operate on. Everything else (indexed access, search, sorting,
//! enumeration, persistent derivation) is implemented here once and exposed
//! by the facades under their own vocabulary.

// Crate imports
use crate::{
    error::Error,
    iter::EnumerationOptions,
    sort::{self, BinarySearchOptions, SortDescriptor, SortHint, SortOptions, SortedMatch},
};

// Alloc imports
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

// Core imports
use core::{
    cmp::Ordering,
    fmt::Display,
    hash::Hash,
    ops::{ControlFlow, Range},
    slice,
};

/// Which end removal and peeking operate on. Insertion is always at the
/// tail, so `Back` gives LIFO order and `Front` gives FIFO order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RemovalEnd {
    /// Remove from index 0 (FIFO).
    Front,
    /// Remove from the highest index (LIFO).
    Back,
}

/// An insertion-ordered sequence of `T` plus its removal end.
///
/// Index 0 is always the oldest element reachable from the removal end: the
/// front of a queue, the bottom of a stack.
#[derive(Clone)]
pub(crate) struct Sequence<T> {
    items: Vec<T>,
    removal: RemovalEnd,
}

impl<T> Sequence<T> {
    #[inline]
    pub(crate) const fn new(removal: RemovalEnd) -> Self {
        Self {
            items: Vec::new(),
            removal,
        }
    }

    #[inline]
    pub(crate) fn with_capacity(removal: RemovalEnd, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            removal,
        }
    }

    #[inline]
    pub(crate) fn from_vec(removal: RemovalEnd, items: Vec<T>) -> Self {
        Self { items, removal }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    // insertion

    #[inline]
    pub(crate) fn append(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub(crate) fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    // removal end

    pub(crate) fn peek(&self) -> Option<&T> {
        match self.removal {
            RemovalEnd::Front => self.items.first(),
            RemovalEnd::Back => self.items.last(),
        }
    }

    pub(crate) fn take(&mut self) -> Option<T> {
        match self.removal {
            RemovalEnd::Back => self.items.pop(),
            RemovalEnd::Front => {
                if self.items.is_empty() {
                    None
                } else {
                    Some(self.items.remove(0))
                }
            }
        }
    }

    // indexed access

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub(crate) fn at(&self, index: usize) -> Result<&T, Error> {
        self.items.get(index).ok_or(Error::OutOfRange)
    }

    /// Elements at `indices`, ascending, duplicates repeated.
    pub(crate) fn at_indices(&self, indices: &[usize]) -> Result<Vec<&T>, Error> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        if sorted.last().is_some_and(|&i| i >= self.items.len()) {
            return Err(Error::OutOfRange);
        }
        Ok(sorted.iter().map(|&i| &self.items[i]).collect())
    }

    /// The subslice for `range`, or `OutOfRange` when the range is inverted
    /// or extends past `len`.
    fn slice_range(&self, range: Range<usize>) -> Result<&[T], Error> {
        self.items.get(range).ok_or(Error::OutOfRange)
    }

    /// Validates `indices` against the current bounds and returns them
    /// sorted ascending with duplicates removed.
    fn checked_index_set(&self, indices: &[usize]) -> Result<Vec<usize>, Error> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.last().is_some_and(|&i| i >= self.items.len()) {
            return Err(Error::OutOfRange);
        }
        Ok(sorted)
    }

    // linear search

    #[inline]
    pub(crate) fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    pub(crate) fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|x| x == value)
    }

    pub(crate) fn index_of_in_range(
        &self,
        value: &T,
        range: Range<usize>,
    ) -> Result<Option<usize>, Error>
    where
        T: PartialEq,
    {
        let start = range.start;
        let slice = self.slice_range(range)?;
        Ok(slice.iter().position(|x| x == value).map(|i| start + i))
    }

    // predicate search

    pub(crate) fn index_where<F>(&self, options: EnumerationOptions, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        if options.reverse {
            (0..self.items.len()).rev().find(|&i| predicate(&self.items[i], i))
        } else {
            (0..self.items.len()).find(|&i| predicate(&self.items[i], i))
        }
    }

    pub(crate) fn index_where_in<F>(
        &self,
        indices: &[usize],
        options: EnumerationOptions,
        mut predicate: F,
    ) -> Result<Option<usize>, Error>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let order = self.checked_index_set(indices)?;
        let hit = if options.reverse {
            order.iter().rev().copied().find(|&i| predicate(&self.items[i], i))
        } else {
            order.iter().copied().find(|&i| predicate(&self.items[i], i))
        };
        Ok(hit)
    }

    /// Matching indices as an ascending set. The predicate still observes
    /// the traversal order selected by `options`.
    pub(crate) fn indices_where<F>(&self, options: EnumerationOptions, mut predicate: F) -> Vec<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let mut out: Vec<usize> = if options.reverse {
            (0..self.items.len())
                .rev()
                .filter(|&i| predicate(&self.items[i], i))
                .collect()
        } else {
            (0..self.items.len())
                .filter(|&i| predicate(&self.items[i], i))
                .collect()
        };
        if options.reverse {
            out.reverse();
        }
        out
    }

    pub(crate) fn indices_where_in<F>(
        &self,
        indices: &[usize],
        options: EnumerationOptions,
        mut predicate: F,
    ) -> Result<Vec<usize>, Error>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let order = self.checked_index_set(indices)?;
        let mut out: Vec<usize> = if options.reverse {
            order
                .iter()
                .rev()
                .copied()
                .filter(|&i| predicate(&self.items[i], i))
                .collect()
        } else {
            order
                .iter()
                .copied()
                .filter(|&i| predicate(&self.items[i], i))
                .collect()
        };
        if options.reverse {
            out.reverse();
        }
        Ok(out)
    }

    // sorted-range binary search

    /// Binary search over `range`, which the caller guarantees is already
    /// sorted under `compare`. Results are unspecified otherwise.
    pub(crate) fn binary_search_in_range<F>(
        &self,
        value: &T,
        range: Range<usize>,
        options: BinarySearchOptions,
        mut compare: F,
    ) -> Result<Option<usize>, Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let start = range.start;
        let slice = self.slice_range(range)?;
        let lower = slice.partition_point(|x| compare(x, value) == Ordering::Less);
        let upper = slice.partition_point(|x| compare(x, value) != Ordering::Greater);
        let local = if options.insertion_index {
            Some(match options.matching {
                SortedMatch::First => lower,
                SortedMatch::Any | SortedMatch::Last => upper,
            })
        } else if lower < upper {
            Some(match options.matching {
                SortedMatch::First => lower,
                SortedMatch::Last => upper - 1,
                SortedMatch::Any => lower + (upper - lower) / 2,
            })
        } else {
            None
        };
        Ok(local.map(|i| start + i))
    }

    // sorting

    pub(crate) fn sort_with_options<F>(&mut self, options: SortOptions, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if options.stable {
            self.items.sort_by(|a, b| compare(a, b));
        } else {
            self.items.sort_unstable_by(|a, b| compare(a, b));
        }
    }

    /// Descriptor sorts are stable so that earlier keys always dominate.
    pub(crate) fn sort_by_descriptors(&mut self, descriptors: &[SortDescriptor<T>]) {
        self.items
            .sort_by(|a, b| sort::compare_by_descriptors(descriptors, a, b));
    }

    pub(crate) fn exchange(&mut self, i: usize, j: usize) -> Result<(), Error> {
        if i >= self.items.len() || j >= self.items.len() {
            return Err(Error::OutOfRange);
        }
        self.items.swap(i, j);
        Ok(())
    }

    pub(crate) fn sort_hint(&self) -> SortHint
    where
        T: Hash,
    {
        SortHint::of_slice(&self.items)
    }

    pub(crate) fn sorted_by_with_hint<F>(&self, compare: F, hint: &SortHint) -> Self
    where
        T: Clone + Hash,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut out = self.clone();
        out.apply_hint(hint);
        // The comparator pass always runs; a hint only pre-orders, so the
        // observable result never depends on it.
        out.sort_with_options(SortOptions::default(), compare);
        out
    }

    /// Reorders elements to the hinted order where hashes match. A hint for
    /// a different element count is ignored; elements whose hash the hint
    /// does not know keep their relative order at the end.
    fn apply_hint(&mut self, hint: &SortHint)
    where
        T: Hash,
    {
        let len = self.items.len();
        if hint.hashes.len() != len {
            return;
        }
        // Hinted position per hash; repeated hashes hand out successive
        // positions, lowest first.
        let mut positions: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
        for (pos, &h) in hint.hashes.iter().enumerate().rev() {
            positions.entry(h).or_default().push(pos);
        }
        let mut ranked: Vec<(usize, T)> = self
            .items
            .drain(..)
            .map(|item| {
                let rank = positions
                    .get_mut(&sort::hash_one(&item))
                    .and_then(Vec::pop)
                    .unwrap_or(len);
                (rank, item)
            })
            .collect();
        ranked.sort_by_key(|pair| pair.0);
        self.items.extend(ranked.into_iter().map(|pair| pair.1));
    }

    // persistent derivation

    pub(crate) fn deriving_append(&self, value: T) -> Self
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(value);
        Self {
            items,
            removal: self.removal,
        }
    }

    pub(crate) fn deriving_append_all<I: IntoIterator<Item = T>>(&self, values: I) -> Self
    where
        T: Clone,
    {
        let mut out = self.clone();
        out.append_all(values);
        out
    }

    /// A copy with one element removed from the removal end; a copy of an
    /// empty sequence is an empty sequence, not an error.
    pub(crate) fn deriving_take(&self) -> Self
    where
        T: Clone,
    {
        let mut out = self.clone();
        out.take();
        out
    }

    pub(crate) fn filtered<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Self {
            items: self.items.iter().filter(|&x| predicate(x)).cloned().collect(),
            removal: self.removal,
        }
    }

    pub(crate) fn sub_sequence(&self, range: Range<usize>) -> Result<Self, Error>
    where
        T: Clone,
    {
        let slice = self.slice_range(range)?;
        Ok(Self {
            items: slice.to_vec(),
            removal: self.removal,
        })
    }

    // enumeration

    #[inline]
    pub(crate) fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub(crate) fn visit<F>(&self, options: EnumerationOptions, mut f: F)
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        if options.reverse {
            for i in (0..self.items.len()).rev() {
                if f(&self.items[i], i).is_break() {
                    return;
                }
            }
        } else {
            for (i, item) in self.items.iter().enumerate() {
                if f(item, i).is_break() {
                    return;
                }
            }
        }
    }

    pub(crate) fn visit_indices<F>(
        &self,
        indices: &[usize],
        options: EnumerationOptions,
        mut f: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        let order = self.checked_index_set(indices)?;
        if options.reverse {
            for &i in order.iter().rev() {
                if f(&self.items[i], i).is_break() {
                    break;
                }
            }
        } else {
            for &i in &order {
                if f(&self.items[i], i).is_break() {
                    break;
                }
            }
        }
        Ok(())
    }

    // string joining

    pub(crate) fn joined(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{RemovalEnd, Sequence};
    use crate::{
        Error,
        iter::EnumerationOptions,
        sort::{BinarySearchOptions, SortedMatch},
    };
    use alloc::vec;
    use alloc::vec::Vec;

    fn seq(removal: RemovalEnd, items: &[i32]) -> Sequence<i32> {
        Sequence::from_vec(removal, items.to_vec())
    }

    #[test]
    fn test_removal_end_selects_peek_and_take() {
        let mut back = seq(RemovalEnd::Back, &[1, 2, 3]);
        assert_eq!(back.peek(), Some(&3));
        assert_eq!(back.take(), Some(3));
        assert_eq!(back.as_slice(), &[1, 2]);

        let mut front = seq(RemovalEnd::Front, &[1, 2, 3]);
        assert_eq!(front.peek(), Some(&1));
        assert_eq!(front.take(), Some(1));
        assert_eq!(front.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_take_on_empty_is_none_for_both_ends() {
        let mut back: Sequence<i32> = Sequence::new(RemovalEnd::Back);
        let mut front: Sequence<i32> = Sequence::new(RemovalEnd::Front);
        assert_eq!(back.take(), None);
        assert_eq!(front.take(), None);
        assert_eq!(back.peek(), None);
        assert_eq!(front.peek(), None);
    }

    #[test]
    fn test_at_indices_sorts_and_keeps_duplicates() {
        let s = seq(RemovalEnd::Back, &[10, 20, 30]);
        let picked: Vec<i32> = s.at_indices(&[2, 0, 2]).unwrap().into_iter().copied().collect();
        assert_eq!(picked, vec![10, 30, 30]);
        assert_eq!(s.at_indices(&[0, 3]), Err(Error::OutOfRange));
        assert!(s.at_indices(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_slice_range_rejects_inverted_and_oversized() {
        let s = seq(RemovalEnd::Back, &[1, 2, 3]);
        assert_eq!(s.index_of_in_range(&1, 2..1), Err(Error::OutOfRange));
        assert_eq!(s.index_of_in_range(&1, 0..4), Err(Error::OutOfRange));
        // Empty range at the upper bound is valid.
        assert_eq!(s.index_of_in_range(&1, 3..3), Ok(None));
    }

    #[test]
    fn test_index_where_reverse_finds_highest() {
        let s = seq(RemovalEnd::Back, &[1, 9, 2, 9]);
        let fwd = s.index_where(EnumerationOptions::default(), |x, _| *x == 9);
        let rev = s.index_where(EnumerationOptions { reverse: true }, |x, _| *x == 9);
        assert_eq!(fwd, Some(1));
        assert_eq!(rev, Some(3));
    }

    #[test]
    fn test_indices_where_in_validates_and_returns_ascending() {
        let s = seq(RemovalEnd::Front, &[5, 6, 7, 8]);
        let hits = s
            .indices_where_in(
                &[3, 1, 1, 0],
                EnumerationOptions { reverse: true },
                |x, _| x % 2 == 0,
            )
            .unwrap();
        assert_eq!(hits, vec![1, 3]);
        assert_eq!(
            s.indices_where_in(&[4], EnumerationOptions::default(), |_, _| true),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn test_binary_search_first_last_any() {
        let s = seq(RemovalEnd::Back, &[1, 3, 3, 3, 5]);
        let cmp = i32::cmp;
        let first = BinarySearchOptions {
            matching: SortedMatch::First,
            insertion_index: false,
        };
        let last = BinarySearchOptions {
            matching: SortedMatch::Last,
            insertion_index: false,
        };
        let any = BinarySearchOptions::default();
        assert_eq!(s.binary_search_in_range(&3, 0..5, first, cmp), Ok(Some(1)));
        assert_eq!(s.binary_search_in_range(&3, 0..5, last, cmp), Ok(Some(3)));
        let hit = s.binary_search_in_range(&3, 0..5, any, cmp).unwrap().unwrap();
        assert!((1..=3).contains(&hit));
        assert_eq!(s.binary_search_in_range(&4, 0..5, any, cmp), Ok(None));
    }

    #[test]
    fn test_binary_search_insertion_points() {
        let s = seq(RemovalEnd::Back, &[1, 3, 3, 5]);
        let cmp = i32::cmp;
        let first_insert = BinarySearchOptions {
            matching: SortedMatch::First,
            insertion_index: true,
        };
        let last_insert = BinarySearchOptions {
            matching: SortedMatch::Last,
            insertion_index: true,
        };
        assert_eq!(
            s.binary_search_in_range(&3, 0..4, first_insert, cmp),
            Ok(Some(1))
        );
        assert_eq!(
            s.binary_search_in_range(&3, 0..4, last_insert, cmp),
            Ok(Some(3))
        );
        // Absent value: both collapse to the unique insertion point.
        assert_eq!(
            s.binary_search_in_range(&4, 0..4, first_insert, cmp),
            Ok(Some(3))
        );
        assert_eq!(
            s.binary_search_in_range(&0, 0..4, last_insert, cmp),
            Ok(Some(0))
        );
    }

    #[test]
    fn test_binary_search_respects_range_offset() {
        // Only [2..5) is sorted; search within it.
        let s = seq(RemovalEnd::Back, &[9, 9, 2, 4, 6]);
        let any = BinarySearchOptions::default();
        assert_eq!(
            s.binary_search_in_range(&4, 2..5, any, i32::cmp),
            Ok(Some(3))
        );
        assert_eq!(s.binary_search_in_range(&5, 2..5, any, i32::cmp), Ok(None));
    }

    #[test]
    fn test_apply_hint_restores_remembered_order() {
        let sorted = seq(RemovalEnd::Back, &[1, 2, 3, 4, 5]);
        let hint = sorted.sort_hint();

        // A permutation of the same elements pre-orders to the hinted order
        // even before the comparator pass.
        let mut shuffled = seq(RemovalEnd::Back, &[4, 1, 5, 2, 3]);
        shuffled.apply_hint(&hint);
        assert_eq!(shuffled.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_hint_with_wrong_length_is_ignored() {
        let hint = seq(RemovalEnd::Back, &[1, 2]).sort_hint();
        let mut s = seq(RemovalEnd::Back, &[3, 1, 2]);
        s.apply_hint(&hint);
        assert_eq!(s.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_sorted_by_with_hint_matches_plain_sort() {
        let s = seq(RemovalEnd::Back, &[3, 1, 4, 1, 5, 9, 2, 6]);
        let hint = seq(RemovalEnd::Back, &[1, 1, 2, 3, 4, 5, 6, 9]).sort_hint();
        let with_hint = s.sorted_by_with_hint(i32::cmp, &hint);
        assert_eq!(with_hint.as_slice(), &[1, 1, 2, 3, 4, 5, 6, 9]);

        // A hint from unrelated data must not change the result either.
        let stale = seq(RemovalEnd::Back, &[7, 7, 7, 7, 7, 7, 7, 7]).sort_hint();
        let with_stale = s.sorted_by_with_hint(i32::cmp, &stale);
        assert_eq!(with_stale.as_slice(), &[1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_visit_stops_on_break() {
        use core::ops::ControlFlow;
        let s = seq(RemovalEnd::Back, &[1, 2, 3, 4]);
        let mut seen = Vec::new();
        s.visit(EnumerationOptions::default(), |x, i| {
            seen.push((i, *x));
            if *x == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_visit_indices_reverse_order() {
        use core::ops::ControlFlow;
        let s = seq(RemovalEnd::Front, &[10, 11, 12, 13]);
        let mut seen = Vec::new();
        s.visit_indices(
            &[0, 2, 3],
            EnumerationOptions { reverse: true },
            |x, i| {
                seen.push((i, *x));
                ControlFlow::Continue(())
            },
        )
        .unwrap();
        assert_eq!(seen, vec![(3, 13), (2, 12), (0, 10)]);
        assert_eq!(
            s.visit_indices(&[9], EnumerationOptions::default(), |_, _| {
                ControlFlow::Continue(())
            }),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn test_deriving_take_on_empty_stays_empty() {
        let empty: Sequence<i32> = Sequence::new(RemovalEnd::Front);
        let derived = empty.deriving_take();
        assert!(derived.is_empty());
    }

    #[test]
    fn test_joined_separator_placement() {
        let s = seq(RemovalEnd::Back, &[1, 2, 3]);
        assert_eq!(s.joined(", "), "1, 2, 3");
        assert_eq!(s.joined(""), "123");
        let empty: Sequence<i32> = Sequence::new(RemovalEnd::Back);
        assert_eq!(empty.joined(", "), "");
        let one = seq(RemovalEnd::Back, &[7]);
        assert_eq!(one.joined(", "), "7");
    }
}
