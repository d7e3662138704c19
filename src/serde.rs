// This file is part of stack-queue.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Stack`](crate::Stack), [`Queue`](crate::Queue), and
//! [`SortHint`](crate::SortHint).
//!
//! Containers serialize as a plain sequence of elements in index order
//! (bottom-to-top for a stack, front-to-back for a queue) and deserialize
//! from any sequence, so the count and element order round-trip exactly. A
//! `SortHint` serializes as its hash sequence.

// Crate imports
use crate::{queue::Queue, sort::SortHint, stack::Stack};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn serialize_slice<T: Serialize, S: Serializer>(items: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

impl<T: Serialize> Serialize for Queue<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(self.as_slice(), s)
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements, bottom first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}

struct QueueVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for QueueVisitor<T> {
    type Value = Queue<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of queue elements, front first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Queue::with_capacity(a.size_hint().unwrap_or(0));
        while let Some(elem) = a.next_element::<T>()? {
            out.enqueue(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Queue<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(QueueVisitor(PhantomData))
    }
}

impl Serialize for SortHint {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_slice(&self.hashes, s)
    }
}

impl<'de> Deserialize<'de> for SortHint {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Self {
            hashes: Vec::<u64>::deserialize(d)?,
        })
    }
}
