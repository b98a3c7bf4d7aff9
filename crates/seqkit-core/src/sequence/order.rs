//! Stable ordering by caller-supplied keys.
//!
//! Keys only need `PartialOrd`. Elements are sorted through a permutation of
//! their positions with the std stable sort. A key that is not comparable to
//! itself (NaN) is rejected before sorting; any other pair whose
//! `partial_cmp` is `None` is recorded during the sort. Either way the call
//! fails with `SequenceError::Comparison` instead of returning an arbitrary
//! order.
//!
//! Each key is computed once per element per ordering pass.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{require, Result, SequenceError};
use crate::sequence::list::buffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Buffers `source` and sorts it smallest key first. Equal keys keep their
/// source order.
pub fn order_by_ascending<I, K, F>(
    source: Option<I>,
    key_selector: Option<F>,
) -> Result<OrderedSequence<I::Item>>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    let source = require(source, "source")?;
    let key_selector = require(key_selector, "key_selector")?;
    OrderedSequence::sort(buffer(source), key_selector, Direction::Ascending)
}

/// Buffers `source` and sorts it largest key first. Equal keys keep their
/// source order.
pub fn order_by_descending<I, K, F>(
    source: Option<I>,
    key_selector: Option<F>,
) -> Result<OrderedSequence<I::Item>>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    let source = require(source, "source")?;
    let key_selector = require(key_selector, "key_selector")?;
    OrderedSequence::sort(buffer(source), key_selector, Direction::Descending)
}

/// Sorted elements, remembering which neighbours tied on every key so far.
#[derive(Debug, Clone)]
pub struct OrderedSequence<T> {
    items: Vec<T>,
    /// Source index of each element in `items`.
    positions: Vec<usize>,
    /// Half-open ranges of at least two elements whose keys compared equal.
    runs: Vec<(usize, usize)>,
}

impl<T> OrderedSequence<T> {
    pub(crate) fn sort<K, F>(items: Vec<T>, key_selector: F, direction: Direction) -> Result<Self>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let len = items.len();
        let unsorted = Self {
            items,
            positions: (0..len).collect(),
            runs: if len > 1 { vec![(0, len)] } else { Vec::new() },
        };
        let sorted = unsorted.refine(key_selector, direction)?;
        debug!(len, runs = sorted.runs.len(), ?direction, "ordered sequence");
        Ok(sorted)
    }

    /// Orders elements that tied on every previous key by a further key,
    /// smallest first.
    pub fn then_by_ascending<K, F>(self, key_selector: F) -> Result<Self>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.refine(key_selector, Direction::Ascending)
    }

    /// Orders elements that tied on every previous key by a further key,
    /// largest first.
    pub fn then_by_descending<K, F>(self, key_selector: F) -> Result<Self>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.refine(key_selector, Direction::Descending)
    }

    fn refine<K, F>(self, mut key_selector: F, direction: Direction) -> Result<Self>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        if self.runs.is_empty() {
            return Ok(self);
        }

        let mut order: Vec<usize> = (0..self.items.len()).collect();
        let mut runs = Vec::new();

        for &(start, end) in &self.runs {
            let keys: Vec<K> = self.items[start..end].iter().map(&mut key_selector).collect();
            let permutation = sort_positions(&keys, direction).map_err(|(a, b)| {
                let (left, right) = (self.positions[start + a], self.positions[start + b]);
                SequenceError::Comparison {
                    left: left.min(right),
                    right: left.max(right),
                }
            })?;

            let mut run_start = 0;
            for i in 1..=permutation.len() {
                let tied = i < permutation.len()
                    && keys[permutation[i - 1]].partial_cmp(&keys[permutation[i]]) == Some(Ordering::Equal);
                if !tied {
                    if i - run_start > 1 {
                        runs.push((start + run_start, start + i));
                    }
                    run_start = i;
                }
            }

            for (slot, local) in order[start..end].iter_mut().zip(permutation) {
                *slot = start + local;
            }
        }

        Ok(Self {
            items: permute(self.items, &order),
            positions: order.iter().map(|&i| self.positions[i]).collect(),
            runs,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// For each element, its zero-based index in the original source.
    pub fn source_positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: PartialEq> PartialEq for OrderedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for OrderedSequence<T> {}

impl<T> AsRef<[T]> for OrderedSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for OrderedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Stable sort of `0..keys.len()` by key.
///
/// Returns the sorted permutation, or the first pair of indices whose keys
/// could not be compared.
fn sort_positions<K: PartialOrd>(
    keys: &[K],
    direction: Direction,
) -> std::result::Result<Vec<usize>, (usize, usize)> {
    if keys.len() < 2 {
        return Ok((0..keys.len()).collect());
    }

    // A self-incomparable key would break the total order sort_by relies on.
    if let Some(bad) = keys.iter().position(|k| k.partial_cmp(k).is_none()) {
        let other = if bad == 0 { 1 } else { 0 };
        return Err((other.min(bad), other.max(bad)));
    }

    let mut failed: Option<(usize, usize)> = None;
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| match keys[a].partial_cmp(&keys[b]) {
        Some(ordering) => direction.apply(ordering),
        None => {
            failed.get_or_insert((a, b));
            Ordering::Equal
        }
    });

    match failed {
        Some(pair) => Err(pair),
        None => Ok(order),
    }
}

/// Rearranges `items` so that element `k` of the result is `items[order[k]]`.
/// `order` must be a permutation of `0..items.len()`.
fn permute<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order.iter().filter_map(|&i| slots[i].take()).collect()
}
