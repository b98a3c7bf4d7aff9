use std::fmt;
use std::iter::FusedIterator;

use crate::error::{require, Result};

/// Lazily applies `selector` to every element of `source`.
///
/// Arguments are checked when this is called, not when the adapter is first
/// pulled. Each call to `next()` on the returned adapter pulls exactly one
/// element from the source.
pub fn map<I, F, U>(source: Option<I>, selector: Option<F>) -> Result<Map<I::IntoIter, F>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    let source = require(source, "source")?;
    let selector = require(selector, "selector")?;
    Ok(Map::new(source.into_iter(), selector))
}

/// Iterator returned by [`map`] and [`SequenceExt::select`](crate::SequenceExt::select).
#[derive(Clone)]
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
    iter: I,
    selector: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        Self { iter, selector }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<I, F, U> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        self.iter.next().map(&mut self.selector)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F, U> DoubleEndedIterator for Map<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        self.iter.next_back().map(&mut self.selector)
    }
}

impl<I, F, U> ExactSizeIterator for Map<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> U,
{
}

impl<I, F, U> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;
    use std::cell::Cell;

    #[test]
    fn map_applies_selector_in_order() {
        let mapped: Vec<i32> = map(Some(vec![1, 2, 3]), Some(|x: i32| x * 10))
            .unwrap()
            .collect();
        assert_eq!(mapped, vec![10, 20, 30]);
    }

    #[test]
    fn map_rejects_missing_source_before_iteration() {
        let source: Option<Vec<i32>> = None;
        let err = map(source, Some(|x: i32| x)).unwrap_err();
        assert_eq!(err, SequenceError::InvalidArgument { name: "source" });
    }

    #[test]
    fn map_rejects_missing_selector() {
        let selector: Option<fn(i32) -> i32> = None;
        let err = map(Some(vec![1]), selector).unwrap_err();
        assert_eq!(err, SequenceError::InvalidArgument { name: "selector" });
    }

    #[test]
    fn map_pulls_one_upstream_element_per_pull() {
        let pulled = Cell::new(0);
        let source = (0..).inspect(|_| pulled.set(pulled.get() + 1));
        let mut mapped = map(Some(source), Some(|x: u64| x + 1)).unwrap();

        assert_eq!(pulled.get(), 0);
        assert_eq!(mapped.next(), Some(1));
        assert_eq!(pulled.get(), 1);
        assert_eq!(mapped.next(), Some(2));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn map_keeps_exact_size_and_runs_backwards() {
        let mut mapped = map(Some(vec!['a', 'b', 'c']), Some(|c: char| c.to_ascii_uppercase())).unwrap();
        assert_eq!(mapped.len(), 3);
        assert_eq!(mapped.next_back(), Some('C'));
        assert_eq!(mapped.next(), Some('A'));
        assert_eq!(mapped.len(), 1);
    }
}
