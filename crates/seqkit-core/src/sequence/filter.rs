use std::fmt;
use std::iter::FusedIterator;

use crate::error::{require, Result};

/// Lazily keeps the elements of `source` for which `predicate` holds.
///
/// The predicate runs once per source element, at the moment that element is
/// pulled.
pub fn filter<I, P>(source: Option<I>, predicate: Option<P>) -> Result<Filter<I::IntoIter, P>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let source = require(source, "source")?;
    let predicate = require(predicate, "predicate")?;
    Ok(Filter::new(source.into_iter(), predicate))
}

/// Iterator returned by [`filter`] and [`SequenceExt::filter_by`](crate::SequenceExt::filter_by).
#[derive(Clone)]
#[must_use = "sequence adapters are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P> DoubleEndedIterator for Filter<I, P>
where
    I: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    fn next_back(&mut self) -> Option<I::Item> {
        while let Some(item) = self.iter.next_back() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}
