use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Result;
use crate::sequence::dictionary::build_dictionary;
use crate::sequence::group::build_lookup;
use crate::sequence::list::buffer;
use crate::sequence::order::Direction;
use crate::sequence::{Filter, Lookup, Map, OrderedSequence};
use crate::settings::DictionarySettings;

/// Method-call form of the sequence operations, available on every iterator.
///
/// Arguments here cannot be absent, so only the errors a present argument can
/// still cause are returned.
pub trait SequenceExt: Iterator + Sized {
    fn select<U, F>(self, selector: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    fn filter_by<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn group_by_key<K, F>(self, key_selector: F) -> Lookup<K, Self::Item>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        build_lookup(buffer(self), key_selector)
    }

    fn to_list(self) -> Vec<Self::Item> {
        buffer(self)
    }

    fn order_by_ascending<K, F>(self, key_selector: F) -> Result<OrderedSequence<Self::Item>>
    where
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        OrderedSequence::sort(buffer(self), key_selector, Direction::Ascending)
    }

    fn order_by_descending<K, F>(self, key_selector: F) -> Result<OrderedSequence<Self::Item>>
    where
        K: PartialOrd,
        F: FnMut(&Self::Item) -> K,
    {
        OrderedSequence::sort(buffer(self), key_selector, Direction::Descending)
    }

    fn to_dictionary<K, F>(self, key_selector: F) -> Result<HashMap<K, Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        build_dictionary(self, key_selector, &DictionarySettings::default())
    }

    fn to_dictionary_with<K, F>(
        self,
        key_selector: F,
        settings: &DictionarySettings,
    ) -> Result<HashMap<K, Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        build_dictionary(self, key_selector, settings)
    }
}

impl<I: Iterator> SequenceExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequenceError;

    #[test]
    fn chained_pipeline() {
        let words = ["pear", "fig", "apple", "kiwi", "plum", "banana"];

        let lookup = words
            .iter()
            .filter_by(|w| w.len() > 3)
            .select(|w| w.to_uppercase())
            .group_by_key(|w| w.len());

        let keys: Vec<usize> = lookup.keys().copied().collect();
        assert_eq!(keys, vec![4, 5, 6]);
        assert_eq!(lookup.get(&4).unwrap().elements(), &["PEAR", "KIWI", "PLUM"]);
    }

    #[test]
    fn ordering_from_iterator() {
        let sorted = vec![4, 9, 1].into_iter().order_by_descending(|x| *x).unwrap();
        assert_eq!(sorted.as_slice(), &[9, 4, 1]);
    }

    #[test]
    fn dictionary_from_iterator_rejects_duplicates() {
        let err = ["x", "y", "x"].into_iter().to_dictionary(|s| *s).unwrap_err();
        assert_eq!(err, SequenceError::DuplicateKey { index: 2 });
    }

    #[test]
    fn dictionary_from_endless_iterator_stops_at_duplicate() {
        let err = (0u32..).map(|x| x % 3).to_dictionary(|x| *x).unwrap_err();
        assert_eq!(err, SequenceError::DuplicateKey { index: 3 });
    }

    #[test]
    fn to_list_twice_is_stable() {
        let once = (1..=5).to_list();
        let twice = once.clone().into_iter().to_list();
        assert_eq!(once, twice);
    }
}
