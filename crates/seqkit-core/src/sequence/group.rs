use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{require, Result};
use crate::sequence::list::buffer;

/// Buffers `source` and partitions it by `key_selector`.
///
/// Groups come back in the order their keys first appear; elements inside a
/// group keep their source order.
pub fn group_by<I, K, F>(source: Option<I>, key_selector: Option<F>) -> Result<Lookup<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let source = require(source, "source")?;
    let key_selector = require(key_selector, "key_selector")?;
    Ok(build_lookup(buffer(source), key_selector))
}

pub(crate) fn build_lookup<T, K, F>(items: Vec<T>, mut key_selector: F) -> Lookup<K, T>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let total = items.len();
    let mut groups: Vec<Grouping<K, T>> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for item in items {
        let key = key_selector(&item);
        match index.get(&key) {
            Some(&position) => groups[position].elements.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Grouping {
                    key,
                    elements: vec![item],
                });
            }
        }
    }

    debug!(elements = total, groups = groups.len(), "grouped sequence");
    Lookup { groups, index }
}

/// A key and the elements that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K, T> {
    key: K,
    elements: Vec<T>,
}

impl<K, T> Grouping<K, T> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.elements)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Grouping<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Groupings in first-appearance order, with keyed access.
#[derive(Debug, Clone)]
pub struct Lookup<K, T> {
    groups: Vec<Grouping<K, T>>,
    index: HashMap<K, usize>,
}

impl<K, T> Lookup<K, T>
where
    K: Eq + Hash,
{
    pub fn get<Q>(&self, key: &Q) -> Option<&Grouping<K, T>>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&position| &self.groups[position])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K, T> Lookup<K, T> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grouping<K, T>> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Grouping::key)
    }

    pub fn into_groups(self) -> Vec<Grouping<K, T>> {
        self.groups
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for Lookup<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

impl<K, T> IntoIterator for Lookup<K, T> {
    type Item = Grouping<K, T>;
    type IntoIter = std::vec::IntoIter<Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Lookup<K, T> {
    type Item = &'a Grouping<K, T>;
    type IntoIter = std::slice::Iter<'a, Grouping<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
