use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{require, Result, SequenceError};
use crate::settings::{DictionarySettings, DuplicateKeyPolicy};

/// Reads `source` into a map keyed by `key_selector`. A key produced twice
/// is an error, raised as soon as the second element is pulled.
pub fn to_dictionary<I, K, F>(source: Option<I>, key_selector: Option<F>) -> Result<HashMap<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    to_dictionary_with(source, key_selector, None)
}

/// Like [`to_dictionary`], with the duplicate-key policy and initial capacity
/// taken from `settings` (defaults when `None`).
pub fn to_dictionary_with<I, K, F>(
    source: Option<I>,
    key_selector: Option<F>,
    settings: Option<&DictionarySettings>,
) -> Result<HashMap<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let source = require(source, "source")?;
    let key_selector = require(key_selector, "key_selector")?;
    let default_settings = DictionarySettings::default();
    let settings = settings.unwrap_or(&default_settings);
    build_dictionary(source, key_selector, settings)
}

pub(crate) fn build_dictionary<I, K, F>(
    source: I,
    mut key_selector: F,
    settings: &DictionarySettings,
) -> Result<HashMap<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let iter = source.into_iter();
    let capacity = if settings.capacity > 0 {
        settings.capacity
    } else {
        iter.size_hint().0
    };
    let mut map = HashMap::with_capacity(capacity);

    for (index, item) in iter.enumerate() {
        match map.entry(key_selector(&item)) {
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
            Entry::Occupied(mut slot) => match settings.duplicate_keys {
                DuplicateKeyPolicy::Reject => {
                    return Err(SequenceError::DuplicateKey { index });
                }
                DuplicateKeyPolicy::KeepFirst => {
                    trace!(index, "duplicate key ignored");
                }
                DuplicateKeyPolicy::KeepLast => {
                    trace!(index, "duplicate key replaced");
                    slot.insert(item);
                }
            },
        }
    }

    debug!(
        entries = map.len(),
        policy = ?settings.duplicate_keys,
        "built dictionary"
    );
    Ok(map)
}
