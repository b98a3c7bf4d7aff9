use tracing::trace;

use crate::error::{require, Result};

/// Copies `source` into an owned `Vec`, preserving order.
pub fn to_list<I>(source: Option<I>) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
{
    let source = require(source, "source")?;
    Ok(buffer(source))
}

/// Drains a finite source into memory. Shared by every eager operation.
pub(crate) fn buffer<I: IntoIterator>(source: I) -> Vec<I::Item> {
    let iter = source.into_iter();
    let mut items = Vec::with_capacity(iter.size_hint().0);
    items.extend(iter);
    trace!(len = items.len(), "buffered sequence");
    items
}
