//! Generic sequence operations.
//!
//! `map` and `filter` are lazy iterator adapters. `group_by`, `to_list`,
//! `order_by_ascending`, `order_by_descending` and `to_dictionary` buffer
//! their source and return owned results.
//!
//! The free functions in [`sequence`] take every argument as an `Option` and
//! reject a missing one with [`SequenceError::InvalidArgument`] before touching
//! the source. [`SequenceExt`] offers the same operations as iterator methods.
//!
//! ```
//! use seqkit_core::SequenceExt;
//!
//! let sorted = vec![("b", 2), ("a", 1), ("c", 2)]
//!     .into_iter()
//!     .order_by_descending(|p| p.1)
//!     .unwrap();
//!
//! let names: Vec<&str> = sorted.iter().map(|p| p.0).collect();
//! assert_eq!(names, vec!["b", "c", "a"]);
//! ```

pub mod error;
pub mod settings;
pub mod sequence;
pub mod ext;

pub use error::{Result, SequenceError};
pub use settings::{DictionarySettings, DuplicateKeyPolicy};
pub use ext::SequenceExt;
pub use sequence::{
    filter, group_by, map, order_by_ascending, order_by_descending, to_dictionary,
    to_dictionary_with, to_list, Filter, Grouping, Lookup, Map, OrderedSequence,
};
