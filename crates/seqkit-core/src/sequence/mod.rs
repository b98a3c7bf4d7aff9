pub mod map;
pub mod filter;
pub mod group;
pub mod list;
pub mod order;
pub mod dictionary;

pub use map::{map, Map};
pub use filter::{filter, Filter};
pub use group::{group_by, Grouping, Lookup};
pub use list::to_list;
pub use order::{order_by_ascending, order_by_descending, OrderedSequence};
pub use dictionary::{to_dictionary, to_dictionary_with};
