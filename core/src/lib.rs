//! Array-backed immutable collections.
//!
//! Every type here is built once from caller-supplied elements and never
//! changes afterwards. Mutating entry points exist so code written against a
//! mutable collection API still finds them, but they all return
//! [`Error::Unsupported`].
//!
//! | Type | Storage | Equality |
//! |------|---------|----------|
//! | [`ImmutableCollection`] | shared slots | identity only |
//! | [`ImmutableList`] | shared slots | ordered, against any [`Sequence`] |
//! | [`ImmutableSet`] | shared slots | unordered, against any [`Membership`] |
//! | [`ImmutableMap`] | shared entry slots | against any [`KeyedLookup`] |
//! | [`MiniSet`] / [`MiniMap`] | inline, up to 5 / 3 | as set / map |
//! | [`SmallSet`] / [`SmallMap`] | inline or shared, chosen by size | as set / map |
//!
//! ```
//! use rocoll_core::{SmallSet, map_of};
//!
//! let map = map_of(vec![("alpha", 123), ("beta", 456)]);
//! assert_eq!(map.get(&"alpha"), Some(&123));
//! assert_eq!(map.to_string(), "{alpha=123, beta=456}");
//!
//! let set: SmallSet<u8> = [3, 1, 2].into_iter().collect();
//! assert!(set.is_inline());
//! assert_eq!(set, std::collections::HashSet::from([1, 2, 3]));
//! ```

#[macro_use]
mod macros;

mod base;
pub mod capability;
mod collection;
mod entry;
pub mod error;
pub mod hash_code;
pub mod iter;
mod list;
pub mod map;
mod mini_map;
mod mini_set;
pub mod mutation;
mod render;
mod set;
pub mod views;

#[cfg(feature = "serde")]
mod serde_impls;

pub use base::Backing;
pub use capability::{Container, Iterable, KeyedLookup, Membership, Sequence};
pub use collection::ImmutableCollection;
pub use entry::{MapEntry, entry};
pub use error::{Error, Result};
pub use list::{ImmutableList, list_of};
pub use map::{ImmutableMap, map_of};
pub use mini_map::{MiniMap, SmallMap};
pub use mini_set::{MiniSet, SmallSet};
pub use mutation::{RejectsListMutation, RejectsMapMutation, RejectsMutation};
pub use set::{ImmutableSet, set_of};

#[cfg(test)]
mod list_test;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize a tracing subscriber for tests at TRACE level unless
    /// `RUST_LOG` says otherwise. Safe to call from every test.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
