//! Hash map used for sparse tick storage.
//!
//! The hasher is picked at compile time: `rustc-hash` selects `FxHashMap`,
//! `ahash` selects `AHashMap`. With no hasher feature, or with conflicting
//! ones, the std `HashMap` is used.

#[cfg(all(
    feature = "rustc-hash",
    not(any(feature = "ahash", feature = "std-hash"))
))]
pub type FastMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(all(
    feature = "ahash",
    not(any(feature = "rustc-hash", feature = "std-hash"))
))]
pub type FastMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(not(any(
    all(
        feature = "rustc-hash",
        not(any(feature = "ahash", feature = "std-hash"))
    ),
    all(
        feature = "ahash",
        not(any(feature = "rustc-hash", feature = "std-hash"))
    ),
)))]
pub type FastMap<K, V> = std::collections::HashMap<K, V>;
