//! Collection types used across Glint.
//!
//! Hash collections use AHash. [`OrderedMap`] keeps insertion order, which is
//! what frames rely on for deterministic update, paint and focus order.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Insertion-ordered map hashed with AHash.
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("key", "value");
        assert_eq!(map.get("key"), Some(&"value"));
    }

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = OrderedMap::default();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("mid", 3);
        map.shift_remove("alpha");
        map.insert("alpha", 4);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["zeta", "mid", "alpha"]);
    }
}
