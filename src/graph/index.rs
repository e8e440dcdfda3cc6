//! Key → vertex index backends for [`IndexedGraph`](super::IndexedGraph).
//!
//! A backend is an injective map from keys to vertices together with its
//! inverse, so that erasing a vertex can drop its entry without recomputing
//! the key from a payload that may already be gone.

use super::handle::VertexId;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Storage contract for a key → vertex index.
///
/// The graph layer guarantees it never inserts a key that is already present
/// and never inserts the same vertex twice.
pub trait VertexIndex<K> {
    /// Removes every entry.
    fn clear(&mut self);

    /// Records that `vertex` holds `key`.
    fn insert(&mut self, key: K, vertex: VertexId);

    /// Removes the entry whose target is `vertex`, returning its key.
    fn erase_target(&mut self, vertex: VertexId) -> Option<K>;

    /// The vertex holding `key`.
    fn forward_lookup(&self, key: &K) -> Option<VertexId>;

    /// The key held by `vertex`.
    fn reverse_lookup(&self, vertex: VertexId) -> Option<&K>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered-map backend. Lookups are O(log V). The default.
#[derive(Debug, Clone)]
pub struct BTreeIndex<K> {
    forward: BTreeMap<K, VertexId>,
    reverse: BTreeMap<VertexId, K>,
}

impl<K> BTreeIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            forward: BTreeMap::new(),
            reverse: BTreeMap::new(),
        }
    }

    /// Keys in ascending order with the vertex holding each.
    pub fn iter(&self) -> impl Iterator<Item = (&K, VertexId)> + '_ {
        self.forward.iter().map(|(key, &vertex)| (key, vertex))
    }
}

impl<K> Default for BTreeIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone> VertexIndex<K> for BTreeIndex<K> {
    fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    fn insert(&mut self, key: K, vertex: VertexId) {
        self.forward.insert(key.clone(), vertex);
        self.reverse.insert(vertex, key);
    }

    fn erase_target(&mut self, vertex: VertexId) -> Option<K> {
        let key = self.reverse.remove(&vertex)?;
        self.forward.remove(&key);
        Some(key)
    }

    fn forward_lookup(&self, key: &K) -> Option<VertexId> {
        self.forward.get(key).copied()
    }

    fn reverse_lookup(&self, vertex: VertexId) -> Option<&K> {
        self.reverse.get(&vertex)
    }

    fn len(&self) -> usize {
        self.forward.len()
    }
}

/// Hash-map backend. Lookups are expected O(1); iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct HashIndex<K> {
    forward: HashMap<K, VertexId>,
    reverse: HashMap<VertexId, K>,
}

impl<K> HashIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            forward: HashMap::with_capacity(capacity),
            reverse: HashMap::with_capacity(capacity),
        }
    }
}

impl<K> Default for HashIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> VertexIndex<K> for HashIndex<K> {
    fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }

    fn insert(&mut self, key: K, vertex: VertexId) {
        self.forward.insert(key.clone(), vertex);
        self.reverse.insert(vertex, key);
    }

    fn erase_target(&mut self, vertex: VertexId) -> Option<K> {
        let key = self.reverse.remove(&vertex)?;
        self.forward.remove(&key);
        Some(key)
    }

    fn forward_lookup(&self, key: &K) -> Option<VertexId> {
        self.forward.get(key).copied()
    }

    fn reverse_lookup(&self, vertex: VertexId) -> Option<&K> {
        self.reverse.get(&vertex)
    }

    fn len(&self) -> usize {
        self.forward.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::SlotId;

    fn vid(index: usize) -> VertexId {
        VertexId(SlotId::new(index, 0))
    }

    fn exercise<I: VertexIndex<String> + Default>() {
        let mut index = I::default();
        assert!(index.is_empty());

        index.insert("a".to_string(), vid(0));
        index.insert("b".to_string(), vid(1));

        assert_eq!(index.len(), 2);
        assert_eq!(index.forward_lookup(&"a".to_string()), Some(vid(0)));
        assert_eq!(index.reverse_lookup(vid(1)).map(String::as_str), Some("b"));
        assert_eq!(index.forward_lookup(&"z".to_string()), None);

        assert_eq!(index.erase_target(vid(0)).as_deref(), Some("a"));
        assert_eq!(index.erase_target(vid(0)), None);
        assert_eq!(index.forward_lookup(&"a".to_string()), None);
        assert_eq!(index.len(), 1);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.reverse_lookup(vid(1)), None);
    }

    #[test]
    fn test_btree_index() {
        exercise::<BTreeIndex<String>>();
    }

    #[test]
    fn test_hash_index() {
        exercise::<HashIndex<String>>();
    }

    #[test]
    fn test_btree_index_iterates_in_key_order() {
        let mut index = BTreeIndex::new();
        index.insert(3, vid(0));
        index.insert(1, vid(1));
        index.insert(2, vid(2));
        let keys: Vec<i32> = index.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 2, 3]);
    }
}
