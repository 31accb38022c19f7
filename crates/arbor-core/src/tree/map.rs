//! Ordered map wrapper over a single owned [`Tree`] root

use std::borrow::Borrow;
use std::mem;

use super::Tree;

/// Ordered key-value map backed by an unbalanced binary search tree.
///
/// Missing keys are not errors: [`get`](Self::get) and
/// [`remove`](Self::remove) return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTreeMap<K, V> {
    root: Tree<K, V>,
}

impl<K, V> Default for SearchTreeMap<K, V> {
    fn default() -> Self {
        Self { root: Tree::Empty }
    }
}

impl<K: Ord, V> SearchTreeMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value for `key`
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let (root, displaced) = mem::take(&mut self.root).insert(key, value);
        self.root = root;
        displaced
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.search(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.search(key).is_some()
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = mem::take(&mut self.root).delete(key);
        self.root = root;
        removed
    }

    pub fn size(&self) -> usize {
        self.root.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn min_key(&self) -> Option<&K> {
        self.root.min().ok()
    }

    pub fn max_key(&self) -> Option<&K> {
        self.root.max().ok()
    }

    /// All keys in ascending order
    pub fn key_list(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.size());
        self.root.add_keys_to_collection(&mut keys);
        keys
    }

    /// Borrowed entries in ascending key order
    pub fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::new();
        self.root.in_order(&mut |key, value| entries.push((key, value)));
        entries
    }

    /// New map holding copies of the entries with keys in `[from, to]`
    pub fn sub_map(&self, from: &K, to: &K) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            root: self.root.sub_tree(from, to),
        }
    }

    pub fn root(&self) -> &Tree<K, V> {
        &self.root
    }
}

impl<K: Ord, V> Extend<(K, V)> for SearchTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SearchTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
