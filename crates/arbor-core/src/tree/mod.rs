//! Unbalanced binary search tree and the ordered map built on it
//!
//! A [`Tree`] is either [`Tree::Empty`] or a [`Tree::Keyed`] node owning its
//! two subtrees. Structural operations consume the subtree they work on and
//! hand back the new owning root (a new leaf, a promoted successor, or the
//! left subtree).
//!
//! No rebalancing is performed: the height depends only on insertion order,
//! and sorted input yields a chain as deep as the tree is large. No operation
//! recurses per level. Descents walk a mutable slot in a loop, whole-tree
//! folds run on an explicit stack, and a node's children are unlinked
//! iteratively on drop.

pub mod map;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::mem;

use thiserror::Error;

pub use map::SearchTreeMap;

/// Returned by [`Tree::min`], [`Tree::max`] and [`Tree::pop_min`] on an empty subtree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tree is empty")]
pub struct EmptyTree;

/// The two subtrees owned by a node
#[derive(Debug)]
struct Branches<K, V> {
    left: Tree<K, V>,
    right: Tree<K, V>,
}

impl<K, V> Branches<K, V> {
    fn new(left: Tree<K, V>, right: Tree<K, V>) -> Self {
        Self { left, right }
    }
}

impl<K, V> Drop for Branches<K, V> {
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        let mut detached = vec![mem::take(&mut self.left), mem::take(&mut self.right)];
        while let Some(tree) = detached.pop() {
            if let Tree::Keyed(mut node) = tree {
                // Emptied before `node` goes, so its own drop stops here
                for child in [&mut node.branches.left, &mut node.branches.right] {
                    if !child.is_empty() {
                        detached.push(mem::take(child));
                    }
                }
            }
        }
    }
}

/// A keyed node: every key in `left` is smaller than `key`, every key in `right` larger.
#[derive(Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    branches: Branches<K, V>,
}

impl<K, V> Node<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> &Tree<K, V> {
        &self.branches.left
    }

    pub fn right(&self) -> &Tree<K, V> {
        &self.branches.right
    }
}

/// Binary search tree over totally ordered keys
pub enum Tree<K, V> {
    /// No entries; also the terminal marker below every leaf
    Empty,
    /// One entry plus exclusively owned subtrees
    Keyed(Box<Node<K, V>>),
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Tree::Empty
    }
}

/// Step of the explicit-stack post-order walk
enum Step<'a, K, V> {
    Enter(&'a Tree<K, V>),
    Exit(&'a Node<K, V>),
}

impl<K, V> Tree<K, V> {
    /// Single-entry tree with empty children
    pub fn leaf(key: K, value: V) -> Self {
        Tree::branch(key, value, Tree::Empty, Tree::Empty)
    }

    fn branch(key: K, value: V, left: Tree<K, V>, right: Tree<K, V>) -> Self {
        Tree::Keyed(Box::new(Node {
            key,
            value,
            branches: Branches::new(left, right),
        }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Bottom-up fold: `Empty` yields `R::default()`, a node combines its
    /// entry with the folded left and right subtrees.
    fn fold<R, F>(&self, mut combine: F) -> R
    where
        R: Default,
        F: FnMut(&Node<K, V>, R, R) -> R,
    {
        let mut steps = vec![Step::Enter(self)];
        let mut folded: Vec<R> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(Tree::Empty) => folded.push(R::default()),
                Step::Enter(Tree::Keyed(node)) => {
                    steps.push(Step::Exit(&**node));
                    steps.push(Step::Enter(&node.branches.right));
                    steps.push(Step::Enter(&node.branches.left));
                }
                Step::Exit(node) => {
                    let right = folded.pop().unwrap_or_default();
                    let left = folded.pop().unwrap_or_default();
                    folded.push(combine(node, left, right));
                }
            }
        }

        folded.pop().unwrap_or_default()
    }

    /// Number of entries: 1 + left + right for a keyed node, 0 for empty
    pub fn size(&self) -> usize {
        self.fold(|_, left, right| 1 + left + right)
    }

    /// Longest root-to-leaf path, counted in nodes
    pub fn height(&self) -> usize {
        self.fold(|_, left: usize, right| 1 + left.max(right))
    }

    /// Leftmost key
    pub fn min(&self) -> Result<&K, EmptyTree> {
        let Tree::Keyed(root) = self else {
            return Err(EmptyTree);
        };
        let mut node = root;
        while let Tree::Keyed(next) = &node.branches.left {
            node = next;
        }
        Ok(&node.key)
    }

    /// Rightmost key
    pub fn max(&self) -> Result<&K, EmptyTree> {
        let Tree::Keyed(root) = self else {
            return Err(EmptyTree);
        };
        let mut node = root;
        while let Tree::Keyed(next) = &node.branches.right {
            node = next;
        }
        Ok(&node.key)
    }

    /// Visit entries in ascending key order (left, self, right)
    pub fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        let mut pending: Vec<&'a Node<K, V>> = Vec::new();
        let mut current = self;
        loop {
            while let Tree::Keyed(node) = current {
                pending.push(&**node);
                current = &node.branches.left;
            }
            let Some(node) = pending.pop() else {
                break;
            };
            visit(&node.key, &node.value);
            current = &node.branches.right;
        }
    }

    /// Append every key to `out` in ascending order
    pub fn add_keys_to_collection<C>(&self, out: &mut C)
    where
        K: Clone,
        C: Extend<K>,
    {
        self.in_order(&mut |key, _| out.extend(iter::once(key.clone())));
    }

    /// Detach the minimum entry, returning the remaining subtree and the entry.
    pub fn pop_min(mut self) -> Result<(Self, K, V), EmptyTree> {
        let (key, value) = self.take_min().ok_or(EmptyTree)?;
        Ok((self, key, value))
    }

    /// Replace the leftmost node by its right subtree and return its entry
    fn take_min(&mut self) -> Option<(K, V)> {
        let mut slot = self;
        loop {
            match &*slot {
                Tree::Empty => return None,
                Tree::Keyed(node) if node.branches.left.is_empty() => break,
                Tree::Keyed(_) => {}
            }
            if let Tree::Keyed(node) = slot {
                slot = &mut node.branches.left;
            }
        }
        slot.replace_root_with_right()
    }

    /// Splice this subtree's right child into its place, returning the root entry
    fn replace_root_with_right(&mut self) -> Option<(K, V)> {
        let Tree::Keyed(node) = self else {
            return None;
        };
        let right = mem::take(&mut node.branches.right);
        match mem::replace(self, right) {
            Tree::Keyed(old) => {
                let Node { key, value, .. } = *old;
                Some((key, value))
            }
            Tree::Empty => None,
        }
    }

    /// Splice this subtree's left child into its place, returning the root value
    fn replace_root_with_left(&mut self) -> Option<V> {
        let Tree::Keyed(node) = self else {
            return None;
        };
        let left = mem::take(&mut node.branches.left);
        match mem::replace(self, left) {
            Tree::Keyed(old) => {
                let Node { value, .. } = *old;
                Some(value)
            }
            Tree::Empty => None,
        }
    }
}

impl<K: Ord, V> Tree<K, V> {
    /// Look up the value stored under `key`
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self;
        while let Tree::Keyed(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => &node.branches.left,
                Ordering::Greater => &node.branches.right,
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Slot holding `key`, or the empty slot where it would be inserted
    fn slot_for<Q>(&mut self, key: &Q) -> &mut Self
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut slot = self;
        loop {
            let ordering = match &*slot {
                Tree::Empty => break,
                Tree::Keyed(node) => key.cmp(node.key.borrow()),
            };
            if ordering == Ordering::Equal {
                break;
            }
            if let Tree::Keyed(node) = slot {
                slot = if ordering == Ordering::Less {
                    &mut node.branches.left
                } else {
                    &mut node.branches.right
                };
            }
        }
        slot
    }

    /// Insert or overwrite an entry.
    ///
    /// Returns the new subtree root and the value that was displaced, if the
    /// key was already present.
    pub fn insert(mut self, key: K, value: V) -> (Self, Option<V>) {
        let slot = self.slot_for(&key);
        let displaced = match slot {
            Tree::Keyed(node) => Some(mem::replace(&mut node.value, value)),
            Tree::Empty => {
                *slot = Tree::leaf(key, value);
                None
            }
        };
        (self, displaced)
    }

    /// Remove the entry under `key`.
    ///
    /// A matched node takes over the minimum entry of its right subtree; with
    /// no right subtree it is replaced by its left subtree. Returns the new
    /// subtree root and the removed value.
    pub fn delete<Q>(mut self, key: &Q) -> (Self, Option<V>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.slot_for(key);
        let removed = match slot {
            Tree::Empty => None,
            Tree::Keyed(node) => match node.branches.right.take_min() {
                Some((successor_key, successor_value)) => {
                    node.key = successor_key;
                    Some(mem::replace(&mut node.value, successor_value))
                }
                None => slot.replace_root_with_left(),
            },
        };
        (self, removed)
    }

    /// Copy of the entries whose keys lie in `[from, to]`.
    ///
    /// A node below `from` is replaced by its pruned right subtree, a node
    /// above `to` by its pruned left subtree. The result is a freshly built
    /// tree; nothing is shared with `self`.
    pub fn sub_tree(&self, from: &K, to: &K) -> Self
    where
        K: Clone,
        V: Clone,
    {
        self.fold(|node, left, right| {
            if node.key < *from {
                right
            } else if node.key > *to {
                left
            } else {
                Tree::branch(node.key.clone(), node.value.clone(), left, right)
            }
        })
    }
}

impl<K: Clone, V: Clone> Clone for Tree<K, V> {
    fn clone(&self) -> Self {
        self.fold(|node, left, right| {
            Tree::branch(node.key.clone(), node.value.clone(), left, right)
        })
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Tree<K, V> {
    /// Same shape and the same entry at every position
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Tree::Empty, Tree::Empty) => {}
                (Tree::Keyed(a), Tree::Keyed(b)) => {
                    if a.key != b.key || a.value != b.value {
                        return false;
                    }
                    pending.push((&a.branches.left, &b.branches.left));
                    pending.push((&a.branches.right, &b.branches.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K: Eq, V: Eq> Eq for Tree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Tree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Vec::new();
        self.in_order(&mut |key, value| entries.push((key, value)));
        f.debug_map().entries(entries).finish()
    }
}
