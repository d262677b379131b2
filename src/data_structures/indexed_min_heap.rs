use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use crate::{Error, Result};

/// A single queued value together with its priority key
#[derive(Debug, Clone)]
struct HeapEntry<K, V> {
    key: K,
    value: V,
}

/// A binary min-heap over `(key, value)` pairs that knows where every value
/// currently sits, so a value's key can be lowered in place.
///
/// Positions are 1-based: the root lives at position 1 and the children of
/// position `i` are `2i` and `2i + 1`. Position 0 is never occupied, which is
/// why the backing vector is addressed through [`Self::slot`].
///
/// Keys may only ever decrease. [`IndexedMinHeap::decrease_key`] refuses a key
/// that is equal to or larger than the current one instead of applying it.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Eq + Hash + Clone + Debug,
{
    /// Heap-ordered entries; position `i` is stored at `entries[i - 1]`
    entries: Vec<HeapEntry<K, V>>,

    /// Value -> 1-based position in the heap
    positions: HashMap<V, usize>,
}

impl<K, V> IndexedMinHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Eq + Hash + Clone + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        IndexedMinHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Creates a new empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Bulk-loads `(key, value)` pairs and heapifies them bottom-up in O(n).
    ///
    /// Fails with `Error::DuplicateValue` if a value appears twice.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut heap = Self::with_capacity(pairs.size_hint().0);

        for (key, value) in pairs {
            let position = heap.entries.len() + 1;
            if heap.positions.insert(value.clone(), position).is_some() {
                return Err(Error::DuplicateValue);
            }
            heap.entries.push(HeapEntry { key, value });
        }

        // Leaves are trivially heaps; fix every internal node from the bottom up
        for i in (1..=heap.len() / 2).rev() {
            heap.percolate_down(i);
        }

        Ok(heap)
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `value` is currently queued
    pub fn contains(&self, value: &V) -> bool {
        self.positions.contains_key(value)
    }

    /// Returns the current key of `value`, if queued
    pub fn key_of(&self, value: &V) -> Option<K> {
        self.positions
            .get(value)
            .map(|&position| self.entries[Self::slot(position)].key)
    }

    /// Returns the value with the minimum key without removing it
    pub fn peek(&self) -> Result<&V> {
        self.peek_entry().map(|(_, value)| value)
    }

    /// Returns the minimum key and its value without removing them
    pub fn peek_entry(&self) -> Result<(K, &V)> {
        self.entries
            .first()
            .map(|entry| (entry.key, &entry.value))
            .ok_or(Error::EmptyContainer)
    }

    /// Queues `value` with priority `key`.
    ///
    /// Fails with `Error::DuplicateValue` if `value` is already queued.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.positions.contains_key(&value) {
            return Err(Error::DuplicateValue);
        }

        let position = self.entries.len() + 1;
        self.positions.insert(value.clone(), position);
        self.entries.push(HeapEntry { key, value });
        self.percolate_up(position);
        Ok(())
    }

    /// Removes and returns the value with the minimum key
    pub fn extract_min(&mut self) -> Result<V> {
        self.extract_min_entry().map(|(_, value)| value)
    }

    /// Removes and returns the minimum key together with its value
    pub fn extract_min_entry(&mut self) -> Result<(K, V)> {
        if self.entries.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let last = self.entries.len();
        self.swap(1, last);

        let HeapEntry { key, value } = self.entries.pop().ok_or(Error::EmptyContainer)?;
        self.positions.remove(&value);

        if !self.entries.is_empty() {
            self.percolate_down(1);
        }

        Ok((key, value))
    }

    /// Lowers the key of a queued value to `new_key`.
    ///
    /// Fails with `Error::NotFound` if `value` is not queued, and with
    /// `Error::UnsupportedOperation` if `new_key` is not strictly smaller than
    /// the current key.
    pub fn decrease_key(&mut self, value: &V, new_key: K) -> Result<()> {
        let position = *self.positions.get(value).ok_or(Error::NotFound)?;
        let entry = &mut self.entries[Self::slot(position)];

        if !(new_key < entry.key) {
            return Err(Error::UnsupportedOperation);
        }

        entry.key = new_key;
        self.percolate_up(position);
        Ok(())
    }

    /// Drains the heap, returning every entry in non-decreasing key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(entry) = self.extract_min_entry() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the heap ordering and the position index against each other
    pub fn is_valid_heap(&self) -> bool {
        let n = self.len();
        if self.positions.len() != n {
            return false;
        }

        (1..=n).all(|i| {
            let entry = &self.entries[Self::slot(i)];
            let indexed = self.positions.get(&entry.value) == Some(&i);
            let ordered = [Self::left(i), Self::right(i)]
                .iter()
                .filter(|&&child| child <= n)
                .all(|&child| entry.key <= self.entries[Self::slot(child)].key);
            indexed && ordered
        })
    }

    #[inline]
    fn slot(position: usize) -> usize {
        position - 1
    }

    #[inline]
    fn left(i: usize) -> usize {
        2 * i
    }

    #[inline]
    fn right(i: usize) -> usize {
        2 * i + 1
    }

    #[inline]
    fn parent(i: usize) -> usize {
        i / 2
    }

    #[inline]
    fn key_at(&self, position: usize) -> K {
        self.entries[Self::slot(position)].key
    }

    /// Swaps two positions and keeps the index pointing at both values
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(Self::slot(a), Self::slot(b));
        for position in [a, b] {
            let value = &self.entries[Self::slot(position)].value;
            if let Some(stored) = self.positions.get_mut(value) {
                *stored = position;
            }
        }
    }

    /// Moves the entry at `i` up while it is strictly smaller than its parent
    fn percolate_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = Self::parent(i);
            if !(self.key_at(i) < self.key_at(parent)) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    /// Moves the entry at `i` down until neither child is strictly smaller.
    ///
    /// Candidates are scanned as node, left, right; a later candidate only
    /// wins with a strictly smaller key.
    fn percolate_down(&mut self, mut i: usize) {
        let n = self.len();
        loop {
            let mut smallest = i;
            for child in [Self::left(i), Self::right(i)] {
                if child <= n && self.key_at(child) < self.key_at(smallest) {
                    smallest = child;
                }
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<K, V> Default for IndexedMinHeap<K, V>
where
    K: PartialOrd + Copy + Debug,
    V: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the heap level by level: `value(key)` entries are joined by `,`
/// within a level and levels are joined by `<`.
impl<K, V> Display for IndexedMinHeap<K, V>
where
    K: PartialOrd + Copy + Debug + Display,
    V: Eq + Hash + Clone + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let mut level_start = 1;
        while level_start <= n {
            if level_start > 1 {
                write!(f, "<")?;
            }
            let level_end = (2 * level_start - 1).min(n);
            for i in level_start..=level_end {
                if i > level_start {
                    write!(f, ",")?;
                }
                let entry = &self.entries[Self::slot(i)];
                write!(f, "{}({})", entry.value, entry.key)?;
            }
            level_start *= 2;
        }
        Ok(())
    }
}
