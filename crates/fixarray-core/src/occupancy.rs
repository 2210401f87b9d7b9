//! The [`OccupancySet`] bitset tracking which slots hold a value.

use smallvec::SmallVec;

/// Fixed-size bitset over slot indices `[0, capacity)`.
///
/// Keeps an exact count of set bits so occupancy queries are O(1).
/// Containers up to 128 slots keep their words inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancySet {
    words: SmallVec<[u64; 2]>,
    capacity: usize,
    count: usize,
}

impl OccupancySet {
    const BITS_PER_WORD: usize = 64;

    /// Create an empty set able to hold indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        let n_words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: SmallVec::from_elem(0, n_words),
            capacity,
            count: 0,
        }
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (
            index / Self::BITS_PER_WORD,
            1u64 << (index % Self::BITS_PER_WORD),
        )
    }

    /// Mark `index` occupied. Returns `true` if it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(
            index < self.capacity,
            "occupancy index {index} out of range for capacity {}",
            self.capacity
        );
        let (word, mask) = Self::locate(index);
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.count += 1;
        }
        fresh
    }

    /// Clear `index`. Returns `true` if it was previously set.
    ///
    /// Out-of-range indices are never set, so they return `false`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(index);
        let was_set = self.words[word] & mask != 0;
        if was_set {
            self.words[word] &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Whether `index` is set.
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    /// Lowest index that is not set, or `None` if the set is full.
    pub fn first_vacant(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .find(|&(_, &w)| w != u64::MAX)
            .map(|(i, w)| i * Self::BITS_PER_WORD + w.trailing_ones() as usize)
            .filter(|&index| index < self.capacity)
    }

    /// Clear every index.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
        self.count = 0;
    }

    /// Number of indices this set can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of set indices.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no index is set.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every index is set.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Iterate over set indices in ascending order.
    pub fn iter(&self) -> OccupancyIter<'_> {
        OccupancyIter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
            remaining: self.count,
        }
    }
}

impl<'a> IntoIterator for &'a OccupancySet {
    type Item = usize;
    type IntoIter = OccupancyIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over set indices of an [`OccupancySet`], in ascending order.
#[derive(Clone, Debug)]
pub struct OccupancyIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
    remaining: usize,
}

impl Iterator for OccupancyIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current = self.words[self.word_idx];
        }
        let bit = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(self.word_idx * OccupancySet::BITS_PER_WORD + bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OccupancyIter<'_> {}
