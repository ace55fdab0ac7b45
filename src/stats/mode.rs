//! Occurrence counting with first-seen ordering.
//!
//! Counts are kept in an `IndexMap`, so iteration follows the order in which
//! each value first appeared. The mode is the highest count; among equal
//! counts the value seen first wins.

use std::hash::Hash;

use indexmap::IndexMap;

/// A value together with how many rows it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ModeCounter<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Default for ModeCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> ModeCounter<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    pub fn observe(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    #[must_use]
    pub const fn counts(&self) -> &IndexMap<K, usize> {
        &self.counts
    }

    #[must_use]
    pub fn into_counts(self) -> IndexMap<K, usize> {
        self.counts
    }

    /// Most frequent value; ties go to the earliest first occurrence.
    #[must_use]
    pub fn into_mode(self) -> Option<Popular<K>> {
        let index = self.best_index()?;
        self.counts
            .into_iter()
            .nth(index)
            .map(|(value, count)| Popular { value, count })
    }

    fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, &count) in self.counts.values().enumerate() {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| index)
    }
}

impl<K: Hash + Eq> FromIterator<K> for ModeCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.observe(key);
        }
        counter
    }
}

/// Mode of a sequence of values, `None` when the sequence is empty.
pub fn mode_of<K, I>(values: I) -> Option<Popular<K>>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    values.into_iter().collect::<ModeCounter<K>>().into_mode()
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
