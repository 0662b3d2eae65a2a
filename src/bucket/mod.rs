//! Priority bucket container
//!
//! Groups values under an integer priority and traverses them highest
//! priority first, preserving push order inside each group.
//!
//! Production code is in this file, tests are organized in sibling modules:
//! - tests_order: Traversal ordering (descending priorities, stable groups)
//! - tests_traversal: Fallible traversal, iterators, accessors, collection traits

mod priority;

pub use priority::Priority;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::iter::FusedIterator;

/// Container that maps a priority to the ordered group of values pushed with it
///
/// - A group exists only once a value has been pushed with its priority
/// - Groups are append-only; values never move once pushed
/// - Traversal visits groups in descending numeric priority order
///
/// The container performs no internal locking. `push` takes `&mut self` and
/// every traversal takes `&self`, so the borrow checker serializes access.
#[derive(Debug, Clone)]
pub struct PriorityBucket<T> {
    groups: HashMap<Priority, Vec<T>>,
    len: usize,
}

impl<T> Default for PriorityBucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityBucket<T> {
    /// Create a new, empty bucket
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            len: 0,
        }
    }

    /// Push a value at the default priority (`0`)
    pub fn push(&mut self, value: T) {
        self.push_with_priority(value, Priority::DEFAULT);
    }

    /// Push a value at the given priority
    ///
    /// The value is appended to the end of the group for `priority`. The group
    /// is created first if this is the first value pushed with that priority.
    ///
    /// # Performance
    /// - **Time complexity**: O(1) amortized (hash lookup plus `Vec` append)
    pub fn push_with_priority<P>(&mut self, value: T, priority: P)
    where
        P: Into<Priority>,
    {
        let priority = priority.into();
        let existing_groups = self.groups.len();
        let group = match self.groups.entry(priority) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!(
                    priority = %priority,
                    group_count = existing_groups + 1,
                    "Creating new priority group"
                );
                entry.insert(Vec::new())
            }
        };
        group.push(value);
        self.len += 1;
    }

    /// Visit every stored value, highest priority first
    ///
    /// Within a priority, values are visited in the order they were pushed.
    /// The bucket is not modified, so repeated calls with no intervening
    /// `push` produce identical visitation sequences.
    ///
    /// If `visitor` panics, the panic unwinds through `each` and the remaining
    /// values are not visited. Use [`try_each`](Self::try_each) for a visitor
    /// that can fail.
    ///
    /// # Performance
    /// - **Time complexity**: O(g log g + n) where g is the number of distinct
    ///   priorities and n is the number of stored values
    /// - **Space complexity**: O(g) for the sorted priority list
    pub fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        let groups = self.sorted_groups();

        tracing::debug!(
            group_count = groups.len(),
            value_count = self.len,
            "Traversing priority bucket"
        );

        for (_, group) in groups {
            for value in group {
                visitor(value);
            }
        }
    }

    /// Visit every stored value with a fallible visitor
    ///
    /// Traversal order is identical to [`each`](Self::each). The first `Err`
    /// returned by `visitor` stops the traversal and is handed back unchanged;
    /// values after the failing one are not visited.
    pub fn try_each<F, E>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for (priority, group) in self.sorted_groups() {
            for (index, value) in group.iter().enumerate() {
                if let Err(err) = visitor(value) {
                    tracing::debug!(
                        priority = %priority,
                        index = index,
                        "Visitor failed, stopping traversal"
                    );
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Iterate over values in traversal order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            groups: self.sorted_groups().into_iter(),
            current: Default::default(),
            remaining: self.len,
        }
    }

    /// Total number of values across all groups
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct priorities present
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Distinct priorities present, in traversal (descending) order
    pub fn priorities(&self) -> Vec<Priority> {
        let mut priorities: Vec<Priority> = self.groups.keys().copied().collect();
        priorities.sort_unstable_by(|a, b| b.cmp(a));
        priorities
    }

    /// Values pushed with `priority`, in push order
    ///
    /// Returns None if nothing has been pushed with that priority.
    pub fn group<P>(&self, priority: P) -> Option<&[T]>
    where
        P: Into<Priority>,
    {
        self.groups.get(&priority.into()).map(Vec::as_slice)
    }

    /// Groups paired with their priority, sorted highest priority first
    ///
    /// Keys are distinct by construction, so an unstable sort is exact.
    fn sorted_groups(&self) -> Vec<(Priority, &[T])> {
        let mut groups: Vec<(Priority, &[T])> = self
            .groups
            .iter()
            .map(|(priority, group)| (*priority, group.as_slice()))
            .collect();
        groups.sort_unstable_by(|(a, _), (b, _)| b.cmp(a));
        groups
    }
}

impl<T, P> Extend<(T, P)> for PriorityBucket<T>
where
    P: Into<Priority>,
{
    fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (T, P)>,
    {
        for (value, priority) in entries {
            self.push_with_priority(value, priority);
        }
    }
}

impl<T, P> FromIterator<(T, P)> for PriorityBucket<T>
where
    P: Into<Priority>,
{
    fn from_iter<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, P)>,
    {
        let mut bucket = Self::new();
        bucket.extend(entries);
        bucket
    }
}

impl<'a, T> IntoIterator for &'a PriorityBucket<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`PriorityBucket`] in traversal order
///
/// Created by [`PriorityBucket::iter`]. The group order is fixed when the
/// iterator is created.
#[derive(Debug)]
pub struct Iter<'a, T> {
    groups: std::vec::IntoIter<(Priority, &'a [T])>,
    current: std::slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }
            let (_, group) = self.groups.next()?;
            self.current = group.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests_traversal;

/// Shared test helper: push entries in order and collect the traversal
#[cfg(test)]
pub(crate) fn traversal_of<T: Clone>(entries: &[(T, i64)]) -> Vec<T> {
    let bucket: PriorityBucket<T> = entries.iter().cloned().collect();
    let mut visited = Vec::new();
    bucket.each(|value| visited.push(value.clone()));
    visited
}
