//! Ordered secondary index over one table column.

use std::collections::BTreeMap;

use crate::error::TableError;

/// Ordered mapping from a field value to the row ids holding that value.
///
/// Auxiliary to the row store, never a source of truth: the whole structure
/// is derivable by rescanning the indexed column, but it is maintained
/// incrementally so range queries stay cheap. Buckets for emptied values are
/// removed, never retained. Buckets are kept sorted by row id so that range
/// walks always yield the same sequence: ascending value, then ascending
/// row id.
#[derive(Debug, Default)]
pub struct OrderedIndex {
    buckets: BTreeMap<i32, Vec<usize>>,
}

impl OrderedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Adds `row_id` to the bucket for `value`, creating the bucket if
    /// absent.
    pub fn insert(&mut self, value: i32, row_id: usize) {
        let bucket = self.buckets.entry(value).or_default();
        if let Err(pos) = bucket.binary_search(&row_id) {
            bucket.insert(pos, row_id);
        }
    }

    /// Removes `row_id` from `value`'s bucket, deleting the key entirely
    /// when the bucket empties.
    ///
    /// A row id missing from the expected bucket means the index has
    /// diverged from the row store; that invariant violation surfaces as
    /// [`TableError::IndexCorruption`] instead of being silently ignored.
    pub fn remove(&mut self, value: i32, row_id: usize) -> Result<(), TableError> {
        let Some(bucket) = self.buckets.get_mut(&value) else {
            return Err(TableError::IndexCorruption { value, row_id });
        };
        let pos = bucket
            .binary_search(&row_id)
            .map_err(|_| TableError::IndexCorruption { value, row_id })?;
        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&value);
        }
        Ok(())
    }

    /// Row ids across all buckets whose value is `>= min`, ascending value
    /// then ascending row id.
    pub fn rows_at_least(&self, min: i32) -> Vec<usize> {
        self.buckets
            .range(min..)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Row ids across all buckets whose value is `< max`, same ordering.
    pub fn rows_less_than(&self, max: i32) -> Vec<usize> {
        self.buckets
            .range(..max)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Row ids currently recorded for `value`, if any.
    pub fn bucket(&self, value: i32) -> Option<&[usize]> {
        self.buckets.get(&value).map(Vec::as_slice)
    }

    /// Number of distinct values currently indexed.
    pub fn num_values(&self) -> usize {
        self.buckets.len()
    }
}
