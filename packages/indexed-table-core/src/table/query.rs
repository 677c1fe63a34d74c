//! The fixed analytic query set.
//!
//! Queries run over a hardwired column-role convention: column 0 is the
//! summed value, columns 1 and 2 carry the range predicates of the two-sided
//! filter, column 3 is the update target. Each query picks its candidate
//! rows with one rule: if the indexed column is one of the query's predicate
//! columns, narrow through an index range walk; otherwise scan every row.
//! The full predicate is re-checked on every candidate either way, because
//! the index covers at most one conjunct.

use super::IndexedRowTable;
use crate::error::TableError;

/// Column every sum-shaped query accumulates.
const SUM_COLUMN: usize = 0;
/// First predicate column of the two-sided filter.
const PREDICATE_A_COLUMN: usize = 1;
/// Second predicate column of the two-sided filter.
const PREDICATE_B_COLUMN: usize = 2;
/// Column mutated by the predicated update.
const UPDATE_COLUMN: usize = 3;

/// The four fixed query shapes the table executes.
///
/// The column roles above are a fixed assumption of this query set, not a
/// general engine; the enum keeps that assumption explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// `SELECT SUM(col0) FROM table`
    ColumnSum,
    /// `SELECT SUM(col0) FROM table WHERE col1 > t1 AND col2 < t2`
    PredicatedColumnSum,
    /// `SELECT SUM(col0) + ... + SUM(colN) FROM table WHERE col0 > t`
    PredicatedAllColumnsSum,
    /// `UPDATE(col3 = col3 + col2) WHERE col0 < t`
    PredicatedUpdate,
}

impl QueryKind {
    /// Columns this shape filters on, in the order the planner consults
    /// them for index narrowing.
    pub fn predicate_columns(self) -> &'static [usize] {
        match self {
            QueryKind::ColumnSum => &[],
            QueryKind::PredicatedColumnSum => &[PREDICATE_A_COLUMN, PREDICATE_B_COLUMN],
            QueryKind::PredicatedAllColumnsSum | QueryKind::PredicatedUpdate => &[SUM_COLUMN],
        }
    }
}

impl IndexedRowTable {
    /// `SELECT SUM(col0) FROM table`.
    ///
    /// Always a full scan; with no predicate there is nothing for the index
    /// to narrow. Accumulates in `i64` so wide tables cannot overflow the
    /// field width.
    pub fn column_sum(&self) -> Result<i64, TableError> {
        let mut sum: i64 = 0;
        for row_id in 0..self.num_rows() {
            sum += i64::from(self.get_int_field(row_id, SUM_COLUMN)?);
        }
        Ok(sum)
    }

    /// `SELECT SUM(col0) FROM table WHERE col1 > threshold1 AND col2 < threshold2`.
    pub fn predicated_column_sum(
        &self,
        threshold1: i32,
        threshold2: i32,
    ) -> Result<i64, TableError> {
        let kind = QueryKind::PredicatedColumnSum;
        let candidates = if self.index_narrows(kind, PREDICATE_A_COLUMN) {
            self.rows_strictly_above(threshold1)
        } else if self.index_narrows(kind, PREDICATE_B_COLUMN) {
            self.index.rows_less_than(threshold2)
        } else {
            self.full_scan()
        };

        let mut sum: i64 = 0;
        for row_id in candidates {
            if self.get_int_field(row_id, PREDICATE_A_COLUMN)? > threshold1
                && self.get_int_field(row_id, PREDICATE_B_COLUMN)? < threshold2
            {
                sum += i64::from(self.get_int_field(row_id, SUM_COLUMN)?);
            }
        }
        Ok(sum)
    }

    /// `SELECT SUM(col0) + ... + SUM(colN) FROM table WHERE col0 > threshold`.
    pub fn predicated_all_columns_sum(&self, threshold: i32) -> Result<i64, TableError> {
        let candidates = if self.index_narrows(QueryKind::PredicatedAllColumnsSum, SUM_COLUMN) {
            self.rows_strictly_above(threshold)
        } else {
            self.full_scan()
        };

        let mut sum: i64 = 0;
        for row_id in candidates {
            if self.get_int_field(row_id, SUM_COLUMN)? > threshold {
                for col_id in 0..self.num_cols() {
                    sum += i64::from(self.get_int_field(row_id, col_id)?);
                }
            }
        }
        Ok(sum)
    }

    /// `UPDATE(col3 = col3 + col2) WHERE col0 < threshold`.
    ///
    /// Returns the number of rows updated. Writes go through
    /// [`IndexedRowTable::put_int_field`] so the index would stay consistent
    /// even if the update target were the indexed column.
    pub fn predicated_update(&mut self, threshold: i32) -> Result<usize, TableError> {
        let candidates = if self.index_narrows(QueryKind::PredicatedUpdate, SUM_COLUMN) {
            self.index.rows_less_than(threshold)
        } else {
            self.full_scan()
        };

        let mut updated = 0;
        for row_id in candidates {
            if self.get_int_field(row_id, SUM_COLUMN)? < threshold {
                let bumped = self
                    .get_int_field(row_id, UPDATE_COLUMN)?
                    .wrapping_add(self.get_int_field(row_id, PREDICATE_B_COLUMN)?);
                self.put_int_field(row_id, UPDATE_COLUMN, bumped)?;
                updated += 1;
            }
        }

        tracing::debug!(
            "Predicated update touched {} of {} rows",
            updated,
            self.num_rows()
        );
        Ok(updated)
    }

    /// True when this table's index sits on `column` and `kind` actually
    /// filters on it, so an index range walk can pre-narrow the scan.
    fn index_narrows(&self, kind: QueryKind, column: usize) -> bool {
        self.index_column == column && kind.predicate_columns().contains(&column)
    }

    /// Rows whose indexed value is strictly above `threshold`.
    ///
    /// Walks the index from `threshold + 1`; at `i32::MAX` nothing can
    /// qualify, so the walk is skipped instead of wrapping.
    fn rows_strictly_above(&self, threshold: i32) -> Vec<usize> {
        match threshold.checked_add(1) {
            Some(min) => self.index.rows_at_least(min),
            None => Vec::new(),
        }
    }

    /// Every row id, for queries the index cannot narrow.
    fn full_scan(&self) -> Vec<usize> {
        (0..self.num_rows()).collect()
    }
}
