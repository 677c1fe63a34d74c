//! Table error types.

use thiserror::Error;

/// Table operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A loaded row's column count disagrees with the table schema
    #[error("Row {row_id} has {got} columns, expected {expected}")]
    SchemaMismatch {
        row_id: usize,
        expected: usize,
        got: usize,
    },

    /// Row or column index outside table bounds
    #[error("Cell ({row_id}, {col_id}) out of range for {num_rows}x{num_cols} table")]
    OutOfRange {
        row_id: usize,
        col_id: usize,
        num_rows: usize,
        num_cols: usize,
    },

    /// Index column outside the loaded schema
    #[error("Index column {index_column} out of range for {num_cols} columns")]
    InvalidIndexColumn { index_column: usize, num_cols: usize },

    /// Index bucket did not contain a row id it was asked to remove
    #[error("Index bucket for value {value} does not contain row {row_id}")]
    IndexCorruption { value: i32, row_id: usize },
}
